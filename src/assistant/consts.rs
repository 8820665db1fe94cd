pub const API_VERSION_HEADER: &str = "Google-Assistant-API-Version";
pub const API_VERSION: &str = "v1";
pub const API_VERSION_ENV: &str = "GOOGLE_ASSISTANT_API_VERSION";

/// Reprompts allowed per input prompt when the user stays silent.
pub const INPUTS_MAX: usize = 1;
