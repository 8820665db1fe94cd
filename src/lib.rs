mod argument;
mod assistant;
mod conversation;
mod error;
mod intent;

pub use google_assistant_types as types;
pub use http;
pub use argument::Argument;
pub use assistant::{is_ssml, AskPrompt, Config, ConfigBuilder, GoogleAssistant, RequestContext};
pub use assistant::consts::{API_VERSION, API_VERSION_ENV, API_VERSION_HEADER, INPUTS_MAX};
pub use conversation::Conversation;
pub use error::{Error, Result};
pub use intent::Intent;
