use crate::assistant::consts::{API_VERSION, API_VERSION_ENV, INPUTS_MAX};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    api_version: String,
    max_no_inputs: usize,
}

pub struct ConfigBuilder {
    config: Config,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.config.api_version = api_version.to_string();
        self
    }

    pub fn with_max_no_inputs(mut self, max_no_inputs: usize) -> Self {
        self.config.max_no_inputs = max_no_inputs;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            max_no_inputs: INPUTS_MAX,
        }
    }
}

impl Config {
    /// Defaults, with the API version taken from the environment when set.
    pub fn from_env() -> Self {
        Self {
            api_version: std::env::var(API_VERSION_ENV).unwrap_or_else(|_| API_VERSION.to_string()),
            ..Self::default()
        }
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn max_no_inputs(&self) -> usize {
        self.max_no_inputs
    }
}
