use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MAIN: &str = "assistant.intent.action.MAIN";
pub const TEXT: &str = "assistant.intent.action.TEXT";
pub const PERMISSION: &str = "assistant.intent.action.PERMISSION";

/// Intents defined by the platform itself. Anything else is an action-specific intent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StandardIntent {
    /// The user invoked the action by name.
    Main,
    /// The user replied with free text to a prompt.
    Text,
    /// The user answered a permission request.
    Permission,
    Custom(String),
}

impl StandardIntent {
    pub fn from_name(name: &str) -> Self {
        match name {
            MAIN => StandardIntent::Main,
            TEXT => StandardIntent::Text,
            PERMISSION => StandardIntent::Permission,
            _ => StandardIntent::Custom(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StandardIntent::Main => MAIN,
            StandardIntent::Text => TEXT,
            StandardIntent::Permission => PERMISSION,
            StandardIntent::Custom(name) => name,
        }
    }
}

impl fmt::Display for StandardIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandardIntent {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StandardIntent::from_name(s))
    }
}

impl Serialize for StandardIntent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StandardIntent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(StandardIntent::from_name(&s))
    }
}
