use std::fmt;

use crate::types::StandardIntent;

/// The capability the user invoked on this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    value: String,
}

impl Intent {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The platform intent this maps to, or `Custom` for action-defined intents.
    pub fn standard(&self) -> StandardIntent {
        StandardIntent::from_name(&self.value)
    }

    pub fn is(&self, intent: &StandardIntent) -> bool {
        self.value == intent.as_str()
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
