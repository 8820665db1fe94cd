use serde_json::Value;

/// One parameter the platform extracted from the user's utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    raw: Value,
}

impl Argument {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    /// What the user actually said for this argument.
    pub fn raw_text(&self) -> Option<&str> {
        self.get_str("raw_text")
    }

    pub fn text_value(&self) -> Option<&str> {
        self.get_str("text_value")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(Value::as_str)
    }
}
