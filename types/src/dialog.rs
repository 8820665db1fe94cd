use serde_json::{Map, Value};

/// State an action round-trips through the conversation token between turns.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct DialogState {
    /// Action-defined marker of where the dialog is. `null` on a fresh dialog.
    state: Option<Value>,

    #[serde(default)]
    data: Map<String, Value>,
}

impl DialogState {
    pub fn new(state: Option<Value>, data: Map<String, Value>) -> Self {
        Self { state, data }
    }

    pub fn state(&self) -> Option<&Value> {
        self.state.as_ref()
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn with_state(mut self, state: Value) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_data(mut self, key: &str, value: Value) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }

    /// Serialized form used as a conversation token.
    pub fn to_token(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
