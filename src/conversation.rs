use serde_json::Value;

use crate::types::{ConversationType, DialogState};

/// Cross-turn context the platform attached to the invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    raw: Value,
}

impl Conversation {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn id(&self) -> Option<&str> {
        self.raw.get("conversation_id").and_then(Value::as_str)
    }

    pub fn conversation_type(&self) -> ConversationType {
        match self.raw.get("type") {
            Some(Value::Number(code)) => code.as_i64().map(ConversationType::from_code).unwrap_or_default(),
            Some(Value::String(name)) => ConversationType::from_name(name),
            _ => ConversationType::Unspecified,
        }
    }

    /// The token returned by the previous `ask`, if any.
    pub fn token(&self) -> Option<&str> {
        self.raw.get("conversation_token").and_then(Value::as_str)
    }

    pub fn dialog_state(&self) -> Option<DialogState> {
        let token = self.token()?;
        match serde_json::from_str::<DialogState>(token) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!("failed to parse conversation token as dialog state: {}", e);
                None
            }
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.raw
    }
}
