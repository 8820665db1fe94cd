use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Read-only view over the inbound invocation payload.
///
/// Only `inputs[0].intent`, `inputs[0].arguments` and `conversation` are looked at; any
/// other field is ignored.
#[derive(Debug, Clone)]
pub struct RequestContext {
    params: Value,
}

impl RequestContext {
    pub fn new(params: Value) -> Self {
        Self { params }
    }

    pub fn raw(&self) -> &Value {
        &self.params
    }

    pub fn inputs(&self) -> Result<&[Value]> {
        match self.params.get("inputs").and_then(Value::as_array) {
            Some(inputs) if !inputs.is_empty() => Ok(inputs.as_slice()),
            _ => Err(Error::MissingInputs),
        }
    }

    pub fn intent_string(&self) -> Result<&str> {
        self.first_input()?
            .get("intent")
            .and_then(Value::as_str)
            .ok_or(Error::MissingIntent)
    }

    pub fn argument_values(&self) -> Result<&[Value]> {
        self.first_input()?
            .get("arguments")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or(Error::MissingArguments)
    }

    /// The `conversation` object, or an empty one on a first turn.
    pub fn conversation_params(&self) -> Value {
        match self.params.get("conversation") {
            Some(conversation) if !conversation.is_null() => conversation.clone(),
            _ => Value::Object(Map::new()),
        }
    }

    fn first_input(&self) -> Result<&Value> {
        self.inputs()?.first().ok_or(Error::MissingInputs)
    }
}
