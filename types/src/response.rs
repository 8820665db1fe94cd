use serde_json::Value;

use crate::prompt::InputPrompt;

/// Payload returned to the platform for one turn.
///
/// `final_response` is set exactly when the turn ends the dialog; the two constructors are
/// the only way to build one.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Response {
    /// Opaque dialog state handed back on the next turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_token: Option<Value>,

    expect_user_response: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    expected_inputs: Option<Vec<ExpectedInput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    final_response: Option<FinalResponse>,
}

impl Response {
    /// Terminal response: speaks and closes the dialog.
    pub fn tell(final_response: FinalResponse) -> Self {
        Self {
            conversation_token: None,
            expect_user_response: false,
            expected_inputs: None,
            final_response: Some(final_response),
        }
    }

    /// Continuing response: prompts and waits for the user.
    pub fn ask(conversation_token: Option<Value>, expected_inputs: Vec<ExpectedInput>) -> Self {
        Self {
            conversation_token,
            expect_user_response: true,
            expected_inputs: Some(expected_inputs),
            final_response: None,
        }
    }

    pub fn conversation_token(&self) -> Option<&Value> {
        self.conversation_token.as_ref()
    }

    pub fn expect_user_response(&self) -> bool {
        self.expect_user_response
    }

    pub fn expected_inputs(&self) -> Option<&[ExpectedInput]> {
        self.expected_inputs.as_deref()
    }

    pub fn final_response(&self) -> Option<&FinalResponse> {
        self.final_response.as_ref()
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FinalResponse {
    speech_response: SpeechResponse,
}

impl FinalResponse {
    pub fn new(speech_response: SpeechResponse) -> Self {
        Self { speech_response }
    }

    pub fn speech_response(&self) -> &SpeechResponse {
        &self.speech_response
    }
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct SpeechResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    ssml: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    text_to_speech: Option<String>,
}

impl SpeechResponse {
    pub fn ssml(ssml: &str) -> Self {
        Self {
            ssml: Some(ssml.to_string()),
            text_to_speech: None,
        }
    }

    /// Plain-text speech. `None` leaves both slots empty.
    pub fn text(text: Option<&str>) -> Self {
        Self {
            ssml: None,
            text_to_speech: text.map(str::to_string),
        }
    }

    pub fn ssml_content(&self) -> Option<&str> {
        self.ssml.as_deref()
    }

    pub fn text_to_speech(&self) -> Option<&str> {
        self.text_to_speech.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExpectedInput {
    input_prompt: InputPrompt,

    /// Intents the platform may match the user's reply against.
    possible_intents: Vec<ExpectedIntent>,
}

impl ExpectedInput {
    pub fn new(input_prompt: InputPrompt, possible_intents: Vec<ExpectedIntent>) -> Self {
        Self {
            input_prompt,
            possible_intents,
        }
    }

    pub fn input_prompt(&self) -> &InputPrompt {
        &self.input_prompt
    }

    pub fn possible_intents(&self) -> &[ExpectedIntent] {
        &self.possible_intents
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExpectedIntent {
    intent: String,
}

impl ExpectedIntent {
    pub fn new(intent: &str) -> Self {
        Self {
            intent: intent.to_string(),
        }
    }

    pub fn intent(&self) -> &str {
        &self.intent
    }
}
