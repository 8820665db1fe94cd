/// A single spoken prompt, either SSML markup or plain text read out by TTS.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum SpeechPrompt {
    Ssml { ssml: String },
    Text { text_to_speech: String },
}

impl SpeechPrompt {
    pub fn ssml(ssml: &str) -> Self {
        SpeechPrompt::Ssml { ssml: ssml.to_string() }
    }

    pub fn text(text: &str) -> Self {
        SpeechPrompt::Text { text_to_speech: text.to_string() }
    }

    pub fn is_ssml(&self) -> bool {
        matches!(self, SpeechPrompt::Ssml { .. })
    }

    pub fn content(&self) -> &str {
        match self {
            SpeechPrompt::Ssml { ssml } => ssml,
            SpeechPrompt::Text { text_to_speech } => text_to_speech,
        }
    }
}

/// Prompt bundle for a turn that expects user input.
///
/// Both constructors put every prompt in the same slot, so a bundle is all SSML or
/// all plain text.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputPrompt {
    /// Spoken when the turn starts.
    initial_prompts: Vec<SpeechPrompt>,

    /// Spoken when the user says nothing.
    #[serde(default)]
    no_input_prompts: Vec<SpeechPrompt>,
}

impl InputPrompt {
    pub fn ssml(initial_prompt: &str, no_input_prompts: &[&str]) -> Self {
        Self {
            initial_prompts: vec![SpeechPrompt::ssml(initial_prompt)],
            no_input_prompts: no_input_prompts.iter().map(|p| SpeechPrompt::ssml(p)).collect(),
        }
    }

    pub fn text(initial_prompt: &str, no_input_prompts: &[&str]) -> Self {
        Self {
            initial_prompts: vec![SpeechPrompt::text(initial_prompt)],
            no_input_prompts: no_input_prompts.iter().map(|p| SpeechPrompt::text(p)).collect(),
        }
    }

    pub fn initial_prompts(&self) -> &[SpeechPrompt] {
        &self.initial_prompts
    }

    pub fn no_input_prompts(&self) -> &[SpeechPrompt] {
        &self.no_input_prompts
    }
}
