use std::cell::OnceCell;

use http::{HeaderMap, HeaderValue};
use serde_json::Value;

use crate::argument::Argument;
use crate::conversation::Conversation;
use crate::error::{Error, Result};
use crate::intent::Intent;
use crate::types::{
    DialogState, ExpectedInput, ExpectedIntent, FinalResponse, InputPrompt, Response, SpeechResponse,
    StandardIntent,
};

pub(crate) mod consts;
mod config;
mod request;
mod ssml;

pub use config::{Config, ConfigBuilder};
pub use request::RequestContext;
pub use ssml::is_ssml;

/// Prompt accepted by [`GoogleAssistant::ask`]: plain text to classify, or a prebuilt bundle.
#[derive(Debug, Clone, PartialEq)]
pub enum AskPrompt {
    Text(String),
    Prompt(InputPrompt),
}

impl From<&str> for AskPrompt {
    fn from(text: &str) -> Self {
        AskPrompt::Text(text.to_string())
    }
}

impl From<String> for AskPrompt {
    fn from(text: String) -> Self {
        AskPrompt::Text(text)
    }
}

impl From<InputPrompt> for AskPrompt {
    fn from(prompt: InputPrompt) -> Self {
        AskPrompt::Prompt(prompt)
    }
}

/// Handles one invocation: reads the inbound payload and builds the outbound one.
///
/// Scoped to a single request. Derived values are computed on first access and cached
/// for the rest of the request.
pub struct GoogleAssistant<'a> {
    request: RequestContext,
    headers: &'a mut HeaderMap,
    config: Config,
    intent: OnceCell<Intent>,
    arguments: OnceCell<Vec<Argument>>,
    conversation: OnceCell<Conversation>,
}

impl<'a> GoogleAssistant<'a> {
    pub fn new(params: Value, headers: &'a mut HeaderMap) -> Self {
        Self::with_config(params, headers, Config::default())
    }

    pub fn with_config(params: Value, headers: &'a mut HeaderMap, config: Config) -> Self {
        Self {
            request: RequestContext::new(params),
            headers,
            config,
            intent: OnceCell::new(),
            arguments: OnceCell::new(),
            conversation: OnceCell::new(),
        }
    }

    /// Runs `handler`, stamps the API version header and returns the handler's output
    /// together with the invoked intent.
    ///
    /// The header is set whatever the handler did, before the intent is resolved.
    pub fn respond_to<F, R>(&mut self, handler: F) -> Result<(R, Intent)>
    where
        F: FnOnce(&Self) -> R,
    {
        let output = handler(&*self);

        let version = HeaderValue::from_str(self.config.api_version())?;
        self.headers.insert(consts::API_VERSION_HEADER, version);

        let intent = self.intent()?.clone();
        Ok((output, intent))
    }

    pub fn intent(&self) -> Result<&Intent> {
        if let Some(intent) = self.intent.get() {
            return Ok(intent);
        }
        let intent = Intent::new(self.request.intent_string()?);
        tracing::debug!("resolved intent: {}", intent);
        Ok(self.intent.get_or_init(|| intent))
    }

    pub fn arguments(&self) -> Result<&[Argument]> {
        if let Some(arguments) = self.arguments.get() {
            return Ok(arguments.as_slice());
        }
        let arguments: Vec<Argument> = self
            .request
            .argument_values()?
            .iter()
            .cloned()
            .map(Argument::new)
            .collect();
        Ok(self.arguments.get_or_init(|| arguments).as_slice())
    }

    pub fn conversation(&self) -> &Conversation {
        self.conversation
            .get_or_init(|| Conversation::new(self.request.conversation_params()))
    }

    pub fn request(&self) -> &RequestContext {
        &self.request
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Speaks `message` and ends the dialog.
    ///
    /// A missing message is logged and answered with an empty plain-text speech response.
    pub fn tell<'m>(&self, message: impl Into<Option<&'m str>>) -> Response {
        let message = message.into();

        let speech_response = if is_ssml(message) {
            SpeechResponse::ssml(message.unwrap_or_default())
        } else {
            SpeechResponse::text(message)
        };

        let response = Response::tell(FinalResponse::new(speech_response));
        tracing::debug!("built tell response: {:?}", response);
        response
    }

    /// Prompts the user and keeps the dialog open.
    ///
    /// `dialog_state` is sent back as the conversation token; it defaults to an empty
    /// [`DialogState`] and may be any JSON value except an array.
    pub fn ask<P>(&self, input_prompt: Option<P>, dialog_state: Option<Value>) -> Result<Response>
    where
        P: Into<AskPrompt>,
    {
        let Some(input_prompt) = input_prompt else {
            tracing::warn!("{}", Error::InvalidInputPrompt);
            return Err(Error::InvalidInputPrompt);
        };

        let input_prompt = match input_prompt.into() {
            AskPrompt::Text(text) => self.build_input_prompt(is_ssml(Some(text.as_str())), &text, &[])?,
            AskPrompt::Prompt(prompt) => {
                if prompt.no_input_prompts().len() > self.config.max_no_inputs() {
                    tracing::warn!("{}: got {}", Error::InvalidNoInputs, prompt.no_input_prompts().len());
                    return Err(Error::InvalidNoInputs);
                }
                prompt
            }
        };

        let conversation_token = match dialog_state {
            None => Value::String(DialogState::default().to_token()?),
            Some(Value::Array(_)) => {
                tracing::warn!("{}", Error::InvalidDialogState);
                return Err(Error::InvalidDialogState);
            }
            Some(state) => state,
        };

        let expected_intent = build_expected_intent(StandardIntent::Text.as_str())?;
        let expected_inputs = vec![ExpectedInput::new(input_prompt, vec![expected_intent])];

        let response = Response::ask(Some(conversation_token), expected_inputs);
        tracing::debug!("built ask response: {:?}", response);
        Ok(response)
    }

    /// Builds a prompt bundle whose prompts all go in the SSML slot or all in the text slot.
    pub fn build_input_prompt(&self, is_ssml: bool, initial_prompt: &str, no_inputs: &[&str]) -> Result<InputPrompt> {
        if no_inputs.len() > self.config.max_no_inputs() {
            tracing::warn!("{}: got {}", Error::InvalidNoInputs, no_inputs.len());
            return Err(Error::InvalidNoInputs);
        }

        Ok(if is_ssml {
            InputPrompt::ssml(initial_prompt, no_inputs)
        } else {
            InputPrompt::text(initial_prompt, no_inputs)
        })
    }
}

fn build_expected_intent(intent: &str) -> Result<ExpectedIntent> {
    if intent.is_empty() {
        tracing::warn!("{}", Error::InvalidIntent);
        return Err(Error::InvalidIntent);
    }
    Ok(ExpectedIntent::new(intent))
}
