//! End-to-end behaviour of the webhook façade against realistic invocation payloads.

use google_assistant::http::HeaderMap;
use google_assistant::types::{InputPrompt, StandardIntent};
use google_assistant::{Error, GoogleAssistant};
use serde_json::{json, Value};

// =============================================================================
// Helpers
// =============================================================================

fn main_invocation() -> Value {
    json!({
        "user": { "user_id": "abc" },
        "conversation": { "conversation_id": "1494606917128", "type": 1 },
        "inputs": [{
            "intent": "assistant.intent.action.MAIN",
            "raw_inputs": [{ "input_type": 2, "query": "talk to pizza bot" }],
            "arguments": []
        }]
    })
}

fn text_invocation(text: &str) -> Value {
    json!({
        "conversation": {
            "conversation_id": "1494606917128",
            "type": 2,
            "conversation_token": "{\"state\":null,\"data\":{}}"
        },
        "inputs": [{
            "intent": "assistant.intent.action.TEXT",
            "arguments": [{ "name": "text", "raw_text": text, "text_value": text }]
        }]
    })
}

// =============================================================================
// Inbound accessors
// =============================================================================

#[test]
fn intent_is_resolved_and_cached() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(main_invocation(), &mut headers);

    let first = assistant.intent().unwrap();
    let second = assistant.intent().unwrap();
    assert_eq!(first.value(), "assistant.intent.action.MAIN");
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.standard(), StandardIntent::Main);
}

#[test]
fn arguments_are_mapped_in_order() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(text_invocation("large pepperoni"), &mut headers);

    let arguments = assistant.arguments().unwrap();
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].name(), Some("text"));
    assert_eq!(arguments[0].raw_text(), Some("large pepperoni"));
    assert!(std::ptr::eq(arguments, assistant.arguments().unwrap()));
}

#[test]
fn conversation_exposes_previous_dialog_state() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(text_invocation("hi"), &mut headers);

    let conversation = assistant.conversation();
    assert_eq!(conversation.id(), Some("1494606917128"));
    let state = conversation.dialog_state().unwrap();
    assert_eq!(state.state(), None);
    assert!(state.data().is_empty());
}

#[test]
fn missing_inputs_fails_every_dependent_accessor() {
    let mut headers = HeaderMap::new();
    let mut assistant = GoogleAssistant::new(json!({ "conversation": {} }), &mut headers);

    let err = assistant.intent().unwrap_err();
    assert!(matches!(err, Error::MissingInputs));
    assert_eq!(err.to_string(), "Missing inputs from request body");
    assert!(matches!(assistant.arguments(), Err(Error::MissingInputs)));

    let result = assistant.respond_to(|assistant| assistant.tell("Hi"));
    assert!(matches!(result, Err(Error::MissingInputs)));
}

#[test]
fn missing_intent_is_a_structural_error() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(json!({ "inputs": [{ "arguments": [] }] }), &mut headers);

    let err = assistant.intent().unwrap_err();
    assert_eq!(err.to_string(), "Missing intent from request body");
}

#[test]
fn missing_arguments_is_a_structural_error() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(json!({ "inputs": [{ "intent": "x" }] }), &mut headers);

    assert!(matches!(assistant.arguments(), Err(Error::MissingArguments)));
    assert_eq!(assistant.intent().unwrap().value(), "x");
}

// =============================================================================
// tell
// =============================================================================

#[test]
fn tell_ssml_uses_ssml_slot() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(main_invocation(), &mut headers);

    let response = assistant.tell("<speak>Hi</speak>");
    assert_eq!(
        response.to_value().unwrap(),
        json!({
            "expect_user_response": false,
            "final_response": { "speech_response": { "ssml": "<speak>Hi</speak>" } }
        })
    );
}

#[test]
fn tell_plain_text_uses_text_slot() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(main_invocation(), &mut headers);

    let response = assistant.tell("Hi");
    assert_eq!(
        response.to_value().unwrap(),
        json!({
            "expect_user_response": false,
            "final_response": { "speech_response": { "text_to_speech": "Hi" } }
        })
    );
    assert!(response.conversation_token().is_none());
    assert!(response.expected_inputs().is_none());
}

// =============================================================================
// ask
// =============================================================================

#[test]
fn ask_defaults_dialog_state_and_expects_text() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(main_invocation(), &mut headers);

    let response = assistant.ask(Some("Say something"), None).unwrap();
    assert_eq!(
        response.to_value().unwrap(),
        json!({
            "conversation_token": "{\"state\":null,\"data\":{}}",
            "expect_user_response": true,
            "expected_inputs": [{
                "input_prompt": {
                    "initial_prompts": [{ "text_to_speech": "Say something" }],
                    "no_input_prompts": []
                },
                "possible_intents": [{ "intent": "assistant.intent.action.TEXT" }]
            }]
        })
    );
    assert!(response.final_response().is_none());
}

#[test]
fn ask_classifies_ssml_prompt() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(main_invocation(), &mut headers);

    let response = assistant.ask(Some("<speak>What size?</speak>"), None).unwrap();
    let prompt = response.expected_inputs().unwrap()[0].input_prompt();
    assert!(prompt.initial_prompts()[0].is_ssml());
}

#[test]
fn ask_rejects_array_dialog_state() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(main_invocation(), &mut headers);

    let err = assistant.ask(Some("Prompt"), Some(json!([]))).unwrap_err();
    assert!(matches!(err, Error::InvalidDialogState));
    assert_eq!(err.to_string(), "Invalid dialog state");
}

#[test]
fn ask_passes_string_dialog_state_through() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(main_invocation(), &mut headers);

    let response = assistant.ask(Some("Prompt"), Some(json!("opaque-token"))).unwrap();
    assert_eq!(response.conversation_token(), Some(&json!("opaque-token")));
}

#[test]
fn build_input_prompt_allows_one_no_input() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(main_invocation(), &mut headers);

    let prompt = assistant.build_input_prompt(false, "Hi", &["Still there?"]).unwrap();
    assert_eq!(
        serde_json::to_value(&prompt).unwrap(),
        json!({
            "initial_prompts": [{ "text_to_speech": "Hi" }],
            "no_input_prompts": [{ "text_to_speech": "Still there?" }]
        })
    );

    let err = assistant.build_input_prompt(false, "Hi", &["a", "b"]).unwrap_err();
    assert!(matches!(err, Error::InvalidNoInputs));
    assert_eq!(err.to_string(), "Invalid number of no inputs");
}

#[test]
fn build_input_prompt_keeps_ssml_reprompt_in_ssml_slot() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(main_invocation(), &mut headers);

    let prompt = assistant
        .build_input_prompt(true, "<speak>Hi</speak>", &["<speak>Hello?</speak>"])
        .unwrap();
    assert_eq!(
        serde_json::to_value(&prompt).unwrap(),
        json!({
            "initial_prompts": [{ "ssml": "<speak>Hi</speak>" }],
            "no_input_prompts": [{ "ssml": "<speak>Hello?</speak>" }]
        })
    );
}

#[test]
fn ask_rejects_prebuilt_prompt_with_too_many_no_inputs() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(main_invocation(), &mut headers);

    let err = assistant
        .ask(Some(InputPrompt::text("Hi", &["a", "b", "c"])), None)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidNoInputs));

    let response = assistant.ask(Some(InputPrompt::text("Hi", &["a"])), None).unwrap();
    assert_eq!(response.expected_inputs().unwrap()[0].input_prompt().no_input_prompts().len(), 1);
}

#[test]
fn responses_are_idempotent() {
    let mut headers = HeaderMap::new();
    let assistant = GoogleAssistant::new(main_invocation(), &mut headers);

    assert_eq!(assistant.tell("Bye"), assistant.tell("Bye"));
    assert_eq!(
        assistant.ask(Some("Again?"), None).unwrap(),
        assistant.ask(Some("Again?"), None).unwrap()
    );
}

// =============================================================================
// respond_to
// =============================================================================

#[test]
fn respond_to_stamps_version_header_and_returns_intent() {
    let mut headers = HeaderMap::new();
    let mut assistant = GoogleAssistant::new(text_invocation("hi"), &mut headers);

    let (response, intent) = assistant
        .respond_to(|assistant| {
            let name = assistant.arguments().unwrap()[0].raw_text().unwrap();
            assistant.tell(format!("Hello, {}", name).as_str())
        })
        .unwrap();

    assert!(intent.is(&StandardIntent::Text));
    assert!(!response.expect_user_response());
    assert_eq!(headers.get("Google-Assistant-API-Version").unwrap(), "v1");
}

#[test]
fn respond_to_stamps_header_on_failing_branch() {
    let mut headers = HeaderMap::new();
    let mut assistant = GoogleAssistant::new(main_invocation(), &mut headers);

    let (response, intent) = assistant
        .respond_to(|assistant| assistant.ask(Some("Prompt"), Some(json!([1, 2]))))
        .unwrap();

    assert!(matches!(response, Err(Error::InvalidDialogState)));
    assert_eq!(intent.value(), "assistant.intent.action.MAIN");
    assert_eq!(headers.get("google-assistant-api-version").unwrap(), "v1");
}

#[test]
fn respond_to_stamps_header_before_failing_on_missing_intent() {
    let mut headers = HeaderMap::new();
    let mut assistant = GoogleAssistant::new(json!({}), &mut headers);

    let result = assistant.respond_to(|_| ());
    assert!(result.is_err());
    assert_eq!(headers.get("Google-Assistant-API-Version").unwrap(), "v1");
}
