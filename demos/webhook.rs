use std::io::Read;

use google_assistant::types::{DialogState, StandardIntent};
use google_assistant::{Config, GoogleAssistant};
use http::HeaderMap;

// Reads an invocation payload from the file given as first argument (or stdin) and
// prints what the webhook would send back.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv_override().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let body = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            body
        }
    };
    let params: serde_json::Value = serde_json::from_str(&body)?;

    let mut headers = HeaderMap::new();
    let mut assistant = GoogleAssistant::with_config(params, &mut headers, Config::from_env());

    let (response, intent) = assistant.respond_to(|assistant| -> google_assistant::Result<_> {
        let intent = assistant.intent()?;
        match intent.standard() {
            StandardIntent::Main => {
                let prompt = assistant.build_input_prompt(
                    true,
                    "<speak>Hi! What is your name?</speak>",
                    &["<speak>I didn't catch that. What is your name?</speak>"],
                )?;
                let state = DialogState::default().with_state(serde_json::json!("asking_name"));
                assistant.ask(Some(prompt), Some(serde_json::Value::String(state.to_token()?)))
            }
            StandardIntent::Text => {
                let name = assistant
                    .arguments()?
                    .iter()
                    .find_map(|argument| argument.raw_text())
                    .unwrap_or("stranger");
                Ok(assistant.tell(format!("Nice to meet you, {}!", name).as_str()))
            }
            _ => Ok(assistant.tell("Sorry, I can't help with that yet.")),
        }
    })?;

    tracing::info!("handled intent {}", intent);
    println!("{}", serde_json::to_string_pretty(&response?)?);
    for (name, value) in headers.iter() {
        println!("{}: {}", name, value.to_str()?);
    }

    Ok(())
}
