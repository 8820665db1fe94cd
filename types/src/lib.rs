pub mod intents;
pub mod conversation;
pub mod prompt;
pub mod response;
mod dialog;

pub use conversation::ConversationType;
pub use dialog::DialogState;
pub use intents::StandardIntent;
pub use prompt::{InputPrompt, SpeechPrompt};
pub use response::{ExpectedInput, ExpectedIntent, FinalResponse, Response, SpeechResponse};
