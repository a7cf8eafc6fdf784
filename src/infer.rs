mod openai;

pub use openai::{ApiError, OpenAiClient};
