pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use error::{ClientError, HttpResponseError, ProxyError};
pub use http::{HttpClient, HttpClientConfig};
pub use traits::OpenAiApi;
pub use types::{
    ChatChoice, ChatCompletions, ChatCompletionsOptions, ChatMessage, ChatResponseMessage,
    ChatRole, Choice, Completions, CompletionsOptions, CompletionsUsage,
};
