//! # oai-proxy
//!
//! A typed proxy in front of Azure OpenAI deployments.
//!
//! [`OpenAiProxy`] forwards completion and chat-completion requests to an injected
//! [`OpenAiApi`] client, pinning each call to the configured deployment. When the
//! service answers with a non-success status the proxy returns
//! [`ProxyError::Upstream`] carrying that status, so request-handling layers can
//! tell a `429` from a `400` without knowing the client's error types.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oai_proxy::{
//!     AzureOpenAiClient, AzureOpenAiConfig, ChatCompletionsOptions, ChatMessage, OpenAiProxy,
//!     ProxyConfig, ProxyError,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AzureOpenAiClient::new(AzureOpenAiConfig::from_env()?)?;
//!     let proxy = OpenAiProxy::new(client, ProxyConfig::new("davinci", "gpt-35-turbo"));
//!
//!     let chat = ChatCompletionsOptions::new(vec![ChatMessage::user("Hello")]);
//!     match proxy.request_chat_completion(chat).await {
//!         Ok(res) => println!("{:?}", res.choices[0].message.content),
//!         Err(ProxyError::Upstream { status_code: 429, .. }) => println!("slow down"),
//!         Err(e) => return Err(e.into()),
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod provider;
pub mod proxy;

pub use crate::core::{
    ChatChoice, ChatCompletions, ChatCompletionsOptions, ChatMessage, ChatResponseMessage,
    ChatRole, Choice, ClientError, Completions, CompletionsOptions, CompletionsUsage,
    HttpClientConfig, HttpResponseError, OpenAiApi, ProxyError,
};
pub use crate::provider::{AzureOpenAiClient, AzureOpenAiConfig};
pub use crate::proxy::{CompletionRequest, OpenAiProxy, ProxyConfig};
