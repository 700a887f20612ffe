use std::sync::Arc;

use async_trait::async_trait;

use super::{
    error::ClientError,
    types::{ChatCompletions, ChatCompletionsOptions, Completions, CompletionsOptions},
};

/// Sends requests to a deployed model and returns its reply.
///
/// Implementations report non-success HTTP replies as [`ClientError::Http`] so
/// that callers can tell them apart from network or decoding failures.
#[async_trait]
pub trait OpenAiApi: Send + Sync {
    async fn get_completions(
        &self,
        deployment_id: &str,
        options: CompletionsOptions,
    ) -> Result<Completions, ClientError>;

    async fn get_completions_for_prompt(
        &self,
        deployment_id: &str,
        prompt: &str,
    ) -> Result<Completions, ClientError>;

    async fn get_chat_completions(
        &self,
        deployment_id: &str,
        options: ChatCompletionsOptions,
    ) -> Result<ChatCompletions, ClientError>;
}

#[async_trait]
impl<T> OpenAiApi for Arc<T>
where
    T: OpenAiApi + ?Sized,
{
    async fn get_completions(
        &self,
        deployment_id: &str,
        options: CompletionsOptions,
    ) -> Result<Completions, ClientError> {
        (**self).get_completions(deployment_id, options).await
    }

    async fn get_completions_for_prompt(
        &self,
        deployment_id: &str,
        prompt: &str,
    ) -> Result<Completions, ClientError> {
        (**self).get_completions_for_prompt(deployment_id, prompt).await
    }

    async fn get_chat_completions(
        &self,
        deployment_id: &str,
        options: ChatCompletionsOptions,
    ) -> Result<ChatCompletions, ClientError> {
        (**self).get_chat_completions(deployment_id, options).await
    }
}
