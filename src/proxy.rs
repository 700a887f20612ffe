//! Request forwarding to the configured model deployments.

use crate::core::{
    ChatCompletions, ChatCompletionsOptions, Completions, CompletionsOptions, OpenAiApi,
    ProxyError,
};
use crate::provider::constants::deployment;

/// Deployment identifiers used by [`OpenAiProxy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Deployment serving single-turn completions
    pub completion_deployment: String,
    /// Deployment serving chat completions
    pub chat_deployment: String,
}

impl ProxyConfig {
    pub fn new(
        completion_deployment: impl Into<String>,
        chat_deployment: impl Into<String>,
    ) -> Self {
        Self {
            completion_deployment: completion_deployment.into(),
            chat_deployment: chat_deployment.into(),
        }
    }

    /// Reads `OPENAI_GPT_DEPLOYMENT` and `OPENAI_CHATGPT_DEPLOYMENT`.
    pub fn from_env() -> Result<Self, ProxyError> {
        Ok(Self::new(
            required_env(deployment::COMPLETION_ENV_VAR)?,
            required_env(deployment::CHAT_ENV_VAR)?,
        ))
    }
}

fn required_env(name: &str) -> Result<String, ProxyError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ProxyError::Configuration(format!("{name} not set."))),
    }
}

/// What the caller wants completed.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionRequest {
    TextPrompt(String),
    StructuredOptions(CompletionsOptions),
}

impl CompletionRequest {
    fn kind(&self) -> &'static str {
        match self {
            CompletionRequest::TextPrompt(_) => "prompt",
            CompletionRequest::StructuredOptions(_) => "options",
        }
    }
}

impl From<&str> for CompletionRequest {
    fn from(prompt: &str) -> Self {
        CompletionRequest::TextPrompt(prompt.to_string())
    }
}

impl From<String> for CompletionRequest {
    fn from(prompt: String) -> Self {
        CompletionRequest::TextPrompt(prompt)
    }
}

impl From<CompletionsOptions> for CompletionRequest {
    fn from(options: CompletionsOptions) -> Self {
        CompletionRequest::StructuredOptions(options)
    }
}

/// Forwards completion calls to an [`OpenAiApi`] client.
///
/// Payloads pass through untouched. A non-success reply from the service becomes
/// [`ProxyError::Upstream`] with the same status code; every other client failure
/// is returned as [`ProxyError::Client`].
///
/// ```rust,no_run
/// use oai_proxy::{AzureOpenAiClient, AzureOpenAiConfig, OpenAiProxy, ProxyConfig};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AzureOpenAiClient::new(AzureOpenAiConfig::from_env()?)?;
/// let proxy = OpenAiProxy::new(client, ProxyConfig::new("davinci", "gpt-35-turbo"));
///
/// let completions = proxy.request_completion("Say hello").await?;
/// println!("{}", completions.choices[0].text);
/// # Ok(())
/// # }
/// ```
pub struct OpenAiProxy<C> {
    client: C,
    config: ProxyConfig,
}

impl<C: OpenAiApi> OpenAiProxy<C> {
    pub fn new(client: C, config: ProxyConfig) -> Self {
        Self { client, config }
    }

    /// Builds the proxy with deployment identifiers taken from the environment.
    pub fn from_env(client: C) -> Result<Self, ProxyError> {
        Ok(Self::new(client, ProxyConfig::from_env()?))
    }

    pub fn completion_deployment(&self) -> &str {
        &self.config.completion_deployment
    }

    pub fn chat_deployment(&self) -> &str {
        &self.config.chat_deployment
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Sends a prompt or a full set of completion options to the completion deployment.
    #[tracing::instrument(
        name = "request_completion",
        skip_all,
        fields(deployment = %self.config.completion_deployment, kind)
    )]
    pub async fn request_completion(
        &self,
        request: impl Into<CompletionRequest>,
    ) -> Result<Completions, ProxyError> {
        let request = request.into();
        tracing::Span::current().record("kind", request.kind());

        let deployment_id = self.completion_deployment();
        let completions = match request {
            CompletionRequest::StructuredOptions(options) => {
                self.client.get_completions(deployment_id, options).await?
            }
            CompletionRequest::TextPrompt(prompt) => {
                self.client
                    .get_completions_for_prompt(deployment_id, &prompt)
                    .await?
            }
        };

        tracing::debug!(choices = completions.choices.len(), "completion forwarded");
        Ok(completions)
    }

    /// Sends a chat exchange to the chat deployment.
    #[tracing::instrument(
        name = "request_chat_completion",
        skip_all,
        fields(deployment = %self.config.chat_deployment, messages = options.messages.len())
    )]
    pub async fn request_chat_completion(
        &self,
        options: ChatCompletionsOptions,
    ) -> Result<ChatCompletions, ProxyError> {
        let chat = self
            .client
            .get_chat_completions(self.chat_deployment(), options)
            .await?;

        tracing::debug!(choices = chat.choices.len(), "chat completion forwarded");
        Ok(chat)
    }
}
