//! Azure OpenAI provider implementation.
//!
//! Every request targets a named deployment:
//! `{endpoint}/openai/deployments/{deployment}/{operation}?api-version={version}`.

use async_trait::async_trait;

use crate::core::{
    ChatCompletions, ChatCompletionsOptions, ClientError, Completions, CompletionsOptions,
    HttpClient, HttpClientConfig, OpenAiApi,
};
use crate::provider::constants::azure;

/// Connection settings for an Azure OpenAI resource
#[derive(Debug, Clone)]
pub struct AzureOpenAiConfig {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    pub http_config: HttpClientConfig,
    pub user_agent: Option<String>,
}

impl AzureOpenAiConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            api_version: azure::API_VERSION.to_string(),
            http_config: HttpClientConfig::default(),
            user_agent: None,
        }
    }

    /// Reads the endpoint, key and optional API version from the environment.
    pub fn from_env() -> Result<Self, ClientError> {
        let endpoint = required_env(azure::ENDPOINT_ENV_VAR)?;
        let api_key = required_env(azure::API_KEY_ENV_VAR)?;

        let mut config = Self::new(endpoint, api_key);
        if let Ok(version) = std::env::var(azure::API_VERSION_ENV_VAR) {
            if !version.is_empty() {
                config.api_version = version;
            }
        }
        Ok(config)
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub(crate) fn deployment_url(&self, deployment_id: &str, endpoint: &str) -> String {
        format!(
            "{}{}/{}{}?api-version={}",
            self.endpoint.trim_end_matches('/'),
            azure::DEPLOYMENTS_PATH,
            deployment_id,
            endpoint,
            self.api_version
        )
    }

    fn auth_header(&self) -> (String, String) {
        (azure::API_KEY_HEADER.to_string(), self.api_key.clone())
    }
}

fn required_env(name: &str) -> Result<String, ClientError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ClientError::Configuration(format!("{name} not set."))),
    }
}

/// [`OpenAiApi`] implementation backed by the Azure OpenAI REST API.
pub struct AzureOpenAiClient {
    config: AzureOpenAiConfig,
    http: HttpClient,
}

impl AzureOpenAiClient {
    pub fn new(config: AzureOpenAiConfig) -> Result<Self, ClientError> {
        let http = HttpClient::new(&config.http_config, config.user_agent.as_deref())?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &AzureOpenAiConfig {
        &self.config
    }
}

#[async_trait]
impl OpenAiApi for AzureOpenAiClient {
    async fn get_completions(
        &self,
        deployment_id: &str,
        options: CompletionsOptions,
    ) -> Result<Completions, ClientError> {
        let url = self
            .config
            .deployment_url(deployment_id, azure::COMPLETIONS_ENDPOINT);
        self.http
            .post_json(&url, &[self.config.auth_header()], &options)
            .await
    }

    async fn get_completions_for_prompt(
        &self,
        deployment_id: &str,
        prompt: &str,
    ) -> Result<Completions, ClientError> {
        self.get_completions(deployment_id, CompletionsOptions::from_prompt(prompt))
            .await
    }

    async fn get_chat_completions(
        &self,
        deployment_id: &str,
        options: ChatCompletionsOptions,
    ) -> Result<ChatCompletions, ClientError> {
        let url = self
            .config
            .deployment_url(deployment_id, azure::CHAT_COMPLETIONS_ENDPOINT);
        self.http
            .post_json(&url, &[self.config.auth_header()], &options)
            .await
    }
}
