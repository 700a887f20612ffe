//! Shared HTTP client for talking to the model service.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use super::error::{ClientError, HttpResponseError};

/// Configuration for the underlying HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total time allowed for a single request
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
        }
    }
}

/// Thin wrapper around `reqwest::Client` that sends one JSON request per call.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig, user_agent: Option<&str>) -> Result<Self, ClientError> {
        let default_ua = format!("oai-proxy/{}", env!("CARGO_PKG_VERSION"));
        let ua = user_agent.unwrap_or(&default_ua);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(ua)
            .build()
            .map_err(|e| {
                ClientError::Configuration(format!("Failed to build reqwest client: {e}"))
            })?;

        Ok(Self { client })
    }

    /// Make a POST request with a JSON body.
    ///
    /// Non-success replies become [`ClientError::Http`] carrying the status and body.
    #[tracing::instrument(name = "http_post_json", skip(self, headers, body), fields(url = %url))]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, ClientError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.post(url).json(body);
        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: "Failed to complete request".to_string(),
                source: Box::new(e),
            })?;

        let status = res.status();
        let response_text = res.text().await.map_err(|e| ClientError::Network {
            message: "Failed to read response body".to_string(),
            source: Box::new(e),
        })?;

        if !status.is_success() {
            debug!(status = %status, "API returned error status");
            return Err(HttpResponseError::new(status.as_u16(), body_value(response_text)).into());
        }

        debug!(status = %status, "HTTP request successful");

        serde_json::from_str(&response_text).map_err(|e| ClientError::Parse {
            message: "Failed to parse API response".to_string(),
            source: Box::new(e),
        })
    }
}

/// Decodes an error body, keeping non-JSON text as a string value.
fn body_value(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
