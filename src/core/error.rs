use serde_json::Value;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Prefix carried by every translated upstream failure.
pub const UPSTREAM_ERROR_PREFIX: &str = "Error calling OpenAI API:";

/// A non-success HTTP reply from the model service.
///
/// `value` holds the decoded response body. Bodies that are not JSON are kept
/// as a JSON string. Build it with [`HttpResponseError::new`] so that `message`
/// always embeds `value`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct HttpResponseError {
    pub status: u16,
    pub message: String,
    pub value: Value,
}

impl HttpResponseError {
    /// Builds the error with a message that embeds the status and the body value.
    pub fn new(status: u16, value: Value) -> Self {
        Self {
            message: format!("Status code {status}, {value}"),
            status,
            value,
        }
    }
}

/// Failures reported by an [`OpenAiApi`](crate::core::traits::OpenAiApi) implementation.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] HttpResponseError),

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("Client configuration error: {0}")]
    Configuration(String),
}

/// Errors surfaced to callers of [`OpenAiProxy`](crate::proxy::OpenAiProxy).
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The model service answered with a non-success status.
    #[error("{message}")]
    Upstream {
        status_code: u16,
        message: String,
        #[source]
        source: HttpResponseError,
    },

    /// Any other client failure, passed through untouched.
    #[error(transparent)]
    Client(ClientError),

    #[error("Proxy configuration error: {0}")]
    Configuration(String),
}

impl ProxyError {
    /// The upstream HTTP status, if this error came from a status-coded reply.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProxyError::Upstream { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<HttpResponseError> for ProxyError {
    fn from(e: HttpResponseError) -> Self {
        ProxyError::Upstream {
            status_code: e.status,
            message: format!("{UPSTREAM_ERROR_PREFIX}{}", e.message),
            source: e,
        }
    }
}

impl From<ClientError> for ProxyError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Http(e) => e.into(),
            other => ProxyError::Client(other),
        }
    }
}
