pub(crate) mod constants;
pub(crate) mod azure;

pub use azure::{AzureOpenAiClient, AzureOpenAiConfig};
