use dotenv::dotenv;
use oai_proxy::{AzureOpenAiClient, AzureOpenAiConfig, CompletionsOptions, OpenAiProxy};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AzureOpenAiConfig::from_env()?.with_http_config(oai_proxy::HttpClientConfig {
        timeout: Duration::from_secs(20),
    });
    let proxy = OpenAiProxy::from_env(AzureOpenAiClient::new(config)?)?;

    // Plain prompt
    let res = proxy.request_completion("Write a haiku about Rust.").await?;
    println!("{}", res.choices[0].text.trim());

    // Full options
    let options = CompletionsOptions::from_prompt("List three prime numbers:")
        .with_max_tokens(32)
        .with_temperature(0.0);
    match proxy.request_completion(options).await {
        Ok(res) => println!("{}", res.choices[0].text.trim()),
        Err(e) => println!("Error (status {:?}): {e}", e.status_code()),
    }

    Ok(())
}
