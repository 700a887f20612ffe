use dotenv::dotenv;
use oai_proxy::{
    AzureOpenAiClient, AzureOpenAiConfig, ChatCompletionsOptions, ChatMessage, OpenAiProxy,
    ProxyError,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Reads AZURE_OPENAI_ENDPOINT / AZURE_OPENAI_API_KEY and the two deployment ids
    let client = AzureOpenAiClient::new(AzureOpenAiConfig::from_env()?)?;
    let proxy = OpenAiProxy::from_env(client)?;

    let options = ChatCompletionsOptions::new(vec![
        ChatMessage::system("You are a concise assistant."),
        ChatMessage::user("Tell me a random interesting fact about space."),
    ])
    .with_max_tokens(200);

    match proxy.request_chat_completion(options).await {
        Ok(res) => {
            for choice in res.choices {
                match choice.message.content {
                    Some(content) => println!("{content}"),
                    None => println!("(no content, finish reason {:?})", choice.finish_reason),
                }
            }
        }
        Err(ProxyError::Upstream {
            status_code,
            message,
            ..
        }) => println!("Upstream returned {status_code}: {message}"),
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}
