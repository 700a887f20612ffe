pub mod azure {
    pub const API_VERSION: &str = "2023-05-15";
    pub const API_KEY_HEADER: &str = "api-key";
    pub const DEPLOYMENTS_PATH: &str = "/openai/deployments";
    pub const COMPLETIONS_ENDPOINT: &str = "/completions";
    pub const CHAT_COMPLETIONS_ENDPOINT: &str = "/chat/completions";
    pub const ENDPOINT_ENV_VAR: &str = "AZURE_OPENAI_ENDPOINT";
    pub const API_KEY_ENV_VAR: &str = "AZURE_OPENAI_API_KEY";
    pub const API_VERSION_ENV_VAR: &str = "AZURE_OPENAI_API_VERSION";
}

pub mod deployment {
    pub const COMPLETION_ENV_VAR: &str = "OPENAI_GPT_DEPLOYMENT";
    pub const CHAT_ENV_VAR: &str = "OPENAI_CHATGPT_DEPLOYMENT";
}
