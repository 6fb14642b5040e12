use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// OpenAI API key; explanations fall back to a template when unset
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// OpenAI API base URL
    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,

    /// Chat model used for explanation generation
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    /// Seed the in-memory store with the demo catalog on startup
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_openai_api_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_openai_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_seed_demo_data() -> bool {
    true
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// True when a usable OpenAI key is configured
    ///
    /// The placeholder value from .env.example counts as unconfigured.
    pub fn has_openai_key(&self) -> bool {
        match &self.openai_api_key {
            Some(key) => !key.is_empty() && key != "your_openai_api_key_here",
            None => false,
        }
    }
}
