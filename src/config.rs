use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the persisted catalog snapshots
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Form relay access key
    pub relay_access_key: String,

    /// Form relay base URL
    #[serde(default = "default_relay_api_url")]
    pub relay_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_relay_api_url() -> String {
    "https://api.web3forms.com".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
