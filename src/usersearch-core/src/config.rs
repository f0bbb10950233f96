use serde::{Deserialize, Serialize};

/// Reference server configuration, read from `config.json`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: String,

    /// JSON array of user records served by the reference server
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_port() -> String {
    "8080".to_string()
}

fn default_dataset_path() -> String {
    "./dataset.json".to_string()
}

fn default_log_dir() -> String {
    "./logs".to_string()
}

impl Config {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            dataset_path: default_dataset_path(),
            log_dir: default_log_dir(),
        }
    }
}
