use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the movies dataset, a JSON array of movie records
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// URL to fetch the dataset from when the local file is absent
    #[serde(default)]
    pub dataset_url: Option<String>,

    /// Path of the precomputed similarity artifact; loaded when present,
    /// written after a successful build
    #[serde(default = "default_artifact_path")]
    pub artifact_path: String,

    /// Vocabulary cap for the bag-of-words vectorizer
    #[serde(default = "default_max_features")]
    pub max_features: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_dataset_path() -> String {
    "data/movies.json".to_string()
}

fn default_artifact_path() -> String {
    "data/similarity.bin".to_string()
}

fn default_max_features() -> usize {
    5000
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
