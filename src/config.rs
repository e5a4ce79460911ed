use std::net::IpAddr;
use std::path::PathBuf;

pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub mongo_database: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub max_body_size: usize,
    pub log_level: String,
    pub slack: Option<SlackConfig>,
}

#[derive(Debug, Clone)]
pub struct SlackConfig {
    pub bot_token: String,
    pub channel_id: String,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let var_or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let mongo_uri =
            var("MONGO_URI").ok_or("Missing required environment variable: MONGO_URI")?;
        if !mongo_uri.starts_with("mongodb://") && !mongo_uri.starts_with("mongodb+srv://") {
            return Err(
                "Invalid MONGO_URI: expected a mongodb:// or mongodb+srv:// connection string"
                    .to_string(),
            );
        }
        let mongo_database = var("MONGO_DATABASE");

        let host: IpAddr = var_or("HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HOST: {e}"))?;

        let port: u16 = var_or("PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let static_dir = PathBuf::from(var_or("STATIC_DIR", "dist"));

        let max_body_size: usize = var_or("MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid MAX_BODY_SIZE: {e}"))?;

        let log_level = var_or("LOG_LEVEL", "info");

        let slack = match (var("SLACK_BOT_TOKEN"), var("SLACK_CHANNEL_ID")) {
            (Some(bot_token), Some(channel_id)) => Some(SlackConfig {
                bot_token,
                channel_id,
                api_url: var_or("SLACK_API_URL", DEFAULT_SLACK_API_URL)
                    .trim_end_matches('/')
                    .to_string(),
            }),
            _ => None,
        };

        Ok(Config {
            mongo_uri,
            mongo_database,
            host,
            port,
            static_dir,
            max_body_size,
            log_level,
            slack,
        })
    }
}
