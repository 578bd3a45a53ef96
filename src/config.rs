use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

/// Process-wide settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
    pub gemini_api_key: Option<String>,
    pub elevenlabs_api_key: Option<String>,
    pub upstream_timeout: Duration,
}

/// Load `.env` from the working directory, if present.
///
/// Variables already set in the process environment win.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = parse_number(&lookup, "PORT", 3000)?;
        let timeout_secs: u64 = parse_number(&lookup, "UPSTREAM_TIMEOUT_SECS", 60)?;

        let addr = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", host, port)))?;

        Ok(Self {
            addr,
            static_dir: lookup("STATIC_DIR")
                .unwrap_or_else(|| "public".to_string())
                .into(),
            gemini_api_key: non_empty(lookup("GEMINI_API_KEY")),
            elevenlabs_api_key: non_empty(lookup("ELEVENLABS_API_KEY")),
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_number<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
