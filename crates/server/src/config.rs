//! Server runtime configuration.
use std::env;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen_addr: String,
}

impl ServerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DRONE_LISTEN_ADDR` - socket address to bind (default: 0.0.0.0:5000)
    ///
    /// Normalizer settings (`OPENAI_API_KEY` and friends) are read by
    /// [`interpreter::OpenAiConfig::from_env`], not here.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(addr) = read_env::<String>("DRONE_LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        config
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
