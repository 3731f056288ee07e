use anyhow::Context;

use crate::json::Escaping;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub cors_origin: String,
    pub escaping: Escaping,
}

impl Config {
    /// Reads the process environment, loading `.env` first if there is one.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("API_PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("API_PORT `{port}` is not a valid port"))?,
            None => 8080,
        };
        let escaping = match lookup("RESTAURANT_JSON_ESCAPING") {
            Some(mode) => mode.parse().context("invalid RESTAURANT_JSON_ESCAPING")?,
            None => Escaping::default(),
        };

        Ok(Self {
            bind_addr: lookup("API_BIND_ADDR").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            cors_origin: lookup("API_CORS_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            escaping,
        })
    }
}
