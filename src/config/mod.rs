use anyhow::Result;
use dotenvy::dotenv;
use std::env;

/// Preview deployment probed when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://get-ready-2.preview.emergentagent.com";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let base_url =
            env::var("DYNOPAY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = env::var("DYNOPAY_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()?;

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }
}
