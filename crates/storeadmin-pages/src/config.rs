use serde::Deserialize;
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5173/";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());
        Ok(Self { api_base_url })
    }
}
