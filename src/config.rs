// src/config.rs

use std::env;

use anyhow::Context;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CACHE_CAPACITY: usize = crate::analytics::cache::DEFAULT_CAPACITY;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    pub cors_allow_any: bool,
    pub cache_capacity: usize,
}

impl Config {
    /// Reads settings from the process environment (call `dotenvy::dotenv()` first).
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .context("DATABASE_URL must be set in your environment or .env file")?;

        Ok(Self {
            database_url,
            port: parse_or(env::var("PORT").ok(), DEFAULT_PORT),
            max_connections: parse_or(env::var("DB_MAX_CONNECTIONS").ok(), DEFAULT_MAX_CONNECTIONS),
            cors_allow_any: parse_flag(env::var("CORS_ALLOW_ANY").ok(), true),
            cache_capacity: parse_or(env::var("ANALYTICS_CACHE_CAPACITY").ok(), DEFAULT_CACHE_CAPACITY),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw.as_deref().map(|s| s.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}
