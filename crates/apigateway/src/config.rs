use anyhow::{Context, Result};
use shared::config::RedisConfig;
use std::time::Duration;

/// Where and how to reach the upstream API.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn init() -> Result<Self> {
        let base_url = std::env::var("UPSTREAM_API_URL")
            .context("Missing environment variable: UPSTREAM_API_URL")?;

        let timeout_secs = match std::env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("UPSTREAM_TIMEOUT_SECS must be a valid u64 integer")?,
            Err(_) => 30,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub session_ttl_minutes: i64,
    pub upstream: UpstreamConfig,
    pub redis: Option<RedisConfig>,
}

impl Config {
    pub fn init() -> Result<Self> {
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;

        let port = std::env::var("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let session_ttl_minutes = match std::env::var("SESSION_TTL_MINUTES") {
            Ok(raw) => raw
                .parse::<i64>()
                .context("SESSION_TTL_MINUTES must be a valid i64 integer")?,
            Err(_) => 30,
        };

        Ok(Self {
            port,
            jwt_secret,
            session_ttl_minutes,
            upstream: UpstreamConfig::init()?,
            redis: Self::redis_from_env()?,
        })
    }

    // Sessions fall back to the in-process store when REDIS_HOST is absent.
    fn redis_from_env() -> Result<Option<RedisConfig>> {
        let Ok(host) = std::env::var("REDIS_HOST") else {
            return Ok(None);
        };

        let port = match std::env::var("REDIS_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("REDIS_PORT must be a valid u16 integer")?,
            Err(_) => 6379,
        };

        let db = match std::env::var("REDIS_DB") {
            Ok(raw) => raw
                .parse::<u8>()
                .context("REDIS_DB must be a valid u8 integer")?,
            Err(_) => 0,
        };

        let password = std::env::var("REDIS_PASSWORD").ok();

        Ok(Some(RedisConfig::new(host, port, db, password)))
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.session_ttl_minutes)
    }
}
