use anyhow::{Context, Result};
use deadpool_redis::{Config as PoolConfig, Pool, Runtime};
use tracing::info;

/// Connection settings for the Redis backend.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub db: u8,
    pub password: Option<String>,
}

impl RedisConfig {
    pub fn new(host: String, port: u16, db: u8, password: Option<String>) -> Self {
        Self {
            host,
            port,
            db,
            password,
        }
    }

    fn url(&self) -> String {
        match &self.password {
            Some(pw) => format!(
                "redis://:{}@{}:{}/{}",
                pw, self.host, self.port, self.db
            ),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }

    pub fn create_pool(&self) -> Result<Pool> {
        info!("Creating Redis connection pool for {}:{}", self.host, self.port);

        PoolConfig::from_url(self.url())
            .create_pool(Some(Runtime::Tokio1))
            .context("Failed to create Redis connection pool")
    }
}

/// Round-trip a PING to verify the pool is usable.
pub async fn ping(pool: &Pool) -> Result<()> {
    let mut conn = pool
        .get()
        .await
        .context("Failed to get Redis connection")?;

    let _: () = redis::cmd("PING")
        .query_async(&mut conn)
        .await
        .context("Failed to ping Redis server")?;

    info!("Pinged redis");

    Ok(())
}
