use crate::{
    abstract_trait::session::DynSessionStore,
    cache::session::{MemorySessionStore, RedisSessionStore},
    config::Config,
    di::DependenciesInject,
    service::UpstreamClient,
};
use anyhow::{Context, Result};
use chrono::Duration;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynJwtService,
    cache::PreferenceStore,
    config::{JwtConfig, ping},
    utils::{Metrics, SystemMetrics, run_metrics_collector},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub session: DynSessionStore,
    pub preferences: PreferenceStore,
    pub session_ttl: Duration,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Mutex<Metrics>>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Arc::new(Mutex::new(Metrics::new()));
        let system_metrics = Arc::new(SystemMetrics::new());

        let (session, preferences) = match &config.redis {
            Some(redis_config) => {
                info!("Initializing Redis-backed session and preference stores");
                let pool = redis_config.create_pool()?;
                ping(&pool).await.context("Failed to ping Redis server")?;

                (
                    Arc::new(RedisSessionStore::new(pool.clone())) as DynSessionStore,
                    PreferenceStore::new(pool),
                )
            }
            None => {
                warn!(
                    "REDIS_HOST not set; sessions are in-process and preferences are not persisted"
                );
                (
                    Arc::new(MemorySessionStore::new()) as DynSessionStore,
                    PreferenceStore::disconnected(),
                )
            }
        };

        let upstream = Arc::new(
            UpstreamClient::new(&config.upstream, metrics.clone(), registry.clone())
                .await
                .context("Failed to create upstream client")?,
        );

        let di_container = DependenciesInject::new(upstream);

        system_metrics.register(&mut *registry.lock().await);

        tokio::spawn(run_metrics_collector(system_metrics.clone()));

        Ok(Self {
            jwt_config,
            session,
            preferences,
            session_ttl: config.session_ttl(),
            di_container,
            registry,
            metrics,
            system_metrics,
        })
    }
}
