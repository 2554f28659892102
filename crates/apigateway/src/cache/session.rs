use crate::{abstract_trait::session::SessionStoreTrait, domain::response::session::Session};
use async_trait::async_trait;
use chrono::Duration;
use deadpool_redis::{Connection, Pool};
use redis::AsyncCommands;
use std::{
    collections::HashMap,
    sync::Arc,
    time::Instant,
};
use tokio::sync::RwLock;
use tracing::{debug, error};

/// Redis-backed session store.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Arc<Pool>,
}

impl RedisSessionStore {
    pub fn new(pool: Pool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    async fn get_conn(&self) -> Option<Connection> {
        match self.pool.get().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("Failed to get Redis connection from pool: {e:?}");
                None
            }
        }
    }
}

#[async_trait]
impl SessionStoreTrait for RedisSessionStore {
    async fn create_session(&self, session_id: &str, session: &Session, ttl: Duration) -> bool {
        let json_data = match serde_json::to_string(session) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize session: {e:?}");
                return false;
            }
        };

        let Some(mut conn) = self.get_conn().await else {
            return false;
        };

        match conn
            .set_ex::<_, _, ()>(session_id, &json_data, ttl.num_seconds().max(0) as u64)
            .await
        {
            Ok(()) => {
                debug!("Session created for {session_id}");
                true
            }
            Err(e) => {
                error!("Failed to create session {session_id}: {e:?}");
                false
            }
        }
    }

    async fn get_session(&self, session_id: &str) -> Option<Session> {
        let mut conn = self.get_conn().await?;

        match conn.get::<_, Option<String>>(session_id).await {
            Ok(Some(data)) => match serde_json::from_str::<Session>(&data) {
                Ok(session) => Some(session),
                Err(e) => {
                    error!("Failed to deserialize session {session_id}: {e:?}");
                    None
                }
            },
            Ok(None) => {
                debug!("Session not found: {session_id}");
                None
            }
            Err(e) => {
                error!("Redis get error for session {session_id}: {e:?}");
                None
            }
        }
    }

    async fn delete_session(&self, session_id: &str) -> bool {
        let Some(mut conn) = self.get_conn().await else {
            return false;
        };

        match conn.del::<_, ()>(session_id).await {
            Ok(()) => {
                debug!("Session deleted: {session_id}");
                true
            }
            Err(e) => {
                error!("Failed to delete session {session_id}: {e:?}");
                false
            }
        }
    }

    async fn refresh_session(&self, session_id: &str, ttl: Duration) -> bool {
        let Some(mut conn) = self.get_conn().await else {
            return false;
        };

        match conn.expire::<_, bool>(session_id, ttl.num_seconds()).await {
            Ok(existed) => {
                debug!("Session TTL refreshed for {session_id}: {existed}");
                existed
            }
            Err(e) => {
                error!("Failed to refresh session TTL {session_id}: {e:?}");
                false
            }
        }
    }
}

/// In-process session store used when no Redis backend is configured.
/// Sessions do not survive a restart; expiry is checked lazily on access.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, (Session, Instant)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn deadline(ttl: Duration) -> Instant {
        Instant::now() + ttl.to_std().unwrap_or_default()
    }
}

#[async_trait]
impl SessionStoreTrait for MemorySessionStore {
    async fn create_session(&self, session_id: &str, session: &Session, ttl: Duration) -> bool {
        self.sessions
            .write()
            .await
            .insert(session_id.to_string(), (session.clone(), Self::deadline(ttl)));
        true
    }

    async fn get_session(&self, session_id: &str) -> Option<Session> {
        let mut sessions = self.sessions.write().await;

        match sessions.get(session_id) {
            Some((session, deadline)) if *deadline > Instant::now() => Some(session.clone()),
            Some(_) => {
                sessions.remove(session_id);
                None
            }
            None => None,
        }
    }

    async fn delete_session(&self, session_id: &str) -> bool {
        self.sessions.write().await.remove(session_id).is_some()
    }

    async fn refresh_session(&self, session_id: &str, ttl: Duration) -> bool {
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(session_id) {
            Some((_, deadline)) => {
                *deadline = Self::deadline(ttl);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::auth::SessionUser;
    use std::collections::HashSet;

    fn session() -> Session {
        Session {
            user: SessionUser {
                id: "7".to_string(),
                role: "staff".to_string(),
                permissions: HashSet::from(["customers.read".to_string()]),
            },
            upstream_token: "upstream-secret".to_string(),
        }
    }

    #[tokio::test]
    async fn create_get_delete_round_trip() {
        let store = MemorySessionStore::new();

        assert!(
            store
                .create_session("session:7", &session(), Duration::minutes(30))
                .await
        );

        let loaded = store.get_session("session:7").await.expect("session");
        assert_eq!(loaded.user.id, "7");
        assert_eq!(loaded.upstream_token, "upstream-secret");

        assert!(store.delete_session("session:7").await);
        assert!(store.get_session("session:7").await.is_none());
    }

    #[tokio::test]
    async fn expired_sessions_are_dropped_on_access() {
        let store = MemorySessionStore::new();

        store
            .create_session("session:7", &session(), Duration::zero())
            .await;

        assert!(store.get_session("session:7").await.is_none());
        // The expired entry is gone, so a refresh has nothing to extend.
        assert!(!store.refresh_session("session:7", Duration::minutes(5)).await);
    }

    #[tokio::test]
    async fn refresh_extends_a_live_session() {
        let store = MemorySessionStore::new();

        store
            .create_session("session:7", &session(), Duration::minutes(1))
            .await;

        assert!(store.refresh_session("session:7", Duration::minutes(30)).await);
        assert!(store.get_session("session:7").await.is_some());
    }
}
