use deadpool_redis::{Connection, Pool};
use redis::AsyncCommands;
use std::sync::Arc;
use tracing::{debug, error};

/// Namespace a logical preference key by session identity.
///
/// `user:<id>:<key>` when an identifier is supplied, `guest:<key>` otherwise.
pub fn storage_key(key: &str, user_id: Option<&str>) -> String {
    match user_id {
        Some(id) => format!("user:{id}:{key}"),
        None => format!("guest:{key}"),
    }
}

/// Per-user key-value store for client preferences.
///
/// Keys are always namespaced through [`storage_key`]. When no backend is
/// configured, or a connection cannot be obtained, every operation degrades
/// to a no-op so callers never have to care whether persistent storage
/// exists.
#[derive(Clone)]
pub struct PreferenceStore {
    pool: Option<Arc<Pool>>,
}

impl PreferenceStore {
    pub fn new(pool: Pool) -> Self {
        Self {
            pool: Some(Arc::new(pool)),
        }
    }

    /// Store without a backend: reads return nothing, writes vanish.
    pub fn disconnected() -> Self {
        Self { pool: None }
    }

    async fn get_conn(&self) -> Option<Connection> {
        let pool = self.pool.as_ref()?;
        match pool.get().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("Failed to get Redis connection from pool: {e:?}");
                None
            }
        }
    }

    pub async fn get(&self, key: &str, user_id: Option<&str>) -> Option<String> {
        let mut conn = self.get_conn().await?;
        let namespaced = storage_key(key, user_id);

        match conn.get::<_, Option<String>>(&namespaced).await {
            Ok(Some(value)) => Some(value),
            Ok(None) => {
                debug!("preference miss: {namespaced}");
                None
            }
            Err(e) => {
                error!("Redis get error for {namespaced}: {e:?}");
                None
            }
        }
    }

    pub async fn set(&self, key: &str, user_id: Option<&str>, value: &str) -> bool {
        let Some(mut conn) = self.get_conn().await else {
            return false;
        };
        let namespaced = storage_key(key, user_id);

        match conn.set::<_, _, ()>(&namespaced, value).await {
            Ok(()) => {
                debug!("preference stored: {namespaced}");
                true
            }
            Err(e) => {
                error!("Redis set error for {namespaced}: {e:?}");
                false
            }
        }
    }

    pub async fn remove(&self, key: &str, user_id: Option<&str>) -> bool {
        let Some(mut conn) = self.get_conn().await else {
            return false;
        };
        let namespaced = storage_key(key, user_id);

        match conn.del::<_, ()>(&namespaced).await {
            Ok(()) => {
                debug!("preference removed: {namespaced}");
                true
            }
            Err(e) => {
                error!("Redis del error for {namespaced}: {e:?}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced_by_identity() {
        assert_eq!(storage_key("theme", None), "guest:theme");
        assert_eq!(storage_key("theme", Some("42")), "user:42:theme");
    }

    #[tokio::test]
    async fn disconnected_store_is_a_no_op() {
        let store = PreferenceStore::disconnected();

        assert!(!store.set("theme", Some("42"), "dark").await);
        assert_eq!(store.get("theme", Some("42")).await, None);
        assert!(!store.remove("theme", Some("42")).await);
    }
}
