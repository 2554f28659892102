use std::{future::Future, sync::Mutex, time::Duration};
use tokio::task::JoinHandle;

/// Trailing-edge debouncer.
///
/// Each `call` supersedes whatever invocation is still pending, so at most
/// one scheduled invocation exists per instance and only the most recent
/// arguments ever run. The window lives with the instance: re-creating the
/// debouncer forgets any pending invocation.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `task` to run after the configured delay, cancelling any
    /// previously scheduled invocation.
    pub fn call<F, Fut>(&self, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task().await;
        });

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(prev) = pending.replace(handle) {
            prev.abort();
        }
    }

    /// Drop the pending invocation, if any, without running it.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(prev) = pending.take() {
            prev.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn rapid_calls_collapse_to_the_last_arguments() {
        let seen: Arc<Mutex<Vec<&str>>> = Arc::new(Mutex::new(Vec::new()));
        let debouncer = Debouncer::new(Duration::from_millis(50));

        for arg in ["first", "second", "third"] {
            let seen = seen.clone();
            debouncer.call(move || async move {
                seen.lock().unwrap().push(arg);
            });
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*seen.lock().unwrap(), vec!["third"]);
    }

    #[tokio::test]
    async fn cancel_drops_the_pending_invocation() {
        let seen: Arc<Mutex<Vec<&str>>> = Arc::new(Mutex::new(Vec::new()));
        let debouncer = Debouncer::new(Duration::from_millis(20));

        {
            let seen = seen.clone();
            debouncer.call(move || async move {
                seen.lock().unwrap().push("never");
            });
        }
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn spaced_calls_each_fire() {
        let seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));
        let debouncer = Debouncer::new(Duration::from_millis(10));

        for arg in [1, 2] {
            let seen = seen.clone();
            debouncer.call(move || async move {
                seen.lock().unwrap().push(arg);
            });
            tokio::time::sleep(Duration::from_millis(80)).await;
        }

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }
}
