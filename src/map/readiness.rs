use std::sync::Arc;

use tokio::sync::watch;

/// One-shot "map is ready" signal.
///
/// The widget marks it once the underlying map exists; marker synchronization
/// waits on it instead of guessing with a timer.
#[derive(Clone, Debug)]
pub struct MapReadiness {
    ready: Arc<watch::Sender<bool>>,
}

impl Default for MapReadiness {
    fn default() -> Self {
        Self::new()
    }
}

impl MapReadiness {
    pub fn new() -> Self {
        let (ready, _) = watch::channel(false);
        Self {
            ready: Arc::new(ready),
        }
    }

    pub fn mark_ready(&self) {
        self.ready.send_replace(true);
    }

    #[cfg(test)]
    pub fn is_ready(&self) -> bool {
        *self.ready.borrow()
    }

    /// Resolves immediately if the map is already ready.
    pub async fn wait(&self) {
        let mut receiver = self.ready.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = receiver.wait_for(|ready| *ready).await;
    }
}
