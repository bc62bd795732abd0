//! Shutdown coordination.

use tokio::sync::broadcast;

/// One-shot stop signal shared between the signal task and the server.
///
/// `main` hands a receiver to [`HttpServer::run`](crate::http::HttpServer::run)
/// and triggers once SIGINT/SIGTERM arrives; tests trigger directly. Dropping
/// the coordinator also releases every receiver.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A receiver that resolves when [`Shutdown::trigger`] is called.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscriber to stop. A no-op when nobody is listening.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_subscribers() {
        let shutdown = Shutdown::new();
        let mut server = shutdown.subscribe();
        let mut other = shutdown.subscribe();
        assert_eq!(shutdown.receiver_count(), 2);

        shutdown.trigger();
        assert!(server.recv().await.is_ok());
        assert!(other.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_drop_releases_receivers() {
        let shutdown = Shutdown::new();
        let mut server = shutdown.subscribe();
        drop(shutdown);
        assert!(server.recv().await.is_err());
    }

    #[test]
    fn test_trigger_without_subscribers() {
        Shutdown::default().trigger();
    }
}
