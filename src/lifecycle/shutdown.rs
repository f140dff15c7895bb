//! Graceful stop fan-out.
//!
//! `main` owns one [`Shutdown`]; the HTTP server holds a receiver and stops
//! accepting once it fires. Integration tests use the same handle to tear
//! servers down.

use tokio::sync::broadcast;

/// One-shot stop notice delivered to every receiver.
pub struct Shutdown {
    notify: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (notify, _) = broadcast::channel(1);
        Self { notify }
    }

    /// Receiver that resolves when [`Shutdown::trigger`] is called.
    /// Subscribe before triggering; late receivers miss the notice.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.notify.subscribe()
    }

    /// Tell every receiver to stop. A no-op when nothing is subscribed.
    pub fn trigger(&self) {
        if self.notify.send(()).is_err() {
            tracing::debug!("Shutdown triggered with no receivers");
        }
    }

    /// Receivers that have not been dropped yet.
    pub fn receiver_count(&self) -> usize {
        self.notify.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
