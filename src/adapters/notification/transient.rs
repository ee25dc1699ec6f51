//! Transient notifier that shows one message at a time for a fixed window.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::ports::Notifier;

/// Message currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    sequence: u64,
}

/// Notifier that publishes the visible message on a watch channel and
/// clears it after `display`.
///
/// A new message replaces the visible one and restarts the window;
/// the older message's pending dismissal is aborted.
pub struct TransientNotifier {
    display: Duration,
    current: Arc<watch::Sender<Option<Notification>>>,
    dismissal: Mutex<Option<JoinHandle<()>>>,
    sequence: AtomicU64,
}

impl TransientNotifier {
    pub fn new(display: Duration) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            display,
            current: Arc::new(current),
            dismissal: Mutex::new(None),
            sequence: AtomicU64::new(0),
        }
    }

    /// The message visible right now, if any.
    pub fn current(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|n| n.message.clone())
    }

    /// Receiver for renderers that follow the visible message.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.current.subscribe()
    }

    fn schedule_dismissal(&self, sequence: u64) {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::debug!("No runtime available, notification stays until replaced");
                return;
            }
        };

        let current = Arc::clone(&self.current);
        let display = self.display;
        let task = handle.spawn(async move {
            tokio::time::sleep(display).await;
            current.send_if_modified(|visible| match visible {
                Some(n) if n.sequence == sequence => {
                    *visible = None;
                    true
                }
                _ => false,
            });
        });

        let mut pending = self
            .dismissal
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = pending.replace(task) {
            previous.abort();
        }
    }
}

impl Notifier for TransientNotifier {
    fn notify(&self, message: &str) {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(notification = %message, "Notify");
        self.current.send_replace(Some(Notification {
            message: message.to_string(),
            sequence,
        }));
        self.schedule_dismissal(sequence);
    }
}

impl Drop for TransientNotifier {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.dismissal.lock() {
            if let Some(task) = pending.take() {
                task.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const DISPLAY: Duration = Duration::from_millis(2200);

    #[tokio::test(start_paused = true)]
    async fn message_is_visible_for_display_window() {
        let notifier = TransientNotifier::new(DISPLAY);

        notifier.notify("Saved");
        assert_eq!(notifier.current().as_deref(), Some("Saved"));

        sleep(Duration::from_millis(2100)).await;
        assert_eq!(notifier.current().as_deref(), Some("Saved"));

        sleep(Duration::from_millis(200)).await;
        assert_eq!(notifier.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn new_message_restarts_window() {
        let notifier = TransientNotifier::new(DISPLAY);

        notifier.notify("Saved");
        sleep(Duration::from_millis(2000)).await;
        notifier.notify("Sorted A–Z");

        // The first message's dismissal would have fired here.
        sleep(Duration::from_millis(500)).await;
        assert_eq!(notifier.current().as_deref(), Some("Sorted A–Z"));

        sleep(Duration::from_millis(1800)).await;
        assert_eq!(notifier.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_message_and_dismissal() {
        let notifier = TransientNotifier::new(DISPLAY);
        let mut rx = notifier.subscribe();

        notifier.notify("Cleared");
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().map(|n| n.message.as_str()), Some("Cleared"));

        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }

    #[test]
    fn notify_without_runtime_keeps_message() {
        let notifier = TransientNotifier::new(DISPLAY);
        notifier.notify("Saved");
        assert_eq!(notifier.current().as_deref(), Some("Saved"));
    }
}
