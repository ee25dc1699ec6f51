//! Notifier port - Interface for short-lived user notifications.

/// Port for transient user notifications ("Saved", "Need at least 3 names").
///
/// Implementations show a message for a fixed display window; a newer
/// message replaces the current one and restarts the window.
pub trait Notifier: Send + Sync {
    /// Show `message` to the user.
    fn notify(&self, message: &str);
}
