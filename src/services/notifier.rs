//! User-facing error notifications (the "toast" layer).

use tokio::sync::mpsc;
use tracing::warn;

/// Receives user-facing error messages. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Emits every notification as a `warn!` event.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        warn!(notification = message, "User notification");
    }
}

/// Forwards notifications to a UI task over an unbounded channel.
///
/// Messages sent after the receiver is dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn error(&self, message: &str) {
        let _ = self.sender.send(message.to_string());
    }
}
