use std::time::Duration;

pub const CLOSE_ACTION: &str = "Close";
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Transient confirmation messages ("Session created !" and friends).
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn open(&self, message: &str, action: &str, duration: Duration);
}

/// Notifier for headless runs: messages go to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn open(&self, message: &str, action: &str, duration: Duration) {
        log::info!("{} [{}] ({} ms)", message, action, duration.as_millis());
    }
}

pub fn notify(notifier: &dyn Notifier, message: &str) {
    notifier.open(message, CLOSE_ACTION, DEFAULT_DURATION);
}
