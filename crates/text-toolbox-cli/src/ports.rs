//! Terminal-side implementations of the engine's ports.

use arboard::Clipboard;
use text_toolbox_engine::{
    ClipboardPort, Notification, NotificationLevel, NotificationPort, PortError,
};

/// System clipboard via `arboard`. Opened per write so a missing display
/// only matters when copying is requested.
pub struct SystemClipboard;

impl ClipboardPort for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PortError> {
        Clipboard::new()
            .and_then(|mut c| c.set_text(text.to_string()))
            .map_err(|e| PortError::Clipboard(e.to_string()))
    }
}

/// Prints notifications to stderr, keeping stdout for tool output.
pub struct StderrNotifier;

impl NotificationPort for StderrNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => eprintln!("✓ {}", notification.message),
            NotificationLevel::Failure => {
                log::debug!("failure notice: {}", notification.message);
                eprintln!("✗ {}", notification.message);
            }
        }
    }
}
