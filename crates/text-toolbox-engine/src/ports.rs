//! Capabilities a shell provides around the core.
//!
//! Nothing in the engine calls these traits itself; a shell invokes them
//! after running a tool (copy the result, save a note, show a toast).

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortError {
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait ClipboardPort {
    fn write_text(&mut self, text: &str) -> Result<(), PortError>;
}

/// Opaque key-value save/restore, used by the notes tool only.
pub trait PersistencePort {
    fn get(&self, key: &str) -> Result<Option<String>, PortError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PortError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Failure,
            message: message.into(),
        }
    }
}

pub trait NotificationPort {
    fn notify(&mut self, notification: Notification);
}

/// Accepts keys made only of ASCII letters, digits, `-` and `_`.
pub fn validate_key(key: &str) -> Result<(), PortError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(PortError::InvalidKey(key.to_string()))
    }
}

/// In-memory [`PersistencePort`]; contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistencePort for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PortError> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
