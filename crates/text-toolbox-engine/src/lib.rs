//! Core of text-toolbox: text transforms, statistics and Markdown rendering.
//!
//! Every operation takes a `&str` and returns a fresh value; only
//! [`TextBuffer`] lives across calls, owned by the shell.

pub mod analysis;
pub mod buffer;
pub mod io;
pub mod markup;
pub mod ports;
pub mod tools;
pub mod transform;

// Re-export key types for easier usage
pub use analysis::{Statistics, analyze};
pub use buffer::TextBuffer;
pub use io::FileStore;
pub use markup::{MarkupDocument, parse_document, render_html};
pub use ports::{
    ClipboardPort, MemoryStore, Notification, NotificationLevel, NotificationPort,
    PersistencePort, PortError,
};
pub use tools::{Tool, ToolOutput, UnknownTool};
pub use transform::{
    DecodeError, deduplicate_lines, reverse, to_lower_case, to_sentence_case, to_title_case,
    to_upper_case, url_decode, url_encode,
};
