//! # Block Kinds
//!
//! Each block type owns its delimiters and the logic that recognizes them.
//! The classifier and builder call into these types; they never hardcode
//! `#`, `>` or fence characters themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::Heading;
pub use list_item::{ListItem, ListMarker, ListOpen};
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
