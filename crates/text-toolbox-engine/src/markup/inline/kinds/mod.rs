//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Emphasis`**: `STAR = b'*'`, `STRONG = b"**"`
//! - **`Link`**: `[text](url)` brackets plus the URL scheme policy
//! - **`Escape`**: backslash before ASCII punctuation
//!
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use escape::Escape;
pub use link::Link;
