//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! Inline parsing runs over the joined text of inline-eligible blocks
//! (paragraphs, headings, list items). Constructs are tried in precedence
//! order at each position:
//!
//! 1. backslash escapes
//! 2. code spans (raw zone: suppress everything inside)
//! 3. `**strong**`
//! 4. `*emphasis*`
//! 5. `[text](url)` links
//!
//! Anything that fails to close is left as text. Strong, emphasis and link
//! text are parsed recursively.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
