//! # Block Parsing
//!
//! Two-phase block parsing with a container stack.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blockquote depth, fence detection, blank status)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` tracks the container path
//!    and the single open leaf, emitting `BlockNode`s as leaves close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`, `ContainerFrame`)
//! - **`kinds`**: Block-specific syntax (BlockQuote, CodeFence, Heading, ListItem, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `ContainerPath` for the current blockquote nesting
//! - **`content`**: `ContentView` joins prefixed lines into block text
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Blocks are emitted in source order and never overlap
//! - All block nodes store byte spans into the rope

pub mod builder;
pub mod classify;
pub mod containers;
pub mod content;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use content::{ContentLine, ContentView};
pub use types::{BlockKind, BlockNode, ContainerFrame};
