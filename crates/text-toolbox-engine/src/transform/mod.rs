//! # Text transforms
//!
//! Pure `&str -> String` functions. Every function is total and
//! deterministic except [`url_decode`], whose single failure mode is a
//! malformed escape reported as [`DecodeError`].

pub mod case;
pub mod lines;
pub mod url;

pub use case::{to_lower_case, to_sentence_case, to_title_case, to_upper_case};
pub use lines::{deduplicate_lines, reverse};
pub use url::{DecodeError, url_decode, url_encode};
