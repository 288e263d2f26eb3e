//! # Inline Parsing
//!
//! Cursor-based inline scanning with a fixed precedence and no backtracking
//! across rules.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-eligible units only: a paragraph's text or a single list item.
//! Code blocks are never scanned.
//!
//! At each trigger character (`*`, `_`, `` ` ``, `[`) the scanner tries bold,
//! italic, inline code and link in that order. Whatever closes first wins
//! and its content is not re-scanned, so code spans and bold text are raw
//! zones for everything after them in the order. A trigger that closes
//! nothing is kept as text, which guarantees forward progress.
//!
//! ## Modules
//!
//! - **`types`**: `Span` (the output model) and `InlineNode` (a span with positions)
//! - **`kinds`**: inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`parser`**: `parse_inline()`/`scan_inline()` entry points with `try_parse_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_inline, scan_inline};
pub use types::{InlineNode, Marker, Span, visible_text};
