//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The classifier
//! calls these; it never hardcodes `#`, `>` or fence strings itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod rule;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{ListItem, ListMarker};
pub use rule::ThematicBreak;
