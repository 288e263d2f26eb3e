//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `*`/`_`, doubled for bold
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Link`**: `[`, `]`, `(`, `)`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;

/// Bytes that may start an inline construct. Plain runs stop in front of them.
pub const TRIGGERS: [u8; 4] = [
    Emphasis::ASTERISK,
    Emphasis::UNDERSCORE,
    CodeSpan::TICK,
    Link::LABEL_OPEN,
];
