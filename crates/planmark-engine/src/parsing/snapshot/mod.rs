//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: converts a parsed document to a stable `Snap` for `insta`
//!   debug snapshots
//! - **`invariants`**: runtime checks for parser correctness (line coverage,
//!   spans in bounds, payloads reproducible from content ranges, lossless
//!   inline tiling)
//!
//! Parsing behavior is pinned down by fixture snapshots rather than by a
//! separate formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
