//! # Block Parsing
//!
//! Two-phase block segmentation.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (blank, fence, heading, rule, quote,
//!    list marker, text)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` walks the classified
//!    lines with an explicit cursor; multi-line rules (fences, quotes, lists)
//!    consume as many lines as they claim and hand back the next position
//!
//! ## Modules
//!
//! - **`types`**: `Block`, the output model, and `BlockNode`, a block with positions
//! - **`kinds`**: block-specific types with owned delimiters
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`content`**: `ContentView` maps payload text back onto source bytes
//! - **`builder`**: `BlockBuilder` cursor fold
//! - **`serialize`**: naive markdown re-serialization of blocks
//!
//! ## Key Invariants
//!
//! - Blocks come out in source line order
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Every non-blank line belongs to exactly one block

pub mod builder;
pub mod classify;
pub mod content;
pub mod kinds;
pub mod serialize;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, LineKind};
pub use content::{ContentLine, ContentView};
pub use serialize::to_markdown;
pub use types::{Block, BlockNode};
