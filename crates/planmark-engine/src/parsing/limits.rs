use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do with input longer than [`ParseOptions::max_input_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OversizePolicy {
    /// Parse the longest prefix that fits, cut at a char boundary.
    #[default]
    Truncate,
    /// Refuse to parse.
    Reject,
}

/// Size limits for a parse. The default has no limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub max_input_bytes: Option<usize>,
    pub oversize: OversizePolicy,
}

impl ParseOptions {
    pub fn with_limit(max_input_bytes: usize, oversize: OversizePolicy) -> Self {
        Self {
            max_input_bytes: Some(max_input_bytes),
            oversize,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is {len} bytes, over the {max} byte limit")]
    InputTooLarge { len: usize, max: usize },
}
