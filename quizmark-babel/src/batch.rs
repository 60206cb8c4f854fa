//! Batch policy for documents holding several questions.
//!
//! A single invalid block is an authoring error. Whether it invalidates the
//! whole document or only itself is the caller's decision, expressed with
//! [`BatchPolicy`].

use crate::error::QuizError;
use crate::ir::Quiz;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// What to do with the rest of a document when a block is invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchPolicy {
    /// Stop at the first invalid block and return its error, with no partial output
    #[default]
    Abort,
    /// Drop invalid blocks, record their errors, and keep converting
    Skip,
}

impl BatchPolicy {
    pub const NAMES: &'static [&'static str] = &["abort", "skip"];
}

impl FromStr for BatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(BatchPolicy::Abort),
            "skip" => Ok(BatchPolicy::Skip),
            other => Err(format!(
                "unknown batch policy '{other}' (expected one of: {})",
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for BatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchPolicy::Abort => f.write_str("abort"),
            BatchPolicy::Skip => f.write_str("skip"),
        }
    }
}

/// Outcome of parsing a document under a [`BatchPolicy`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    /// Questions that parsed, in document order
    pub quiz: Quiz,
    /// Errors of the blocks that were dropped, in document order.
    /// Always empty under [`BatchPolicy::Abort`].
    pub rejected: Vec<QuizError>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl From<Quiz> for ParseReport {
    fn from(quiz: Quiz) -> Self {
        ParseReport {
            quiz,
            rejected: Vec::new(),
        }
    }
}
