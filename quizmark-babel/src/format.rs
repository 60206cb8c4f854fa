//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing quizzes.

use crate::batch::{BatchPolicy, ParseReport};
use crate::error::FormatError;
use crate::ir::Quiz;
use std::collections::HashMap;

/// Trait for quiz formats
///
/// Implementors provide bidirectional conversion between string representation and [`Quiz`].
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<Quiz, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Quiz)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Quiz → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a Quiz, aborting on the first invalid question
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Quiz, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Parse source text, letting `policy` decide what happens to invalid questions.
    ///
    /// Formats without a notion of independent question blocks can rely on the
    /// default implementation, which delegates to [`Format::parse`].
    fn parse_with_policy(
        &self,
        source: &str,
        _policy: BatchPolicy,
    ) -> Result<ParseReport, FormatError> {
        self.parse(source).map(ParseReport::from)
    }

    /// Serialize a Quiz into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _quiz: &Quiz) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a Quiz, optionally using extra parameters.
    ///
    /// Formats without options can rely on the default implementation,
    /// which delegates to [`Format::serialize`] and rejects any parameter.
    fn serialize_with_options(
        &self,
        quiz: &Quiz,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(quiz)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
