//! Error types for question parsing and format operations

use thiserror::Error;

/// Problems found in a single question block.
///
/// These are authoring errors: the block is rejected as a whole and the batch
/// driver decides whether the rest of the document is still converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The block's first line is not a `# ` title
    #[error("question starting with \"{first_line}\" does not have a title")]
    MissingTitle { first_line: String },

    /// The block lacks a `Question Text` or `Question Answers` section
    #[error("no question text or answer set for question \"{title}\"")]
    MissingRequiredSection { title: String },

    /// No answer line in the block starts with `+`
    #[error("no correct answer set for question \"{title}\"")]
    NoCorrectAnswer { title: String },

    /// A line inside an answer or metadata section does not follow its grammar
    #[error("malformed line in section \"{section}\" of question \"{title}\": \"{line}\"")]
    MalformedLine {
        title: String,
        section: String,
        line: String,
    },
}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    /// A question block failed validation
    #[error("Invalid question: {0}")]
    Invalid(#[from] QuizError),

    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
