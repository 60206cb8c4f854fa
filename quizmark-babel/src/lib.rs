//! Conversion between quiz markdown and structured question records
//!
//!     Quiz content is authored in a lightweight markdown dialect (one `# ` title per question,
//!     `## ` sections for text, answers, feedback and metadata) and exported to structured JSON
//!     for other tooling, or the reverse.
//!
//!     This is a pure lib: it powers quizmark-cli but never touches the file system, stdout or
//!     the process. Errors are returned as values; what to do with an invalid question is the
//!     caller's decision (see [`BatchPolicy`]).
//!
//! Architecture
//!
//!     Both formats map to the records in ./ir (Question, Answer, Quiz). The grading rule and
//!     the metadata accessor live there as well, so formats only deal with their own syntax.
//!
//!     .
//!     ├── error.rs                # QuizError (per question), FormatError (per operation)
//!     ├── batch.rs                # BatchPolicy and ParseReport
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── ir
//!     │   ├── nodes.rs            # Quiz, Question, Answer, grading
//!     │   └── metadata.rs         # get_meta / set_meta, MetaValue
//!     └── formats
//!         ├── markdown
//!         │   ├── block.rs        # block splitting, normalization, sections
//!         │   ├── validator.rs    # title / required sections / correct answer checks
//!         │   ├── parser.rs
//!         │   └── serializer.rs
//!         └── json
//!
//! Testing
//!
//!     tests
//!     └── <format>
//!         ├── <testname>.rs
//!     └── fixtures
//!         ├── sample.md
//!         └── sample.json
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Pipelines
//!
//!     markdown → Quiz: split on two blank lines, normalize each block, validate it, then read its
//!     sections. Validation always runs before grading, since grades divide by the number of
//!     correct answers.
//!
//!     Quiz → markdown: each question is written independently and the results concatenated.
//!     Multi-valued metadata tags are written one `tag=value` line per value, so they survive a
//!     round trip.
pub mod batch;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod registry;

pub use batch::{BatchPolicy, ParseReport};
pub use error::{FormatError, QuizError};
pub use format::Format;
pub use ir::{Answer, MetaValue, Question, Quiz};
pub use registry::FormatRegistry;

/// Convert a quiz markdown document to a pretty-printed JSON array.
///
/// Aborts on the first invalid question.
pub fn markdown_to_json(source: &str) -> Result<String, FormatError> {
    let quiz = formats::markdown::parser::parse_quiz(source)?;
    formats::json::serialize_json(&quiz, formats::JsonOptions::default())
}

/// Convert a JSON array of questions (or a single question) to quiz markdown.
pub fn json_to_markdown(source: &str) -> Result<String, FormatError> {
    let quiz = formats::json::parse_json(source)?;
    Ok(formats::markdown::serializer::serialize_quiz(&quiz))
}
