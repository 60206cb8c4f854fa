//! Quiz markdown format implementation
//!
//! This module implements bidirectional conversion between quiz markdown and [`Quiz`].
//!
//! # Syntax
//!
//! ```text
//! # What is 2+2?              <- title (required, first line)
//!
//! ## Question Text            <- required
//!
//! Pick the right sum.
//!
//! ## Question Answers         <- required, at least one `+`
//!
//! + 4
//! - 5
//!
//! ## Feedback                 <- optional
//!
//! Basic arithmetic.
//!
//! ## Metadata                 <- optional, `tag=value`, tags may repeat
//!
//! topic=math
//!
//!
//! # Next question             <- two blank lines separate questions
//! ```
//!
//! Blank lines inside a question carry no meaning and are dropped on import.
//! Sections with other names are ignored.
//!
//! # Element Mapping Table
//!
//! | Markdown              | Question field         | Import Notes                              |
//! |-----------------------|------------------------|-------------------------------------------|
//! | `# Title`             | `name`                 | Everything after `# `                     |
//! | `## Question Text`    | `statement`            | Body lines joined with `\n`               |
//! | `## Question Answers` | `answers`              | `+ ` correct, `- ` incorrect, grades derived |
//! | `## Feedback`         | `feedback`             | Body lines joined with `\n`               |
//! | `## Metadata`         | `metadata`             | Split on the first `=`                    |
//!
//! # Lossy Conversions
//!
//! - Blank lines inside statements and feedback are collapsed
//! - Grades are always derived from the `+`/`-` markers, never stored

pub mod block;
pub mod parser;
pub mod serializer;
pub mod validator;

use crate::batch::{BatchPolicy, ParseReport};
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::Quiz;

/// Format implementation for quiz markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Quiz markdown authoring format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown", "quiz"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Quiz, FormatError> {
        Ok(parser::parse_quiz(source)?)
    }

    fn parse_with_policy(
        &self,
        source: &str,
        policy: BatchPolicy,
    ) -> Result<ParseReport, FormatError> {
        Ok(parser::parse_quiz_with_policy(source, policy)?)
    }

    fn serialize(&self, quiz: &Quiz) -> Result<String, FormatError> {
        Ok(serializer::serialize_quiz(quiz))
    }
}
