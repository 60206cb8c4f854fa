//! Structured JSON format
//!
//! A quiz is a JSON array of question objects:
//!
//! ```json
//! [
//!     {
//!         "name": "Q1",
//!         "statement": "What is 2+2?",
//!         "feedback": "",
//!         "metadata": { "topic": ["math"] },
//!         "answers": [ { "statement": "4", "correct": true, "grade": 1.0 } ],
//!         "correct_answers_no": 1
//!     }
//! ]
//! ```
//!
//! A single question object is also accepted on import. Grades and
//! `correct_answers_no` are recomputed from the `correct` flags after reading.
//!
//! # Options
//!
//! - `pretty`: "true" (default) or "false"
//! - `indent`: spaces per level when pretty printing (default 4)

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::{Question, Quiz};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::collections::HashMap;

const DEFAULT_INDENT: usize = 4;

/// Format implementation for structured JSON
pub struct JsonFormat;

/// Output knobs for [`JsonFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    pub pretty: bool,
    pub indent: usize,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            pretty: true,
            indent: DEFAULT_INDENT,
        }
    }
}

impl JsonOptions {
    /// Read options from string parameters, rejecting unknown keys.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, FormatError> {
        let mut options = JsonOptions::default();
        for (key, value) in params {
            match key.as_str() {
                "pretty" => {
                    options.pretty = value.parse().map_err(|_| {
                        FormatError::SerializationError(format!(
                            "Invalid value '{value}' for 'pretty' (expected true or false)"
                        ))
                    })?
                }
                "indent" => {
                    options.indent = value.parse().map_err(|_| {
                        FormatError::SerializationError(format!(
                            "Invalid value '{value}' for 'indent' (expected a number)"
                        ))
                    })?
                }
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'json' does not support parameter '{other}'"
                    )))
                }
            }
        }
        Ok(options)
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Structured JSON question records"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Quiz, FormatError> {
        parse_json(source)
    }

    fn serialize(&self, quiz: &Quiz) -> Result<String, FormatError> {
        serialize_json(quiz, JsonOptions::default())
    }

    fn serialize_with_options(
        &self,
        quiz: &Quiz,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        serialize_json(quiz, JsonOptions::from_params(options)?)
    }
}

/// Parse a JSON array of questions, or a single question object.
pub fn parse_json(source: &str) -> Result<Quiz, FormatError> {
    let value: Value = serde_json::from_str(source)
        .map_err(|e| FormatError::ParseError(format!("Invalid JSON: {e}")))?;

    let mut questions: Vec<Question> = match value {
        Value::Array(_) => serde_json::from_value(value),
        Value::Object(_) => serde_json::from_value::<Question>(value).map(|q| vec![q]),
        other => {
            return Err(FormatError::ParseError(format!(
                "Expected a question object or an array of questions, found {other}"
            )))
        }
    }
    .map_err(|e| FormatError::ParseError(format!("Invalid question record: {e}")))?;

    for question in &mut questions {
        question.regrade();
    }
    Ok(Quiz::new(questions))
}

/// Serialize a quiz to a JSON array, followed by a newline.
pub fn serialize_json(quiz: &Quiz, options: JsonOptions) -> Result<String, FormatError> {
    let mut json = if options.pretty {
        let indent = " ".repeat(options.indent);
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buffer,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        quiz.serialize(&mut serializer)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        String::from_utf8(buffer)
            .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))?
    } else {
        serde_json::to_string(quiz).map_err(|e| FormatError::SerializationError(e.to_string()))?
    };
    json.push('\n');
    Ok(json)
}
