//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::batch::{BatchPolicy, ParseReport};
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::Quiz;
use std::collections::HashMap;

/// Registry of quiz formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let quiz = registry.parse(source, "markdown")?;
/// let json = registry.serialize(&quiz, "json")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    /// Parse source text using the specified format, aborting on the first invalid question
    pub fn parse(&self, source: &str, format: &str) -> Result<Quiz, FormatError> {
        let fmt = self.parsing_format(format)?;
        fmt.parse(source)
    }

    /// Parse source text using the specified format and batch policy
    pub fn parse_with_policy(
        &self,
        source: &str,
        format: &str,
        policy: BatchPolicy,
    ) -> Result<ParseReport, FormatError> {
        let fmt = self.parsing_format(format)?;
        fmt.parse_with_policy(source, policy)
    }

    /// Serialize a quiz using the specified format
    pub fn serialize(&self, quiz: &Quiz, format: &str) -> Result<String, FormatError> {
        self.serialize_with_options(quiz, format, &HashMap::new())
    }

    /// Serialize a quiz using the specified format and options
    pub fn serialize_with_options(
        &self,
        quiz: &Quiz,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        fmt.serialize_with_options(quiz, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::markdown::MarkdownFormat);
        registry.register(crate::formats::json::JsonFormat);

        registry
    }

    fn parsing_format(&self, format: &str) -> Result<&dyn Format, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        Ok(fmt)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
