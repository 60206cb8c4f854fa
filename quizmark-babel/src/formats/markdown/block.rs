//! Question blocks and their sections.
//!
//! A document is a sequence of blocks separated by two blank lines. Within a
//! block, the first line is the `# ` title and every `## ` line opens a
//! section that runs until the next one.

use once_cell::sync::Lazy;
use regex::Regex;

pub const BLOCK_SEPARATOR: &str = "\n\n\n";
pub const TITLE_MARKER: &str = "# ";
pub const SECTION_MARKER: &str = "## ";

pub const QUESTION_TEXT: &str = "Question Text";
pub const QUESTION_ANSWERS: &str = "Question Answers";
pub const FEEDBACK: &str = "Feedback";
pub const METADATA: &str = "Metadata";

pub const CORRECT_MARKER: char = '+';
pub const INCORRECT_MARKER: char = '-';

static NEWLINE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\r?\n)+").expect("newline pattern compiles"));

/// Split a document into raw question blocks, in document order.
///
/// Blocks holding only whitespace (left over from trailing or repeated
/// separators) are dropped. The returned blocks are not normalized.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
        .collect()
}

/// Collapse every run of line breaks into a single `\n` and trim the block.
pub fn normalize_block(raw: &str) -> String {
    NEWLINE_RUNS
        .replace_all(raw.trim_end(), "\n")
        .trim_matches('\n')
        .to_string()
}

/// Fold free text onto one line, for titles, answers and metadata values.
pub fn single_line(text: &str) -> String {
    normalize_block(text).replace('\n', " ")
}

/// A `## ` section of a normalized block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub name: &'a str,
    pub lines: Vec<&'a str>,
}

impl Section<'_> {
    /// The section's lines joined back together.
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }
}

/// Split a normalized block into its sections.
///
/// The title line and anything between it and the first section are not
/// part of any section.
pub fn sections(block: &str) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut current: Option<Section<'_>> = None;

    for line in block.lines().skip(1) {
        if let Some(name) = line.strip_prefix(SECTION_MARKER) {
            sections.extend(current.take());
            current = Some(Section {
                name: name.trim_end(),
                lines: Vec::new(),
            });
        } else if let Some(section) = current.as_mut() {
            section.lines.push(line);
        }
    }
    sections.extend(current);

    sections
}
