//! Shape checks for a single question block.

use super::block::{
    self, Section, CORRECT_MARKER, QUESTION_ANSWERS, QUESTION_TEXT, TITLE_MARKER,
};
use crate::error::QuizError;

/// A block that passed validation, split into its title and sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBlock<'a> {
    pub title: &'a str,
    pub sections: Vec<Section<'a>>,
}

/// Check that a normalized block has a title, both required sections and at
/// least one correct answer.
pub fn validate_block(block: &str) -> Result<ValidatedBlock<'_>, QuizError> {
    let first_line = block.lines().next().unwrap_or_default();
    let Some(title) = first_line.strip_prefix(TITLE_MARKER) else {
        return Err(QuizError::MissingTitle {
            first_line: first_line.to_string(),
        });
    };

    let sections = block::sections(block);
    let has_section = |name: &str| sections.iter().any(|s| s.name == name);
    if !has_section(QUESTION_TEXT) || !has_section(QUESTION_ANSWERS) {
        return Err(QuizError::MissingRequiredSection {
            title: title.to_string(),
        });
    }

    let correct_answers_no = sections
        .iter()
        .filter(|s| s.name == QUESTION_ANSWERS)
        .flat_map(|s| s.lines.iter())
        .filter(|line| line.starts_with(CORRECT_MARKER))
        .count();
    if correct_answers_no == 0 {
        return Err(QuizError::NoCorrectAnswer {
            title: title.to_string(),
        });
    }

    Ok(ValidatedBlock { title, sections })
}
