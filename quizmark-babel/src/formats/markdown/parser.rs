//! Quiz markdown parsing (markdown → Quiz import)
//!
//! Pipeline: document → blocks → normalized block → validation → sections → Question

use super::block::{
    normalize_block, split_blocks, Section, CORRECT_MARKER, FEEDBACK, INCORRECT_MARKER,
    METADATA, QUESTION_ANSWERS, QUESTION_TEXT,
};
use super::validator::validate_block;
use crate::batch::{BatchPolicy, ParseReport};
use crate::error::QuizError;
use crate::ir::{grade_for, Answer, Question, Quiz};
use tracing::{debug, warn};

/// Parse a whole document, stopping at the first invalid question.
pub fn parse_quiz(source: &str) -> Result<Quiz, QuizError> {
    parse_quiz_with_policy(source, BatchPolicy::Abort).map(|report| report.quiz)
}

/// Parse a whole document, applying `policy` to invalid questions.
pub fn parse_quiz_with_policy(
    source: &str,
    policy: BatchPolicy,
) -> Result<ParseReport, QuizError> {
    let source = source.replace("\r\n", "\n");
    let mut report = ParseReport::default();

    for (index, block) in split_blocks(&source).into_iter().enumerate() {
        match parse_question(block) {
            Ok(question) => {
                debug!(
                    block = index,
                    name = %question.name,
                    answers = question.answers.len(),
                    "parsed question"
                );
                report.quiz.questions.push(question);
            }
            Err(err) => match policy {
                BatchPolicy::Abort => return Err(err),
                BatchPolicy::Skip => {
                    warn!(block = index, error = %err, "skipping invalid question");
                    report.rejected.push(err);
                }
            },
        }
    }

    Ok(report)
}

/// Parse one question block.
pub fn parse_question(raw: &str) -> Result<Question, QuizError> {
    let block = normalize_block(raw);
    // Validation must come first: grades divide by the number of correct answers.
    let validated = validate_block(&block)?;

    let mut question = Question::new(validated.title);
    let mut answer_lines = Vec::new();

    for section in &validated.sections {
        match section.name {
            QUESTION_TEXT => question.statement = section.body(),
            QUESTION_ANSWERS => answer_lines.extend(content_lines(section)),
            FEEDBACK => question.feedback = section.body(),
            METADATA => {
                for line in content_lines(section) {
                    let (tag, value) = parse_metadata_line(line)
                        .ok_or_else(|| malformed(validated.title, METADATA, line))?;
                    question.set_meta(tag, value);
                }
            }
            _ => {}
        }
    }

    let answers = answer_lines
        .into_iter()
        .map(|line| {
            parse_answer_line(line).ok_or_else(|| malformed(validated.title, QUESTION_ANSWERS, line))
        })
        .collect::<Result<Vec<_>, _>>()?;

    question.correct_answers_no = answers.iter().filter(|(correct, _)| *correct).count();
    for (correct, text) in answers {
        question.answers.push(Answer::new(
            text,
            correct,
            grade_for(correct, question.correct_answers_no),
        ));
    }

    Ok(question)
}

/// Lines of a section that hold something other than whitespace.
fn content_lines<'s, 'a>(section: &'s Section<'a>) -> impl Iterator<Item = &'a str> + 's {
    section
        .lines
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty())
}

/// `+ text` or `- text`; a bare marker is an empty answer.
fn parse_answer_line(line: &str) -> Option<(bool, &str)> {
    let (correct, rest) = if let Some(rest) = line.strip_prefix(CORRECT_MARKER) {
        (true, rest)
    } else if let Some(rest) = line.strip_prefix(INCORRECT_MARKER) {
        (false, rest)
    } else {
        return None;
    };

    if rest.is_empty() {
        return Some((correct, rest));
    }
    rest.strip_prefix(' ').map(|text| (correct, text))
}

/// `tag=value`, split on the first `=`.
fn parse_metadata_line(line: &str) -> Option<(&str, &str)> {
    let (tag, value) = line.split_once('=')?;
    (!tag.is_empty()).then_some((tag, value))
}

fn malformed(title: &str, section: &str, line: &str) -> QuizError {
    QuizError::MalformedLine {
        title: title.to_string(),
        section: section.to_string(),
        line: line.to_string(),
    }
}
