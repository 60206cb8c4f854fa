//! Quiz markdown serialization (Quiz → markdown export)
//!
//! Every line is followed by a blank line and every question by one more, so
//! consecutive questions end up separated by exactly the block separator.
//!
//! Bodies are normalized before writing, the same way the parser normalizes a
//! block: newline runs collapse to one and trailing newlines are dropped.
//! Titles, answers and metadata values are folded onto a single line. Empty
//! bodies are then left out entirely, since they would put two blank lines
//! inside a question and split it on re-import.
//! Multi-valued metadata tags are written as one `tag=value` line per value,
//! which the parser accumulates back into the same sequence.

use super::block::{
    normalize_block, single_line, CORRECT_MARKER, FEEDBACK, INCORRECT_MARKER, METADATA,
    QUESTION_ANSWERS, QUESTION_TEXT, SECTION_MARKER, TITLE_MARKER,
};
use crate::ir::{Question, Quiz};
use tracing::debug;

/// Serialize every question of the quiz, in order.
pub fn serialize_quiz(quiz: &Quiz) -> String {
    quiz.iter().map(serialize_question).collect()
}

/// Serialize a single question.
pub fn serialize_question(question: &Question) -> String {
    let mut out = String::new();

    push_paragraph(&mut out, &format!("{TITLE_MARKER}{}", single_line(&question.name)));

    push_heading(&mut out, QUESTION_TEXT);
    push_body(&mut out, &question.statement);

    push_heading(&mut out, QUESTION_ANSWERS);
    for answer in &question.answers {
        let marker = if answer.correct {
            CORRECT_MARKER
        } else {
            INCORRECT_MARKER
        };
        push_paragraph(&mut out, &format!("{marker} {}", single_line(&answer.statement)));
    }

    let feedback = normalize_block(&question.feedback);
    if !feedback.is_empty() {
        push_heading(&mut out, FEEDBACK);
        push_paragraph(&mut out, &feedback);
    }

    if question.metadata.values().any(|values| !values.is_empty()) {
        push_heading(&mut out, METADATA);
        for tag in question.metadata.keys() {
            for value in question.get_meta(tag).values() {
                push_paragraph(&mut out, &format!("{tag}={}", single_line(value)));
            }
        }
    }

    out.push('\n');

    debug!(name = %question.name, bytes = out.len(), "serialized question");
    out
}

fn push_heading(out: &mut String, name: &str) {
    push_paragraph(out, &format!("{SECTION_MARKER}{name}"));
}

fn push_body(out: &mut String, text: &str) {
    let body = normalize_block(text);
    if !body.is_empty() {
        push_paragraph(out, &body);
    }
}

fn push_paragraph(out: &mut String, text: &str) {
    out.push_str(text);
    out.push_str("\n\n");
}
