//! Export tests for quiz markdown (Quiz → markdown)

use crate::common::fixture;
use insta::assert_snapshot;
use quizmark_babel::formats::json::parse_json;
use quizmark_babel::formats::markdown::serializer::serialize_question;
use quizmark_babel::{json_to_markdown, FormatRegistry};

#[test]
fn test_full_question_snapshot() {
    let quiz = parse_json(&fixture("sample.json")).expect("Should parse fixture");
    let md = serialize_question(&quiz.questions[1]);

    assert_snapshot!(md.trim_end(), @r"
    # Even numbers

    ## Question Text

    Pick the even numbers.

    ## Question Answers

    + 2

    + 4

    - 5

    ## Feedback

    Even numbers are divisible by 2.

    ## Metadata

    topic=math

    tag=numbers

    tag=parity
    ");
}

#[test]
fn test_null_feedback_and_missing_metadata_are_omitted() {
    let md = json_to_markdown(&fixture("sample.json")).expect("Should convert fixture");

    let first = md.split("\n\n\n").next().expect("at least one block");
    assert_eq!(
        first,
        "# Largest planet\n\n## Question Text\n\nWhich planet is the largest?\n\n## Question Answers\n\n+ Jupiter\n\n- Mars\n\n- Venus"
    );
}

#[test]
fn test_questions_are_written_in_order() {
    let registry = FormatRegistry::default();
    let quiz = registry
        .parse(&fixture("sample.json"), "json")
        .expect("Should parse fixture");
    let md = registry
        .serialize(&quiz, "markdown")
        .expect("Should serialize");

    let titles: Vec<&str> = md.lines().filter(|l| l.starts_with("# ")).collect();
    assert_eq!(titles, vec!["# Largest planet", "# Even numbers"]);
    assert!(md.ends_with("tag=parity\n\n\n"));
}

#[test]
fn test_markdown_rejects_extra_parameters() {
    let registry = FormatRegistry::default();
    let quiz = registry
        .parse(&fixture("sample.json"), "json")
        .expect("Should parse fixture");

    let mut options = std::collections::HashMap::new();
    options.insert("indent".to_string(), "2".to_string());
    assert!(registry
        .serialize_with_options(&quiz, "markdown", &options)
        .is_err());
}
