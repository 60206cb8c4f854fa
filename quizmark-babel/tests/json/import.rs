//! Import tests for JSON question records

use crate::common::fixture;
use quizmark_babel::formats::json::parse_json;
use quizmark_babel::{markdown_to_json, Answer, FormatError, MetaValue};

#[test]
fn test_fixture_is_regraded() {
    let quiz = parse_json(&fixture("sample.json")).expect("Should parse fixture");
    let planet = &quiz.questions[0];

    assert_eq!(planet.name, "Largest planet");
    assert_eq!(planet.correct_answers_no, 1);
    assert_eq!(
        planet.answers,
        vec![
            Answer::new("Jupiter", true, 1.0),
            Answer::new("Mars", false, 0.0),
            Answer::new("Venus", false, 0.0),
        ]
    );
    assert_eq!(planet.feedback, "");
    assert!(planet.metadata.is_empty());
}

#[test]
fn test_fixture_metadata_keeps_order() {
    let quiz = parse_json(&fixture("sample.json")).expect("Should parse fixture");
    let even = &quiz.questions[1];

    assert_eq!(even.get_meta("topic"), MetaValue::Single("math"));
    assert_eq!(even.get_meta("tag").values(), vec!["numbers", "parity"]);
    let tags: Vec<&str> = even.metadata.keys().map(String::as_str).collect();
    assert_eq!(tags, vec!["topic", "tag"]);
}

#[test]
fn test_single_object_is_accepted() {
    let source = r#"{"name": "Solo", "answers": [{"statement": "yes", "correct": true}]}"#;
    let quiz = parse_json(source).expect("Should parse object");

    assert_eq!(quiz.len(), 1);
    assert_eq!(quiz.questions[0].statement, "");
    assert_eq!(quiz.questions[0].answers[0].grade, 1.0);
}

#[test]
fn test_scalar_input_is_rejected() {
    assert!(matches!(parse_json("42"), Err(FormatError::ParseError(_))));
    assert!(matches!(parse_json("[{"), Err(FormatError::ParseError(_))));
}

#[test]
fn test_markdown_example_to_json() {
    let md = "# Q1\n\n## Question Text\n\nWhat is 2+2?\n\n## Question Answers\n\n+ 4\n- 5\n- 3";
    let json = markdown_to_json(md).expect("Should convert");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value[0]["name"], "Q1");
    assert_eq!(value[0]["statement"], "What is 2+2?");
    assert_eq!(value[0]["correct_answers_no"], 1);
    assert_eq!(value[0]["answers"][0]["grade"], 1.0);
    assert_eq!(value[0]["answers"][1]["grade"], 0.0);
    assert_eq!(value[0]["metadata"], serde_json::json!({}));
}
