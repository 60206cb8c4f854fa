//! Export tests for JSON question records

use crate::common::fixture;
use quizmark_babel::formats::json::{serialize_json, JsonOptions};
use quizmark_babel::{Answer, FormatRegistry, Question, Quiz};
use std::collections::HashMap;

fn single_question() -> Quiz {
    let mut question = Question::new("Q1");
    question.statement = "What is 2+2?".to_string();
    question.answers.push(Answer::new("4", true, 1.0));
    question.answers.push(Answer::new("5", false, 0.0));
    question.correct_answers_no = 1;
    question.set_meta("topic", "math");
    Quiz::new(vec![question])
}

#[test]
fn test_pretty_output_uses_four_spaces() {
    let json = serialize_json(&single_question(), JsonOptions::default()).expect("Should serialize");

    assert!(json.starts_with("[\n    {\n        \"name\": \"Q1\",\n"));
    assert!(json.contains("\n        \"metadata\": {\n            \"topic\": [\n                \"math\"\n"));
    assert!(json.ends_with("]\n"));
}

#[test]
fn test_indent_option_via_registry() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("indent".to_string(), "2".to_string());

    let json = registry
        .serialize_with_options(&single_question(), "json", &options)
        .expect("Should serialize");
    assert!(json.starts_with("[\n  {\n    \"name\": \"Q1\",\n"));
}

#[test]
fn test_compact_output() {
    let options = JsonOptions {
        pretty: false,
        indent: 4,
    };
    let json = serialize_json(&single_question(), options).expect("Should serialize");

    assert_eq!(json.lines().count(), 1);
    assert!(json.starts_with(r#"[{"name":"Q1","statement":"What is 2+2?","feedback":"","metadata":{"topic":["math"]}"#));
}

#[test]
fn test_markdown_fixture_to_json() {
    let registry = FormatRegistry::default();
    let quiz = registry
        .parse(&fixture("sample.md"), "markdown")
        .expect("Should parse fixture");
    let json = registry.serialize(&quiz, "json").expect("Should serialize");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    let records = value.as_array().expect("array output");
    assert_eq!(records.len(), 3);
    assert_eq!(records[1]["name"], "Prime numbers");
    assert_eq!(records[1]["correct_answers_no"], 2);
    assert_eq!(records[1]["metadata"]["tag"], serde_json::json!(["numbers", "primes"]));
    assert_eq!(records[1]["answers"][2]["grade"], -0.5);
}
