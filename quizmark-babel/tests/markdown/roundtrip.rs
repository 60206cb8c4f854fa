//! Round-trip and grading properties

use crate::common::question_block;
use proptest::prelude::*;
use quizmark_babel::formats::markdown::parser::{parse_question, parse_quiz};
use quizmark_babel::formats::markdown::serializer::{serialize_question, serialize_quiz};
use quizmark_babel::{json_to_markdown, Answer, MetaValue, Question, Quiz};

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ?,.]{0,24}[A-Za-z0-9?.]"
}

fn question() -> impl Strategy<Value = Question> {
    (
        text(),
        text(),
        prop::option::of(text()),
        prop::collection::vec((any::<bool>(), text()), 1..6),
        prop::collection::vec(("[a-z]{1,6}", "[a-z0-9]{1,6}"), 0..5),
    )
        .prop_map(|(name, statement, feedback, answers, tags)| {
            let mut question = Question::new(name);
            question.statement = statement;
            question.feedback = feedback.unwrap_or_default();
            question.answers = answers
                .into_iter()
                .map(|(correct, text)| Answer::new(text, correct, 0.0))
                .collect();
            // At least one correct answer, or the block is invalid
            question.answers[0].correct = true;
            for (tag, value) in tags {
                question.set_meta(tag, value);
            }
            question.regrade();
            question
        })
}

proptest! {
    #[test]
    fn parse_inverts_serialize(original in question()) {
        let parsed = parse_question(&serialize_question(&original)).unwrap();
        prop_assert_eq!(parsed, original);
    }

    #[test]
    fn quiz_round_trip_keeps_order(questions in prop::collection::vec(question(), 1..5)) {
        let quiz = Quiz::new(questions);
        let parsed = parse_quiz(&serialize_quiz(&quiz)).unwrap();
        prop_assert_eq!(parsed, quiz);
    }

    #[test]
    fn grades_follow_correct_count(flags in prop::collection::vec(any::<bool>(), 1..10)) {
        let mut flags = flags;
        flags[0] = true;
        let answers: Vec<(bool, &str)> = flags.iter().map(|c| (*c, "option")).collect();
        let question = parse_question(&question_block("Q", "Pick", &answers)).unwrap();

        let n = flags.iter().filter(|c| **c).count();
        prop_assert_eq!(question.correct_answers_no, n);
        for answer in &question.answers {
            let expected = match (answer.correct, n) {
                (true, _) => 1.0 / n as f64,
                (false, 1) => 0.0,
                (false, _) => -1.0 / n as f64,
            };
            prop_assert_eq!(answer.grade, expected);
        }
    }
}

#[test]
fn multi_value_metadata_survives_round_trip() {
    let mut question = Question::new("Tagged");
    question.statement = "x".to_string();
    question.answers.push(Answer::new("a", true, 1.0));
    question.correct_answers_no = 1;
    question.set_meta("tag", "a");
    question.set_meta("tag", "b");
    question.set_meta("level", "1");

    let parsed = parse_question(&serialize_question(&question)).unwrap();

    assert_eq!(parsed.get_meta("tag").values(), vec!["a", "b"]);
    assert_eq!(parsed.get_meta("level"), MetaValue::Single("1"));
    assert_eq!(parsed.metadata, question.metadata);
}

#[test]
fn json_bodies_with_trailing_newlines_read_back() {
    let source = r#"[{
        "name": "Q",
        "statement": "What?\n",
        "feedback": "Good\n",
        "metadata": { "topic": ["math"] },
        "answers": [{ "statement": "yes", "correct": true }]
    }]"#;

    let md = json_to_markdown(source).expect("Should convert");
    let quiz = parse_quiz(&md).expect("Should read back");

    assert_eq!(quiz.len(), 1);
    let question = &quiz.questions[0];
    assert_eq!(question.statement, "What?");
    assert_eq!(question.feedback, "Good");
    assert_eq!(question.get_meta("topic"), MetaValue::Single("math"));
    assert_eq!(question.answers, vec![Answer::new("yes", true, 1.0)]);
}

#[test]
fn multiline_statement_from_json_reads_back_without_blank_lines() {
    let source = r#"{
        "name": "Q",
        "statement": "Line one\n\n\nLine two\n\n",
        "answers": [{ "statement": "a\nb", "correct": true }]
    }"#;

    let md = json_to_markdown(source).expect("Should convert");
    let question = parse_question(&md).expect("Should read back");

    assert_eq!(question.statement, "Line one\nLine two");
    assert_eq!(question.answers[0].statement, "a b");
}
