//! Core data structures shared by every format.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Metadata tags in first-encounter order, each with its accumulated values.
pub type Metadata = IndexMap<String, Vec<String>>;

/// A quiz document: questions in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Quiz { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl From<Vec<Question>> for Quiz {
    fn from(questions: Vec<Question>) -> Self {
        Quiz::new(questions)
    }
}

impl<'a> IntoIterator for &'a Quiz {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single quiz question.
///
/// Field order matches the structured output: `name`, `statement`,
/// `feedback`, `metadata`, `answers`, `correct_answers_no`. Every field is
/// always written; on input `feedback` may be absent or `null` and
/// `metadata` may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub name: String,
    #[serde(default)]
    pub statement: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub feedback: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub correct_answers_no: usize,
}

impl Question {
    /// Create an empty question with the given title.
    pub fn new(name: impl Into<String>) -> Self {
        Question {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Recompute `correct_answers_no` and every answer's grade from the
    /// `correct` flags.
    pub fn regrade(&mut self) {
        self.correct_answers_no = self.answers.iter().filter(|a| a.correct).count();
        for answer in &mut self.answers {
            answer.grade = grade_for(answer.correct, self.correct_answers_no);
        }
    }
}

/// One answer option of a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub statement: String,
    pub correct: bool,
    #[serde(default)]
    pub grade: f64,
}

impl Answer {
    pub fn new(statement: impl Into<String>, correct: bool, grade: f64) -> Self {
        Answer {
            statement: statement.into(),
            correct,
            grade,
        }
    }
}

/// Score contribution of an answer in a question with `correct_answers_no`
/// correct answers.
///
/// Correct answers share a total of 1. Wrong picks cost the same share when
/// there are several correct answers, and nothing when there is only one.
/// A question without correct answers grades everything 0.
pub fn grade_for(correct: bool, correct_answers_no: usize) -> f64 {
    if correct_answers_no == 0 {
        return 0.0;
    }
    let share = 1.0 / correct_answers_no as f64;
    match (correct, correct_answers_no) {
        (true, _) => share,
        (false, 1) => 0.0,
        (false, _) => -share,
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
