//! Format-agnostic representation of a quiz.
//!
//! Every format parses into and serializes from these records, so the
//! question model, its grading rule and its metadata accessor live here
//! rather than in any one format.

pub mod metadata;
pub mod nodes;

pub use metadata::MetaValue;
pub use nodes::{grade_for, Answer, Metadata, Question, Quiz};
