//! Shared helpers for integration tests.

use std::path::PathBuf;

/// Read a file from tests/fixtures.
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// Build a markdown question block from a title and `(correct, text)` answers.
pub fn question_block(title: &str, statement: &str, answers: &[(bool, &str)]) -> String {
    let mut block = format!("# {title}\n\n## Question Text\n\n{statement}\n\n## Question Answers\n\n");
    for (correct, text) in answers {
        let marker = if *correct { '+' } else { '-' };
        block.push_str(&format!("{marker} {text}\n"));
    }
    block
}
