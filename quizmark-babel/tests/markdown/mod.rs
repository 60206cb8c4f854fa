//! Quiz markdown format tests
//!
//! Tests for markdown ↔ Quiz conversion.

mod export;
mod roundtrip;
