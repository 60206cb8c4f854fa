//! Format implementations
//!
//! This module contains all format implementations that convert between
//! [`Quiz`](crate::ir::Quiz) and text representations.

pub mod json;
pub mod markdown;

pub use json::{JsonFormat, JsonOptions};
pub use markdown::MarkdownFormat;
