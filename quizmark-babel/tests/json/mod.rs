//! JSON format tests

mod export;
mod import;
