//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Single key resolution tests
//! - Shortcut parsing tests
//! - Vocabulary / classification tests

#[cfg(test)]
mod types_tests;
