//! Test modules for Slovnyk.
//!
//! Cross-cutting tests live here:
//! - Configuration loading and validation
//! - Error formatting and reporting
//! - Property-based tests of the dictionary laws using proptest
//! - Shared fixtures and strategies


pub use test_utils::{word_strategy, words_strategy, TestFixture};
