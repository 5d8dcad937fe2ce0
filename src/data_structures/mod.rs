//! Data structures for Slovnyk.
//!
//! The dictionary core lives here. It performs no I/O and never prints;
//! ingestion and the interactive shell sit on top of it.

pub mod prefix_dictionary;

// Re-export common data structures
pub use prefix_dictionary::{
    Collation, DictionaryError, DictionaryResult, PrefixDictionary, WILDCARD,
};
