//! Slovnyk Library
//!
//! A case-sensitive word dictionary stored as a prefix tree, with exact
//! lookup, single trailing wildcard search and a collated word listing.
//!
//! # Architecture
//!
//! - [`data_structures`] holds the dictionary core; it performs no I/O
//! - [`ingest`] reads word files into a dictionary
//! - [`shell`] is the interactive command loop and query printer
//! - [`config`] and [`error`] are shared by all of the above

pub mod config;
pub mod data_structures;
pub mod error;
pub mod ingest;
pub mod shell;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Slovnyk.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Routes reported errors through `tracing`.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
