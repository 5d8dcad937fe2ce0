//! Error module for Slovnyk.
//!
//! Dictionary outcomes such as "invalid word" or "already exists" are plain
//! return values of the core. The types here cover the surrounding layers:
//! configuration, ingestion and the binary's own I/O.

use once_cell::sync::Lazy;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock};
use thiserror::Error;

pub mod config;
pub mod ingest;

pub use crate::data_structures::DictionaryError;

/// Result type alias used throughout Slovnyk.
pub type SlovnykResult<T> = Result<T, SlovnykError>;

/// Core error enum for Slovnyk.
#[derive(Error, Debug)]
pub enum SlovnykError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Rejected dictionary operations.
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Errors occurring while loading a word source.
    #[error("Ingest error: {0}")]
    Ingest(#[from] ingest::IngestError),

    /// IO errors that may occur during file or console operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors for JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: SlovnykError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: SlovnykError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// Error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Process-wide error reporter slot.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    /// Set the error reporter.
    pub fn set_reporter(&mut self, reporter: Arc<dyn ErrorReporter>) {
        self.reporter = Some(reporter);
    }

    /// Report an error with context.
    pub fn report(&self, context: ErrorContext) {
        if let Some(reporter) = &self.reporter {
            reporter.report(context);
        } else {
            // Fallback to standard error output if no reporter is configured
            eprintln!("{context}");
        }
    }
}

static ERROR_REPORTING: Lazy<RwLock<ErrorReporting>> = Lazy::new(Default::default);

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    ERROR_REPORTING
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .set_reporter(reporter);
}

/// Report an error through the global error reporter.
pub fn report_error(context: ErrorContext) {
    ERROR_REPORTING
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .report(context);
}
