//! Error types for the Neon-Suture storefront core

use thiserror::Error;

/// Main error type for storefront core operations
///
/// Every variant is a configuration error: a malformed breakpoint table,
/// scroll offset or catalog payload. Runtime data-quality problems such as
/// an unparseable price never surface here.
#[derive(Error, Debug)]
pub enum SutureError {
    /// A transform was built without any breakpoints
    #[error("Transform needs at least one breakpoint")]
    EmptyBreakpoints,

    /// Breakpoint and output tables have different lengths
    #[error("Breakpoint count {inputs} does not match output count {outputs}")]
    LengthMismatch { inputs: usize, outputs: usize },

    /// Breakpoints must be non-decreasing
    #[error("Breakpoint {index} ({next}) is smaller than the one before it ({previous})")]
    NonMonotonicBreakpoints {
        index: usize,
        previous: f64,
        next: f64,
    },

    /// Breakpoint is NaN or infinite
    #[error("Breakpoint {index} is not a finite number")]
    NonFiniteBreakpoint { index: usize },

    /// Two style values cannot be interpolated into each other
    #[error("Cannot interpolate between '{from}' and '{to}'")]
    IncompatibleValues { from: String, to: String },

    /// A style value string could not be parsed
    #[error("Invalid style value: {0}")]
    InvalidStyleValue(String),

    /// A scroll offset edge pair could not be parsed
    #[error("Invalid scroll offset: {0}")]
    InvalidOffset(String),

    /// Two records in one catalog collection share an id
    #[error("Duplicate id '{id}' in {collection}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    /// Two archive items share a short code
    #[error("Duplicate archive code: {0}")]
    DuplicateCode(String),

    /// Catalog JSON could not be decoded
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using SutureError
pub type SutureResult<T> = Result<T, SutureError>;
