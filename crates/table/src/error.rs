//! Result and Error types for sptools-table

/// Type alias for `Result<T, table::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `sptools-table` crate
///
/// Every variant is fatal for the conversion. Downstream bin counts must stay
/// consistent across all four output files, so a malformed row aborts the run
/// rather than being skipped past.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Errors from std::io
    #[error("failed input/output stream")]
    Io(#[from] std::io::Error),

    /// A field expected to be numeric failed to parse
    #[error("malformed numeric field {token:?} on line {line}")]
    MalformedNumber { token: String, line: usize },

    /// Data rows were found but no `xlow` header row supplied source names
    #[error("no 'xlow' header row found before end of input")]
    MissingHeader,

    /// The header row supplied the wrong number of systematic source names
    #[error("expected {expected} systematic source names, found {found}")]
    UnexpectedNameCount { expected: usize, found: usize },
}
