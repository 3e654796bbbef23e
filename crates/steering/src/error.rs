//! Result and Error types for sptools-steering

/// Type alias for `Result<T, steering::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `sptools-steering` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Errors from std::io
    #[error("failed input/output stream")]
    Io(#[from] std::io::Error),

    /// The plotting tool reads a bounded number of ratio entries per plot
    #[error("all {limit} ratio entries are already occupied")]
    TooManyRatios { limit: usize },
}
