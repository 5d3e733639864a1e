use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The archive-extraction backend reported itself unusable. Raised
    /// before any side effect occurs.
    #[error("The zip extraction backend is not available. Please install it and try again.")]
    CapabilityMissing,

    #[error("Failed to initialize the HTTP client. Original error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Failed to fetch '{url}'. Original error: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to extract archive '{archive}'. Original error: {source}")]
    ExtractFailed {
        archive: String,
        #[source]
        source: zip::result::ZipError,
    },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
