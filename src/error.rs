use thiserror::Error;

/// Failures of the terminal shell around the lessons.
///
/// The lessons themselves cannot fail; everything here comes from the
/// terminal, the config file or JSON encoding.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no configuration directory available on this system")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, Error>;
