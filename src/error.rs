use thiserror::Error;

#[derive(Error, Debug)]
pub enum FigError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    /// Only produced by the strict scoring paths.
    #[error("Malformed Symbol '{symbol}': {reason}")]
    MalformedSymbol { symbol: String, reason: String },
}

pub type FigResult<T> = Result<T, FigError>;
