use derive_more::Display;

/// Why a fetch produced no usable data. None of these are fatal: the caller
/// logs the error and keeps the last known good state.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FetchError {
    /// Request rejected before any response arrived.
    #[display(fmt = "Network failure: {}", _0)]
    NetworkFailure(String),
    /// Response arrived with a non-2xx status.
    #[display(fmt = "HTTP error: {} - {}", code, text)]
    HttpStatus { code: u16, text: String },
    /// Body is not JSON of the expected shape.
    #[display(fmt = "Parse failure: {}", _0)]
    ParseFailure(String),
}

impl std::error::Error for FetchError {}

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display(fmt = "Symbol cannot be empty")]
    EmptySymbol,
}

impl std::error::Error for ValidationError {}

pub type FetchResult<T> = Result<T, FetchError>;
