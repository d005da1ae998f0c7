use thiserror::Error;

/// Errors from constructors that parse caller input.
///
/// The conversions themselves never fail; they degrade and report through a
/// [`DiagnosticSink`](crate::diagnostics::DiagnosticSink) instead.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Invalid URI: {0}")]
    InvalidUri(#[from] url::ParseError),

    #[error("Invalid date-time: {0}")]
    InvalidDateTime(String),

    #[error(transparent)]
    Core(#[from] calconv_core::error::CoreError),
}

pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
