use thiserror::Error;

/// Error taxonomy for scheme registration and map compilation.
///
/// `UnrecognizedToken` is deliberately absent: an input token the compiled
/// map doesn't recognize is emitted verbatim by the engines, never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LipiError {
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),

    #[error("malformed scheme {scheme}: {reason}")]
    MalformedScheme { scheme: String, reason: String },
}
