use thiserror::Error;

/// Errors raised by the screening engine itself.
///
/// Lookup failures (a resume or job that does not exist) never originate here;
/// the caller resolves records before invoking the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScreeningError {
    /// A field has the wrong shape, e.g. negative experience years or an
    /// education level outside the known scale.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The scoring configuration failed validation. Fatal at startup.
    #[error("Invalid scoring configuration: {0}")]
    InvalidConfig(String),
}
