//! Errors raised while installing the global subscriber.

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for logger operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The level directive could not be parsed by `EnvFilter`
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The directive as given
        filter: String,
        /// Parser message
        reason: String,
    },

    /// An output format name was not recognised
    #[error("unknown log format '{0}', expected pretty, compact or json")]
    Format(String),

    /// Another global subscriber was installed first
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}
