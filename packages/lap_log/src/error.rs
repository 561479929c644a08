use thiserror::Error;

/// Errors that can occur when highlighting or measuring console output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller named a style that is not part of the recognized style table.
    ///
    /// This is a caller bug and is reported immediately instead of being ignored.
    #[error("unknown style name '{name}'")]
    UnknownStyle {
        /// The name exactly as the caller provided it.
        name: String,
    },

    /// A platform probe (free memory, terminal size) could not provide a reading.
    #[error("{resource} is unavailable: {reason}")]
    ResourceUnavailable {
        /// Which resource the probe was trying to read.
        resource: &'static str,

        /// A human-readable description of the problem.
        reason: String,
    },
}

/// A specialized `Result` type for `lap_log` operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
