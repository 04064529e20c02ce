use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors reported by paragraph navigation.
pub enum NavigateError {
    #[error("paragraph navigation needs stop_at_paragraph_begin or stop_at_paragraph_end")]
    /// Neither stop policy is enabled, so no boundary could ever qualify.
    ///
    /// Warning class: the cursor is left untouched.
    NoStopPolicy,

    #[error("offset {offset} is outside the buffer (size {size})")]
    /// A host-supplied offset lies past the end of the buffer.
    InvalidOffset {
        /// The rejected offset.
        offset: usize,
        /// Buffer size in characters.
        size: usize,
    },

    #[error("invalid navigation arguments: {0}")]
    /// Navigation arguments could not be parsed.
    InvalidArgs(String),
}

impl NavigateError {
    /// Returns `true` for errors that should be surfaced as warnings rather than failures.
    pub fn is_warning(&self) -> bool {
        matches!(self, NavigateError::NoStopPolicy)
    }
}

impl From<serde_json::Error> for NavigateError {
    fn from(err: serde_json::Error) -> Self {
        NavigateError::InvalidArgs(err.to_string())
    }
}
