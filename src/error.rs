use std::io;

use thiserror::Error;

pub type SmokeResult<T> = Result<T, SmokeError>;

/// Failures that stop a run before or after the request itself. Request
/// failures are reported, not raised; see [`crate::RestError`].
#[derive(Debug, Error)]
pub enum SmokeError {
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to {action} payload file: {source}")]
    PayloadFile {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report: {0}")]
    Report(#[source] io::Error),
}

impl SmokeError {
    pub(crate) fn payload_file(action: &'static str, source: io::Error) -> Self {
        Self::PayloadFile { action, source }
    }
}
