use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardWrite {
    pub request_id: u64,
    pub text: Arc<str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCompletion {
    pub request_id: u64,
    pub result: Result<(), ClipboardError>,
}
