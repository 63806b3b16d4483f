//! Error types for the preview pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while turning a selected file into a preview.
///
/// Variants carry rendered messages rather than source errors so results
/// can travel inside `Clone` application messages.
#[derive(Debug, Clone, Error)]
pub enum PreviewError {
    /// The selected file could not be read from disk.
    #[error("could not read `{}`: {}", path.display(), message)]
    Read { path: PathBuf, message: String },

    /// A data URI payload failed to decode back into bytes.
    #[error("malformed data URI payload: {0}")]
    Payload(String),
}

/// Type alias for Results in the preview pipeline.
pub type Result<T> = std::result::Result<T, PreviewError>;
