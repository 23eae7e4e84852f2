//! Error taxonomy for the background and its page helpers

use thiserror::Error;

/// Errors produced while building or driving the background
#[derive(Debug, Error)]
pub enum BackdropError {
    /// No graphics context could be created for the drawing surface
    #[error("graphics context unavailable: {0}")]
    ContextUnavailable(String),

    /// The shader module failed validation
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),

    /// The render pipeline could not be linked from the compiled shader
    #[error("shader program link failed: {0}")]
    ProgramLink(String),

    /// A single frame was dropped; the loop keeps running
    #[error("frame skipped: {0}")]
    FrameSkipped(String),

    /// Configuration JSON could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The preference store rejected a write
    #[error("preference storage failed: {0}")]
    Storage(String),
}

impl BackdropError {
    /// Whether this error leaves the background permanently inert.
    ///
    /// The graphics capability is not expected to appear mid-session, so
    /// context and shader failures are never retried.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            BackdropError::ContextUnavailable(_)
                | BackdropError::ShaderCompile(_)
                | BackdropError::ProgramLink(_)
        )
    }
}
