//! Error types for plot rendering.

use thiserror::Error;

/// Rendering error.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Output directory could not be created.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The plotting backend failed while drawing or writing the image.
    #[error("Drawing error: {0}")]
    Draw(String),

    /// Output format name not recognised.
    #[error("Unknown output format '{0}': expected png or svg")]
    UnknownFormat(String),
}

impl RenderError {
    /// Wraps any backend error as [`RenderError::Draw`].
    pub(crate) fn draw(err: impl std::fmt::Display) -> Self {
        Self::Draw(err.to_string())
    }
}
