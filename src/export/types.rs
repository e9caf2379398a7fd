//! Data types for scene export.

use crate::draw::SurfaceError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting the scene.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to render export surface: {0}")]
    Render(#[from] SurfaceError),

    #[error("Failed to save export: {0}")]
    Save(#[from] std::io::Error),
}

/// Receives encoded export images (the external save mechanism).
pub trait ExportSink {
    /// Stores `png`, returning the path it was written to if the sink writes files.
    fn save(&mut self, png: &[u8]) -> Result<Option<PathBuf>, ExportError>;
}
