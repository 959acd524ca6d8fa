//! Render Port - off-screen drawing surface for share images
//!
//! A target goes through create -> draw -> rasterize -> destroy. Callers
//! must destroy on every exit path; `destroy` is idempotent.

use mythweaver_domain::export::DrawCommand;

use super::DownloadPayload;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Render surface unavailable: {0}")]
    Unavailable(String),

    #[error("Drawing failed: {0}")]
    Draw(String),

    #[error("Rasterization failed: {0}")]
    Rasterize(String),
}

/// Encoded image produced by a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub mime_type: &'static str,
    /// File extension without the dot
    pub extension: &'static str,
    pub payload: DownloadPayload,
}

pub trait RenderTarget {
    fn create(&mut self, width: u32, height: u32) -> Result<(), RenderError>;

    fn draw(&mut self, command: &DrawCommand) -> Result<(), RenderError>;

    fn rasterize(&mut self) -> Result<RasterImage, RenderError>;

    fn destroy(&mut self);
}
