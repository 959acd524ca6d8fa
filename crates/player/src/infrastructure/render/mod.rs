//! Share-image render targets

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(not(target_arch = "wasm32"))]
mod svg;

#[cfg(any(test, feature = "testing"))]
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasTarget;
#[cfg(not(target_arch = "wasm32"))]
pub use svg::SvgTarget;

#[cfg(any(test, feature = "testing"))]
pub use recording::RecordingTarget;
