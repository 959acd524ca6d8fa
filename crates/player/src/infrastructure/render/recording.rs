//! Recording render target for tests

use std::sync::{Arc, Mutex};

use mythweaver_domain::export::DrawCommand;

use crate::ports::outbound::{DownloadPayload, RasterImage, RenderError, RenderTarget};

#[derive(Debug, Default, Clone)]
pub struct Recording {
    pub size: Option<(u32, u32)>,
    pub commands: Vec<DrawCommand>,
    pub destroyed: usize,
}

/// Records every call; cloned handles observe the same recording
#[derive(Debug, Default, Clone)]
pub struct RecordingTarget {
    log: Arc<Mutex<Recording>>,
    fail_rasterize: bool,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_rasterize() -> Self {
        Self {
            fail_rasterize: true,
            ..Self::default()
        }
    }

    pub fn recording(&self) -> Recording {
        self.log.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl RenderTarget for RecordingTarget {
    fn create(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        let mut log = self
            .log
            .lock()
            .map_err(|e| RenderError::Unavailable(e.to_string()))?;
        log.size = Some((width, height));
        Ok(())
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<(), RenderError> {
        let mut log = self
            .log
            .lock()
            .map_err(|e| RenderError::Draw(e.to_string()))?;
        log.commands.push(command.clone());
        Ok(())
    }

    fn rasterize(&mut self) -> Result<RasterImage, RenderError> {
        if self.fail_rasterize {
            return Err(RenderError::Rasterize("recording target told to fail".into()));
        }
        Ok(RasterImage {
            mime_type: "image/png",
            extension: "png",
            payload: DownloadPayload::DataUrl("data:image/png;base64,AAAA".into()),
        })
    }

    fn destroy(&mut self) {
        if let Ok(mut log) = self.log.lock() {
            log.destroyed += 1;
        }
    }
}
