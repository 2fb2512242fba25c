//! Recording render surface

use ember_scene::{ImageHandle, Rect, RenderSurface};

/// One recorded draw primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub image: ImageHandle,
    pub src: Rect,
    pub dst: Rect,
}

/// A render surface that records draw calls instead of blitting pixels.
/// Stands in for a real canvas in the headless player and in tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    frame_count: u64,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the call log for a new frame
    pub fn begin_frame(&mut self) {
        self.calls.clear();
        self.frame_count += 1;
    }

    /// Draw calls recorded since `begin_frame`, in paint order
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_image(&mut self, image: ImageHandle, src: Rect, dst: Rect) {
        self.calls.push(DrawCall { image, src, dst });
    }
}
