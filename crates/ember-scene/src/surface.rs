//! Render surface seam

/// Opaque handle to a drawable image, understood by the host's surface
/// implementation. The scene never inspects pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u64);

/// An axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// A 2D drawing capability the scene does not own.
///
/// The single primitive copies a region of an image into a region of the
/// surface. Windowing backends, textures, and blitting live behind this
/// trait; tests use a recording implementation.
pub trait RenderSurface {
    fn draw_image(&mut self, image: ImageHandle, src: Rect, dst: Rect);
}
