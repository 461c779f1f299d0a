use super::surface::PixelSurface;

pub const SCREEN_WIDTH: usize = 320;
pub const SCREEN_HEIGHT: usize = 240;

/// The console's primary 320x240 ARGB1555 screen.
///
/// The video producer fills it one scanline at a time; the compositor
/// uploads the whole buffer once per frame. No locking: both happen on the
/// frame thread, in that order.
pub struct FrameBuffer {
    surface: PixelSurface,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            surface: PixelSurface::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        }
    }

    /// Writable 320-pixel row, or `None` for `row >= 240`.
    pub fn scanline_mut(&mut self, row: usize) -> Option<&mut [u16]> {
        self.surface.row_mut(row)
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
