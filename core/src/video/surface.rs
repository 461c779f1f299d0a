//! Fixed-size 16-bit pixel surfaces.
//!
//! Pixels are ARGB1555: bit 15 is the alpha (unused) bit, then 5 bits each
//! of red, green and blue. Storage is row-major and never resized.

use thiserror::Error;

use crate::core::display::{DrawTarget, Rgba};

pub struct PixelSurface {
    width: usize,
    height: usize,
    pixels: Box<[u16]>,
}

impl PixelSurface {
    /// Allocate a zero-filled surface.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u16> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, pixel: u16) -> bool {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = pixel;
            true
        } else {
            false
        }
    }

    pub fn row_mut(&mut self, y: usize) -> Option<&mut [u16]> {
        if y < self.height {
            Some(&mut self.pixels[y * self.width..(y + 1) * self.width])
        } else {
            None
        }
    }

    /// Copy into a locked texture: native-endian u16 rows, `pitch` bytes apart.
    ///
    /// Rows that do not fit in `dst` are dropped.
    pub fn write_texture_rows(&self, dst: &mut [u8], pitch: usize) {
        let row_bytes = self.width * 2;
        for (y, row) in self.pixels.chunks_exact(self.width).enumerate() {
            let start = y * pitch;
            let Some(out) = dst.get_mut(start..start + row_bytes) else {
                break;
            };
            for (bytes, &px) in out.chunks_exact_mut(2).zip(row) {
                bytes.copy_from_slice(&px.to_ne_bytes());
            }
        }
    }

    /// Expand to packed RGB24, 3 bytes per pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for &px in self.pixels.iter() {
            out.extend_from_slice(&argb1555_to_rgb8(px));
        }
        out
    }

    /// Pen that plots into this surface in a fixed colour.
    pub fn pen(&mut self) -> SurfacePen<'_> {
        SurfacePen {
            surface: self,
            color: 0,
        }
    }
}

/// Widen 5-bit channels to 8 bits by replicating the top bits.
pub const fn argb1555_to_rgb8(px: u16) -> [u8; 3] {
    let r = ((px >> 10) & 0x1F) as u8;
    let g = ((px >> 5) & 0x1F) as u8;
    let b = (px & 0x1F) as u8;
    [(r << 3) | (r >> 2), (g << 3) | (g >> 2), (b << 3) | (b >> 2)]
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("point ({x}, {y}) is outside the surface")]
    OutOfBounds { x: i32, y: i32 },
}

/// [`DrawTarget`] over a [`PixelSurface`]. Colours are written as-is
/// (no blending); the alpha bit follows [`Rgba::to_argb1555`].
pub struct SurfacePen<'a> {
    surface: &'a mut PixelSurface,
    color: u16,
}

impl DrawTarget for SurfacePen<'_> {
    type Error = DrawError;

    fn set_draw_color(&mut self, color: Rgba) {
        self.color = color.to_argb1555();
    }

    fn draw_point(&mut self, x: i32, y: i32) -> Result<(), DrawError> {
        let placed = x >= 0 && y >= 0 && self.surface.set(x as usize, y as usize, self.color);
        if placed {
            Ok(())
        } else {
            Err(DrawError::OutOfBounds { x, y })
        }
    }
}
