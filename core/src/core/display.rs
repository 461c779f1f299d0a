use crate::video::surface::PixelSurface;

/// 8-bit-per-channel colour with alpha, used for renderer draw calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Pack into ARGB1555. The alpha bit is set for alpha >= 128.
    pub const fn to_argb1555(self) -> u16 {
        let a = if self.a >= 0x80 { 0x8000 } else { 0 };
        a | (((self.r as u16) >> 3) << 10) | (((self.g as u16) >> 3) << 5) | ((self.b as u16) >> 3)
    }
}

/// Destination rectangle in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Anything that can plot single points in the current draw colour.
pub trait DrawTarget {
    type Error: std::fmt::Debug;

    fn set_draw_color(&mut self, color: Rgba);

    /// Plot one point. Fails when the host rejects the point.
    fn draw_point(&mut self, x: i32, y: i32) -> Result<(), Self::Error>;
}

/// Host display: window, renderer and the two streaming textures.
///
/// The compositor drives this once per frame. Implementations own the host
/// resources and release them on drop. Errors are host-level failures and
/// are returned to the frame loop unchanged.
pub trait Display: DrawTarget {
    /// Current window size in pixels.
    fn window_size(&self) -> (u32, u32);

    /// Copy the primary 320x240 surface into the screen texture.
    fn upload_screen(&mut self, surface: &PixelSurface) -> Result<(), Self::Error>;

    /// Stretch the screen texture over the whole window.
    fn draw_screen(&mut self) -> Result<(), Self::Error>;

    /// Copy one 256x128 oscilloscope canvas into the shared scratch texture.
    fn upload_scope(&mut self, surface: &PixelSurface) -> Result<(), Self::Error>;

    /// Copy the scratch texture into `dst`.
    fn draw_scope(&mut self, dst: Rect) -> Result<(), Self::Error>;

    fn present(&mut self);

    fn set_fullscreen(&mut self, enabled: bool) -> Result<(), Self::Error>;

    fn set_vsync(&mut self, enabled: bool) -> Result<(), Self::Error>;
}
