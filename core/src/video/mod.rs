pub mod circle;
pub mod framebuffer;
pub mod indicator;
pub mod oscilloscope;
pub mod surface;

pub use circle::{CircleOutline, draw_circle};
pub use framebuffer::{FrameBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use indicator::{LedMask, render_indicators};
pub use oscilloscope::OscilloscopeBank;
pub use surface::PixelSurface;

/// What the window currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// The console's 320x240 screen.
    #[default]
    Normal,
    /// 4x4 grid of per-channel waveforms.
    Oscilloscope,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Oscilloscope,
            Self::Oscilloscope => Self::Normal,
        }
    }
}
