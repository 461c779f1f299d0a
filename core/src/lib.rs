pub mod audio;
pub mod compositor;
pub mod core;
pub mod input;
pub mod pacer;
pub mod video;

pub mod prelude {
    pub use crate::audio::{AudioBridge, AudioError, AudioSink, NullSink};
    pub use crate::compositor::Compositor;
    pub use crate::core::{Console, Display, DrawTarget, FrameIo, Rect, Rgba};
    pub use crate::input::{Binding, Button, ButtonMask, HostEvent, Hotkey, InputTracker, KeyMap};
    pub use crate::pacer::{Clock, FramePacer, SystemClock};
    pub use crate::video::{FrameBuffer, LedMask, OscilloscopeBank, PixelSurface, ViewMode};
}
