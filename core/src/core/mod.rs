pub mod console;
pub mod display;

pub use console::{Console, FrameIo, PRIMARY_CONTROLLER};
pub use display::{Display, DrawTarget, Rect, Rgba};
