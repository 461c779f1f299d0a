use crate::audio::AudioBridge;
use crate::input::ButtonMask;
use crate::video::{FrameBuffer, LedMask, OscilloscopeBank, ViewMode};

/// Controller port the keyboard drives.
pub const PRIMARY_CONTROLLER: u8 = 0;

/// Interface to the emulated console.
///
/// The backend is a pure presentation layer: it does not know how the
/// console generates pixels or sound. Once per frame it hands the console a
/// [`FrameIo`] to write scanlines and push samples into, and forwards input
/// and debug toggles as they arrive.
pub trait Console {
    /// Run one video frame. All 240 scanlines must be written through
    /// `io` before this returns, unless `io.renders_scanlines()` is false.
    fn run_frame(&mut self, io: &mut FrameIo<'_>);

    /// Latch a new button state for a controller.
    ///
    /// Called at most once per input poll, and only when some button
    /// changed since the previous poll.
    fn update_buttons(&mut self, controller: u8, buttons: ButtonMask);

    /// Current state of the four console LEDs.
    fn led_state(&self) -> LedMask;

    /// Toggle one of the three video layers (0, 1, or 2 for sprites).
    fn toggle_layer(&mut self, layer: u8);

    fn toggle_pause(&mut self);

    /// Advance a single frame while paused.
    fn step(&mut self);

    fn toggle_sprite_outlines(&mut self);

    fn toggle_flip_visual(&mut self);

    /// Reset to the power-on state.
    fn reset(&mut self);
}

/// Per-frame window into the backend's buffers, handed to [`Console::run_frame`].
pub struct FrameIo<'a> {
    frame: &'a mut FrameBuffer,
    scope: &'a mut OscilloscopeBank,
    audio: &'a mut AudioBridge,
    view: ViewMode,
}

impl<'a> FrameIo<'a> {
    pub fn new(
        frame: &'a mut FrameBuffer,
        scope: &'a mut OscilloscopeBank,
        audio: &'a mut AudioBridge,
        view: ViewMode,
    ) -> Self {
        Self {
            frame,
            scope,
            audio,
            view,
        }
    }

    /// Writable scanline `row`, or `None` past the bottom of the screen.
    pub fn scanline_mut(&mut self, row: usize) -> Option<&mut [u16]> {
        self.frame.scanline_mut(row)
    }

    /// False while the oscilloscope grid replaces the screen; the console
    /// may skip pixel generation.
    pub fn renders_scanlines(&self) -> bool {
        self.view == ViewMode::Normal
    }

    /// Queue one mono output sample and advance the oscilloscope clock.
    pub fn push_sample(&mut self, sample: i16) {
        self.audio.push_sample(sample);
        self.scope.advance_sample_index();
    }

    /// Feed one channel's pre-mix sample to the oscilloscope.
    ///
    /// Call this for every active channel before the matching
    /// [`push_sample`](Self::push_sample).
    pub fn push_channel_sample(&mut self, channel: u8, sample: i16) {
        self.scope.ingest_sample(self.view, channel, sample);
    }
}
