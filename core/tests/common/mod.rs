#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use vfrown_core::audio::{AudioError, AudioSink};
use vfrown_core::core::{Console, Display, DrawTarget, FrameIo, Rect, Rgba};
use vfrown_core::input::ButtonMask;
use vfrown_core::pacer::Clock;
use vfrown_core::video::{LedMask, PixelSurface};

// =================================================================
// Display
// =================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    UploadScreen,
    DrawScreen,
    /// Lit pixel count of the uploaded canvas.
    UploadScope(usize),
    DrawScope(Rect),
    Present,
    Fullscreen(bool),
    Vsync(bool),
}

#[derive(Debug, PartialEq, Eq)]
pub struct HostError(pub &'static str);

/// Records every renderer call. Points outside `viewport` are rejected.
pub struct RecordingDisplay {
    pub calls: Vec<Call>,
    pub points: Vec<(i32, i32, Rgba)>,
    pub window: (u32, u32),
    pub viewport: Option<(i32, i32)>,
    pub fail_uploads: bool,
    color: Rgba,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            points: Vec::new(),
            window: (640, 480),
            viewport: None,
            fail_uploads: false,
            color: Rgba::new(0, 0, 0, 0),
        }
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    /// Colours used for points within `radius` of `center`.
    pub fn colors_near(&self, center: (i32, i32), radius: i32) -> Vec<Rgba> {
        let mut colors: Vec<Rgba> = Vec::new();
        for &(x, y, c) in &self.points {
            let near = (x - center.0).abs() <= radius && (y - center.1).abs() <= radius;
            if near && !colors.contains(&c) {
                colors.push(c);
            }
        }
        colors
    }
}

impl DrawTarget for RecordingDisplay {
    type Error = HostError;

    fn set_draw_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn draw_point(&mut self, x: i32, y: i32) -> Result<(), HostError> {
        if let Some((w, h)) = self.viewport
            && (x < 0 || y < 0 || x >= w || y >= h)
        {
            return Err(HostError("point outside viewport"));
        }
        self.points.push((x, y, self.color));
        Ok(())
    }
}

impl Display for RecordingDisplay {
    fn window_size(&self) -> (u32, u32) {
        self.window
    }

    fn upload_screen(&mut self, _surface: &PixelSurface) -> Result<(), HostError> {
        if self.fail_uploads {
            return Err(HostError("texture lost"));
        }
        self.calls.push(Call::UploadScreen);
        Ok(())
    }

    fn draw_screen(&mut self) -> Result<(), HostError> {
        self.calls.push(Call::DrawScreen);
        Ok(())
    }

    fn upload_scope(&mut self, surface: &PixelSurface) -> Result<(), HostError> {
        if self.fail_uploads {
            return Err(HostError("texture lost"));
        }
        let lit = surface.pixels().iter().filter(|&&p| p != 0).count();
        self.calls.push(Call::UploadScope(lit));
        Ok(())
    }

    fn draw_scope(&mut self, dst: Rect) -> Result<(), HostError> {
        self.calls.push(Call::DrawScope(dst));
        Ok(())
    }

    fn present(&mut self) {
        self.calls.push(Call::Present);
    }

    fn set_fullscreen(&mut self, enabled: bool) -> Result<(), HostError> {
        self.calls.push(Call::Fullscreen(enabled));
        Ok(())
    }

    fn set_vsync(&mut self, enabled: bool) -> Result<(), HostError> {
        self.calls.push(Call::Vsync(enabled));
        Ok(())
    }
}

// =================================================================
// Console
// =================================================================

type FrameScript = Box<dyn FnMut(&mut FrameIo<'_>)>;

/// Console that records what the backend asked of it.
#[derive(Default)]
pub struct RecordingConsole {
    pub updates: Vec<(u8, ButtonMask)>,
    pub actions: Vec<String>,
    pub leds: LedMask,
    pub frames: u32,
    pub script: Option<FrameScript>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(script: impl FnMut(&mut FrameIo<'_>) + 'static) -> Self {
        Self {
            script: Some(Box::new(script)),
            ..Self::default()
        }
    }
}

impl Console for RecordingConsole {
    fn run_frame(&mut self, io: &mut FrameIo<'_>) {
        self.frames += 1;
        if let Some(script) = self.script.as_mut() {
            script(io);
        }
    }

    fn update_buttons(&mut self, controller: u8, buttons: ButtonMask) {
        self.updates.push((controller, buttons));
    }

    fn led_state(&self) -> LedMask {
        self.leds
    }

    fn toggle_layer(&mut self, layer: u8) {
        self.actions.push(format!("layer{layer}"));
    }

    fn toggle_pause(&mut self) {
        self.actions.push("pause".into());
    }

    fn step(&mut self) {
        self.actions.push("step".into());
    }

    fn toggle_sprite_outlines(&mut self) {
        self.actions.push("sprite_outlines".into());
    }

    fn toggle_flip_visual(&mut self) {
        self.actions.push("flip_visual".into());
    }

    fn reset(&mut self) {
        self.actions.push("reset".into());
    }
}

// =================================================================
// Clock and audio
// =================================================================

/// Manually advanced clock. Sleeping advances it by the slept amount.
pub struct FakeClock {
    base: Instant,
    pub offset: Duration,
    pub sleeps: Vec<Duration>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Duration::ZERO,
            sleeps: Vec::new(),
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.offset += by;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.base + self.offset
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        self.offset += duration;
    }
}

/// Collects queued frames into a shared vector.
pub struct CollectingSink {
    pub frames: Rc<RefCell<Vec<[i16; 2]>>>,
}

impl CollectingSink {
    pub fn new() -> (Self, Rc<RefCell<Vec<[i16; 2]>>>) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                frames: Rc::clone(&frames),
            },
            frames,
        )
    }
}

impl AudioSink for CollectingSink {
    fn queue(&mut self, frame: [i16; 2]) -> Result<(), AudioError> {
        self.frames.borrow_mut().push(frame);
        Ok(())
    }
}
