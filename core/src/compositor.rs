//! Per-frame composition: input, console frame, upload, overlay, present, pace.
//!
//! [`Compositor`] owns every piece of backend state. Host resources stay
//! behind the [`Display`] and [`AudioSink`] seams, so the whole frame cycle
//! runs in tests without a window.

use std::hash::Hash;

use crate::audio::{AudioBridge, AudioError, AudioSink};
use crate::core::console::{Console, FrameIo, PRIMARY_CONTROLLER};
use crate::core::display::Display;
use crate::input::{Binding, HostEvent, Hotkey, InputTracker, KeyMap};
use crate::pacer::{Clock, FramePacer, SystemClock};
use crate::video::oscilloscope::grid_cell;
use crate::video::{FrameBuffer, LedMask, OscilloscopeBank, ViewMode, render_indicators};

pub struct Compositor<C: Clock = SystemClock> {
    frame: FrameBuffer,
    scope: OscilloscopeBank,
    audio: AudioBridge,
    input: InputTracker,
    pacer: FramePacer<C>,
    leds: LedMask,
    view: ViewMode,
    show_leds: bool,
    vsync: bool,
    fullscreen: bool,
    screenshot_requested: bool,
}

impl Compositor<SystemClock> {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self::with_clock(sink, SystemClock)
    }
}

impl<C: Clock> Compositor<C> {
    pub fn with_clock(sink: Box<dyn AudioSink>, clock: C) -> Self {
        Self {
            frame: FrameBuffer::new(),
            scope: OscilloscopeBank::new(),
            audio: AudioBridge::new(sink),
            input: InputTracker::new(),
            pacer: FramePacer::with_clock(clock),
            leds: LedMask::empty(),
            view: ViewMode::Normal,
            show_leds: false,
            vsync: false,
            fullscreen: false,
            screenshot_requested: false,
        }
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn oscilloscope(&self) -> &OscilloscopeBank {
        &self.scope
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn pacer(&self) -> &FramePacer<C> {
        &self.pacer
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        if self.view != view {
            log::info!("View: {view:?}");
        }
        self.view = view;
    }

    pub fn toggle_view(&mut self) {
        self.set_view(self.view.toggled());
    }

    pub fn show_leds(&self) -> bool {
        self.show_leds
    }

    pub fn set_show_leds(&mut self, show: bool) {
        self.show_leds = show;
    }

    pub fn vsync_enabled(&self) -> bool {
        self.vsync
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn led_states(&self) -> LedMask {
        self.leds
    }

    /// Store the LED state for the next overlay. Returns the stored value.
    pub fn set_led_states(&mut self, leds: LedMask) -> LedMask {
        self.leds = leds;
        self.leds
    }

    /// Switch host vsync. With vsync on, the frame pacer stands down.
    pub fn set_vsync<D: Display>(&mut self, display: &mut D, enabled: bool) -> Result<(), D::Error> {
        display.set_vsync(enabled)?;
        self.vsync = enabled;
        log::info!("VSync is {}abled", if enabled { "en" } else { "dis" });
        Ok(())
    }

    pub fn toggle_fullscreen<D: Display>(&mut self, display: &mut D) -> Result<(), D::Error> {
        display.set_fullscreen(!self.fullscreen)?;
        self.fullscreen = !self.fullscreen;
        Ok(())
    }

    /// True once per screenshot hotkey press. The frontend owns the file.
    pub fn take_screenshot_request(&mut self) -> bool {
        std::mem::take(&mut self.screenshot_requested)
    }

    /// Let the console produce one frame of scanlines and samples, then
    /// latch its LED state.
    pub fn run_console_frame(&mut self, console: &mut dyn Console) -> Result<(), AudioError> {
        let mut io = FrameIo::new(&mut self.frame, &mut self.scope, &mut self.audio, self.view);
        console.run_frame(&mut io);
        self.set_led_states(console.led_state());
        match self.audio.take_fault() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Drain host events. Returns false once a quit event was seen.
    ///
    /// Button keys edit the current mask; hotkeys act immediately on
    /// key-down. After the drain the console receives the new mask, once,
    /// if any button changed since the previous poll.
    pub fn poll_events<K, D>(
        &mut self,
        events: impl IntoIterator<Item = HostEvent<K>>,
        keys: &KeyMap<K>,
        console: &mut dyn Console,
        display: &mut D,
    ) -> Result<bool, D::Error>
    where
        K: Eq + Hash,
        D: Display,
    {
        let mut running = true;
        for event in events {
            match event {
                HostEvent::Quit => running = false,
                HostEvent::KeyDown(key) => match keys.get(&key) {
                    Some(Binding::Button(button)) => self.input.press(button),
                    Some(Binding::Hotkey(hotkey)) => self.apply_hotkey(hotkey, console, display)?,
                    None => {}
                },
                HostEvent::KeyUp(key) => {
                    if let Some(Binding::Button(button)) = keys.get(&key) {
                        self.input.release(button);
                    }
                }
            }
        }

        if let Some(buttons) = self.input.latch() {
            console.update_buttons(PRIMARY_CONTROLLER, buttons);
        }
        Ok(running)
    }

    fn apply_hotkey<D: Display>(
        &mut self,
        hotkey: Hotkey,
        console: &mut dyn Console,
        display: &mut D,
    ) -> Result<(), D::Error> {
        log::debug!("Hotkey: {}", hotkey.name());
        match hotkey {
            Hotkey::Fullscreen => self.toggle_fullscreen(display)?,
            Hotkey::Layer(layer) => console.toggle_layer(layer),
            Hotkey::Pause => console.toggle_pause(),
            Hotkey::Step => console.step(),
            Hotkey::SpriteOutlines => console.toggle_sprite_outlines(),
            Hotkey::FlipVisual => console.toggle_flip_visual(),
            Hotkey::Oscilloscope => self.toggle_view(),
            Hotkey::Reset => console.reset(),
            Hotkey::Leds => self.show_leds = !self.show_leds,
            Hotkey::Vsync => self.set_vsync(display, !self.vsync)?,
            Hotkey::Screenshot => self.screenshot_requested = true,
        }
        Ok(())
    }

    /// Upload the visible buffers, overlay the LEDs, present, start the
    /// next oscilloscope frame and wait out the frame interval.
    pub fn update_window<D: Display>(&mut self, display: &mut D) -> Result<(), D::Error> {
        match self.view {
            ViewMode::Oscilloscope => {
                let window = display.window_size();
                for (i, canvas) in self.scope.canvases().enumerate() {
                    display.upload_scope(canvas)?;
                    display.draw_scope(grid_cell(i, window))?;
                }
            }
            ViewMode::Normal => {
                display.upload_screen(self.frame.surface())?;
                display.draw_screen()?;
                if self.show_leds
                    && let Err(e) = render_indicators(display, self.leds)
                {
                    log::trace!("LED overlay incomplete: {e:?}");
                }
            }
        }
        display.present();
        self.scope.end_frame();
        self.pacer.pace_frame(self.vsync);
        Ok(())
    }
}
