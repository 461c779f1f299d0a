//! Built-in test console: colour bars, a movable sprite, and 16 tone
//! channels. Stands in for the emulated machine so every backend path runs.

use vfrown_core::core::{Console, FrameIo, PRIMARY_CONTROLLER};
use vfrown_core::input::ButtonMask;
use vfrown_core::video::oscilloscope::SCOPE_CHANNELS;
use vfrown_core::video::{LedMask, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Output samples per 60 Hz frame at 44.1 kHz.
const SAMPLES_PER_FRAME: usize = 735;
const SAMPLE_RATE: u32 = 44_100;

const SPRITE_SIZE: i32 = 24;
const SPRITE_SPEED: i32 = 2;
const TONE_AMPLITUDE: i32 = 6000;

/// Layer 0 colour bars (ARGB1555): white, yellow, cyan, green, magenta,
/// red, blue, black.
const BARS: [u16; 8] = [0x7FFF, 0x7FE0, 0x03FF, 0x03E0, 0x7C1F, 0x7C00, 0x001F, 0x0000];

const SPRITE_COLOR: u16 = 0x7FFF;
const FLIPPED_COLOR: u16 = 0x7E10;
const OUTLINE_COLOR: u16 = 0x03E0;
const STRIPE_COLOR: u16 = 0x2529;

pub struct DemoConsole {
    frame: u32,
    layers: [bool; 3],
    paused: bool,
    step_pending: bool,
    sprite_outlines: bool,
    flip_visual: bool,
    buttons: ButtonMask,
    sprite: (i32, i32),
    facing_left: bool,
    /// 16.16 fixed-point oscillator phases.
    phases: [u32; SCOPE_CHANNELS],
}

impl DemoConsole {
    pub fn new() -> Self {
        Self {
            frame: 0,
            layers: [true; 3],
            paused: false,
            step_pending: false,
            sprite_outlines: false,
            flip_visual: false,
            buttons: ButtonMask::empty(),
            sprite: (
                (SCREEN_WIDTH as i32 - SPRITE_SIZE) / 2,
                (SCREEN_HEIGHT as i32 - SPRITE_SIZE) / 2,
            ),
            facing_left: false,
            phases: [0; SCOPE_CHANNELS],
        }
    }

    fn move_sprite(&mut self) {
        let (mut x, mut y) = self.sprite;
        if self.buttons.contains(ButtonMask::LEFT) {
            x -= SPRITE_SPEED;
            self.facing_left = true;
        }
        if self.buttons.contains(ButtonMask::RIGHT) {
            x += SPRITE_SPEED;
            self.facing_left = false;
        }
        if self.buttons.contains(ButtonMask::UP) {
            y -= SPRITE_SPEED;
        }
        if self.buttons.contains(ButtonMask::DOWN) {
            y += SPRITE_SPEED;
        }
        self.sprite = (
            x.clamp(0, SCREEN_WIDTH as i32 - SPRITE_SIZE),
            y.clamp(0, SCREEN_HEIGHT as i32 - SPRITE_SIZE),
        );
    }

    fn render_scanline(&self, row: usize, line: &mut [u16]) {
        line.fill(0);
        let y = row as i32;

        if self.layers[0] {
            let bar_width = SCREEN_WIDTH / BARS.len();
            for (x, px) in line.iter_mut().enumerate() {
                *px = BARS[(x / bar_width).min(BARS.len() - 1)];
            }
        }

        // Layer 1: diagonal stripes scrolling right across the middle band
        if self.layers[1] && (96..144).contains(&row) {
            let scroll = self.frame as usize;
            for (x, px) in line.iter_mut().enumerate() {
                if (x + row + SCREEN_WIDTH - scroll % SCREEN_WIDTH) / 8 % 2 == 0 {
                    *px = STRIPE_COLOR;
                }
            }
        }

        if self.layers[2] {
            let (sx, sy) = self.sprite;
            let dy = y - sy;
            if (0..SPRITE_SIZE).contains(&dy) {
                self.render_sprite_row(dy, sx, line);
            }
        }
    }

    /// Sprite: a right-pointing triangle, mirrored when facing left.
    fn render_sprite_row(&self, dy: i32, sx: i32, line: &mut [u16]) {
        let half = SPRITE_SIZE / 2;
        let reach = half - (dy - half).abs();
        let color = if self.flip_visual && self.facing_left {
            FLIPPED_COLOR
        } else {
            SPRITE_COLOR
        };

        for dx in 0..SPRITE_SIZE {
            let column = if self.facing_left { SPRITE_SIZE - 1 - dx } else { dx };
            let edge = dy == 0 || dy == SPRITE_SIZE - 1 || dx == 0 || dx == SPRITE_SIZE - 1;
            let pixel = if column < reach * 2 {
                Some(color)
            } else if self.sprite_outlines && edge {
                Some(OUTLINE_COLOR)
            } else {
                None
            };
            if let (Some(px), Some(slot)) = (pixel, line.get_mut((sx + dx) as usize)) {
                *slot = px;
            }
        }
    }

    /// Channel `ch` is a tone of (ch + 2) * 55 Hz; even channels square,
    /// odd channels triangle. Each channel is gated on for three quarters
    /// of a two-second cycle, staggered by channel.
    fn tone(&mut self, ch: usize) -> i16 {
        let gate = (self.frame / 30 + ch as u32) % 4 != 0;
        let freq = (ch as u32 + 2) * 55;
        self.phases[ch] = self.phases[ch].wrapping_add((freq << 16) / SAMPLE_RATE);
        if !gate {
            return 0;
        }

        let phase = (self.phases[ch] & 0xFFFF) as i32;
        let wave = if ch % 2 == 0 {
            if phase < 0x8000 { 0x7FFF } else { -0x8000 }
        } else if phase < 0x8000 {
            phase * 2 - 0x8000
        } else {
            (0xFFFF - phase) * 2 - 0x8000
        };
        (wave * TONE_AMPLITUDE / 0x8000) as i16
    }

    fn generate_audio(&mut self, io: &mut FrameIo<'_>) {
        for _ in 0..SAMPLES_PER_FRAME {
            let mut mix = 0i32;
            for ch in 0..SCOPE_CHANNELS {
                let sample = self.tone(ch);
                io.push_channel_sample(ch as u8, sample);
                mix += sample as i32;
            }
            io.push_sample((mix / SCOPE_CHANNELS as i32 * 2) as i16);
        }
    }
}

impl Default for DemoConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for DemoConsole {
    fn run_frame(&mut self, io: &mut FrameIo<'_>) {
        if self.paused && !std::mem::take(&mut self.step_pending) {
            return;
        }

        self.move_sprite();
        if io.renders_scanlines() {
            for row in 0..SCREEN_HEIGHT {
                if let Some(line) = io.scanline_mut(row) {
                    self.render_scanline(row, line);
                }
            }
        }
        self.generate_audio(io);
        self.frame = self.frame.wrapping_add(1);
    }

    fn update_buttons(&mut self, controller: u8, buttons: ButtonMask) {
        if controller == PRIMARY_CONTROLLER {
            self.buttons = buttons;
        }
    }

    /// Coloured buttons light their LED; otherwise one LED chases.
    fn led_state(&self) -> LedMask {
        let mut leds = LedMask::empty();
        leds.set(LedMask::RED, self.buttons.contains(ButtonMask::RED));
        leds.set(LedMask::YELLOW, self.buttons.contains(ButtonMask::YELLOW));
        leds.set(LedMask::BLUE, self.buttons.contains(ButtonMask::BLUE));
        leds.set(LedMask::GREEN, self.buttons.contains(ButtonMask::GREEN));
        if leds.is_empty() {
            leds = LedMask::from_bits_truncate(1 << (self.frame / 30 % 4));
        }
        leds
    }

    fn toggle_layer(&mut self, layer: u8) {
        if let Some(enabled) = self.layers.get_mut(layer as usize) {
            *enabled = !*enabled;
            log::info!("Layer {layer} {}", if *enabled { "on" } else { "off" });
        }
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
    }

    fn step(&mut self) {
        if self.paused {
            self.step_pending = true;
        }
    }

    fn toggle_sprite_outlines(&mut self) {
        self.sprite_outlines = !self.sprite_outlines;
    }

    fn toggle_flip_visual(&mut self) {
        self.flip_visual = !self.flip_visual;
    }

    fn reset(&mut self) {
        log::info!("Reset");
        *self = Self::new();
    }
}
