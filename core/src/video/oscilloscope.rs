//! Per-channel waveform canvases for the oscilloscope view.
//!
//! Each of the 16 audio channels owns a 256x128 canvas. Samples arrive at
//! the audio rate; every third one is plotted as a vertical segment joining
//! it to the previous plotted sample. The two columns at the write position
//! are cleared first, so the trace overwrites the previous frame in place
//! without clearing the whole canvas.

use super::ViewMode;
use super::surface::PixelSurface;
use crate::core::display::Rect;

pub const SCOPE_CHANNELS: usize = 16;
pub const SCOPE_WIDTH: usize = 256;
pub const SCOPE_HEIGHT: usize = 128;

/// Sample index cap per video frame (44.1 kHz / 60 Hz).
pub const MAX_FRAME_SAMPLES: u16 = 735;

/// Only every Nth sample is plotted.
const DOWNSAMPLE: u16 = 3;

/// Bin a silent channel rests on.
const CENTER_BIN: u8 = 64;

const CHANNEL_COLORS: [u16; SCOPE_CHANNELS] = [
    0x7c00, 0x83e0, 0x001f, 0xffe0, //
    0x7c1f, 0x83ff, 0xfe24, 0xffff, //
    0x7c00, 0x83e0, 0x001f, 0xffe0, //
    0x7c1f, 0x83ff, 0xfe24, 0xffff,
];

/// Plot state for one channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelSampleState {
    /// Bin of the last plotted sample (0..=127).
    pub prev_bin: u8,
    /// Samples plotted since the start of the frame. Saturates.
    pub processed: u16,
}

impl Default for ChannelSampleState {
    fn default() -> Self {
        Self {
            prev_bin: CENTER_BIN,
            processed: 0,
        }
    }
}

/// Quantize a signed 16-bit sample to a vertical bin: top 7 bits, recentred.
pub const fn sample_bin(sample: i16) -> u8 {
    ((sample >> 9) + CENTER_BIN as i16) as u8
}

/// Destination cell of canvas `index` in a 4x4 grid filling the window.
pub fn grid_cell(index: usize, window: (u32, u32)) -> Rect {
    let w = window.0 / 4;
    let h = window.1 / 4;
    Rect::new(
        (w * (index & 3) as u32) as i32,
        (h * (index >> 2) as u32) as i32,
        w,
        h,
    )
}

pub struct OscilloscopeBank {
    canvases: Vec<PixelSurface>,
    channels: [ChannelSampleState; SCOPE_CHANNELS],
    sample_index: u16,
}

impl OscilloscopeBank {
    pub fn new() -> Self {
        Self {
            canvases: (0..SCOPE_CHANNELS)
                .map(|_| PixelSurface::new(SCOPE_WIDTH, SCOPE_HEIGHT))
                .collect(),
            channels: [ChannelSampleState::default(); SCOPE_CHANNELS],
            sample_index: 0,
        }
    }

    /// Position within the current frame, in output samples.
    pub fn sample_index(&self) -> u16 {
        self.sample_index
    }

    /// Count one output sample. Saturates at [`MAX_FRAME_SAMPLES`].
    pub fn advance_sample_index(&mut self) {
        if self.sample_index < MAX_FRAME_SAMPLES {
            self.sample_index += 1;
        }
    }

    /// Rewind to column 0. Called once after every presented frame.
    pub fn end_frame(&mut self) {
        self.sample_index = 0;
        for state in &mut self.channels {
            state.processed = 0;
        }
    }

    pub fn canvas(&self, channel: usize) -> Option<&PixelSurface> {
        self.canvases.get(channel)
    }

    /// Canvases in channel order.
    pub fn canvases(&self) -> impl Iterator<Item = &PixelSurface> {
        self.canvases.iter()
    }

    pub fn channel_state(&self, channel: usize) -> Option<ChannelSampleState> {
        self.channels.get(channel).copied()
    }

    /// Plot one channel sample at the current sample index.
    ///
    /// Ignored outside the oscilloscope view, between downsample points,
    /// and for channels past 15.
    pub fn ingest_sample(&mut self, view: ViewMode, channel: u8, sample: i16) {
        if view != ViewMode::Oscilloscope || self.sample_index % DOWNSAMPLE != 0 {
            return;
        }
        let ch = channel as usize;
        let (Some(canvas), Some(state)) = (self.canvases.get_mut(ch), self.channels.get_mut(ch))
        else {
            return;
        };

        let bin = sample_bin(sample);
        let column = (self.sample_index / DOWNSAMPLE) as usize;
        let (start, end) = match bin.cmp(&state.prev_bin) {
            std::cmp::Ordering::Greater => (state.prev_bin, bin),
            std::cmp::Ordering::Less => (bin, state.prev_bin),
            std::cmp::Ordering::Equal => (bin, bin + 1),
        };

        for y in 0..SCOPE_HEIGHT {
            canvas.set(column, y, 0);
            canvas.set(column + 1, y, 0);
        }
        for y in start..end {
            canvas.set(column, y as usize, CHANNEL_COLORS[ch]);
        }

        state.prev_bin = bin;
        state.processed = state.processed.saturating_add(1);
    }
}

impl Default for OscilloscopeBank {
    fn default() -> Self {
        Self::new()
    }
}
