use sdl2::audio::{AudioQueue, AudioSpecDesired};
use vfrown_core::audio::{AudioError, AudioSink, BUFFER_SAMPLES, OUTPUT_CHANNELS, SAMPLE_RATE};

use crate::error::InitError;

/// Queued bytes beyond which new samples are dropped (1 s of mono i16).
///
/// Only reachable when the display refreshes faster than 60 Hz with vsync
/// on, where the console produces audio faster than the device drains it.
const MAX_QUEUED_BYTES: u32 = SAMPLE_RATE * 2;

/// SDL2 audio queue fed one frame at a time.
pub struct QueueSink {
    queue: AudioQueue<i16>,
    channels: usize,
}

impl AudioSink for QueueSink {
    fn queue(&mut self, frame: [i16; 2]) -> Result<(), AudioError> {
        if self.queue.size() > MAX_QUEUED_BYTES {
            return Ok(());
        }
        self.queue
            .queue_audio(&frame[..self.channels])
            .map_err(AudioError::Queue)
    }
}

/// Open the playback queue: 44.1 kHz mono i16 with a 4096-sample buffer.
///
/// The host may negotiate a different channel count; each queued frame is
/// cut to whatever the device accepted.
pub fn open(sdl_audio: &sdl2::AudioSubsystem) -> Result<QueueSink, InitError> {
    let desired_spec = AudioSpecDesired {
        freq: Some(SAMPLE_RATE as i32),
        channels: Some(OUTPUT_CHANNELS),
        samples: Some(BUFFER_SAMPLES),
    };

    let queue = sdl_audio
        .open_queue::<i16, _>(None, &desired_spec)
        .map_err(InitError::Audio)?;

    let spec = queue.spec();
    log::info!(
        "Audio: {} Hz, {} channel(s), {} sample buffer",
        spec.freq,
        spec.channels,
        spec.samples
    );

    queue.resume();
    Ok(QueueSink {
        channels: usize::from(spec.channels).clamp(1, 2),
        queue,
    })
}
