//! Mono sample path from the console to the host audio queue.

use thiserror::Error;

/// Output rate the console produces samples at.
pub const SAMPLE_RATE: u32 = 44_100;

/// Channel count requested from the host.
pub const OUTPUT_CHANNELS: u8 = 1;

/// Host-side buffer size in sample frames (~93 ms at 44.1 kHz).
pub const BUFFER_SAMPLES: u16 = 4096;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("failed to queue audio: {0}")]
    Queue(String),
}

/// Host audio queue.
pub trait AudioSink {
    /// Queue one stereo frame. Mono sinks keep the left sample.
    fn queue(&mut self, frame: [i16; 2]) -> Result<(), AudioError>;
}

/// Sink that drops everything, for running without an audio device.
pub struct NullSink;

impl AudioSink for NullSink {
    fn queue(&mut self, _frame: [i16; 2]) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Duplicates each mono sample to a stereo pair and queues it.
///
/// Queue failures do not interrupt the console mid-frame. The first one is
/// held until the frame loop collects it with [`take_fault`](Self::take_fault).
pub struct AudioBridge {
    sink: Box<dyn AudioSink>,
    fault: Option<AudioError>,
}

impl AudioBridge {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self { sink, fault: None }
    }

    pub fn push_sample(&mut self, sample: i16) {
        if let Err(e) = self.sink.queue([sample, sample])
            && self.fault.is_none()
        {
            self.fault = Some(e);
        }
    }

    /// First queue failure since the last call, if any.
    pub fn take_fault(&mut self) -> Option<AudioError> {
        self.fault.take()
    }
}
