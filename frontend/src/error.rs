use thiserror::Error;
use vfrown_core::audio::AudioError;

use crate::config::ConfigError;
use crate::video::VideoError;

/// A host resource could not be created. Fatal: nothing is retried.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("SDL initialization failed: {0}")]
    Sdl(String),
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to create renderer: {0}")]
    Renderer(String),
    #[error("failed to create {name} texture: {reason}")]
    Texture { name: &'static str, reason: String },
    #[error("failed to open audio device: {0}")]
    Audio(String),
    #[error("failed to get event pump: {0}")]
    EventPump(String),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Init(#[from] InitError),
    #[error(transparent)]
    Video(#[from] VideoError),
    #[error(transparent)]
    Audio(#[from] AudioError),
}
