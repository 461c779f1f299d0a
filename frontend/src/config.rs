//! Startup settings: command line over config file over defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::Parser;
use sdl2::keyboard::Scancode;
use serde::Deserialize;
use thiserror::Error;
use vfrown_core::input::{Binding, KeyMap, UnknownBinding};

use crate::input::default_key_map;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown key name `{0}` in [keys]")]
    UnknownKey(String),
    #[error("{0} in [keys]")]
    UnknownBinding(#[from] UnknownBinding),
    #[error("scale must be at least 1")]
    ZeroScale,
}

/// Command line.
#[derive(Parser, Debug, Default)]
#[command(name = "vfrown", version, about = "V.Frown emulator frontend")]
pub struct Cli {
    /// Config file [default: <config dir>/vfrown/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window title
    #[arg(long)]
    pub title: Option<String>,

    /// Window size as a multiple of 320x240
    #[arg(long)]
    pub scale: Option<u32>,

    /// Let the display's vblank pace frames instead of the frame timer
    #[arg(long)]
    pub vsync: bool,

    /// Show the console LED overlay
    #[arg(long)]
    pub show_leds: bool,

    /// Start in the oscilloscope view
    #[arg(long)]
    pub oscilloscope: bool,

    /// Run without opening an audio device
    #[arg(long)]
    pub no_audio: bool,
}

/// `config.toml` contents.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub window: WindowConfig,
    pub video: VideoConfig,
    pub audio: AudioConfig,
    /// SDL key name to binding name, e.g. `Q = "red"`.
    pub keys: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub scale: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "V.Frown".to_string(),
            scale: 2,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideoConfig {
    pub vsync: bool,
    pub show_leds: bool,
    pub oscilloscope: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    pub enabled: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl FileConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vfrown").join("config.toml"))
    }
}

/// Resolved settings the frontend runs with.
pub struct Settings {
    pub title: String,
    pub scale: u32,
    pub vsync: bool,
    pub show_leds: bool,
    pub oscilloscope: bool,
    pub audio: bool,
    pub key_map: KeyMap<Scancode>,
}

impl Settings {
    /// Load the config file named on the command line, or the default one
    /// if it exists, then apply command-line overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => match FileConfig::default_path().filter(|p| p.is_file()) {
                Some(path) => {
                    log::info!("Using config {}", path.display());
                    FileConfig::load(&path)?
                }
                None => FileConfig::default(),
            },
        };
        Self::resolve(cli, file)
    }

    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let scale = cli.scale.unwrap_or(file.window.scale);
        if scale == 0 {
            return Err(ConfigError::ZeroScale);
        }

        let mut key_map = default_key_map();
        apply_key_overrides(&mut key_map, &file.keys)?;

        Ok(Self {
            title: cli.title.clone().unwrap_or(file.window.title),
            scale,
            vsync: cli.vsync || file.video.vsync,
            show_leds: cli.show_leds || file.video.show_leds,
            oscilloscope: cli.oscilloscope || file.video.oscilloscope,
            audio: !cli.no_audio && file.audio.enabled,
            key_map,
        })
    }
}

/// Move each overridden binding to its configured key.
///
/// Default keys for an overridden binding are released first, so a binding
/// named in `[keys]` answers only to the keys listed there.
pub fn apply_key_overrides(
    key_map: &mut KeyMap<Scancode>,
    keys: &BTreeMap<String, String>,
) -> Result<(), ConfigError> {
    let mut resolved = Vec::with_capacity(keys.len());
    for (key, action) in keys {
        let scancode =
            Scancode::from_name(key).ok_or_else(|| ConfigError::UnknownKey(key.clone()))?;
        let binding: Binding = action.parse()?;
        resolved.push((scancode, binding));
    }

    for &(_, binding) in &resolved {
        key_map.unbind(binding);
    }
    for (scancode, binding) in resolved {
        key_map.bind(scancode, binding);
    }
    Ok(())
}
