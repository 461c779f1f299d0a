use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use vfrown_core::video::PixelSurface;

#[derive(Debug, Error)]
pub enum ScreenshotError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Save `surface` as `vfrown-<unix millis>.png` under `dir`.
pub fn save(surface: &PixelSurface, dir: &Path) -> Result<PathBuf, ScreenshotError> {
    fs::create_dir_all(dir).map_err(io_err(dir))?;

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let path = dir.join(format!("vfrown-{millis}.png"));

    let file = File::create(&path).map_err(io_err(&path))?;
    let mut writer = BufWriter::new(file);
    write_png(surface, &mut writer)?;
    writer.flush().map_err(io_err(&path))?;
    Ok(path)
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> ScreenshotError {
    let path = path.to_path_buf();
    move |source| ScreenshotError::Io { path, source }
}

/// Encode `surface` as an 8-bit RGB PNG.
pub fn write_png<W: Write>(surface: &PixelSurface, out: W) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(out, surface.width() as u32, surface.height() as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&surface.to_rgb8())?;
    writer.finish()
}
