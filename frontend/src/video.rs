use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::{Point, Rect as SdlRect};
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{FullscreenType, Window, WindowContext};
use thiserror::Error;
use vfrown_core::core::{Display, DrawTarget, Rect, Rgba};
use vfrown_core::video::oscilloscope::{SCOPE_HEIGHT, SCOPE_WIDTH};
use vfrown_core::video::{PixelSurface, SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::error::InitError;

#[derive(Debug, Error)]
pub enum VideoError {
    #[error("texture upload failed: {0}")]
    Upload(String),
    #[error("render copy failed: {0}")]
    Copy(String),
    #[error("point draw failed: {0}")]
    Draw(String),
    #[error("fullscreen switch failed: {0}")]
    Fullscreen(String),
    #[error("vsync switch failed: {0}")]
    Vsync(String),
}

/// Create the centred window and its accelerated renderer.
pub fn create_canvas(
    sdl_video: &sdl2::VideoSubsystem,
    title: &str,
    width: u32,
    height: u32,
) -> Result<Canvas<Window>, InitError> {
    let window = sdl_video
        .window(title, width, height)
        .position_centered()
        .build()
        .map_err(|e| InitError::Window(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| InitError::Renderer(e.to_string()))?;

    // LED overlay points are drawn translucent
    canvas.set_blend_mode(BlendMode::Blend);
    Ok(canvas)
}

/// SDL2 renderer with the screen texture and the shared oscilloscope texture.
pub struct Video<'tc> {
    canvas: Canvas<Window>,
    screen: Texture<'tc>,
    scope: Texture<'tc>,
}

impl<'tc> Video<'tc> {
    pub fn new(
        canvas: Canvas<Window>,
        texture_creator: &'tc TextureCreator<WindowContext>,
    ) -> Result<Self, InitError> {
        let screen = streaming_texture(texture_creator, "screen", SCREEN_WIDTH, SCREEN_HEIGHT)?;
        let scope = streaming_texture(texture_creator, "oscilloscope", SCOPE_WIDTH, SCOPE_HEIGHT)?;
        Ok(Self {
            canvas,
            screen,
            scope,
        })
    }
}

/// ARGB1555 streaming texture. The alpha bit is unused, so blending is off.
fn streaming_texture<'tc>(
    texture_creator: &'tc TextureCreator<WindowContext>,
    name: &'static str,
    width: usize,
    height: usize,
) -> Result<Texture<'tc>, InitError> {
    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::ARGB1555, width as u32, height as u32)
        .map_err(|e| InitError::Texture {
            name,
            reason: e.to_string(),
        })?;
    texture.set_blend_mode(BlendMode::None);
    Ok(texture)
}

fn upload(texture: &mut Texture<'_>, surface: &PixelSurface) -> Result<(), VideoError> {
    texture
        .with_lock(None, |buf: &mut [u8], pitch: usize| {
            surface.write_texture_rows(buf, pitch)
        })
        .map_err(VideoError::Upload)
}

impl DrawTarget for Video<'_> {
    type Error = VideoError;

    fn set_draw_color(&mut self, color: Rgba) {
        self.canvas
            .set_draw_color(Color::RGBA(color.r, color.g, color.b, color.a));
    }

    fn draw_point(&mut self, x: i32, y: i32) -> Result<(), VideoError> {
        self.canvas
            .draw_point(Point::new(x, y))
            .map_err(VideoError::Draw)
    }
}

impl Display for Video<'_> {
    fn window_size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    fn upload_screen(&mut self, surface: &PixelSurface) -> Result<(), VideoError> {
        upload(&mut self.screen, surface)
    }

    fn draw_screen(&mut self) -> Result<(), VideoError> {
        self.canvas
            .copy(&self.screen, None, None)
            .map_err(VideoError::Copy)
    }

    fn upload_scope(&mut self, surface: &PixelSurface) -> Result<(), VideoError> {
        upload(&mut self.scope, surface)
    }

    fn draw_scope(&mut self, dst: Rect) -> Result<(), VideoError> {
        let dst = SdlRect::new(dst.x, dst.y, dst.w, dst.h);
        self.canvas
            .copy(&self.scope, None, dst)
            .map_err(VideoError::Copy)
    }

    fn present(&mut self) {
        self.canvas.present();
    }

    fn set_fullscreen(&mut self, enabled: bool) -> Result<(), VideoError> {
        let mode = if enabled {
            FullscreenType::Desktop
        } else {
            FullscreenType::Off
        };
        self.canvas
            .window_mut()
            .set_fullscreen(mode)
            .map_err(VideoError::Fullscreen)
    }

    fn set_vsync(&mut self, enabled: bool) -> Result<(), VideoError> {
        // SAFETY: the renderer pointer is owned by `self.canvas` and valid
        // for its whole lifetime.
        let status =
            unsafe { sdl2::sys::SDL_RenderSetVSync(self.canvas.raw(), i32::from(enabled)) };
        if status < 0 {
            Err(VideoError::Vsync(sdl2::get_error()))
        } else {
            Ok(())
        }
    }
}
