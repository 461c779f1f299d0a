use std::path::Path;

use vfrown_core::audio::{AudioSink, NullSink};
use vfrown_core::compositor::Compositor;
use vfrown_core::core::Console;
use vfrown_core::video::{SCREEN_HEIGHT, SCREEN_WIDTH, ViewMode};

use crate::audio;
use crate::config::Settings;
use crate::error::{InitError, RunError};
use crate::input;
use crate::screenshot;
use crate::video::{self, Video};

const SCREENSHOT_DIR: &str = "screenshots";

pub fn run(console: &mut dyn Console, settings: &Settings) -> Result<(), RunError> {
    let sdl_context = sdl2::init().map_err(InitError::Sdl)?;
    let sdl_video = sdl_context.video().map_err(InitError::Sdl)?;

    let canvas = video::create_canvas(
        &sdl_video,
        &settings.title,
        SCREEN_WIDTH as u32 * settings.scale,
        SCREEN_HEIGHT as u32 * settings.scale,
    )?;
    let texture_creator = canvas.texture_creator();
    let mut display = Video::new(canvas, &texture_creator)?;

    let sink: Box<dyn AudioSink> = if settings.audio {
        let sdl_audio = sdl_context.audio().map_err(InitError::Audio)?;
        Box::new(audio::open(&sdl_audio)?)
    } else {
        log::info!("Audio disabled");
        Box::new(NullSink)
    };

    let mut event_pump = sdl_context.event_pump().map_err(InitError::EventPump)?;

    let mut compositor = Compositor::new(sink);
    compositor.set_vsync(&mut display, settings.vsync)?;
    compositor.set_show_leds(settings.show_leds);
    if settings.oscilloscope {
        compositor.set_view(ViewMode::Oscilloscope);
    }

    loop {
        compositor.run_console_frame(console)?;

        let events: Vec<_> = event_pump.poll_iter().filter_map(input::translate).collect();
        if !compositor.poll_events(events, &settings.key_map, console, &mut display)? {
            break;
        }

        compositor.update_window(&mut display)?;

        if compositor.take_screenshot_request() {
            let surface = compositor.frame_buffer().surface();
            match screenshot::save(surface, Path::new(SCREENSHOT_DIR)) {
                Ok(path) => log::info!("Screenshot saved to {}", path.display()),
                Err(e) => log::warn!("Screenshot failed: {e}"),
            }
        }
    }

    log::info!("Quit");
    Ok(())
}
