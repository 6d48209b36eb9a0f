use anyhow::Result;
use sdl2::event::Event;
use sdl2::pixels::PixelFormatEnum;
use typed_builder::TypedBuilder;

use okto_common::app::App;
use okto_common::key::Key;
pub use sdl2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
}

pub struct SdlContext;

impl SdlContext {
    /// Open a window and drive `app` until it asks to exit or the window
    /// is closed.
    ///
    /// The canvas presents with vsync, so `app.update` runs once per
    /// display frame.
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
        } = sdl_init_info;
        let sdl_context = sdl2::init().map_err(anyhow::Error::msg)?;
        let video_subsystem = sdl_context.video().map_err(anyhow::Error::msg)?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(anyhow::Error::msg)?;
        let creator = canvas.texture_creator();
        let mut texture =
            creator.create_texture_target(map_pixel_format(pixel_format), width, height)?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut screen_state = vec![0u8; (width * height * color_size) as usize];
        let mut event_pump = sdl_context.event_pump().map_err(anyhow::Error::msg)?;
        log::info!("SDL window {}x{} at scale {}", width, height, scale);

        app.init();
        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            while let Some(event) = event_pump.poll_event() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    // Held keys stay pressed until KeyUp; OS key repeat
                    // would look like extra press edges to the machine.
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), false);
                    }
                    _ => {}
                }
            }

            app.update(&mut screen_state);

            texture.update(None, &screen_state, (width * color_size) as usize)?;
            canvas.copy(&texture, None, None).map_err(anyhow::Error::msg)?;
            canvas.present();
        }

        Ok(())
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: sdl2::keyboard::Keycode) -> Key {
    match keycode {
        sdl2::keyboard::Keycode::Num1 => Key::Num1,
        sdl2::keyboard::Keycode::Num2 => Key::Num2,
        sdl2::keyboard::Keycode::Num3 => Key::Num3,
        sdl2::keyboard::Keycode::Num4 => Key::Num4,
        sdl2::keyboard::Keycode::Q => Key::Q,
        sdl2::keyboard::Keycode::W => Key::W,
        sdl2::keyboard::Keycode::E => Key::E,
        sdl2::keyboard::Keycode::R => Key::R,
        sdl2::keyboard::Keycode::A => Key::A,
        sdl2::keyboard::Keycode::S => Key::S,
        sdl2::keyboard::Keycode::D => Key::D,
        sdl2::keyboard::Keycode::F => Key::F,
        sdl2::keyboard::Keycode::Z => Key::Z,
        sdl2::keyboard::Keycode::X => Key::X,
        sdl2::keyboard::Keycode::C => Key::C,
        sdl2::keyboard::Keycode::V => Key::V,
        sdl2::keyboard::Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}
