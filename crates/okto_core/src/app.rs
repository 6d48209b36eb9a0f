use okto_common::app::App;
use okto_common::key::Key;
use okto_common::Color;

use crate::emulator::Emulator;
use crate::{SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};

/// SDL-facing application wrapper for the emulator.
///
/// Implements the shared `App` trait so the windowing harness can drive
/// the interpreter one display frame at a time.
#[derive(Default)]
pub struct EmulatorApp {
    should_exit: bool,
    pub emulator: Emulator,
    sound_on: bool,
}

impl App for EmulatorApp {
    fn init(&mut self) {
        log::info!("okto init");
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        if let Err(err) = self.emulator.step_frame() {
            log::error!("halting: {err}");
            self.should_exit = true;
            return;
        }

        let sound = self.emulator.sound_active();
        if sound != self.sound_on {
            self.sound_on = sound;
            log::debug!("sound {}", if sound { "on" } else { "off" });
        }

        for (i, lit) in self.emulator.frame_buffer().pixels().iter().enumerate() {
            let color = if *lit { Color::WHITE } else { Color::BLACK };
            let index = i * 3;
            screen_state[index] = color.r;
            screen_state[index + 1] = color.g;
            screen_state[index + 2] = color.b;
        }
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        log::debug!("key event: {:?} pressed={}", key, is_down);
        if key == Key::Escape {
            if is_down {
                self.should_exit = true;
            }
            return;
        }
        if let Some(idx) = keypad_index(key) {
            self.emulator.set_key(idx, is_down);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("okto exit");
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "okto".to_string()
    }
}

/// QWERTY layout for the 4x4 hex pad:
///
/// ```text
/// 1 2 3 4        1 2 3 C
/// q w e r   ->   4 5 6 D
/// a s d f        7 8 9 E
/// z x c v        A 0 B F
/// ```
pub fn keypad_index(key: Key) -> Option<usize> {
    match key {
        Key::Num1 => Some(0x1),
        Key::Num2 => Some(0x2),
        Key::Num3 => Some(0x3),
        Key::Num4 => Some(0xC),
        Key::Q => Some(0x4),
        Key::W => Some(0x5),
        Key::E => Some(0x6),
        Key::R => Some(0xD),
        Key::A => Some(0x7),
        Key::S => Some(0x8),
        Key::D => Some(0x9),
        Key::F => Some(0xE),
        Key::Z => Some(0xA),
        Key::X => Some(0x0),
        Key::C => Some(0xB),
        Key::V => Some(0xF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_mapping_covers_the_hex_pad() {
        let mut seen = [false; 16];
        for key in [
            Key::Num1,
            Key::Num2,
            Key::Num3,
            Key::Num4,
            Key::Q,
            Key::W,
            Key::E,
            Key::R,
            Key::A,
            Key::S,
            Key::D,
            Key::F,
            Key::Z,
            Key::X,
            Key::C,
            Key::V,
        ] {
            seen[keypad_index(key).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(keypad_index(Key::Escape), None);
        assert_eq!(keypad_index(Key::None), None);
    }
}
