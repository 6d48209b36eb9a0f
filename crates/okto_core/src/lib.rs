pub mod app;
pub mod emulator;
mod error;
mod exec;
pub mod frame_buffer;
pub mod opcode;
pub mod state;
#[cfg(feature = "wasm")]
mod wasm;

pub use app::EmulatorApp;
pub use emulator::Emulator;
pub use error::CoreError;
pub use frame_buffer::FrameBuffer;
pub use state::Machine;

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: usize = 64;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 32;
/// Default integer scaling factor for the SDL frontend.
pub const SCREEN_SCALE: u32 = 10;

/// Total addressable memory (4 KiB).
pub const RAM_SIZE: usize = 4096;
/// Number of V registers.
pub const NUM_REGS: usize = 16;
/// Call stack depth.
pub const STACK_SIZE: usize = 16;
/// Number of keys on the hex keypad.
pub const NUM_KEYS: usize = 16;
/// Programs are loaded here; the region below holds the font sprites.
pub const START_ADDRESS: u16 = 0x200;
/// Largest program that fits between `START_ADDRESS` and the end of RAM.
pub const MAX_ROM_SIZE: usize = RAM_SIZE - START_ADDRESS as usize;

/// Both timers decrement at this fixed rate, independent of the CPU clock.
pub const TIMER_HZ: u32 = 60;
/// Default instruction rate in instructions per second.
pub const DEFAULT_CPU_HZ: u32 = 700;

/// Bytes per built-in font glyph.
pub const FONT_GLYPH_SIZE: u16 = 5;
pub const FONTSET_SIZE: usize = 80;
/// Sprites for the hex digits 0-F, 5 bytes per glyph, loaded at address 0.
pub const FONTSET: [u8; FONTSET_SIZE] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
