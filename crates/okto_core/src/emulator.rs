use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::CoreError;
use crate::frame_buffer::FrameBuffer;
use crate::opcode::Opcode;
use crate::state::Machine;
use crate::{DEFAULT_CPU_HZ, NUM_KEYS, TIMER_HZ};

/// The whole machine: state, screen, keypad, and the cycle driver.
///
/// One instruction executes to completion per `step`; the framebuffer is
/// only read between steps. A `FX0A` key wait suspends the instruction
/// stream without blocking the host loop, so rendering, input and shutdown
/// stay live while the machine waits.
pub struct Emulator {
    pub(crate) machine: Machine,
    pub(crate) frame: FrameBuffer,
    pub(crate) keys: [bool; NUM_KEYS],
    /// Destination register of a pending FX0A, if any.
    pub(crate) waiting_for_key: Option<usize>,
    pub(crate) rng: StdRng,
    cpu_hz: u32,
}

impl Default for Emulator {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Emulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic emulator for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            machine: Machine::default(),
            frame: FrameBuffer::default(),
            keys: [false; NUM_KEYS],
            waiting_for_key: None,
            rng,
            cpu_hz: DEFAULT_CPU_HZ,
        }
    }

    /// Instruction rate used by `step_frame`, clamped so at least one
    /// instruction runs per frame.
    pub fn set_cpu_hz(&mut self, hz: u32) {
        self.cpu_hz = hz.max(TIMER_HZ);
    }

    /// Back to power-on state. The loaded program is cleared too.
    pub fn reset(&mut self) {
        self.machine.reset();
        self.frame.clear();
        self.keys = [false; NUM_KEYS];
        self.waiting_for_key = None;
    }

    /// Copy a program into memory at the start address. Must happen before
    /// the first cycle; images over 3584 bytes are rejected.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), CoreError> {
        self.machine.load_rom(rom)
    }

    /// Fetch, decode and execute one instruction.
    ///
    /// While a key wait is pending this is a no-op; timers are driven
    /// separately and keep running.
    pub fn step(&mut self) -> Result<(), CoreError> {
        if self.waiting_for_key.is_some() {
            return Ok(());
        }
        let op = Opcode::new(self.machine.fetch());
        self.execute(op)
    }

    /// Run one display frame's worth of work: `cpu_hz / 60` instructions,
    /// then a single 60 Hz timer tick. Calling this once per display frame
    /// keeps the instruction clock and the timer clock decoupled.
    pub fn step_frame(&mut self) -> Result<(), CoreError> {
        for _ in 0..self.cpu_hz / TIMER_HZ {
            self.step()?;
        }
        self.machine.tick_timers();
        Ok(())
    }

    /// Advance the 60 Hz timers by one tick. Hosts that schedule their own
    /// timer clock can call this instead of relying on `step_frame`.
    pub fn tick_timers(&mut self) {
        self.machine.tick_timers();
    }

    /// Record a key state change from the input collaborator.
    ///
    /// A press edge also satisfies a pending key wait: the key index lands
    /// in the waiting register and the instruction stream resumes.
    pub fn set_key(&mut self, idx: usize, pressed: bool) {
        assert!(idx < NUM_KEYS, "invalid key index: {idx}");
        self.keys[idx] = pressed;
        if pressed {
            if let Some(x) = self.waiting_for_key.take() {
                self.machine.set_v(x, idx as u8);
            }
        }
    }

    /// Read-only view of the screen, safe at any point between cycles.
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn sound_timer(&self) -> u8 {
        self.machine.sound_timer()
    }

    /// True while the sound timer is above zero; an audio collaborator
    /// renders this as a tone.
    pub fn sound_active(&self) -> bool {
        self.machine.sound_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emulator_with(program: &[u16]) -> Emulator {
        let mut emulator = Emulator::with_seed(0x5EED);
        let bytes: Vec<u8> = program.iter().flat_map(|op| op.to_be_bytes()).collect();
        emulator.load_rom(&bytes).unwrap();
        emulator
    }

    #[test]
    fn add_then_clear_program() {
        // LD V0,5; LD V1,5; ADD V0,V1; CLS
        let mut emulator = emulator_with(&[0x6005, 0x6105, 0x8014, 0x00E0]);
        emulator.frame.set(5, 5, true);

        for _ in 0..4 {
            emulator.step().unwrap();
        }

        assert_eq!(emulator.machine.v(0), 10);
        assert_eq!(emulator.machine.v(0xF), 0);
        assert!(emulator.frame_buffer().pixels().iter().all(|p| !p));
    }

    #[test]
    fn step_frame_scales_with_cpu_hz() {
        // Three ADD V0,1 in a row; at 120 Hz only two run per frame.
        let mut emulator = emulator_with(&[0x7001, 0x7001, 0x7001]);
        emulator.set_cpu_hz(120);
        emulator.step_frame().unwrap();
        assert_eq!(emulator.machine.v(0), 2);
    }

    #[test]
    fn step_frame_ticks_timers_once() {
        // Jump-to-self keeps the CPU busy without touching the timers.
        let mut emulator = emulator_with(&[0x1200]);
        emulator.machine.set_delay_timer(5);
        emulator.machine.set_sound_timer(1);

        emulator.step_frame().unwrap();
        assert_eq!(emulator.machine.delay_timer(), 4);
        assert_eq!(emulator.machine.sound_timer(), 0);
        assert!(!emulator.sound_active());
        assert_eq!(emulator.machine.pc(), 0x200);
    }

    #[test]
    fn key_wait_parks_the_instruction_stream() {
        // LD V5,K; LD V0,0x11
        let mut emulator = emulator_with(&[0xF50A, 0x6011]);

        emulator.step().unwrap();
        assert_eq!(emulator.waiting_for_key, Some(5));
        assert_eq!(emulator.machine.pc(), 0x202);

        // Suspended: stepping executes nothing.
        emulator.step().unwrap();
        emulator.step().unwrap();
        assert_eq!(emulator.machine.pc(), 0x202);
        assert_eq!(emulator.machine.v(0), 0);

        // Releases don't satisfy the wait; a press edge does.
        emulator.set_key(7, false);
        assert_eq!(emulator.waiting_for_key, Some(5));
        emulator.set_key(7, true);
        assert_eq!(emulator.waiting_for_key, None);
        assert_eq!(emulator.machine.v(5), 7);

        emulator.step().unwrap();
        assert_eq!(emulator.machine.v(0), 0x11);
    }

    #[test]
    fn timers_keep_running_during_key_wait() {
        let mut emulator = emulator_with(&[0xF00A]);
        emulator.machine.set_delay_timer(2);
        emulator.step_frame().unwrap();
        assert_eq!(emulator.machine.delay_timer(), 1);
        assert_eq!(emulator.waiting_for_key, Some(0));
    }

    #[test]
    fn reset_restores_power_on_state() {
        let mut emulator = emulator_with(&[0x6005]);
        emulator.step().unwrap();
        emulator.set_key(3, true);
        emulator.frame.set(0, 0, true);

        emulator.reset();
        assert_eq!(emulator.machine.pc(), 0x200);
        assert_eq!(emulator.machine.v(0), 0);
        assert!(!emulator.keys[3]);
        assert!(emulator.frame_buffer().pixels().iter().all(|p| !p));
    }
}
