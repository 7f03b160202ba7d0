use rand::Rng;

use crate::decode::Opcode;
use crate::display::Display;
use crate::error::VmError;
use crate::keyboard::Keyboard;
use crate::memory::{Memory, GLYPH_SIZE};
use crate::registers::{Registers, Stack};
use crate::timer::Timers;

/// Whether the interpreter is free to fetch or parked on FX0A waiting
/// for a key to land in the target register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Running,
    WaitingForKey(u8),
}

/// The CHIP-8 execution core: memory, register file, call stack, timers
/// and the fetch-decode-execute loop over them.
///
/// The host drives it with `step` at its chosen instruction rate and
/// `tick_timers` at a fixed 60 Hz; calls must be serialized, nothing here
/// blocks. Display and keyboard are passed in as trait objects so the
/// core never owns a peripheral.
pub struct Emulator {
    pub mem: Memory,
    pub regs: Registers,
    pub stack: Stack,
    pub timers: Timers,
    mode: Mode,
}

impl Emulator {
    pub fn new() -> Self {
        Self {
            mem: Memory::new(),
            regs: Registers::new(),
            stack: Stack::new(),
            timers: Timers::new(),
            mode: Mode::Running,
        }
    }

    /// Discards all machine state, for ROM reload after a fatal error or
    /// at startup. The font table survives because `Memory::new` bakes
    /// it in.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Resets the machine and copies `rom` in at 0x200.
    pub fn load_program(&mut self, rom: &[u8]) -> Result<(), VmError> {
        self.reset();
        self.mem.load(rom)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Resume notification from the host: while parked on FX0A, the first
    /// fresh key press lands in the target register and unparks the core.
    /// A no-op while running.
    pub fn key_pressed(&mut self, key: u8) {
        if let Mode::WaitingForKey(x) = self.mode {
            self.regs.set(x, key);
            self.mode = Mode::Running;
        }
    }

    /// Driven by the host's fixed 60 Hz clock, independent of `step`,
    /// including while the core is waiting for a key.
    pub fn tick_timers(&mut self) {
        self.timers.tick();
    }

    pub fn sound_active(&self) -> bool {
        self.timers.sound_active()
    }

    /// Executes one instruction: fetch at pc, advance pc by 2, decode,
    /// apply side effects. A no-op while waiting for a key.
    pub fn step(
        &mut self,
        display: &mut dyn Display,
        keyboard: &dyn Keyboard,
    ) -> Result<(), VmError> {
        if let Mode::WaitingForKey(_) = self.mode {
            return Ok(());
        }
        let ins = self.fetch()?;
        let op = Opcode::decode(ins)?;
        self.execute(op, display, keyboard)
    }

    /// Reads the big-endian instruction word at pc and pre-advances pc,
    /// so jumps simply overwrite the advanced value.
    fn fetch(&mut self) -> Result<u16, VmError> {
        let pc = self.regs.pc;
        let hi = self.mem.read(pc)?;
        let lo = self.mem.read(pc + 1)?;
        self.regs.pc = pc + 2;
        Ok(u16::from(hi) << 8 | u16::from(lo))
    }

    fn execute(
        &mut self,
        op: Opcode,
        display: &mut dyn Display,
        keyboard: &dyn Keyboard,
    ) -> Result<(), VmError> {
        match op {
            Opcode::ClearScreen => display.clear(),
            Opcode::Return => self.regs.pc = self.stack.pop()?,
            Opcode::Jump(addr) => self.regs.pc = addr,
            Opcode::Call(addr) => {
                self.stack.push(self.regs.pc)?;
                self.regs.pc = addr;
            }
            Opcode::SkipEqualConstant(x, nn) => {
                if self.regs.get(x) == nn {
                    self.regs.skip();
                }
            }
            Opcode::SkipNotEqualConstant(x, nn) => {
                if self.regs.get(x) != nn {
                    self.regs.skip();
                }
            }
            Opcode::SkipEqualRegister(x, y) => {
                if self.regs.get(x) == self.regs.get(y) {
                    self.regs.skip();
                }
            }
            Opcode::SkipNotEqualRegister(x, y) => {
                if self.regs.get(x) != self.regs.get(y) {
                    self.regs.skip();
                }
            }
            Opcode::SetRegister(x, nn) => self.regs.set(x, nn),
            Opcode::AddToRegister(x, nn) => {
                self.regs.set(x, self.regs.get(x).wrapping_add(nn));
            }
            Opcode::CopyRegister(x, y) => self.regs.set(x, self.regs.get(y)),
            Opcode::Or(x, y) => self.regs.set(x, self.regs.get(x) | self.regs.get(y)),
            Opcode::And(x, y) => self.regs.set(x, self.regs.get(x) & self.regs.get(y)),
            Opcode::Xor(x, y) => self.regs.set(x, self.regs.get(x) ^ self.regs.get(y)),
            Opcode::Add(x, y) => {
                let (sum, carry) = self.regs.get(x).overflowing_add(self.regs.get(y));
                self.regs.set_flag(carry as u8);
                self.regs.set(x, sum);
            }
            Opcode::SubtractForward(x, y) => {
                let (a, b) = (self.regs.get(x), self.regs.get(y));
                self.regs.set_flag((a > b) as u8);
                self.regs.set(x, a.wrapping_sub(b));
            }
            Opcode::SubtractBackward(x, y) => {
                let (a, b) = (self.regs.get(x), self.regs.get(y));
                self.regs.set_flag((b > a) as u8);
                self.regs.set(x, b.wrapping_sub(a));
            }
            Opcode::RightShift(x) => {
                let value = self.regs.get(x);
                self.regs.set_flag(value & 1);
                self.regs.set(x, value >> 1);
            }
            Opcode::LeftShift(x) => {
                let value = self.regs.get(x);
                self.regs.set_flag(value >> 7);
                self.regs.set(x, value << 1);
            }
            Opcode::SetIndex(addr) => self.regs.i = addr,
            Opcode::JumpWithOffset(addr) => {
                self.regs.pc = addr + u16::from(self.regs.get(0));
            }
            Opcode::Random(x, nn) => {
                let draw: u8 = rand::thread_rng().gen();
                self.regs.set(x, draw & nn);
            }
            Opcode::Draw(x, y, n) => {
                let (col, row) = (self.regs.get(x) as usize, self.regs.get(y) as usize);
                let mut collision = false;
                for r in 0..n as usize {
                    let bits = self.mem.read(self.regs.i.wrapping_add(r as u16))?;
                    for c in 0..8 {
                        if bits & (0x80 >> c) != 0 {
                            collision |= display.set_pixel(col + c, row + r);
                        }
                    }
                }
                self.regs.set_flag(collision as u8);
            }
            Opcode::SkipIfPressed(x) => {
                if keyboard.is_pressed(self.regs.get(x)) {
                    self.regs.skip();
                }
            }
            Opcode::SkipIfNotPressed(x) => {
                if !keyboard.is_pressed(self.regs.get(x)) {
                    self.regs.skip();
                }
            }
            Opcode::ReadDelay(x) => self.regs.set(x, self.timers.delay),
            Opcode::SetDelay(x) => self.timers.delay = self.regs.get(x),
            Opcode::SetSound(x) => self.timers.sound = self.regs.get(x),
            Opcode::GetKey(x) => self.mode = Mode::WaitingForKey(x),
            Opcode::AddToIndex(x) => {
                // deliberately unmasked, the original instruction set lets
                // I run past 0xFFF
                self.regs.i = self.regs.i.wrapping_add(u16::from(self.regs.get(x)));
            }
            Opcode::PointToGlyph(x) => {
                self.regs.i = u16::from(self.regs.get(x)) * GLYPH_SIZE;
            }
            Opcode::StoreDecimal(x) => {
                let value = self.regs.get(x);
                let i = self.regs.i;
                self.mem.write(i, value / 100)?;
                self.mem.write(i.wrapping_add(1), (value / 10) % 10)?;
                self.mem.write(i.wrapping_add(2), value % 10)?;
            }
            Opcode::StoreRegisters(x) => {
                for r in 0..=x {
                    self.mem
                        .write(self.regs.i.wrapping_add(u16::from(r)), self.regs.get(r))?;
                }
            }
            Opcode::LoadRegisters(x) => {
                for r in 0..=x {
                    let value = self.mem.read(self.regs.i.wrapping_add(u16::from(r)))?;
                    self.regs.set(r, value);
                }
            }
        }
        Ok(())
    }
}
