use crate::error::VmError;

/// 12-bit CHIP-8 address, stored widened.
pub type Addr = u16;

pub const MEMORY_SIZE: usize = 4096;
pub const PROGRAM_START: Addr = 0x200;

/// Bytes per font glyph; `LD F,Vx` computes `I = Vx * GLYPH_SIZE`.
pub const GLYPH_SIZE: u16 = 5;

// 5-byte glyphs for hex digits 0-F, resident at addresses 0x000-0x04F.
const FONT: [u8; 80] = [
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

/// Flat 4 KiB byte store. The font table is baked in at construction,
/// before any ROM load; programs occupy 0x200 upward.
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        bytes[..FONT.len()].copy_from_slice(&FONT);
        Self { bytes }
    }

    pub fn read(&self, addr: Addr) -> Result<u8, VmError> {
        self.bytes
            .get(addr as usize)
            .copied()
            .ok_or(VmError::AddressError(addr))
    }

    pub fn write(&mut self, addr: Addr, value: u8) -> Result<(), VmError> {
        match self.bytes.get_mut(addr as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VmError::AddressError(addr)),
        }
    }

    /// Copies a program image in at 0x200.
    pub fn load(&mut self, rom: &[u8]) -> Result<(), VmError> {
        let start = PROGRAM_START as usize;
        let capacity = MEMORY_SIZE - start;
        if rom.len() > capacity {
            return Err(VmError::RomTooLarge {
                size: rom.len(),
                capacity,
            });
        }
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }
}
