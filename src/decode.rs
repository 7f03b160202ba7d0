use crate::error::VmError;
use crate::memory::Addr;

/// A fully decoded instruction. One variant per opcode pattern; anything
/// that matches none of the 35 patterns is a `BadOpcode` error, never a
/// silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// 00E0
    ClearScreen,
    /// 00EE
    Return,
    /// 1NNN
    Jump(Addr),
    /// 2NNN
    Call(Addr),
    /// 3XNN
    SkipEqualConstant(u8, u8),
    /// 4XNN
    SkipNotEqualConstant(u8, u8),
    /// 5XY0
    SkipEqualRegister(u8, u8),
    /// 6XNN
    SetRegister(u8, u8),
    /// 7XNN, no carry flag
    AddToRegister(u8, u8),
    /// 8XY0
    CopyRegister(u8, u8),
    /// 8XY1
    Or(u8, u8),
    /// 8XY2
    And(u8, u8),
    /// 8XY3
    Xor(u8, u8),
    /// 8XY4
    Add(u8, u8),
    /// 8XY5
    SubtractForward(u8, u8),
    /// 8XY6, Vy ignored
    RightShift(u8),
    /// 8XY7
    SubtractBackward(u8, u8),
    /// 8XYE, Vy ignored
    LeftShift(u8),
    /// 9XY0
    SkipNotEqualRegister(u8, u8),
    /// ANNN
    SetIndex(Addr),
    /// BNNN
    JumpWithOffset(Addr),
    /// CXNN
    Random(u8, u8),
    /// DXYN
    Draw(u8, u8, u8),
    /// EX9E
    SkipIfPressed(u8),
    /// EXA1
    SkipIfNotPressed(u8),
    /// FX07
    ReadDelay(u8),
    /// FX0A, suspends until a key press
    GetKey(u8),
    /// FX15
    SetDelay(u8),
    /// FX18
    SetSound(u8),
    /// FX1E, unmasked
    AddToIndex(u8),
    /// FX29
    PointToGlyph(u8),
    /// FX33
    StoreDecimal(u8),
    /// FX55
    StoreRegisters(u8),
    /// FX65
    LoadRegisters(u8),
}

impl Opcode {
    pub fn decode(ins: u16) -> Result<Self, VmError> {
        let x = ((ins >> 8) & 0xF) as u8;
        let y = ((ins >> 4) & 0xF) as u8;
        let n = (ins & 0xF) as u8;
        let nn = (ins & 0xFF) as u8;
        let nnn = ins & 0xFFF;

        let op = match ins >> 12 {
            0x0 => match ins {
                0x00E0 => Self::ClearScreen,
                0x00EE => Self::Return,
                _ => return Err(VmError::BadOpcode(ins)),
            },
            0x1 => Self::Jump(nnn),
            0x2 => Self::Call(nnn),
            0x3 => Self::SkipEqualConstant(x, nn),
            0x4 => Self::SkipNotEqualConstant(x, nn),
            0x5 if n == 0 => Self::SkipEqualRegister(x, y),
            0x6 => Self::SetRegister(x, nn),
            0x7 => Self::AddToRegister(x, nn),
            0x8 => match n {
                0x0 => Self::CopyRegister(x, y),
                0x1 => Self::Or(x, y),
                0x2 => Self::And(x, y),
                0x3 => Self::Xor(x, y),
                0x4 => Self::Add(x, y),
                0x5 => Self::SubtractForward(x, y),
                0x6 => Self::RightShift(x),
                0x7 => Self::SubtractBackward(x, y),
                0xE => Self::LeftShift(x),
                _ => return Err(VmError::BadOpcode(ins)),
            },
            0x9 if n == 0 => Self::SkipNotEqualRegister(x, y),
            0xA => Self::SetIndex(nnn),
            0xB => Self::JumpWithOffset(nnn),
            0xC => Self::Random(x, nn),
            0xD => Self::Draw(x, y, n),
            0xE => match nn {
                0x9E => Self::SkipIfPressed(x),
                0xA1 => Self::SkipIfNotPressed(x),
                _ => return Err(VmError::BadOpcode(ins)),
            },
            0xF => match nn {
                0x07 => Self::ReadDelay(x),
                0x0A => Self::GetKey(x),
                0x15 => Self::SetDelay(x),
                0x18 => Self::SetSound(x),
                0x1E => Self::AddToIndex(x),
                0x29 => Self::PointToGlyph(x),
                0x33 => Self::StoreDecimal(x),
                0x55 => Self::StoreRegisters(x),
                0x65 => Self::LoadRegisters(x),
                _ => return Err(VmError::BadOpcode(ins)),
            },
            _ => return Err(VmError::BadOpcode(ins)),
        };
        Ok(op)
    }
}
