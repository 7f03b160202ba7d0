use crate::error::VmError;
use crate::memory::{Addr, PROGRAM_START};

/// The register file: V0-VF, the index register and the program counter.
///
/// V writes go through `set` so truncation to 8 bits is explicit at the
/// call site; the index may transiently exceed 0xFFF because `ADD I,Vx`
/// does not mask.
pub struct Registers {
    v: [u8; 16],
    pub i: Addr,
    pub pc: Addr,
}

impl Registers {
    pub fn new() -> Self {
        Self {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
        }
    }

    pub fn get(&self, x: u8) -> u8 {
        self.v[x as usize]
    }

    pub fn set(&mut self, x: u8, value: u8) {
        self.v[x as usize] = value;
    }

    /// VF, the carry/borrow/collision output of arithmetic and draw.
    pub fn set_flag(&mut self, value: u8) {
        self.v[0xF] = value;
    }

    /// Steps over the next instruction (conditional skip opcodes).
    pub fn skip(&mut self) {
        self.pc += 2;
    }
}

pub const STACK_DEPTH: usize = 16;

/// Bounded LIFO of subroutine return addresses.
pub struct Stack {
    addresses: Vec<Addr>,
}

impl Stack {
    pub fn new() -> Self {
        Self {
            addresses: Vec::with_capacity(STACK_DEPTH),
        }
    }

    pub fn push(&mut self, addr: Addr) -> Result<(), VmError> {
        if self.addresses.len() == STACK_DEPTH {
            return Err(VmError::StackOverflow);
        }
        self.addresses.push(addr);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Addr, VmError> {
        self.addresses.pop().ok_or(VmError::StackUnderflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_start_zeroed_with_pc_at_program_start() {
        let regs = Registers::new();
        assert_eq!(regs.pc, 0x200);
        assert_eq!(regs.i, 0);
        assert!((0..16).all(|x| regs.get(x) == 0));
    }

    #[test]
    fn flag_register_is_vf() {
        let mut regs = Registers::new();
        regs.set_flag(1);
        assert_eq!(regs.get(0xF), 1);
    }

    #[test]
    fn stack_honors_depth_limit() {
        let mut stack = Stack::new();
        for n in 0..16 {
            stack.push(0x200 + n).unwrap();
        }
        assert_eq!(stack.push(0x300), Err(VmError::StackOverflow));
        for n in (0..16).rev() {
            assert_eq!(stack.pop(), Ok(0x200 + n));
        }
        assert_eq!(stack.pop(), Err(VmError::StackUnderflow));
    }
}
