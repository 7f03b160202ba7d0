use thiserror::Error;

/// Fatal interpreter faults. None of these are recoverable for the current
/// program run; the host may `reset()` before loading another ROM.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VmError {
    #[error("unknown opcode {0:#06X}")]
    BadOpcode(u16),

    #[error("call stack overflow")]
    StackOverflow,

    #[error("return with an empty call stack")]
    StackUnderflow,

    #[error("memory access out of bounds at {0:#06X}")]
    AddressError(u16),

    #[error("ROM is {size} bytes, only {capacity} available past the program start")]
    RomTooLarge { size: usize, capacity: usize },
}
