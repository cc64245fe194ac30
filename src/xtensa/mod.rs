//! Xtensa register frame, PS and coprocessor definitions shared with the
//! context-restore path.

pub use self::{
    coproc::{CoprocessorState, CpSet},
    corebits::{Ps, PsFlags},
    regs::{Reg, RegSlot, Registers},
};

pub mod coproc;
pub mod corebits;
pub mod regs;
