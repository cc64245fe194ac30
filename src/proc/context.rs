use log::debug;

use crate::xtensa::{CoprocessorState, Ps, Reg, RegSlot, Registers};

/// Saved register frame of a task.
///
/// The context-restore path loads every slot of `regs` back onto the CPU
/// and returns to `regs[Pc]` with `rfe`, so a task that has never run
/// needs this frame filled in as if it had been interrupted right at its
/// entry point. After the first switch out the frame only ever holds
/// live register values written by the context-switch code.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExceptionContext {
    pub regs:     Registers,
    /// PC saved while a signal handler runs on the task's behalf.
    pub saved_pc: Reg,
    /// PS saved while a signal handler runs on the task's behalf.
    pub saved_ps: Reg,
    pub cpstate:  CoprocessorState,
}

impl ExceptionContext {
    pub const ZEROED: ExceptionContext = ExceptionContext {
        regs:     Registers::zeroed(),
        saved_pc: 0,
        saved_ps: 0,
        cpstate:  CoprocessorState::empty(),
    };

    /// Zeroes every field, erasing whatever the backing memory held.
    pub fn clear(&mut self) {
        *self = Self::ZEROED;
    }

    pub fn ps(&self) -> Ps {
        Ps::from_bits(self.regs[RegSlot::Ps])
    }

    pub fn is_zeroed(&self) -> bool {
        *self == Self::ZEROED
    }

    /// Logs every non-zero field.
    pub fn dump(&self) {
        debug!("xcp: {}", self.ps());
        for (slot, value) in self.regs.iter().filter(|&(_, v)| v != 0) {
            debug!("xcp: {:>8}: 0x{:08x}", slot.name(), value);
        }
        if self.saved_pc != 0 || self.saved_ps != 0 {
            debug!("xcp: saved pc: 0x{:08x}, saved ps: 0x{:08x}", self.saved_pc, self.saved_ps);
        }
        debug!(
            "xcp: cpenable: {:#06x}, cpstored: {:#06x}",
            self.cpstate.cpenable.bits(),
            self.cpstate.cpstored.bits()
        );
    }
}
