use log::trace;

use super::ControlBlock;
use crate::{
    config::{self, Abi, CoreConfig},
    xtensa::{CpSet, Ps, PsFlags, RegSlot},
};

/// Fills in the register frame of a task that has never run, using the
/// process-wide core configuration.
///
/// On the next context switch to the task the restore path will `rfe` to
/// its entry point on its own stack.
pub fn initial_state<T: ControlBlock + ?Sized>(tcb: &mut T) {
    initial_state_with(tcb, config::get())
}

/// [`initial_state`] with an explicit core configuration.
pub fn initial_state_with<T: ControlBlock + ?Sized>(tcb: &mut T, config: &CoreConfig) {
    let entry = tcb.entry();
    let stack_top = tcb.stack_top();
    let id = tcb.id();
    let xcp = tcb.xcp_mut();

    xcp.clear();

    xcp.regs[RegSlot::Pc] = entry;
    // Zero return address ends a debugger backtrace here.
    xcp.regs[RegSlot::RETURN_SENTINEL] = 0;
    xcp.regs[RegSlot::SP] = stack_top;

    // INTLEVEL 0, EXCM set until `rfe` clears it, user vector mode.
    let ps = initial_ps(config.abi);
    xcp.regs[RegSlot::Ps] = ps.bits();

    if config.has_coprocessors() {
        xcp.cpstate.cpenable = config.initial_cpenable();
        xcp.cpstate.cpstored = CpSet::empty();
    }

    trace!(
        "initial_state: task {:?}: entry: 0x{:08x}, sp: 0x{:08x}, {}, cpenable: {:#06x}",
        id,
        entry,
        stack_top,
        ps,
        xcp.cpstate.cpenable.bits()
    );
}

/// The PS a new task starts with.
///
/// With the windowed ABI the task pretends to have been entered by
/// `call4`, so its first `retw` underflows like any other.
pub fn initial_ps(abi: Abi) -> Ps {
    let ps = Ps::empty().with_flags(PsFlags::UM | PsFlags::EXCM);
    match abi {
        Abi::Call0 => ps,
        Abi::Windowed => ps.with_flags(PsFlags::WOE).with_callinc(1),
    }
}
