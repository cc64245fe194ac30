use bitflags::bitflags;

bitflags! {
    /// A set of coprocessors, laid out as in the CPENABLE register.
    #[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
    pub struct CpSet: u16 {
        const CP0 = 1 << 0;
        const CP1 = 1 << 1;
        const CP2 = 1 << 2;
        const CP3 = 1 << 3;
        const CP4 = 1 << 4;
        const CP5 = 1 << 5;
        const CP6 = 1 << 6;
        const CP7 = 1 << 7;
    }
}

/// Per-task coprocessor bookkeeping read by the lazy save/restore logic.
#[repr(C)]
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub struct CoprocessorState {
    /// Coprocessors enabled when the task is dispatched.
    pub cpenable: CpSet,
    /// Coprocessors whose state is saved and waiting to be restored.
    pub cpstored: CpSet,
}

impl CoprocessorState {
    pub const fn empty() -> Self {
        CoprocessorState {
            cpenable: CpSet::empty(),
            cpstored: CpSet::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cpenable.is_empty() && self.cpstored.is_empty()
    }
}
