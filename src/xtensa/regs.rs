use core::ops::{Index, IndexMut};

/// One Xtensa register word.
pub type Reg = u32;

/// Slots of the saved register frame, in the order the context-restore
/// path lays them out.
///
/// The builder and the restore routine both address the frame through this
/// enumeration, never through raw offsets.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegSlot {
    Pc = 0,
    Ps,
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    A7,
    A8,
    A9,
    A10,
    A11,
    A12,
    A13,
    A14,
    A15,
    Sar,
    ExcCause,
    ExcVaddr,
    Lbeg,
    Lend,
    Lcount,
    Tmp0,
}

impl RegSlot {
    /// Number of slots in a frame.
    pub const COUNT: usize = RegSlot::Tmp0 as usize + 1;

    /// `a0` holds the return address; zero terminates a backtrace.
    pub const RETURN_SENTINEL: RegSlot = RegSlot::A0;

    /// `a1` is the stack pointer in both ABIs.
    pub const SP: RegSlot = RegSlot::A1;

    /// Every slot, in index order.
    pub const ALL: [RegSlot; RegSlot::COUNT] = [
        RegSlot::Pc,
        RegSlot::Ps,
        RegSlot::A0,
        RegSlot::A1,
        RegSlot::A2,
        RegSlot::A3,
        RegSlot::A4,
        RegSlot::A5,
        RegSlot::A6,
        RegSlot::A7,
        RegSlot::A8,
        RegSlot::A9,
        RegSlot::A10,
        RegSlot::A11,
        RegSlot::A12,
        RegSlot::A13,
        RegSlot::A14,
        RegSlot::A15,
        RegSlot::Sar,
        RegSlot::ExcCause,
        RegSlot::ExcVaddr,
        RegSlot::Lbeg,
        RegSlot::Lend,
        RegSlot::Lcount,
        RegSlot::Tmp0,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            RegSlot::Pc => "pc",
            RegSlot::Ps => "ps",
            RegSlot::A0 => "a0",
            RegSlot::A1 => "a1",
            RegSlot::A2 => "a2",
            RegSlot::A3 => "a3",
            RegSlot::A4 => "a4",
            RegSlot::A5 => "a5",
            RegSlot::A6 => "a6",
            RegSlot::A7 => "a7",
            RegSlot::A8 => "a8",
            RegSlot::A9 => "a9",
            RegSlot::A10 => "a10",
            RegSlot::A11 => "a11",
            RegSlot::A12 => "a12",
            RegSlot::A13 => "a13",
            RegSlot::A14 => "a14",
            RegSlot::A15 => "a15",
            RegSlot::Sar => "sar",
            RegSlot::ExcCause => "exccause",
            RegSlot::ExcVaddr => "excvaddr",
            RegSlot::Lbeg => "lbeg",
            RegSlot::Lend => "lend",
            RegSlot::Lcount => "lcount",
            RegSlot::Tmp0 => "tmp0",
        }
    }
}

/// The general purpose and special register values of a saved frame.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registers([Reg; RegSlot::COUNT]);

impl Registers {
    pub const fn zeroed() -> Self {
        Registers([0; RegSlot::COUNT])
    }

    /// Iterates over `(slot, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (RegSlot, Reg)> + '_ {
        RegSlot::ALL.iter().map(move |&slot| (slot, self[slot]))
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Index<RegSlot> for Registers {
    type Output = Reg;

    fn index(&self, slot: RegSlot) -> &Self::Output {
        &self.0[slot.index()]
    }
}

impl IndexMut<RegSlot> for Registers {
    fn index_mut(&mut self, slot: RegSlot) -> &mut Self::Output {
        &mut self.0[slot.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_dense() {
        assert_eq!(RegSlot::COUNT, 25);
        for (i, slot) in RegSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i, "{} is out of place", slot.name());
        }
    }

    #[test]
    fn sentinel_and_sp_are_a0_a1() {
        assert_eq!(RegSlot::RETURN_SENTINEL, RegSlot::A0);
        assert_eq!(RegSlot::SP, RegSlot::A1);
        assert_eq!(RegSlot::A1.index(), RegSlot::A0.index() + 1);
    }

    #[test]
    fn index_by_slot() {
        let mut regs = Registers::zeroed();
        regs[RegSlot::Lcount] = 7;
        assert_eq!(regs[RegSlot::Lcount], 7);
        assert_eq!(regs.iter().filter(|&(_, v)| v != 0).count(), 1);
    }
}
