use core::fmt;

use bit_field::BitField;
use bitflags::bitflags;

use super::regs::Reg;

bitflags! {
    /// Single-bit fields of the PS register.
    #[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
    pub struct PsFlags: Reg {
        const EXCM = 1 << 4;  // EXCEPTION MODE, masks interrupts
        const UM   = 1 << 5;  // USER VECTOR MODE
        const WOE  = 1 << 18; // WINDOW OVERFLOW ENABLE
    }
}

const INTLEVEL: core::ops::Range<usize> = 0..4;
const RING: core::ops::Range<usize> = 6..8;
const OWB: core::ops::Range<usize> = 8..12;
const CALLINC: core::ops::Range<usize> = 16..18;

/// A PS (processor state) register value.
///
/// [19..31] - reserved.
/// [18]     - WOE.
/// [16..17] - CALLINC, window increment of the pending call.
/// [8..11]  - OWB, old window base.
/// [6..7]   - RING.
/// [5]      - UM.
/// [4]      - EXCM.
/// [0..3]   - INTLEVEL.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ps(Reg);

impl Ps {
    pub const fn empty() -> Self {
        Ps(0)
    }

    pub const fn from_bits(bits: Reg) -> Self {
        Ps(bits)
    }

    pub const fn bits(&self) -> Reg {
        self.0
    }

    /// Encodes a CALLINC field. `1` is the increment left behind by `call4`.
    pub const fn callinc(n: Reg) -> Reg {
        (n & 0x3) << CALLINC.start
    }

    pub fn with_flags(mut self, flags: PsFlags) -> Self {
        self.0 |= flags.bits();
        self
    }

    pub fn with_callinc(mut self, n: Reg) -> Self {
        self.0.set_bits(CALLINC, n);
        self
    }

    pub fn flags(&self) -> PsFlags {
        PsFlags::from_bits_truncate(self.0)
    }

    pub fn contains(&self, flags: PsFlags) -> bool {
        self.flags().contains(flags)
    }

    pub fn intlevel(&self) -> Reg {
        self.0.get_bits(INTLEVEL)
    }

    pub fn ring(&self) -> Reg {
        self.0.get_bits(RING)
    }

    pub fn owb(&self) -> Reg {
        self.0.get_bits(OWB)
    }

    pub fn window_increment(&self) -> Reg {
        self.0.get_bits(CALLINC)
    }
}

impl From<Ps> for Reg {
    fn from(ps: Ps) -> Self {
        ps.0
    }
}

impl fmt::Display for Ps {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "PS(0x{:08x}: intlevel: {}, excm: {}, um: {}, ring: {}, owb: {}, callinc: {}, woe: {})",
            self.0,
            self.intlevel(),
            self.contains(PsFlags::EXCM) as u8,
            self.contains(PsFlags::UM) as u8,
            self.ring(),
            self.owb(),
            self.window_increment(),
            self.contains(PsFlags::WOE) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_bit_positions() {
        assert_eq!(PsFlags::EXCM.bits(), 0x0000_0010);
        assert_eq!(PsFlags::UM.bits(), 0x0000_0020);
        assert_eq!(PsFlags::WOE.bits(), 0x0004_0000);
        assert_eq!(Ps::callinc(1), 0x0001_0000);
        assert_eq!(Ps::callinc(3), 0x0003_0000);
    }

    #[test]
    fn decode_fields() {
        let ps = Ps::from_bits(0x0004_0325 | Ps::callinc(2));
        assert_eq!(ps.intlevel(), 5);
        assert_eq!(ps.ring(), 0);
        assert_eq!(ps.owb(), 3);
        assert_eq!(ps.window_increment(), 2);
        assert!(ps.contains(PsFlags::UM | PsFlags::WOE));
        assert!(!ps.contains(PsFlags::EXCM));
    }

    #[test]
    fn with_callinc_matches_const_encoding() {
        let ps = Ps::empty().with_flags(PsFlags::WOE).with_callinc(1);
        assert_eq!(ps.bits(), PsFlags::WOE.bits() | Ps::callinc(1));
    }
}
