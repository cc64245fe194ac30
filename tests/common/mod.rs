use log::LevelFilter;
use xtensa_initstate::{Abi, CoreConfig, CpRestore, CpSet, ExceptionContext, Reg, RegSlot};

pub fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(LevelFilter::Debug)
        .try_init();
}

/// Every combination of ABI, restore policy and a few present/initial
/// coprocessor sets.
pub fn all_configs() -> Vec<CoreConfig> {
    let sets = [
        CpSet::empty(),
        CpSet::CP0,
        CpSet::CP0 | CpSet::CP1,
        CpSet::CP0 | CpSet::CP1 | CpSet::CP2,
        CpSet::all(),
    ];

    let mut configs = Vec::new();
    for abi in [Abi::Windowed, Abi::Call0] {
        for restore in [CpRestore::Eager, CpRestore::Lazy] {
            for present in sets {
                for initset in sets {
                    configs.push(CoreConfig::new(abi, present, initset, restore));
                }
            }
        }
    }
    configs
}

/// The context a new task must end up with, written out field by field.
pub fn expected_context(config: &CoreConfig, entry: Reg, stack_top: Reg) -> ExceptionContext {
    let mut xcp = ExceptionContext::ZEROED;
    xcp.regs[RegSlot::Pc] = entry;
    xcp.regs[RegSlot::A1] = stack_top;
    xcp.regs[RegSlot::Ps] = match config.abi {
        Abi::Call0 => 0x0000_0030,
        Abi::Windowed => 0x0005_0030,
    };
    if !config.cp_present.is_empty() && config.cp_restore == CpRestore::Eager {
        xcp.cpstate.cpenable = config.cp_initset & config.cp_present;
    }
    xcp
}

/// Fills a context with garbage, as recycled memory would hold.
pub fn dirty_context() -> ExceptionContext {
    let mut xcp = ExceptionContext::ZEROED;
    for slot in RegSlot::ALL {
        xcp.regs[slot] = 0xa5a5_0000 | slot.index() as Reg;
    }
    xcp.saved_pc = 0xdead_beef;
    xcp.saved_ps = 0x0004_0f3f;
    xcp.cpstate.cpenable = CpSet::all();
    xcp.cpstate.cpstored = CpSet::all();
    xcp
}
