//! Core configuration: calling convention and coprocessor policy.
//!
//! The build-time defaults come from cargo features. A kernel may install
//! its own configuration once during startup with [`init`]; afterwards it
//! is only read.

use core::fmt;

use log::info;
use spin::Once;

use crate::xtensa::CpSet;

/// Coprocessors present on the default target (the FPU of an ESP32-class
/// core).
pub const CP_PRESENT: CpSet = if cfg!(feature = "no-coproc") {
    CpSet::empty()
} else {
    CpSet::CP0
};

/// Coprocessors enabled for a new task unless restore is lazy.
pub const CP_INITSET: CpSet = if cfg!(feature = "no-coproc") {
    CpSet::empty()
} else {
    CpSet::CP0
};

/// Calling convention the kernel and tasks are compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abi {
    /// Register-windowed ABI (`call4`/`call8`/`call12`, `entry`/`retw`).
    Windowed,
    /// Plain ABI, `a0` is the return address and no windows rotate.
    Call0,
}

/// When a task's coprocessor state is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpRestore {
    /// Restore the initial enable set on every dispatch.
    Eager,
    /// Nothing is enabled until the first use faults.
    Lazy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreConfig {
    pub abi:        Abi,
    /// Coprocessors that physically exist.
    pub cp_present: CpSet,
    /// Coprocessors a new task starts with when restore is eager.
    pub cp_initset: CpSet,
    pub cp_restore: CpRestore,
}

impl CoreConfig {
    /// The configuration selected by cargo features.
    pub const BUILD: CoreConfig = CoreConfig::new(
        if cfg!(feature = "call0-abi") {
            Abi::Call0
        } else {
            Abi::Windowed
        },
        CP_PRESENT,
        CP_INITSET,
        if cfg!(feature = "cp-lazy") {
            CpRestore::Lazy
        } else {
            CpRestore::Eager
        },
    );

    pub const fn new(abi: Abi, cp_present: CpSet, cp_initset: CpSet, cp_restore: CpRestore) -> Self {
        CoreConfig {
            abi,
            cp_present,
            cp_initset,
            cp_restore,
        }
    }

    pub const fn has_coprocessors(&self) -> bool {
        !self.cp_present.is_empty()
    }

    /// The CPENABLE set a new task is dispatched with.
    ///
    /// Units named in `cp_initset` but not present are dropped.
    pub fn initial_cpenable(&self) -> CpSet {
        match self.cp_restore {
            CpRestore::Lazy => CpSet::empty(),
            CpRestore::Eager => self.cp_initset & self.cp_present,
        }
    }

    /// Checks that the initial enable set only names present units.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.cp_initset - self.cp_present;
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::InitsetNotPresent { missing })
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::BUILD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The initial enable set names coprocessors the core does not have.
    InitsetNotPresent { missing: CpSet },
    /// [`init`] was already called.
    AlreadyInitialized,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InitsetNotPresent { missing } => write!(
                f,
                "initial coprocessor set names absent units: {:#06x}",
                missing.bits()
            ),
            ConfigError::AlreadyInitialized => write!(f, "core configuration already initialized"),
        }
    }
}

static CONFIG: Once<CoreConfig> = Once::new();

/// Installs the process-wide configuration.
///
/// Must run once during startup, before the first task is created.
pub fn init(config: CoreConfig) -> Result<&'static CoreConfig, ConfigError> {
    config.validate()?;

    let mut installed = false;
    let stored = CONFIG.call_once(|| {
        installed = true;
        config
    });
    if !installed {
        return Err(ConfigError::AlreadyInitialized);
    }

    info!(
        "config: abi: {:?}, cp present: {:#06x}, cp initset: {:#06x}, restore: {:?}",
        stored.abi,
        stored.cp_present.bits(),
        stored.cp_initset.bits(),
        stored.cp_restore
    );
    Ok(stored)
}

/// The process-wide configuration, or [`CoreConfig::BUILD`] if [`init`]
/// never ran.
pub fn get() -> &'static CoreConfig {
    CONFIG.get().unwrap_or(&CoreConfig::BUILD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eager(present: CpSet, initset: CpSet) -> CoreConfig {
        CoreConfig::new(Abi::Windowed, present, initset, CpRestore::Eager)
    }

    #[test]
    fn eager_cpenable_is_intersection() {
        let cfg = eager(CpSet::CP0 | CpSet::CP1, CpSet::CP1 | CpSet::CP3);
        assert_eq!(cfg.initial_cpenable(), CpSet::CP1);
    }

    #[test]
    fn lazy_cpenable_is_empty() {
        let cfg = CoreConfig::new(Abi::Call0, CpSet::all(), CpSet::all(), CpRestore::Lazy);
        assert_eq!(cfg.initial_cpenable(), CpSet::empty());
    }

    #[test]
    fn validate_reports_missing_units() {
        assert_eq!(eager(CpSet::CP0 | CpSet::CP1, CpSet::CP0).validate(), Ok(()));
        assert_eq!(eager(CpSet::CP0, CpSet::empty()).validate(), Ok(()));
        assert_eq!(
            eager(CpSet::CP0, CpSet::CP0 | CpSet::CP2).validate(),
            Err(ConfigError::InitsetNotPresent { missing: CpSet::CP2 })
        );
        assert_eq!(
            eager(CpSet::empty(), CpSet::CP0).validate(),
            Err(ConfigError::InitsetNotPresent { missing: CpSet::CP0 })
        );
    }

    #[test]
    fn build_config_follows_features() {
        let cfg = CoreConfig::BUILD;
        assert_eq!(cfg.abi == Abi::Call0, cfg!(feature = "call0-abi"));
        assert_eq!(cfg.cp_restore == CpRestore::Lazy, cfg!(feature = "cp-lazy"));
        assert_eq!(cfg.has_coprocessors(), !cfg!(feature = "no-coproc"));
        assert_eq!(cfg.validate(), Ok(()));
    }
}
