#![cfg_attr(not(test), no_std)]

//! Initial register state of new tasks on Xtensa cores.
//!
//! When the scheduler creates a task it calls [`initial_state`] on the
//! task's control block. The resulting [`ExceptionContext`] is what the
//! ordinary context-restore path loads on the task's first dispatch.

pub mod config;
pub mod proc;
pub mod xtensa;

pub use config::{Abi, ConfigError, CoreConfig, CpRestore};
pub use proc::{
    initial_state, initial_state_with, ControlBlock, ExceptionContext, Task, TaskId,
};
pub use xtensa::{CoprocessorState, CpSet, Ps, PsFlags, Reg, RegSlot, Registers};
