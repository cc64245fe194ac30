use super::ExceptionContext;
use crate::xtensa::Reg;

pub type TaskId = u64;

/// What the initial-state builder needs from a task control block.
///
/// The scheduler owns the control block; the builder only reads the entry
/// point and the prepared stack top, and overwrites the embedded context.
pub trait ControlBlock {
    /// Address execution starts at.
    fn entry(&self) -> Reg;

    /// Aligned top of the task's stack, as prepared by the stack allocator.
    fn stack_top(&self) -> Reg;

    fn xcp_mut(&mut self) -> &mut ExceptionContext;

    fn id(&self) -> Option<TaskId> {
        None
    }
}

pub struct Task {
    pub pid:       TaskId,
    pub entry:     Reg,
    /// Top of the stack frame handed to the task, already adjusted for
    /// alignment by whoever allocated it.
    pub stack_top: Reg,
    pub xcp:       ExceptionContext,
}

impl Task {
    pub const fn new(pid: TaskId, entry: Reg, stack_top: Reg) -> Self {
        Task {
            pid,
            entry,
            stack_top,
            xcp: ExceptionContext::ZEROED,
        }
    }
}

impl ControlBlock for Task {
    fn entry(&self) -> Reg {
        self.entry
    }

    fn stack_top(&self) -> Reg {
        self.stack_top
    }

    fn xcp_mut(&mut self) -> &mut ExceptionContext {
        &mut self.xcp
    }

    fn id(&self) -> Option<TaskId> {
        Some(self.pid)
    }
}
