pub use self::{
    builder::{initial_ps, initial_state, initial_state_with},
    context::ExceptionContext,
    task::*,
};

mod builder;
mod context;
mod task;
