//! The ordered stack of active filters for one editing session.

mod error;
mod filter_stack;
mod render;

pub use error::StackError;
pub use filter_stack::{ActiveFilter, Activation, FilterStack, StepDirection, Toggle, ValueUpdate};
pub use render::RenderParams;
