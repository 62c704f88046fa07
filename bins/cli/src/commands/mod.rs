//! CLI command handlers.

pub mod check;
pub mod emit;
pub mod info;

pub use check::run_check;
pub use emit::{EmitInput, run_emit};
pub use info::run_info;
