//! User-facing output
//!
//! Commands never print directly. They write through [`StatusDisplay`] into
//! whatever sink they were handed, so tests can capture the exact text.

mod status;
mod styling;

pub use status::StatusDisplay;
pub use styling::Styling;
