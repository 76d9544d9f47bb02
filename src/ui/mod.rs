//! Terminal presentation helpers shared by the console sink and error output.

pub mod terminal;
pub mod theme;

pub use terminal::{detect_capabilities, TerminalCapabilities};
