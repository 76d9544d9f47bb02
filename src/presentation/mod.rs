//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring use cases to infrastructure
//! - Error and warning output (text/JSON)

pub mod cli;
pub mod factory;
pub mod output;
