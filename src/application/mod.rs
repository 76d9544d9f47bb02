//! Application Layer
//!
//! Use cases that orchestrate the flow between config, the hostname
//! resolver, the store and the event sink. Record shapes and key rules
//! live in the domain layer.
//!
//! ## Use Cases
//!
//! - `PublishUseCase` - PUT node descriptor, version map and deploy config
//! - `VerifyUseCase` - Read the records back and check them
//! - `ClearUseCase` - Delete the node and cluster subtrees

pub mod clear;
pub mod publish;
mod report;
mod seed_keys;
#[cfg(test)]
pub(crate) mod testing;
pub mod verify;

pub use clear::{ClearOptions, ClearUseCase};
pub use publish::{PublishOptions, PublishUseCase};
pub use report::{ClearReport, ItemOutcome, PublishReport, Report, VerifyReport};
pub use seed_keys::SeedKeys;
pub use verify::VerifyUseCase;
