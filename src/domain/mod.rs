//! Domain Layer
//!
//! Record shapes, key paths and the ports the use cases talk through.
//!
//! ## Structure
//!
//! - `entities/` - The three published records
//! - `value_objects/` - Validated values (Hostname, KeySegment, KvKey)
//! - `ports/` - Interface definitions for infrastructure
//!
//! This layer never touches the network or the OS directly.

pub mod entities;
pub mod ports;
pub mod value_objects;
