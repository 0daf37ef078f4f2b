//! Wire types and pure policy shared by the GearGuard client.
//!
//! Nothing in this crate touches the browser; everything here is
//! testable on the host.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
