//! Project and task management core.
//!
//! This module owns the in-memory project/task model, the command layer that
//! mutates it, and the read-only deadline and project groupings shared by the
//! console and web front ends. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
