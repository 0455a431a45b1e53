//! Adapter implementations for task management ports.

pub mod clock;
pub mod memory;
