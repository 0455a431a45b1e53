//! In-memory adapter for the task store port.

mod allocator;
mod store;

pub use store::InMemoryTaskStore;
