//! Adapter implementations for the task store ports.

pub mod memory;
