//! Sample directory for Wetbench.
//!
//! Samples are physical specimens tracked through the fixed wet-lab protocol
//! sequence. The dashboard consumes them read-only; their lifecycle is driven
//! outside this core. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Query services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
