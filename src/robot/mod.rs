//! Robot controller integration for Wetbench.
//!
//! The robot is an external collaborator reached through a single command
//! port; the core only distinguishes success from failure and passes the
//! controller's payloads through opaquely. This module also owns the
//! derivation of the human-readable activity signal polled by dashboard
//! clients. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Status services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
