//! Infrastructure layer implementing the domain repository traits.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repositories
//! - [`memory`] - In-process repositories for tests and local runs

pub mod memory;
pub mod persistence;
