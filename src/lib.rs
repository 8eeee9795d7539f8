//! tetrad (workspace facade crate).
//!
//! Re-exports the engine, input, terminal and shared-type crates under
//! `tetrad::{core,input,term,types}` and owns the driver configuration.

pub mod config;

pub use tetrad_core as core;
pub use tetrad_input as input;
pub use tetrad_term as term;
pub use tetrad_types as types;
