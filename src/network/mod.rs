//! Transistor network representation.
//!
//! This module provides the in-memory model of a switch network after
//! parsing. The [`Network`] struct holds all nodes, their kinds and gates,
//! and the directed conduction edges between them.

mod graph;
mod types;

pub use graph::Network;
pub use types::*;
