//! # Switchnet Core
//!
//! Switch-level conduction analysis for MOS transistor networks.
//!
//! This library provides:
//! - A directed network model of transistors, rails and output terminals
//! - A conduction evaluator that finds which outputs are reachable from VDD
//!   for a given input assignment
//! - Exhaustive input sweeps (truth tables), in parallel with `rayon`
//! - A small text language for describing networks
//!
//! ## Architecture
//!
//! - [`dsl`] - Parser for the network description language
//! - [`network`] - Network graph representation
//! - [`eval`] - Conduction evaluation and input sweeps
//! - [`report`] - Plain-text reports (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! switchnet nand.swn --set A=1 --set B=0
//! switchnet nand.swn --sweep
//! ```
//!
//! ### Library
//!
//! ```
//! use switchnet_core::{evaluate_supply, Gate, InputAssignment, Network, NodeKind};
//!
//! let mut net = Network::new();
//! net.create_node("VDD", NodeKind::Supply, None)?;
//! net.create_node("P", NodeKind::Pmos, Some(Gate::signal("A")))?;
//! net.create_node("Y", NodeKind::Output, None)?;
//! net.connect("VDD", "P")?;
//! net.connect("P", "Y")?;
//!
//! let inputs = InputAssignment::new().with("A", false);
//! let result = evaluate_supply(&net, &inputs)?;
//! assert_eq!(result.asserted_names(&net), vec!["Y"]);
//! # Ok::<(), switchnet_core::SwitchError>(())
//! ```
//!
//! ## Conduction Model
//!
//! Reachability starts at the supply rail and passes through a node only if
//! it conducts: the supply always does, a PMOS does while its gate is low, an
//! NMOS does while its gate is high. Outputs and ground end a path. No
//! voltages, timing or rail contention are modelled.

pub mod dsl;
pub mod error;
pub mod eval;
pub mod network;

#[cfg(feature = "cli")]
pub mod report;

// Re-export main types for convenience
pub use error::{Result, SwitchError};
pub use eval::{evaluate, evaluate_supply, EvaluationResult, InputAssignment};
pub use network::{Gate, Network, NodeId, NodeKind};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmSwitchNet;

/// Conventional file extension for network descriptions.
pub const DESCRIPTION_EXTENSION: &str = "swn";
