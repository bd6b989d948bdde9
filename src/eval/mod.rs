//! Conduction evaluation.
//!
//! This module answers the switch-level question: given a [`Network`] and an
//! [`InputAssignment`], which nodes are reachable from the supply rail through
//! transistors that are currently on, and which output terminals does that
//! reach?
//!
//! ## Conduction rules
//!
//! | Kind | Passes reachability on when |
//! |------|-----------------------------|
//! | Supply | always |
//! | PMOS | gate is low |
//! | NMOS | gate is high |
//! | Output | never (recorded as asserted) |
//! | Ground | never |
//!
//! Only the supply side is traced. An output that is simultaneously reachable
//! from ground (a fight) is reported as asserted without any warning; callers
//! that need short detection must trace the pull-down network themselves.
//!
//! [`Network`]: crate::network::Network

mod assignment;
mod evaluator;
mod sweep;

pub use assignment::{parse_level, InputAssignment};
pub use evaluator::{conducts, evaluate, evaluate_supply, gate_level, live_edges, EvaluationResult};
pub use sweep::{sweep, SweepConfig, TruthRow, TruthTable};

/// Default upper bound on swept signals (65536 rows).
pub const DEFAULT_MAX_SWEEP_SIGNALS: usize = 16;

/// Hard upper bound on swept signals; `2^n` rows must fit in a `usize`.
pub const MAX_SWEEP_SIGNALS: usize = usize::BITS as usize - 1;
