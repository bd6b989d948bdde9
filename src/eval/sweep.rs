//! Exhaustive input sweeps.

use std::collections::HashSet;

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::evaluator::{check_signals, evaluate};
use super::{InputAssignment, DEFAULT_MAX_SWEEP_SIGNALS, MAX_SWEEP_SIGNALS};
use crate::error::{Result, SwitchError};
use crate::network::{Network, NodeId};

/// Configuration for input sweeps.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Largest number of signals accepted (the table has `2^n` rows).
    /// Never more than [`MAX_SWEEP_SIGNALS`].
    pub max_signals: usize,
    /// Evaluate rows on the rayon pool when the `parallel` feature is on.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_signals: DEFAULT_MAX_SWEEP_SIGNALS,
            parallel: true,
        }
    }
}

impl SweepConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signal limit, clamped to [`MAX_SWEEP_SIGNALS`].
    pub fn with_max_signals(mut self, max_signals: usize) -> Self {
        self.max_signals = max_signals.min(MAX_SWEEP_SIGNALS);
        self
    }

    /// Enable or disable parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// One row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthRow {
    /// Signal levels, in the table's signal order
    pub levels: Vec<bool>,
    /// Asserted outputs in node creation order
    pub asserted: Vec<NodeId>,
}

/// Asserted outputs for every assignment over a set of signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    /// Swept signals, most significant first
    pub signals: Vec<String>,
    /// Row `i` holds the binary expansion of `i`
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Rebuild the assignment of a row.
    pub fn assignment(&self, row: &TruthRow) -> InputAssignment {
        self.signals
            .iter()
            .cloned()
            .zip(row.levels.iter().copied())
            .collect()
    }
}

/// Levels of row `index` over `width` signals, most significant first.
fn row_levels(index: usize, width: usize) -> Vec<bool> {
    (0..width)
        .map(|bit| (index >> (width - 1 - bit)) & 1 == 1)
        .collect()
}

/// Evaluate the network from its supply for every assignment over `signals`.
pub fn sweep<S: AsRef<str>>(network: &Network, signals: &[S], config: &SweepConfig) -> Result<TruthTable> {
    let start = network.supply().ok_or(SwitchError::MissingSupply)?;

    // `max_signals` is a public field and can bypass the builder clamp.
    let max = config.max_signals.min(MAX_SWEEP_SIGNALS);
    if signals.len() > max {
        return Err(SwitchError::TooManySignals {
            count: signals.len(),
            max,
        });
    }

    let mut seen = HashSet::new();
    for signal in signals {
        if !seen.insert(signal.as_ref()) {
            return Err(SwitchError::DuplicateSignal {
                signal: signal.as_ref().to_string(),
            });
        }
    }

    let signals: Vec<String> = signals.iter().map(|s| s.as_ref().to_string()).collect();
    let width = signals.len();

    // Catch a signal the table does not cover before fanning out.
    let all_low: InputAssignment = signals.iter().map(|s| (s.as_str(), false)).collect();
    check_signals(network, &all_low)?;

    let run = |index: usize| -> Result<TruthRow> {
        let levels = row_levels(index, width);
        let inputs: InputAssignment = signals
            .iter()
            .map(String::as_str)
            .zip(levels.iter().copied())
            .collect();
        let result = evaluate(network, &inputs, start)?;
        Ok(TruthRow {
            levels,
            asserted: result.asserted().iter().copied().collect(),
        })
    };

    let total = 1usize << width;
    debug!("sweeping {} signals ({} rows)", width, total);

    #[cfg(feature = "parallel")]
    let rows = if config.parallel {
        (0..total).into_par_iter().map(run).collect::<Result<Vec<_>>>()?
    } else {
        (0..total).map(run).collect::<Result<Vec<_>>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let rows = (0..total).map(run).collect::<Result<Vec<_>>>()?;

    Ok(TruthTable { signals, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Gate, NodeKind};

    /// Two-input pull network from the reference circuit.
    fn nand_like() -> Network {
        let ast = crate::dsl::parse(
            ".supply VDD\n.ground GND\n.output OUT\n\
             PMOS T1 A\nPMOS T2 B\nNMOS T3 A\nNMOS T4 B\n\
             .edge VDD T1 T2\n.edge T1 T3 OUT\n.edge T2 T3 OUT\n.edge T3 T4\n.edge T4 GND\n",
        )
        .unwrap();
        Network::from_ast(&ast).unwrap()
    }

    #[test]
    fn test_row_levels_msb_first() {
        assert_eq!(row_levels(0, 2), vec![false, false]);
        assert_eq!(row_levels(1, 2), vec![false, true]);
        assert_eq!(row_levels(2, 2), vec![true, false]);
        assert_eq!(row_levels(0, 0), Vec::<bool>::new());
    }

    #[test]
    fn test_nand_truth_table() {
        let net = nand_like();
        let out = net.find_node("OUT").unwrap();
        let table = sweep(&net, &["A", "B"], &SweepConfig::default()).unwrap();

        assert_eq!(table.signals, vec!["A", "B"]);
        let asserted: Vec<bool> = table.rows.iter().map(|r| r.asserted == vec![out]).collect();
        assert_eq!(asserted, vec![true, true, true, false]);

        let last = table.assignment(&table.rows[3]);
        assert_eq!(last.get("A"), Some(true));
        assert_eq!(last.get("B"), Some(true));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let net = nand_like();
        let par = sweep(&net, &["B", "A"], &SweepConfig::new().with_parallel(true)).unwrap();
        let seq = sweep(&net, &["B", "A"], &SweepConfig::new().with_parallel(false)).unwrap();
        assert_eq!(par, seq);
    }

    #[test]
    fn test_sweep_errors() {
        let net = nand_like();

        let err = sweep(&net, &["A"], &SweepConfig::default()).unwrap_err();
        assert!(matches!(err, SwitchError::UnknownSignal { ref signal, .. } if signal == "B"));

        let err = sweep(&net, &["A", "B"], &SweepConfig::new().with_max_signals(1)).unwrap_err();
        assert!(matches!(err, SwitchError::TooManySignals { count: 2, max: 1 }));

        let mut bare = Network::new();
        bare.create_node("T1", NodeKind::Nmos, Some(Gate::signal("A"))).unwrap();
        let err = sweep(&bare, &["A"], &SweepConfig::default()).unwrap_err();
        assert!(matches!(err, SwitchError::MissingSupply));
    }

    #[test]
    fn test_signal_limit_never_overflows_row_count() {
        let net = nand_like();
        let names: Vec<String> = (0..usize::BITS).map(|i| format!("S{}", i)).collect();

        let config = SweepConfig::new().with_max_signals(usize::BITS as usize);
        assert_eq!(config.max_signals, MAX_SWEEP_SIGNALS);
        let err = sweep(&net, &names, &config).unwrap_err();
        assert!(matches!(
            err,
            SwitchError::TooManySignals { count, max } if count == usize::BITS as usize && max == MAX_SWEEP_SIGNALS
        ));

        // A limit written straight into the field is clamped too.
        let config = SweepConfig {
            max_signals: usize::MAX,
            parallel: false,
        };
        let err = sweep(&net, &names, &config).unwrap_err();
        assert!(matches!(err, SwitchError::TooManySignals { max, .. } if max == MAX_SWEEP_SIGNALS));
    }

    #[test]
    fn test_duplicate_signal_rejected() {
        let net = nand_like();
        let err = sweep(&net, &["A", "B", "A"], &SweepConfig::default()).unwrap_err();
        assert!(matches!(err, SwitchError::DuplicateSignal { ref signal } if signal == "A"));
    }

    #[test]
    fn test_extra_signals_are_harmless() {
        let net = nand_like();
        let table = sweep(&net, &["A", "B", "C"], &SweepConfig::default()).unwrap();
        assert_eq!(table.rows.len(), 8);
        assert_eq!(table.rows[6].asserted, Vec::<NodeId>::new());
        assert_eq!(table.rows[7].asserted, Vec::<NodeId>::new());
    }
}
