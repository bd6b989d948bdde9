//! Conduction traversal.

use std::collections::BTreeSet;

use log::{debug, trace};

use super::InputAssignment;
use crate::error::{Result, SwitchError};
use crate::network::{Gate, Network, Node, NodeId, NodeKind};

/// Outcome of one conduction traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    /// Node the traversal started from
    pub start: NodeId,
    visited: BTreeSet<NodeId>,
    asserted: BTreeSet<NodeId>,
    order: Vec<NodeId>,
}

impl EvaluationResult {
    /// All nodes reached from the start node.
    pub fn visited(&self) -> &BTreeSet<NodeId> {
        &self.visited
    }

    /// Output terminals among the visited nodes.
    pub fn asserted(&self) -> &BTreeSet<NodeId> {
        &self.asserted
    }

    /// Visited nodes in the order they were expanded.
    pub fn visit_order(&self) -> &[NodeId] {
        &self.order
    }

    /// Whether the traversal reached `node`.
    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.contains(&node)
    }

    /// Whether `node` is an output the traversal reached.
    pub fn is_asserted(&self, node: NodeId) -> bool {
        self.asserted.contains(&node)
    }

    /// Names of the asserted outputs, in node creation order.
    pub fn asserted_names<'n>(&self, network: &'n Network) -> Vec<&'n str> {
        self.asserted
            .iter()
            .filter_map(|&id| network.node_name(id))
            .collect()
    }
}

/// Resolve a transistor gate against the assignment.
fn resolve_gate(node: &Node, gate: &Gate, inputs: &InputAssignment) -> Result<bool> {
    match gate {
        Gate::Level(level) => Ok(*level),
        Gate::Signal(signal) => inputs.get(signal).ok_or_else(|| SwitchError::UnknownSignal {
            signal: signal.clone(),
            node: node.name.clone(),
        }),
    }
}

/// Whether reachability passes through this node.
fn node_conducts(node: &Node, inputs: &InputAssignment) -> Result<bool> {
    // A transistor without a gate cannot be constructed.
    let level = || match &node.gate {
        Some(gate) => resolve_gate(node, gate, inputs),
        None => Err(SwitchError::invalid_gate(&node.name, node.kind, "transistor requires a gate")),
    };

    match node.kind {
        NodeKind::Supply => Ok(true),
        NodeKind::Pmos => Ok(!level()?),
        NodeKind::Nmos => level(),
        NodeKind::Output | NodeKind::Ground => Ok(false),
    }
}

fn lookup(network: &Network, id: NodeId) -> Result<&Node> {
    network
        .node(id)
        .ok_or_else(|| SwitchError::unknown_node(id.to_string()))
}

/// Fail before traversal if any symbolic gate lacks a value.
pub(crate) fn check_signals(network: &Network, inputs: &InputAssignment) -> Result<()> {
    for node in network.nodes() {
        if let Some(signal) = node.gate.as_ref().and_then(Gate::signal_name) {
            if !inputs.contains(signal) {
                return Err(SwitchError::UnknownSignal {
                    signal: signal.to_string(),
                    node: node.name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Resolved gate level of a node, `None` for rails and outputs.
pub fn gate_level(network: &Network, id: NodeId, inputs: &InputAssignment) -> Result<Option<bool>> {
    let node = lookup(network, id)?;
    node.gate
        .as_ref()
        .map(|gate| resolve_gate(node, gate, inputs))
        .transpose()
}

/// Whether a node propagates reachability under the assignment.
pub fn conducts(network: &Network, id: NodeId, inputs: &InputAssignment) -> Result<bool> {
    node_conducts(lookup(network, id)?, inputs)
}

/// Edges whose source node conducts: rail edges and edges leaving an "on"
/// transistor.
pub fn live_edges(network: &Network, inputs: &InputAssignment) -> Result<Vec<(NodeId, NodeId)>> {
    check_signals(network, inputs)?;

    let mut live = Vec::new();
    for node in network.nodes() {
        if node_conducts(node, inputs)? {
            live.extend(network.neighbors(node.id).iter().map(|&to| (node.id, to)));
        }
    }
    Ok(live)
}

/// Compute every node reachable from `start` through conducting nodes.
///
/// The walk is an iterative depth-first search with an explicit stack, so
/// depth is bounded by memory rather than call depth. Each node is expanded
/// at most once, which makes the walk linear in nodes plus edges and
/// terminates on cycles.
///
/// Every symbolic gate in the network must have a value in `inputs`, even
/// when its transistor is unreachable.
///
/// An output reachable from both rails is not detected; only the supply side
/// is traced.
pub fn evaluate(network: &Network, inputs: &InputAssignment, start: NodeId) -> Result<EvaluationResult> {
    lookup(network, start)?;
    check_signals(network, inputs)?;

    let mut seen = vec![false; network.len()];
    let mut order = Vec::new();
    let mut asserted = BTreeSet::new();
    let mut stack = vec![start];

    while let Some(id) = stack.pop() {
        if seen[id.0] {
            continue;
        }
        seen[id.0] = true;
        order.push(id);

        let node = lookup(network, id)?;
        let on = node_conducts(node, inputs)?;
        trace!("visit {} ({}) conducts={}", node.name, node.kind, on);

        if on {
            // Reverse so the first neighbor is expanded first.
            stack.extend(
                network
                    .neighbors(id)
                    .iter()
                    .rev()
                    .filter(|n| !seen[n.0]),
            );
        }

        if node.kind == NodeKind::Output {
            asserted.insert(id);
        }
    }

    debug!(
        "evaluated from {}: {} visited, {} asserted",
        network.node_name(start).unwrap_or("?"),
        order.len(),
        asserted.len()
    );

    Ok(EvaluationResult {
        start,
        visited: order.iter().copied().collect(),
        asserted,
        order,
    })
}

/// Evaluate from the network's supply rail.
pub fn evaluate_supply(network: &Network, inputs: &InputAssignment) -> Result<EvaluationResult> {
    let start = network.supply().ok_or(SwitchError::MissingSupply)?;
    evaluate(network, inputs, start)
}
