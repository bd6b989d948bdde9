//! Network graph structure.

use std::collections::{BTreeSet, HashMap};

use log::trace;

use super::types::{Gate, Node, NodeId, NodeKind};
use crate::dsl::CircuitAst;
use crate::error::{Result, SwitchError};

/// A transistor network ready for evaluation.
///
/// Nodes are addressed by [`NodeId`]; names resolve through a lookup table
/// kept alongside the adjacency lists. Once built, a network is only read.
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// All nodes, indexed by id
    nodes: Vec<Node>,

    /// Mapping from node names to node IDs
    node_map: HashMap<String, NodeId>,

    /// Outgoing neighbors per node, in insertion order
    adjacency: Vec<Vec<NodeId>>,

    /// Total number of edges, parallel edges included
    num_edges: usize,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from a parsed description.
    pub fn from_ast(ast: &CircuitAst) -> Result<Self> {
        let mut network = Network::new();

        for def in &ast.nodes {
            network.create_node(&def.name, def.kind, def.gate.clone())?;
        }

        for edge in &ast.edges {
            network.connect(&edge.from, &edge.to)?;
        }

        Ok(network)
    }

    /// Register a new node.
    ///
    /// Transistors must carry a gate; rails and outputs must not. On error
    /// the network is left unchanged.
    pub fn create_node(
        &mut self,
        name: impl Into<String>,
        kind: NodeKind,
        gate: Option<Gate>,
    ) -> Result<NodeId> {
        let name = name.into();

        if self.node_map.contains_key(&name) {
            return Err(SwitchError::DuplicateNode { name });
        }

        match (kind.is_transistor(), gate.is_some()) {
            (true, false) => {
                return Err(SwitchError::invalid_gate(name, kind, "transistor requires a gate"));
            }
            (false, true) => {
                return Err(SwitchError::invalid_gate(name, kind, "only transistors take a gate"));
            }
            _ => {}
        }

        let id = NodeId(self.nodes.len());
        trace!("node {} = {} ({})", id, name, kind);

        self.node_map.insert(name.clone(), id);
        self.nodes.push(Node {
            id,
            name,
            kind,
            gate,
        });
        self.adjacency.push(Vec::new());

        Ok(id)
    }

    /// Append a directed edge between two named nodes.
    pub fn connect(&mut self, from: &str, to: &str) -> Result<()> {
        let from_id = self.find_node(from).ok_or_else(|| SwitchError::unknown_node(from))?;
        let to_id = self.find_node(to).ok_or_else(|| SwitchError::unknown_node(to))?;
        self.connect_ids(from_id, to_id)
    }

    /// Append a directed edge between two node IDs.
    pub fn connect_ids(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        for id in [from, to] {
            if self.node(id).is_none() {
                return Err(SwitchError::unknown_node(id.to_string()));
            }
        }

        self.adjacency[from.0].push(to);
        self.num_edges += 1;
        Ok(())
    }

    /// Outgoing neighbors of a node, in insertion order.
    ///
    /// Unknown ids have no neighbors.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(node.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Find a node ID by name.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.node_map.get(name).copied()
    }

    /// Get the name of a node.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// The first supply rail, if any.
    pub fn supply(&self) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|n| n.kind == NodeKind::Supply)
            .map(|n| n.id)
    }

    /// All output terminals in creation order.
    pub fn outputs(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Output)
            .map(|n| n.id)
    }

    /// Every input signal named by a symbolic gate, sorted.
    pub fn signals(&self) -> BTreeSet<&str> {
        self.nodes
            .iter()
            .filter_map(|n| n.gate.as_ref().and_then(Gate::signal_name))
            .collect()
    }

    /// All edges, grouped by source in creation order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (NodeId(from), to)))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.num_edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_rejected() {
        let mut net = Network::new();
        net.create_node("T1", NodeKind::Pmos, Some(Gate::signal("A"))).unwrap();
        let err = net
            .create_node("T1", NodeKind::Nmos, Some(Gate::Level(true)))
            .unwrap_err();
        assert!(matches!(err, SwitchError::DuplicateNode { ref name } if name == "T1"));
        assert_eq!(net.len(), 1);
        assert_eq!(net.node(NodeId(0)).unwrap().kind, NodeKind::Pmos);
    }

    #[test]
    fn test_gate_must_match_kind() {
        let mut net = Network::new();
        let err = net
            .create_node("VDD", NodeKind::Supply, Some(Gate::Level(true)))
            .unwrap_err();
        assert!(matches!(err, SwitchError::InvalidGate { kind: NodeKind::Supply, .. }));

        let err = net.create_node("T1", NodeKind::Nmos, None).unwrap_err();
        assert!(matches!(err, SwitchError::InvalidGate { kind: NodeKind::Nmos, .. }));

        assert!(net.is_empty());
        assert!(net.find_node("VDD").is_none());
    }

    #[test]
    fn test_connect_unknown_node() {
        let mut net = Network::new();
        net.create_node("VDD", NodeKind::Supply, None).unwrap();
        let err = net.connect("VDD", "nowhere").unwrap_err();
        assert!(matches!(err, SwitchError::UnknownNode { ref node } if node == "nowhere"));
        let err = net.connect("ghost", "VDD").unwrap_err();
        assert!(matches!(err, SwitchError::UnknownNode { ref node } if node == "ghost"));
        assert_eq!(net.edge_count(), 0);

        let err = net.connect_ids(NodeId(0), NodeId(7)).unwrap_err();
        assert!(matches!(err, SwitchError::UnknownNode { .. }));
        assert!(net.neighbors(NodeId(0)).is_empty());
    }

    #[test]
    fn test_edges_are_directed_and_keep_parallels() {
        let mut net = Network::new();
        let vdd = net.create_node("VDD", NodeKind::Supply, None).unwrap();
        let t1 = net.create_node("T1", NodeKind::Pmos, Some(Gate::signal("A"))).unwrap();
        let out = net.create_node("OUT", NodeKind::Output, None).unwrap();

        net.connect("VDD", "T1").unwrap();
        net.connect("T1", "OUT").unwrap();
        net.connect("T1", "OUT").unwrap();
        net.connect("VDD", "OUT").unwrap();

        assert_eq!(net.neighbors(vdd), &[t1, out]);
        assert_eq!(net.neighbors(t1), &[out, out]);
        assert!(net.neighbors(out).is_empty());
        assert_eq!(net.edge_count(), 4);
        assert_eq!(
            net.edges().collect::<Vec<_>>(),
            vec![(vdd, t1), (vdd, out), (t1, out), (t1, out)]
        );
    }

    #[test]
    fn test_accessors() {
        let mut net = Network::new();
        net.create_node("OUT", NodeKind::Output, None).unwrap();
        net.create_node("T2", NodeKind::Nmos, Some(Gate::signal("B"))).unwrap();
        net.create_node("VDD", NodeKind::Supply, None).unwrap();
        net.create_node("T1", NodeKind::Pmos, Some(Gate::signal("A"))).unwrap();
        net.create_node("T3", NodeKind::Pmos, Some(Gate::signal("A"))).unwrap();
        net.create_node("TK", NodeKind::Nmos, Some(Gate::Level(true))).unwrap();

        assert_eq!(net.supply(), Some(NodeId(2)));
        assert_eq!(net.outputs().collect::<Vec<_>>(), vec![NodeId(0)]);
        assert_eq!(net.signals().into_iter().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(net.node_name(NodeId(3)), Some("T1"));
        assert_eq!(net.node_name(NodeId(42)), None);
    }
}
