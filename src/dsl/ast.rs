//! Abstract Syntax Tree types for the network description language.

use crate::network::{Gate, NodeKind};

/// Complete AST representation of a parsed network description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircuitAst {
    /// Node declarations in file order
    pub nodes: Vec<NodeDef>,
    /// Edges in file order
    pub edges: Vec<EdgeDef>,
    /// Declared input signals, in declaration order
    pub inputs: Vec<String>,
}

impl CircuitAst {
    /// Create a new empty AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A node declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDef {
    pub name: String,
    pub kind: NodeKind,
    /// Present for transistors only
    pub gate: Option<Gate>,
    /// Source line number for error reporting
    pub line: usize,
}

/// A directed edge between two named nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDef {
    pub from: String,
    pub to: String,
    pub line: usize,
}
