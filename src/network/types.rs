//! Core types for network representation.

use std::fmt;

/// A unique identifier for a node in the network.
/// Ids are dense and assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Get the raw index into per-node tables.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// The closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// P-channel transistor, conducts while its gate is low
    Pmos,
    /// N-channel transistor, conducts while its gate is high
    Nmos,
    /// VDD rail
    Supply,
    /// GND rail
    Ground,
    /// Output terminal
    Output,
}

impl NodeKind {
    /// Whether nodes of this kind carry a gate reference.
    pub fn is_transistor(&self) -> bool {
        match self {
            Self::Pmos | Self::Nmos => true,
            Self::Supply | Self::Ground | Self::Output => false,
        }
    }

    /// Whether this kind is a fixed-potential rail.
    pub fn is_rail(&self) -> bool {
        matches!(self, Self::Supply | Self::Ground)
    }

    /// Parse a transistor kind from its description keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "PMOS" => Some(Self::Pmos),
            "NMOS" => Some(Self::Nmos),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pmos => "PMOS",
            Self::Nmos => "NMOS",
            Self::Supply => "SUPPLY",
            Self::Ground => "GROUND",
            Self::Output => "OUTPUT",
        };
        f.write_str(s)
    }
}

/// The control input of a transistor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Level fixed when the network is built
    Level(bool),
    /// Input signal looked up at evaluation time
    Signal(String),
}

impl Gate {
    /// Create a symbolic gate reference.
    pub fn signal(name: impl Into<String>) -> Self {
        Self::Signal(name.into())
    }

    /// The referenced signal name, if symbolic.
    pub fn signal_name(&self) -> Option<&str> {
        match self {
            Self::Signal(name) => Some(name),
            Self::Level(_) => None,
        }
    }
}

impl From<bool> for Gate {
    fn from(level: bool) -> Self {
        Self::Level(level)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(true) => f.write_str("1"),
            Self::Level(false) => f.write_str("0"),
            Self::Signal(name) => f.write_str(name),
        }
    }
}

/// A registered node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    /// Present exactly when `kind` is a transistor
    pub gate: Option<Gate>,
}
