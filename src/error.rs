//! Error types for the switchnet analyzer.
//!
//! This module provides a unified error type [`SwitchError`] that covers
//! all error conditions that can occur during description parsing, network
//! construction, and conduction evaluation.

use thiserror::Error;

use crate::network::NodeKind;

/// Result type alias using [`SwitchError`].
pub type Result<T> = std::result::Result<T, SwitchError>;

/// Unified error type for all switchnet operations.
#[derive(Error, Debug)]
pub enum SwitchError {
    // ============ Description Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    // ============ Network Construction Errors ============
    /// A node with this name is already registered
    #[error("Duplicate node name '{name}'")]
    DuplicateNode { name: String },

    /// Gate reference does not match the node kind
    #[error("Invalid gate for {kind} node '{node}': {message}")]
    InvalidGate {
        node: String,
        kind: NodeKind,
        message: String,
    },

    /// Edge or start node refers to a node that was never created
    #[error("Node '{node}' not found in network")]
    UnknownNode { node: String },

    // ============ Evaluation Errors ============
    /// Symbolic gate names a signal absent from the input assignment
    #[error("Input signal '{signal}' (gate of '{node}') has no value in the assignment")]
    UnknownSignal { signal: String, node: String },

    /// Network has no supply rail to start from
    #[error("Network has no supply node (use '.supply <name>')")]
    MissingSupply,

    /// Sweep over more signals than the configured limit
    #[error("Cannot sweep {count} signals (limit is {max})")]
    TooManySignals { count: usize, max: usize },

    /// Signal listed more than once in a sweep
    #[error("Signal '{signal}' appears more than once in the sweep")]
    DuplicateSignal { signal: String },

    /// Malformed `NAME=VALUE` input assignment
    #[error("Invalid input assignment '{text}': {message}")]
    InvalidAssignment { text: String, message: String },

    // ============ I/O Errors ============
    /// Error reading circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a report
    #[error("Report output error: {message}")]
    OutputError { message: String },
}

impl SwitchError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an unknown node error
    pub fn unknown_node(node: impl Into<String>) -> Self {
        Self::UnknownNode { node: node.into() }
    }

    /// Create an invalid gate error
    pub fn invalid_gate(node: impl Into<String>, kind: NodeKind, message: impl Into<String>) -> Self {
        Self::InvalidGate {
            node: node.into(),
            kind,
            message: message.into(),
        }
    }

    /// Create an invalid assignment error
    pub fn invalid_assignment(text: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAssignment {
            text: text.into(),
            message: message.into(),
        }
    }
}
