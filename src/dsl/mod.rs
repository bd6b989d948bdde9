//! Parser for transistor network descriptions.
//!
//! Networks are written in a small line-oriented language: one declaration
//! per line, rails and edges as directives, transistors as elements.
//!
//! # Grammar Overview
//!
//! ```text
//! network    = { line }
//! line       = comment | directive | transistor | empty
//! comment    = ('#' | ';') { any_char }
//! directive  = '.' directive_name argument+
//! transistor = ("PMOS" | "NMOS") name gate
//!
//! directive_name = "supply" | "ground" | "output" | "input" | "edge"
//! gate       = "0" | "1" | identifier
//! name       = identifier
//! identifier = (letter | '_') { letter | digit | '_' }
//! ```
//!
//! # Directives
//!
//! | Directive | Description | Syntax |
//! |-----------|-------------|--------|
//! | .supply | Declare VDD rail(s) | `.supply <name>+` |
//! | .ground | Declare GND rail(s) | `.ground <name>+` |
//! | .output | Declare output terminal(s) | `.output <name>+` |
//! | .input | Declare input signals (sweep order) | `.input <signal>+` |
//! | .edge | Append edges `from -> to` for each target | `.edge <from> <to>+` |
//!
//! Edges are resolved after every node is registered, so declarations and
//! edges may appear in any order.
//!
//! # Example
//!
//! ```text
//! # Two-input pull network
//! .supply VDD
//! .ground GND
//! .output OUT
//! .input  A B
//!
//! PMOS T1 A
//! PMOS T2 B
//! NMOS T3 A
//! NMOS T4 B
//!
//! .edge VDD T1 T2
//! .edge T1  T3 OUT
//! .edge T2  T3 OUT
//! .edge T3  T4
//! .edge T4  GND
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a description string into an AST.
pub fn parse(input: &str) -> Result<CircuitAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a description file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<CircuitAst> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::SwitchError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{evaluate_supply, InputAssignment};
    use crate::network::Network;
    use crate::SwitchError;

    const NAND: &str = "\
# Two-input pull network
.supply VDD
.ground GND
.output OUT
.input  A B

PMOS T1 A
PMOS T2 B
NMOS T3 A
NMOS T4 B

.edge VDD T1 T2
.edge T1  T3 OUT
.edge T2  T3 OUT
.edge T3  T4
.edge T4  GND
";

    #[test]
    fn test_description_builds_network() {
        let ast = parse(NAND).unwrap();
        let net = Network::from_ast(&ast).unwrap();
        assert_eq!(net.len(), 7);
        assert_eq!(net.edge_count(), 8);

        let inputs = InputAssignment::parse("A=1 B=0").unwrap();
        let result = evaluate_supply(&net, &inputs).unwrap();
        assert_eq!(result.asserted_names(&net), vec!["OUT"]);

        let inputs = InputAssignment::parse("A=1 B=1").unwrap();
        let result = evaluate_supply(&net, &inputs).unwrap();
        assert!(result.asserted().is_empty());
    }

    #[test]
    fn test_semantic_errors_from_description() {
        let ast = parse(".supply VDD\nPMOS VDD A").unwrap();
        let err = Network::from_ast(&ast).unwrap_err();
        assert!(matches!(err, SwitchError::DuplicateNode { ref name } if name == "VDD"));

        let ast = parse(".supply VDD\n.edge VDD T9").unwrap();
        let err = Network::from_ast(&ast).unwrap_err();
        assert!(matches!(err, SwitchError::UnknownNode { ref node } if node == "T9"));
    }

    #[test]
    fn test_demo_descriptions_parse() {
        for text in [
            include_str!("../../demos/nand.swn"),
            include_str!("../../demos/inverter_chain.swn"),
        ] {
            let net = Network::from_ast(&parse(text).unwrap()).unwrap();
            assert!(net.supply().is_some());
        }

        let net = Network::from_ast(&parse(include_str!("../../demos/inverter_chain.swn")).unwrap()).unwrap();
        let inputs = InputAssignment::new().with("EN", false);
        let result = evaluate_supply(&net, &inputs).unwrap();
        assert_eq!(result.asserted_names(&net), vec!["Y1", "Y2"]);
    }

    #[test]
    fn test_edges_may_precede_declarations() {
        let ast = parse(".edge VDD OUT\n.supply VDD\n.output OUT").unwrap();
        let net = Network::from_ast(&ast).unwrap();
        let result = evaluate_supply(&net, &InputAssignment::new()).unwrap();
        assert_eq!(result.asserted_names(&net), vec!["OUT"]);
    }
}
