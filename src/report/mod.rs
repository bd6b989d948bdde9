//! Text reports for the CLI frontend.
//!
//! Renders evaluation results and truth tables as aligned plain-text tables.

use std::io::Write;

use crate::error::{Result, SwitchError};
use crate::eval::{gate_level, EvaluationResult, InputAssignment, TruthTable};
use crate::network::Network;

fn write_err(e: std::io::Error) -> SwitchError {
    SwitchError::OutputError {
        message: e.to_string(),
    }
}

fn flag(set: bool) -> &'static str {
    if set {
        "yes"
    } else {
        "-"
    }
}

/// Write one row per node followed by the asserted outputs.
pub fn write_report<W: Write>(
    out: &mut W,
    network: &Network,
    inputs: &InputAssignment,
    result: &EvaluationResult,
) -> Result<()> {
    let width = network
        .nodes()
        .map(|n| n.name.len())
        .max()
        .unwrap_or(0)
        .max("NODE".len());

    writeln!(
        out,
        "{:<width$}  {:<6}  {:<6}  {:<5}  {:<7}  ASSERTED",
        "NODE", "KIND", "GATE", "LEVEL", "VISITED"
    )
    .map_err(write_err)?;

    for node in network.nodes() {
        let gate = node.gate.as_ref().map(|g| g.to_string()).unwrap_or_else(|| "-".to_string());
        let level = match gate_level(network, node.id, inputs)? {
            Some(true) => "1",
            Some(false) => "0",
            None => "-",
        };
        writeln!(
            out,
            "{:<width$}  {:<6}  {:<6}  {:<5}  {:<7}  {}",
            node.name,
            node.kind.to_string(),
            gate,
            level,
            flag(result.is_visited(node.id)),
            flag(result.is_asserted(node.id)),
        )
        .map_err(write_err)?;
    }

    let asserted = result.asserted_names(network);
    writeln!(
        out,
        "\nasserted: {}",
        if asserted.is_empty() {
            "(none)".to_string()
        } else {
            asserted.join(" ")
        }
    )
    .map_err(write_err)
}

/// Write a truth table with one column per signal and one per output.
pub fn write_truth_table<W: Write>(out: &mut W, network: &Network, table: &TruthTable) -> Result<()> {
    let outputs: Vec<_> = network.outputs().collect();

    let header: Vec<&str> = table
        .signals
        .iter()
        .map(String::as_str)
        .chain(["|"])
        .chain(outputs.iter().filter_map(|&id| network.node_name(id)))
        .collect();
    writeln!(out, "{}", header.join(" ")).map_err(write_err)?;

    for row in &table.rows {
        let mut cells: Vec<String> = table
            .signals
            .iter()
            .zip(&row.levels)
            .map(|(name, &level)| format!("{:<w$}", u8::from(level), w = name.len()))
            .collect();
        cells.push("|".to_string());
        for &id in &outputs {
            let name = network.node_name(id).unwrap_or("");
            let level = u8::from(row.asserted.contains(&id));
            cells.push(format!("{:<w$}", level, w = name.len()));
        }
        writeln!(out, "{}", cells.join(" ").trim_end()).map_err(write_err)?;
    }

    Ok(())
}
