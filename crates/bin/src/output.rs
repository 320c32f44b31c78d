//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use keypath::node::{Node, Scalar};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Renders a node for human output.
///
/// Text prints without quotes. Maps print as pretty JSON.
pub fn render_human(node: &Node) -> Result<String, serde_json::Error> {
    match node {
        Node::Leaf(Scalar::Text(text)) => Ok(text.clone()),
        Node::Leaf(_) => Ok(node.to_json_string()),
        Node::Map(_) => serde_json::to_string_pretty(node),
    }
}

/// Renders a node on a single line, for table cells and lists
pub fn render_inline(node: &Node) -> String {
    match node {
        Node::Leaf(Scalar::Text(text)) => text.clone(),
        _ => node.to_json_string(),
    }
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    // Calculate column widths (max of header and all row values)
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  ").trim_end());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}
