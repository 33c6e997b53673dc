//! Output rendering: pretty JSON or a generic key-columns text table
//!
//! Rows are serialized through serde_json first, so any `Serialize` row type
//! renders without table-specific glue. Column order follows the serialized
//! key order.

use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::Value;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Print rows in the selected format
pub fn print_rows<T: Serialize>(rows: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        OutputFormat::Table => {
            print!("{}", render_table(rows)?);
        }
    }
    Ok(())
}

/// Render rows as an aligned text table
pub fn render_table<T: Serialize>(rows: &[T]) -> Result<String> {
    let values = rows
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<Value>, _>>()?;

    if values.is_empty() {
        return Ok("(no rows)\n".to_string());
    }

    let mut columns: Vec<String> = Vec::new();
    for value in &values {
        let Value::Object(map) = value else {
            bail!("table rendering expects object-shaped rows");
        };
        for key in map.keys() {
            if !columns.iter().any(|column| column == key) {
                columns.push(key.clone());
            }
        }
    }

    let mut grid: Vec<Vec<String>> = vec![columns.clone()];
    for value in &values {
        let row = columns
            .iter()
            .map(|column| match value.get(column) {
                Some(cell_value) => cell(cell_value),
                None => "-".to_string(),
            })
            .collect();
        grid.push(row);
    }

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, _)| grid.iter().map(|row| row[i].len()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for (index, row) in grid.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');

        if index == 0 {
            let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
            out.push_str(&rule.join("  "));
            out.push('\n');
        }
    }

    Ok(out)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(cell)
            .collect::<Vec<_>>()
            .join(" "),
        Value::Object(_) => value.to_string(),
    }
}

fn format_number(number: &serde_json::Number) -> String {
    if let Some(i) = number.as_i64() {
        return i.to_string();
    }
    if let Some(u) = number.as_u64() {
        return u.to_string();
    }
    match number.as_f64() {
        Some(f) => {
            let formatted = format!("{f:.4}");
            formatted
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        }
        None => number.to_string(),
    }
}
