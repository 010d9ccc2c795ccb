use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::host::{CollectorInfo, Message};
use crate::types::{ResultSet, TableSchema, Value};

/// Write collector messages to `out` in the chosen format
pub fn write_messages<W: Write>(
    out: &mut W,
    messages: &[Message],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &messages),
        OutputFormat::Table => {
            for (i, message) in messages.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                match message {
                    Message::Table(rs) => write_result_set(out, rs)?,
                    Message::Error { message, .. } => writeln!(out, "error: {}", message)?,
                }
            }
            Ok(())
        }
    }
}

pub fn write_info<W: Write>(
    out: &mut W,
    info: &CollectorInfo,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, info),
        OutputFormat::Table => {
            writeln!(out, "{}", info.description)?;
            writeln!(out, "release: {}", info.release)?;
            writeln!(out, "compatible os: {}", info.compatible_os.join(", "))?;
            if info.parameters.is_empty() {
                writeln!(out, "parameters: none")?;
            } else {
                writeln!(out, "parameters: {}", info.parameters.join(", "))?;
            }
            writeln!(out, "tables:")?;
            for table in info.tables {
                writeln!(out, "  {}", table.name)?;
            }
            Ok(())
        }
    }
}

pub fn write_schemas<W: Write>(
    out: &mut W,
    tables: &[TableSchema],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &tables),
        OutputFormat::Table => {
            for table in tables {
                writeln!(out, "{}", table.name)?;
                for column in table.columns {
                    if column.size > 0 {
                        writeln!(
                            out,
                            "  {:<12} {:?}({})",
                            column.name, column.sql_type, column.size
                        )?;
                    } else {
                        writeln!(out, "  {:<12} {:?}", column.name, column.sql_type)?;
                    }
                }
            }
            Ok(())
        }
    }
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Fixed-width rendering; the header row is underlined
fn write_result_set<W: Write>(out: &mut W, rs: &ResultSet) -> io::Result<()> {
    let cells: Vec<Vec<String>> = rs
        .rows
        .iter()
        .map(|row| row.iter().map(Value::to_string).collect())
        .collect();

    let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    writeln!(out, "{}", rs.table)?;
    for (r, row) in cells.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
        if r == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            writeln!(out, "{}", rule.join("  "))?;
        }
    }
    Ok(())
}
