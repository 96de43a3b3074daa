use std::fmt;

use crate::data::model::{CameraRecord, NumericColumn, MODEL_HEADER};
use crate::data::stats::Summary;
use crate::data::store::Row;

/// Printed in place of a table with no rows.
pub const EMPTY_TABLE: &str = "no rows.";

// ---------------------------------------------------------------------------
// Fixed-width text table
// ---------------------------------------------------------------------------

/// Plain-text table; the first column is left-aligned, the rest right-aligned.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(headers: Vec<String>) -> Self {
        TextTable {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// One line per camera, prefixed with its row index in the full table.
    pub fn of_records(rows: &[Row<'_>]) -> Self {
        let headers = std::iter::once(String::new())
            .chain(std::iter::once(MODEL_HEADER.to_string()))
            .chain(NumericColumn::ALL.iter().map(|c| c.header().to_string()))
            .collect();
        let mut table = TextTable::new(headers);
        for &(index, rec) in rows {
            let mut row = vec![index.to_string(), rec.model.clone()];
            row.extend(NumericColumn::ALL.iter().map(|&col| format_cell(col, rec)));
            table.push_row(row);
        }
        table
    }

    /// One line per numeric column, one column per statistic.
    pub fn of_summary(summary: &Summary) -> Self {
        let mut table = TextTable::new(vec![String::new()]);
        let mut headers_done = false;
        for (col, stats) in &summary.columns {
            let entries = stats.entries();
            if !headers_done {
                table.headers.extend(entries.iter().map(|(name, _)| name.to_string()));
                headers_done = true;
            }
            let mut row = vec![col.header().to_string(), stats.count.to_string()];
            row.extend(entries.iter().skip(1).map(|(_, v)| format!("{v:.2}")));
            table.push_row(row);
        }
        table
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }
        widths
    }
}

/// Shortest text that reads back as the stored value, keeping a `.0` on
/// whole floats.
fn format_cell(col: NumericColumn, rec: &CameraRecord) -> String {
    if col.is_integer() {
        rec.release_date.to_string()
    } else {
        format!("{:?}", col.get(rec))
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i == 0 {
            line.push_str(&format!("{cell:<width$}"));
        } else {
            line.push_str(&format!("  {cell:>width$}"));
        }
    }
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "{EMPTY_TABLE}");
        }
        let widths = self.widths();
        write_line(f, &self.headers, &widths)?;
        for row in &self.rows {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}
