//! Table rendering utilities for CLI outputs.

use crate::utils::colors::paint;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

/// A cell with an optional ANSI color applied after padding.
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
    separator: String,
}

impl Table {
    pub fn new(headers: &[String], separator: &str) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.clone(),
                width: UnicodeWidthStr::width(h.as_str()),
            })
            .collect();

        Self {
            columns,
            rows: Vec::new(),
            separator: separator.chars().next().unwrap_or('-').to_string(),
        }
    }

    /// Add a row. Cells beyond the column count are ignored; missing cells
    /// render empty.
    pub fn add_row(&mut self, mut row: Vec<Cell>) {
        row.truncate(self.columns.len());

        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.text.as_str()));
        }

        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&self.separator.repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let padded = match row.get(i) {
                    Some(cell) => {
                        let padded = pad(&cell.text, col.width);
                        match cell.color {
                            Some(color) => paint(&padded, color),
                            None => padded,
                        }
                    }
                    None => pad("", col.width),
                };
                out.push_str(&padded);
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Left-align by display width, not byte length.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}
