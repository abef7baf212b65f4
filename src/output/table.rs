//! Grid table rendering.
//!
//! ```text
//! +----------+-------------+
//! |   S. No. | Prefix      |
//! +==========+=============+
//! |        1 | 10.0.0.0/24 |
//! +----------+-------------+
//! ```

use std::fmt;

/// Extra width every column gets beyond its header.
const MIN_PADDING: usize = 2;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A table of string cells rendered with `+---+` grid borders.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with left aligned columns.
    pub fn new<T: ToString>(headers: &[T]) -> Table {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            aligns: vec![Align::Left; headers.len()],
            rows: Vec::new(),
        }
    }

    /// Set the alignment of column `col`. Out of range columns are ignored.
    pub fn align(mut self, col: usize, align: Align) -> Table {
        if let Some(a) = self.aligns.get_mut(col) {
            *a = align;
        }
        self
    }

    /// Append a row. Missing trailing cells render empty, extra cells are dropped.
    pub fn add_row<I, T>(&mut self, cells: I)
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.headers.len())
            .map(|c| c.to_string())
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .map(|r| r[i].chars().count())
                    .fold(h.chars().count() + MIN_PADDING, usize::max)
            })
            .collect()
    }

    /// Render the table, one line per `\n`, without a trailing newline.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut lines = Vec::with_capacity(self.rows.len() * 2 + 3);

        lines.push(border(&widths, '-'));
        lines.push(self.line(&self.headers, &widths));
        lines.push(border(&widths, '='));
        for row in &self.rows {
            lines.push(self.line(row, &widths));
            lines.push(border(&widths, '-'));
        }

        lines.join("\n")
    }

    fn line(&self, cells: &[String], widths: &[usize]) -> String {
        let body = cells
            .iter()
            .zip(widths)
            .zip(&self.aligns)
            .map(|((cell, &width), align)| format!(" {} ", format_cell(cell, width, *align)))
            .collect::<Vec<String>>()
            .join("|");
        format!("|{body}|")
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Pad `value` to `width` characters.
pub fn format_cell(value: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{value:<width$}"),
        Align::Right => format!("{value:>width$}"),
    }
}

fn border(widths: &[usize], fill: char) -> String {
    let body = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect::<Vec<String>>()
        .join("+");
    format!("+{body}+")
}
