//! Table rendering utilities for CLI outputs (psql-style ASCII grid).

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Rows shorter than the header are padded with empty cells.
    pub fn add_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .map(|r| UnicodeWidthStr::width(r[i].as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let rule = |left: char, mid: char, right: char| -> String {
            let mut s = String::new();
            s.push(left);
            for (i, w) in widths.iter().enumerate() {
                if i > 0 {
                    s.push(mid);
                }
                s.push_str(&"-".repeat(w + 2));
            }
            s.push(right);
            s.push('\n');
            s
        };

        let line = |cells: &[String], header: bool| -> String {
            let mut s = String::from("|");
            for (i, col) in self.columns.iter().enumerate() {
                let align = if header { Align::Left } else { col.align };
                s.push(' ');
                s.push_str(&pad(&cells[i], widths[i], align));
                s.push_str(" |");
            }
            s.push('\n');
            s
        };

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        out.push_str(&rule('+', '+', '+'));
        out.push_str(&line(&headers, true));
        out.push_str(&rule('|', '+', '|'));
        for row in &self.rows {
            out.push_str(&line(row, false));
        }
        out.push_str(&rule('+', '+', '+'));

        out
    }
}

fn pad(value: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(value)));
    match align {
        Align::Left => format!("{value}{fill}"),
        Align::Right => format!("{fill}{value}"),
    }
}
