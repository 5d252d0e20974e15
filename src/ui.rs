//! Terminal tables.
//!
//! ```rust
//! let mut table = painless::ui::Table::new(&["Name", "Uri"]);
//! table.add_row(vec!["y".to_string(), "https://x/y.git".to_string()]);
//! table.print();
//! ```

use colored::*;
use console::{Term, measure_text_width, truncate_str};

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Rows with the wrong number of cells are ignored.
    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    pub fn print(&self) {
        let (_, term_width) = Term::stdout().size();
        for line in self.render(term_width as usize) {
            println!("{}", line);
        }
    }

    /// Box-drawn lines, shrinking the widest columns (never below 8) to fit
    /// `max_width`.
    pub fn render(&self, max_width: usize) -> Vec<String> {
        if self.headers.is_empty() {
            return Vec::new();
        }

        let mut widths: Vec<usize> = self.headers.iter().map(|h| measure_text_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(measure_text_width(&flatten(cell)));
            }
        }

        let overhead = 3 + 3 * widths.len();
        let available = max_width.saturating_sub(overhead);
        while widths.iter().sum::<usize>() > available {
            let Some((idx, &widest)) = widths.iter().enumerate().max_by_key(|(_, w)| **w) else {
                break;
            };
            if widest <= 8 {
                break;
            }
            widths[idx] -= 1;
        }

        let border = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("  {}{}{}", left, segments.join(mid), right)
        };
        let row_line = |cells: Vec<String>| {
            let mut line = String::from("  │");
            for (cell, width) in cells.iter().zip(&widths) {
                let cell = truncate_str(cell, *width, "...");
                let padding = width.saturating_sub(measure_text_width(&cell));
                line.push_str(&format!(" {}{} │", cell, " ".repeat(padding)));
            }
            line
        };

        let mut lines = vec![border("┌", "┬", "┐")];
        lines.push(row_line(self.headers.iter().map(|h| h.bold().to_string()).collect()));
        lines.push(border("├", "┼", "┤"));
        for row in &self.rows {
            lines.push(row_line(row.iter().map(|c| flatten(c)).collect()));
        }
        lines.push(border("└", "┴", "┘"));
        lines
    }
}

fn flatten(s: &str) -> String {
    s.replace(['\n', '\r', '\t'], " ")
}
