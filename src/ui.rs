//! Terminal output for the non-interactive listing mode.
//!
//! Rows are laid out in aligned columns. The last column absorbs whatever
//! width the terminal has left and is truncated to fit.

use crate::model::{SearchResults, Version};
use colored::*;

const MIN_LAST_COLUMN: usize = 12;

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
            self.rows.push(row.iter().map(|cell| flatten(cell)).collect());
        }
    }

    pub fn render(&self, term_width: usize) -> Vec<String> {
        let Some(last) = self.headers.len().checked_sub(1) else {
            return Vec::new();
        };

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(console::measure_text_width(cell));
            }
        }

        let fixed: usize = widths[..last].iter().map(|w| w + 2).sum::<usize>() + 2;
        widths[last] = widths[last].min(term_width.saturating_sub(fixed).max(MIN_LAST_COLUMN));

        let line = |cells: &[String]| -> String {
            let mut out = String::from(" ");
            for (i, cell) in cells.iter().enumerate() {
                let cell = console::truncate_str(cell, widths[i], "...");
                if i == last {
                    out.push(' ');
                    out.push_str(&cell);
                } else {
                    out.push(' ');
                    out.push_str(&console::pad_str(&cell, widths[i], console::Alignment::Left, None));
                    out.push(' ');
                }
            }
            out.trim_end().to_string()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(line(&self.headers));
        lines.push(format!(
            "  {}",
            "-".repeat(widths.iter().sum::<usize>() + 3 * last)
        ));
        lines.extend(self.rows.iter().map(|row| line(row)));
        lines
    }

    pub fn print(&self) {
        let (_, cols) = console::Term::stdout().size();
        for (i, line) in self.render(cols as usize).into_iter().enumerate() {
            if i == 0 {
                println!("{}", line.bold());
            } else {
                println!("{line}");
            }
        }
    }
}

fn flatten(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn print_search_results(results: &SearchResults) {
    println!(
        "{} {} results, page {}",
        "Found".green(),
        results.total.to_string().bold(),
        results.page
    );
    let mut table = Table::new(&["Group", "Artifact", "Description"]);
    for artifact in &results.artifacts {
        table.add_row(vec![
            artifact.group.clone(),
            artifact.id.clone(),
            artifact.description.clone(),
        ]);
    }
    table.print();
}

pub fn print_versions(license: &str, versions: &[Version]) {
    println!("{} {}", "License:".dimmed(), license);
    let mut table = Table::new(&["Version", "Repository", "Date"]);
    for version in versions {
        table.add_row(vec![
            version.value.clone(),
            version.repository.name.clone(),
            version.date.clone(),
        ]);
    }
    table.print();
}
