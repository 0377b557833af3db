// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain column-aligned tables for list commands.

use std::io::Write;

use crate::color;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

pub struct Column {
    title: &'static str,
    align: Align,
}

impl Column {
    pub fn left(title: &'static str) -> Self {
        Self { title, align: Align::Left }
    }

    pub fn right(title: &'static str) -> Self {
        Self { title, align: Align::Right }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    /// Missing trailing cells render blank; extra cells are dropped.
    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(col.title.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Lines without trailing whitespace, header first.
    pub fn lines(&self) -> Vec<String> {
        let widths = self.widths();
        let titles: Vec<String> = self.columns.iter().map(|c| c.title.to_string()).collect();
        std::iter::once(&titles)
            .chain(self.rows.iter())
            .map(|cells| {
                let line = self
                    .columns
                    .iter()
                    .zip(widths.iter().copied())
                    .enumerate()
                    .map(|(i, (col, width))| {
                        let cell = cells.get(i).map(String::as_str).unwrap_or("");
                        match col.align {
                            Align::Left => format!("{cell:<width$}"),
                            Align::Right => format!("{cell:>width$}"),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("  ");
                line.trim_end().to_string()
            })
            .collect()
    }

    pub fn render(&self, out: &mut dyn Write) {
        let mut lines = self.lines().into_iter();
        if let Some(header) = lines.next() {
            let _ = writeln!(out, "{}", color::header(&header));
        }
        for line in lines {
            let _ = writeln!(out, "{line}");
        }
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
