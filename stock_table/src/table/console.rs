//! Terminal output.
use std::io::{self, Stdout, Write};

use colored::Colorize;
use stock_common::{ChangeClass, Result, TableRow};

use super::TableBody;

const HEADERS: [&str; 4] = ["Ticker", "Price", "Volume", "Change"];

/// Table body printed as aligned text after every change.
pub struct ConsoleTable<W: Write + Send> {
    out: W,
    rows: Vec<TableRow>,
}

impl ConsoleTable<Stdout> {
    /// Console table printing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleTable<W> {
    /// Console table printing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows: Vec::new(),
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self) -> Result<()> {
        let mut widths = HEADERS.map(|header| header.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(cells(row)) {
                *width = (*width).max(cell.chars().count());
            }
        }

        writeln!(
            self.out,
            "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}",
            HEADERS[0],
            HEADERS[1],
            HEADERS[2],
            HEADERS[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3]
        )?;
        writeln!(self.out, "{}", "-".repeat(widths.iter().sum::<usize>() + 6))?;
        for row in &self.rows {
            let change = format!("{:>w$}", row.change, w = widths[3]);
            let change = match row.class {
                ChangeClass::Positive => change.green(),
                ChangeClass::Negative => change.red(),
            };
            writeln!(
                self.out,
                "{:<w0$}  {:>w1$}  {:>w2$}  {}",
                row.ticker,
                row.price,
                row.volume,
                change,
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2]
            )?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

fn cells(row: &TableRow) -> [&str; 4] {
    [
        row.ticker.as_str(),
        row.price.as_str(),
        row.volume.as_str(),
        row.change.as_str(),
    ]
}

impl<W: Write + Send> TableBody for ConsoleTable<W> {
    fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    fn clear(&mut self) -> Result<()> {
        self.rows.clear();
        self.print()
    }

    fn append(&mut self, rows: Vec<TableRow>) -> Result<()> {
        self.rows.extend(rows);
        self.print()
    }

    fn replace(&mut self, rows: Vec<TableRow>) -> Result<()> {
        self.rows = rows;
        self.print()
    }
}
