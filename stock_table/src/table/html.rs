//! HTML page output.
//!
//! The page is regenerated in full on every mutation and swapped into place with a
//! rename, so a browser reloading it never sees a half-written table.
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::debug;
use stock_common::net::TABLE_ID;
use stock_common::{BoardError, Result, TableRow};

use super::TableBody;

/// Table body backed by an HTML file.
pub struct HtmlTable {
    path: PathBuf,
    refresh_secs: u64,
    rows: Vec<TableRow>,
}

impl HtmlTable {
    /// Create the page at `path` with an empty body.
    ///
    /// The directory holding the page must already exist; it is never created.
    /// `refresh_secs` becomes the page's reload interval.
    pub fn open(path: impl Into<PathBuf>, refresh_secs: u64) -> Result<Self> {
        let path = path.into();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.is_dir() {
            return Err(BoardError::MissingTable(dir.display().to_string()));
        }

        let table = Self {
            path,
            refresh_secs,
            rows: Vec::new(),
        };
        table.publish(&table.rows)?;
        Ok(table)
    }

    /// Location of the page.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `rows` to disk. Callers commit `rows` to memory only once this succeeds,
    /// so `rows()` always matches the page.
    fn publish(&self, rows: &[TableRow]) -> Result<()> {
        let tmp = self.path.with_extension("html.tmp");
        fs::write(&tmp, self.render_page(rows))?;
        fs::rename(&tmp, &self.path)?;
        debug!("Wrote {} rows to {}", rows.len(), self.path.display());
        Ok(())
    }

    fn render_page(&self, rows: &[TableRow]) -> String {
        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        page.push_str(&format!(
            "<meta http-equiv=\"refresh\" content=\"{}\">\n",
            self.refresh_secs
        ));
        page.push_str("<title>Stocks</title>\n<style>\n");
        page.push_str(".positive { color: #1a7f37; }\n.negative { color: #cf222e; }\n");
        page.push_str("</style>\n</head>\n<body>\n");
        page.push_str(&format!("<table id=\"{}\">\n", TABLE_ID));
        page.push_str(
            "<thead><tr><th>Ticker</th><th>Price</th><th>Volume</th><th>Change</th></tr></thead>\n",
        );
        page.push_str("<tbody>\n");
        for row in rows {
            page.push_str(&render_row(row));
        }
        page.push_str("</tbody>\n</table>\n");
        page.push_str(&format!(
            "<p>Updated {}</p>\n</body>\n</html>\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        page
    }
}

impl TableBody for HtmlTable {
    fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    fn clear(&mut self) -> Result<()> {
        self.publish(&[])?;
        self.rows.clear();
        Ok(())
    }

    fn append(&mut self, rows: Vec<TableRow>) -> Result<()> {
        let mut next = self.rows.clone();
        next.extend(rows);
        self.publish(&next)?;
        self.rows = next;
        Ok(())
    }

    fn replace(&mut self, rows: Vec<TableRow>) -> Result<()> {
        self.publish(&rows)?;
        self.rows = rows;
        Ok(())
    }
}

fn render_row(row: &TableRow) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{}</td></tr>\n",
        escape(&row.ticker),
        row.price,
        row.volume,
        row.class,
        row.change
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
