//! Table bodies the renderer writes into.
//!
//! A `TableBody` is the mutable container of rows the renderer fully owns: it is
//! cleared and refilled every render cycle, never patched row by row.
//! - `html` — an HTML page on disk holding `<table id="stockTable">`.
//! - `console` — an aligned text table printed to a writer (stdout by default).
use stock_common::{Result, TableRow};

mod console;
mod html;

pub use console::ConsoleTable;
pub use html::HtmlTable;

/// Output target holding the rendered rows.
pub trait TableBody: Send {
    /// Rows currently in the body, top to bottom.
    fn rows(&self) -> &[TableRow];

    /// Remove every row. Clearing an empty body is a no-op apart from republishing it.
    fn clear(&mut self) -> Result<()>;

    /// Append rows after the existing ones, in the given order.
    fn append(&mut self, rows: Vec<TableRow>) -> Result<()>;

    /// Swap the whole body for `rows`.
    fn replace(&mut self, rows: Vec<TableRow>) -> Result<()> {
        self.clear()?;
        self.append(rows)
    }
}
