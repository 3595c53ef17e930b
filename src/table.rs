//! Tabular rendering of record sequences.
//!
//! Each row value is flattened, headers come from the caller or from
//! [`all_keys`] over the flattened rows, and a comfy-table renders the
//! result. The renderer is a thin consumer of the engine's output: cell
//! text is the [`Value`](crate::Value) display form, and a row missing a
//! header's key renders as an empty cell.
//!
//! ## Examples
//!
//! ```rust
//! use serde_inspect::{dump_table, inspect};
//!
//! struct Host {
//!     name: String,
//!     port: u16,
//! }
//!
//! inspect!(Host { name, port });
//!
//! let hosts = vec![
//!     Host { name: "alpha".to_string(), port: 80 },
//!     Host { name: "beta".to_string(), port: 443 },
//! ];
//! let table = dump_table(&hosts);
//! assert!(table.contains("alpha"));
//! assert!(table.contains("443"));
//! ```

use crate::inspect::Inspect;
use crate::keys::all_keys;
use crate::{flatten, FieldMap};
use comfy_table::{presets::UTF8_FULL, Table};
use std::io::{self, Write};

/// Hook given the constructed table before rendering.
pub type TableFilter = Box<dyn Fn(&mut Table)>;

/// Option bundle for table rendering.
///
/// All fields are optional: headers default to the aggregated key set of
/// the flattened rows, the writer defaults to stdout, and the filter
/// defaults to a no-op.
///
/// # Examples
///
/// ```rust
/// use serde_inspect::{inspect, TableOptions};
///
/// struct Item {
///     id: u32,
///     name: String,
/// }
///
/// inspect!(Item { id, name });
///
/// let items = vec![Item { id: 1, name: "bolt".to_string() }];
/// let table = TableOptions::new()
///     .with_headers(vec!["name".to_string()])
///     .dump_table(&items);
/// assert!(table.contains("bolt"));
/// assert!(!table.contains('1'));
/// ```
#[derive(Default)]
pub struct TableOptions {
    /// Explicit ordered column names; overrides auto-aggregation.
    pub headers: Option<Vec<String>>,
    /// Output destination for [`print_dump_table`](TableOptions::print_dump_table).
    pub writer: Option<Box<dyn Write>>,
    /// Post-construction hook run on the table before rendering.
    pub filter: Option<TableFilter>,
}

impl TableOptions {
    /// Creates an empty option bundle (auto headers, stdout, no filter).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets explicit ordered column names.
    #[must_use]
    pub fn with_headers(mut self, headers: Vec<String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets the output destination.
    #[must_use]
    pub fn with_writer(mut self, writer: impl Write + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Sets the pre-render table hook.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Fn(&mut Table) + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Renders the rows to a string, consuming the options.
    ///
    /// The configured writer, if any, is ignored on this path.
    #[must_use]
    pub fn dump_table<T: Inspect>(self, rows: &[T]) -> String {
        self.render(rows)
    }

    /// Renders the rows and writes them to the configured writer, or stdout.
    ///
    /// Write failures are swallowed: table output is a best-effort display
    /// aid and never disrupts the host program.
    pub fn print_dump_table<T: Inspect>(mut self, rows: &[T]) {
        let rendered = self.render(rows);
        match self.writer.take() {
            Some(mut writer) => {
                let _ = writeln!(writer, "{}", rendered);
            }
            None => {
                let _ = writeln!(io::stdout(), "{}", rendered);
            }
        }
    }

    fn render<T: Inspect>(&self, rows: &[T]) -> String {
        let maps: Vec<FieldMap> = rows.iter().map(|row| flatten(row)).collect();
        let headers = match &self.headers {
            Some(explicit) => explicit.clone(),
            None => all_keys(&maps),
        };

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(headers.clone());
        for map in &maps {
            let cells: Vec<String> = headers
                .iter()
                .map(|key| map.get(key).map(ToString::to_string).unwrap_or_default())
                .collect();
            table.add_row(cells);
        }

        if let Some(filter) = &self.filter {
            filter(&mut table);
        }
        table.to_string()
    }
}

/// Renders a slice of records as a table string with default options.
#[must_use]
pub fn dump_table<T: Inspect>(rows: &[T]) -> String {
    TableOptions::new().dump_table(rows)
}

/// Prints a slice of records as a table to stdout with default options.
pub fn print_dump_table<T: Inspect>(rows: &[T]) {
    TableOptions::new().print_dump_table(rows);
}
