//! Runs SPARQL "cells" the way a notebook cell magic does: a directive line,
//! a query body, one blocking request, one rendered table.
//!
//! The whole operation is a straight-line sequence. [`CellRunner::run`]
//! parses the directive, pushes the highlighted query to the host, executes
//! the query over HTTP, flattens the JSON results into a [`ResultTable`],
//! optionally hands the table to the host's binding sink and finally pushes
//! the rendered table. Every failure aborts the invocation; nothing is
//! retried.
//!
//! ```no_run
//! use sparql_cell::{CellHost, CellRunner, HostError, ResultTable};
//!
//! struct Stdout;
//!
//! impl CellHost for Stdout {
//!     fn display_html(&mut self, html: &str) -> Result<(), HostError> {
//!         println!("{html}");
//!         Ok(())
//!     }
//!     fn bind(&mut self, _name: &str, _table: &ResultTable) -> Result<(), HostError> {
//!         Ok(())
//!     }
//! }
//!
//! let runner = CellRunner::default();
//! let table = runner.run(
//!     "df",
//!     "SELECT * WHERE { ?s ?p ?o } LIMIT 5",
//!     &mut Stdout,
//! )?;
//! assert_eq!(table.row_count(), 5);
//! # Ok::<_, sparql_cell::CellError>(())
//! ```

mod directive;
mod error;
mod executor;
mod host;
pub mod presenter;
mod runner;

pub use directive::Directive;
pub use error::{CellError, HostError};
pub use host::CellHost;
pub use runner::{CellRunner, DEFAULT_ENDPOINT};

// Re-export the pieces hosts usually need alongside the runner.
pub use sparql_cell_highlight::{highlight_document, highlight_fragment};
pub use sparql_cell_results::{ResultTable, TableError};
