//! Turns `application/sparql-results+json` responses into a flat table.
//!
//! Results are schema-less; the columns of a [`ResultTable`] are whatever
//! flattened key paths the binding records happen to contain, in first-seen
//! order. This is a property of the result format, not something this crate
//! tries to paper over with a schema.

mod error;
mod table;

pub use error::TableError;
pub use table::ResultTable;
