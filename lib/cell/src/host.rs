use crate::error::HostError;
use sparql_cell_results::ResultTable;

/// The capabilities a runner needs from its host environment.
///
/// A notebook maps these onto its display area and interactive namespace; the
/// CLI maps them onto a stream and a directory of CSV files. The runner never
/// owns either side and never manages the lifetime of a bound table.
pub trait CellHost {
    /// Pushes one rendered HTML document or fragment to the host's output
    /// stream.
    fn display_html(&mut self, html: &str) -> Result<(), HostError>;

    /// Installs `table` under `name` in the host's namespace, silently
    /// overwriting any previous value of that name.
    fn bind(&mut self, name: &str, table: &ResultTable) -> Result<(), HostError>;
}
