use crate::directive::Directive;
use crate::error::CellError;
use crate::executor;
use crate::host::CellHost;
use crate::presenter;
use reqwest::blocking::Client;
use sparql_cell_highlight::highlight_document;
use sparql_cell_results::ResultTable;

/// Endpoint used when neither the runner's configuration nor the directive
/// names one.
pub const DEFAULT_ENDPOINT: &str = "https://ld.admin.ch/query";

/// Runs SPARQL cells: a directive line plus a query body.
///
/// The default endpoint is explicit per-instance state, not a process-wide
/// global; hosts that want the "change it between invocations" behavior keep
/// the runner around and call [`CellRunner::set_default_endpoint`].
pub struct CellRunner {
    client: Client,
    default_endpoint: String,
}

impl CellRunner {
    pub fn new(default_endpoint: impl Into<String>) -> Self {
        CellRunner {
            client: Client::new(),
            default_endpoint: default_endpoint.into(),
        }
    }

    pub fn default_endpoint(&self) -> &str {
        &self.default_endpoint
    }

    pub fn set_default_endpoint(&mut self, endpoint: impl Into<String>) {
        self.default_endpoint = endpoint.into();
    }

    /// Runs one cell against `host` and returns the materialized table.
    ///
    /// The sequence is fixed: parse the directive, display the highlighted
    /// query, execute, parse JSON, flatten, bind (only when the directive
    /// named a variable), display the rendered table. The highlighted query
    /// is displayed *before* the request goes out, so the user always sees
    /// what was attempted, even when execution fails.
    pub fn run(
        &self,
        line: &str,
        body: &str,
        host: &mut dyn CellHost,
    ) -> Result<ResultTable, CellError> {
        let directive = Directive::parse(line, &self.default_endpoint);
        let query = body.trim();

        host.display_html(&highlight_document(query))
            .map_err(CellError::Host)?;

        let response_body = executor::execute(&self.client, &directive.endpoint, query)?;
        self.finish(&directive, &response_body, host)
    }

    /// The post-network half of [`CellRunner::run`]: parse, flatten, bind,
    /// present.
    fn finish(
        &self,
        directive: &Directive,
        response_body: &str,
        host: &mut dyn CellHost,
    ) -> Result<ResultTable, CellError> {
        let json: serde_json::Value = serde_json::from_str(response_body)?;
        let table = ResultTable::from_response(&json)?;

        if let Some(name) = &directive.varname {
            host.bind(name, &table).map_err(CellError::Host)?;
        }

        host.display_html(&presenter::render_table(&table))
            .map_err(CellError::Host)?;
        Ok(table)
    }
}

impl Default for CellRunner {
    fn default() -> Self {
        CellRunner::new(DEFAULT_ENDPOINT)
    }
}
