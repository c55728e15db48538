use sparql_cell_results::TableError;
use std::error::Error;

/// Error type host implementations report through [`crate::CellHost`].
pub type HostError = Box<dyn Error + Send + Sync + 'static>;

/// An error that aborted a cell invocation.
///
/// Every kind is fatal; the runner retries nothing and downgrades nothing to
/// a warning. By the time any of these surface the highlighted query has
/// already been pushed to the host.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CellError {
    /// The request could not be sent or the transport failed mid-flight.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status code.
    #[error("endpoint {endpoint} answered with HTTP status {status}")]
    Status {
        status: reqwest::StatusCode,
        endpoint: String,
    },
    /// The response body was not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The response JSON did not contain the expected bindings shape.
    #[error(transparent)]
    Table(#[from] TableError),
    /// The host rejected a display or bind call.
    #[error("host error: {0}")]
    Host(#[source] HostError),
}
