use crate::error::CellError;
use reqwest::blocking::{Client, Request};
use reqwest::header::{ACCEPT, USER_AGENT};

/// Identifies this client to endpoints. Kept identical to the notebook magic
/// this tool descends from, so server-side logs stay comparable.
const CLIENT_USER_AGENT: &str = "JupyterSPARQLMagic/0.1";
const RESULTS_MEDIA_TYPE: &str = "application/sparql-results+json";

/// Builds `GET <endpoint>?query=<query>` with the fixed headers.
///
/// The endpoint string is handed to reqwest as-is; an unparsable URL fails
/// here as a transport error, not earlier.
pub(crate) fn build_request(
    client: &Client,
    endpoint: &str,
    query: &str,
) -> Result<Request, reqwest::Error> {
    client
        .get(endpoint)
        .query(&[("query", query)])
        .header(USER_AGENT, CLIENT_USER_AGENT)
        .header(ACCEPT, RESULTS_MEDIA_TYPE)
        .build()
}

/// Sends the query and returns the raw response body.
///
/// Fully blocking, no timeout, no retry. A non-success status fails without
/// reading the body.
pub(crate) fn execute(client: &Client, endpoint: &str, query: &str) -> Result<String, CellError> {
    let request = build_request(client, endpoint, query)?;
    let response = client.execute(request)?;
    let status = response.status();
    if !status.is_success() {
        return Err(CellError::Status {
            status,
            endpoint: endpoint.to_owned(),
        });
    }
    Ok(response.text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_query_and_headers() {
        let client = Client::new();
        let request = build_request(
            &client,
            "https://example.org/sparql",
            "SELECT * WHERE { ?s ?p ?o } LIMIT 1",
        )
        .unwrap();

        assert_eq!(request.method(), &reqwest::Method::GET);
        assert_eq!(request.url().host_str(), Some("example.org"));
        let query_pairs: Vec<_> = request.url().query_pairs().collect();
        assert_eq!(query_pairs.len(), 1);
        assert_eq!(query_pairs[0].0, "query");
        assert_eq!(query_pairs[0].1, "SELECT * WHERE { ?s ?p ?o } LIMIT 1");

        let headers = request.headers();
        assert_eq!(headers.get(USER_AGENT).unwrap(), "JupyterSPARQLMagic/0.1");
        assert_eq!(
            headers.get(ACCEPT).unwrap(),
            "application/sparql-results+json"
        );
    }

    #[test]
    fn invalid_endpoint_fails_at_request_time() {
        let client = Client::new();
        assert!(build_request(&client, "not a url", "ASK {}").is_err());
    }
}
