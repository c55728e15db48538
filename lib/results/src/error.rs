/// An error raised when the response JSON does not have the shape of SPARQL
/// query results.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TableError {
    /// The top-level object carries no `results.bindings` array.
    #[error("response JSON has no `results.bindings` array")]
    MissingBindings,
    /// A binding record was not a JSON object.
    #[error("binding record at index {0} is not a JSON object")]
    NotARecord(usize),
}
