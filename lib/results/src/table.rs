use crate::error::TableError;
use serde_json::Value;
use std::collections::HashMap;

/// A flat view over the binding records of a SPARQL JSON result.
///
/// Columns are the union of the flattened key paths of all records, in the
/// order they were first seen; rows keep the order of the response array.
/// A record that does not bind a column yields `None` in that cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl ResultTable {
    /// Builds a table from a parsed `application/sparql-results+json`
    /// response.
    ///
    /// The response must carry a `results.bindings` array of objects; each
    /// object becomes one row. Nested objects are flattened with `.`-joined
    /// key paths, so the usual binding descriptors come out as `s.type`,
    /// `s.value` and friends.
    pub fn from_response(response: &Value) -> Result<Self, TableError> {
        let bindings = response
            .get("results")
            .and_then(|results| results.get("bindings"))
            .and_then(Value::as_array)
            .ok_or(TableError::MissingBindings)?;

        let mut columns: Vec<String> = Vec::new();
        let mut column_index: HashMap<String, usize> = HashMap::new();
        let mut flat_rows: Vec<Vec<(usize, String)>> = Vec::with_capacity(bindings.len());

        for (row_number, record) in bindings.iter().enumerate() {
            if !record.is_object() {
                return Err(TableError::NotARecord(row_number));
            }
            let mut cells = Vec::new();
            flatten_into("", record, &mut cells);

            let mut flat = Vec::with_capacity(cells.len());
            for (path, text) in cells {
                let column = match column_index.get(&path) {
                    Some(&column) => column,
                    None => {
                        let column = columns.len();
                        column_index.insert(path.clone(), column);
                        columns.push(path);
                        column
                    }
                };
                flat.push((column, text));
            }
            flat_rows.push(flat);
        }

        let rows = flat_rows
            .into_iter()
            .map(|flat| {
                let mut row = vec![None; columns.len()];
                for (column, text) in flat {
                    row[column] = Some(text);
                }
                row
            })
            .collect();

        Ok(ResultTable { columns, rows })
    }

    /// The flattened column paths, in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in response order. Each row has exactly `columns().len()` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<String>]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// The cell at `row` under the column named `column`, if both exist and
    /// the record bound a value there.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.columns.iter().position(|name| name == column)?;
        self.rows.get(row)?.get(index)?.as_deref()
    }
}

/// Flattens `value` below `prefix` into `(path, text)` cells.
///
/// Scalars become their display form (strings unquoted), arrays keep their
/// compact JSON form, nulls produce no cell and empty objects vanish.
fn flatten_into(prefix: &str, value: &Value, cells: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(&path, nested, cells);
            }
        }
        Value::Null => {}
        Value::String(text) => cells.push((prefix.to_owned(), text.clone())),
        other => cells.push((prefix.to_owned(), other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(bindings: Value) -> Value {
        json!({ "head": { "vars": ["s", "p", "o"] }, "results": { "bindings": bindings } })
    }

    #[test]
    fn one_row_per_binding_record() {
        let table = ResultTable::from_response(&response(json!([
            { "a": { "value": "1" }, "b": { "value": "2" } },
            { "a": { "value": "3" }, "b": { "value": "4" } },
            { "a": { "value": "5" }, "b": { "value": "6" } },
        ])))
        .unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.columns(), ["a.value", "b.value"]);
    }

    #[test]
    fn binding_descriptors_flatten_to_dotted_paths() {
        let table = ResultTable::from_response(&response(json!([{
            "s": { "type": "uri", "value": "http://example.org/s" },
            "o": { "type": "literal", "value": "Zürich", "xml:lang": "de" },
        }])))
        .unwrap();
        assert_eq!(
            table.columns(),
            ["s.type", "s.value", "o.type", "o.value", "o.xml:lang"]
        );
        assert_eq!(table.cell(0, "o.xml:lang"), Some("de"));
        assert_eq!(table.cell(0, "s.value"), Some("http://example.org/s"));
    }

    #[test]
    fn columns_union_in_first_seen_order() {
        let table = ResultTable::from_response(&response(json!([
            { "a": { "value": "1" } },
            { "b": { "value": "2" }, "a": { "value": "3" } },
            { "c": { "value": "4" } },
        ])))
        .unwrap();
        assert_eq!(table.columns(), ["a.value", "b.value", "c.value"]);
    }

    #[test]
    fn unbound_columns_are_none() {
        let table = ResultTable::from_response(&response(json!([
            { "a": { "value": "1" } },
            { "b": { "value": "2" } },
        ])))
        .unwrap();
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[0], &[Some("1".to_owned()), None][..]);
        assert_eq!(rows[1], &[None, Some("2".to_owned())][..]);
        assert_eq!(table.cell(1, "a.value"), None);
    }

    #[test]
    fn row_order_is_response_order() {
        let table = ResultTable::from_response(&response(json!([
            { "n": { "value": "first" } },
            { "n": { "value": "second" } },
            { "n": { "value": "third" } },
        ])))
        .unwrap();
        assert_eq!(table.cell(0, "n.value"), Some("first"));
        assert_eq!(table.cell(2, "n.value"), Some("third"));
    }

    #[test]
    fn non_string_scalars_and_arrays_keep_a_readable_form() {
        let table = ResultTable::from_response(&response(json!([{
            "x": { "value": 42, "flag": true, "list": [1, 2] },
        }])))
        .unwrap();
        assert_eq!(table.cell(0, "x.value"), Some("42"));
        assert_eq!(table.cell(0, "x.flag"), Some("true"));
        assert_eq!(table.cell(0, "x.list"), Some("[1,2]"));
    }

    #[test]
    fn null_values_leave_the_cell_unbound() {
        let table = ResultTable::from_response(&response(json!([{
            "x": { "value": null, "type": "literal" },
        }])))
        .unwrap();
        assert_eq!(table.columns(), ["x.type"]);
        assert_eq!(table.cell(0, "x.value"), None);
    }

    #[test]
    fn empty_bindings_make_an_empty_table() {
        let table = ResultTable::from_response(&response(json!([]))).unwrap();
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[test]
    fn missing_bindings_is_a_shape_error() {
        for malformed in [
            json!({}),
            json!({ "results": {} }),
            json!({ "results": { "bindings": "nope" } }),
            json!({ "boolean": true }),
            json!([]),
        ] {
            let error = ResultTable::from_response(&malformed).unwrap_err();
            assert!(matches!(error, TableError::MissingBindings));
        }
    }

    #[test]
    fn non_object_record_is_a_shape_error() {
        let error = ResultTable::from_response(&response(json!([
            { "a": { "value": "1" } },
            "not a record",
        ])))
        .unwrap_err();
        assert!(matches!(error, TableError::NotARecord(1)));
    }
}
