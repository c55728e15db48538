//! Fixed HTML presentation of a result table.
//!
//! Everything here is a hardcoded constant on purpose: a bounded-height
//! scrollable container, word wrapping for long cells and a sticky header
//! row. There are no user-facing presentation options.

use sparql_cell_highlight::escape_html;
use sparql_cell_results::ResultTable;

/// Inline style of the scrollable container around the table.
const TABLE_STYLE: &str =
    "display:block; max-height:400px; overflow:auto; white-space:normal; word-wrap:break-word;";

/// Keeps the header row pinned and visually distinct while scrolling.
const HEADER_CSS: &str = "\
.sparql-cell-table thead th { position: sticky; top: 0; background-color: #f0f0f0; z-index: 2; }
.sparql-cell-table th, .sparql-cell-table td { padding: 2px 8px; text-align: left; }
";

/// Renders `table` as an HTML fragment. Every row is rendered; unbound cells
/// come out empty; all text is escaped.
pub fn render_table(table: &ResultTable) -> String {
    let mut html = String::from("<div>\n<style>\n");
    html.push_str(HEADER_CSS);
    html.push_str("</style>\n<table class=\"sparql-cell-table\" style=\"");
    html.push_str(TABLE_STYLE);
    html.push_str("\">\n<thead>\n<tr>");
    for column in table.columns() {
        html.push_str("<th>");
        html.push_str(&escape_html(column));
        html.push_str("</th>");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in table.rows() {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            if let Some(text) = cell {
                html.push_str(&escape_html(text));
            }
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> ResultTable {
        ResultTable::from_response(&json!({
            "results": { "bindings": [
                { "s": { "value": "<tag>" } },
                { "s": { "value": "b" }, "p": { "value": "c" } },
            ]}
        }))
        .unwrap()
    }

    #[test]
    fn container_is_scrollable_and_bounded() {
        let html = render_table(&table());
        assert!(html.contains("max-height:400px"));
        assert!(html.contains("overflow:auto"));
        assert!(html.contains("word-wrap:break-word"));
    }

    #[test]
    fn header_is_sticky_and_tinted() {
        let html = render_table(&table());
        assert!(html.contains("position: sticky"));
        assert!(html.contains("background-color: #f0f0f0"));
        assert!(html.contains("z-index: 2"));
    }

    #[test]
    fn every_row_and_column_is_rendered() {
        let html = render_table(&table());
        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.contains("<th>s.value</th>"));
        assert!(html.contains("<th>p.value</th>"));
    }

    #[test]
    fn cell_text_is_escaped_and_unbound_cells_are_empty() {
        let html = render_table(&table());
        assert!(html.contains("<td>&lt;tag&gt;</td>"));
        assert!(html.contains("<td></td>"));
    }
}
