//! Display helpers for query results: HTML for documents, text for terminals.

mod html;

pub use html::{HtmlTable, render_html};

use crate::query::QueryResult;
use crate::utils::table::Table;

/// Render the first `n_rows` rows as an aligned text table.
pub fn render_text(result: &QueryResult, n_rows: usize) -> String {
    let mut table = Table::new(result.columns());
    for row in result.head(n_rows) {
        table.add_row(row.iter().map(|c| c.to_string()).collect());
    }
    table.render()
}
