use crate::query::QueryResult;
use std::fmt;

/// HTML rendering of a query result, ready to be embedded in a page.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlTable {
    html: String,
    columns: usize,
    rows: usize,
}

impl HtmlTable {
    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn into_string(self) -> String {
        self.html
    }
}

impl fmt::Display for HtmlTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the first `n_rows` rows of `result` as an HTML `<table>`.
///
/// The header row lists the columns in query order; no index column is
/// emitted. Asking for more rows than available renders all of them.
/// Every cell is formatted independently through `Cell`'s `Display`.
pub fn render_html(result: &QueryResult, n_rows: usize) -> HtmlTable {
    let rows = result.head(n_rows);
    let mut html = String::from("<table border=\"1\" class=\"dataframe\">\n");

    html.push_str("  <thead>\n");
    html.push_str("    <tr style=\"text-align: right;\">\n");
    for col in result.columns() {
        html.push_str(&format!("      <th>{}</th>\n", escape(col)));
    }
    html.push_str("    </tr>\n");
    html.push_str("  </thead>\n");

    html.push_str("  <tbody>\n");
    for row in rows {
        html.push_str("    <tr>\n");
        for cell in row {
            html.push_str(&format!("      <td>{}</td>\n", escape(&cell.to_string())));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n");
    html.push_str("</table>");

    HtmlTable {
        html,
        columns: result.columns().len(),
        rows: rows.len(),
    }
}
