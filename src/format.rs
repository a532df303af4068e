//! Output formatting for the PagerTree CLI.
//!
//! Detail views and list pages can be printed as a plain-text table (the
//! default), JSON or CSV.

use crate::fields::{DetailRow, FieldMap};
use crate::pagination::PagedResult;
use csv::Writer;
use serde_json::{Map, Value};
use std::str::FromStr;
use strum::{Display, EnumIter, IntoEnumIterator};
use unicode_width::UnicodeWidthStr;

pub const TABLE: &str = "table";
pub const JSON: &str = "json";
pub const CSV: &str = "csv";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
    #[error("CSV writer into inner error: {0}")]
    CsvIntoInnerError(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),
    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
}

/// Enum representing the supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    /// Returns all supported format names
    pub fn names() -> Vec<&'static str> {
        OutputFormat::iter()
            .map(|f| match f {
                OutputFormat::Table => TABLE,
                OutputFormat::Json => JSON,
                OutputFormat::Csv => CSV,
            })
            .collect()
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        match format_str.to_lowercase().as_str() {
            TABLE => Ok(OutputFormat::Table),
            JSON => Ok(OutputFormat::Json),
            CSV => Ok(OutputFormat::Csv),
            other => Err(FormattingError::UnsupportedOutputFormat(other.to_string())),
        }
    }
}

pub trait Formattable {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError>;
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

/// Render rows as a pipe-delimited table with a header separator line.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(h.as_str())).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let width = UnicodeWidthStr::width(cell.as_str());
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(width),
                None => widths.push(width),
            }
        }
    }

    let line = |cells: &[String]| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| pad(cells.get(i).map(String::as_str).unwrap_or(""), *w))
            .collect();
        format!("| {} |", padded.join(" | "))
    };

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat((*w).max(1))).collect();
    let mut lines = vec![line(headers), format!("|-{}-|", separator.join("-|-"))];
    lines.extend(rows.iter().map(|row| line(row)));
    lines.join("\n")
}

fn to_csv(headers: &[String], rows: &[Vec<String>]) -> Result<String, FormattingError> {
    let mut wtr = Writer::from_writer(vec![]);
    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    let data = wtr.into_inner()?;
    Ok(String::from_utf8(data)?)
}

/// Resolved detail rows for one resource
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub rows: Vec<DetailRow>,
}

impl DetailView {
    pub fn new(fields: &FieldMap, item: &Value) -> Self {
        Self {
            rows: fields.resolve(item),
        }
    }
}

impl Formattable for DetailView {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        let headers = vec!["Field".to_string(), "Value".to_string()];
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| vec![row.label.clone(), row.value.clone()])
            .collect();
        match f {
            OutputFormat::Table => Ok(render_table(&headers, &rows)),
            OutputFormat::Json => {
                let object: Map<String, Value> = self
                    .rows
                    .iter()
                    .map(|row| (row.label.clone(), Value::String(row.value.clone())))
                    .collect();
                Ok(serde_json::to_string_pretty(&Value::Object(object))?)
            }
            OutputFormat::Csv => to_csv(&headers, &rows),
        }
    }
}

/// One page of a list, with the columns to show for each item
#[derive(Debug, Clone)]
pub struct ListView<'a> {
    pub page: &'a PagedResult,
    pub columns: &'a FieldMap,
    /// Singular resource name used in the summary lines, e.g. "alert"
    pub kind: &'a str,
}

impl ListView<'_> {
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} {}s (offset: {}, limit: {})",
            self.page.len(),
            self.page.total,
            self.kind,
            self.page.offset,
            self.page.limit
        )
    }

    pub fn next_page_hint(&self) -> Option<String> {
        self.page.next_offset().map(|next| {
            format!(
                "More {}s available. Use --offset {} to see next page.",
                self.kind, next
            )
        })
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.page.data.iter().map(|item| self.columns.values(item)).collect()
    }
}

impl Formattable for ListView<'_> {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Table => {
                let mut out = vec![self.summary()];
                if !self.page.is_empty() {
                    out.push(render_table(&self.columns.labels(), &self.rows()));
                }
                if let Some(hint) = self.next_page_hint() {
                    out.push(hint);
                }
                Ok(out.join("\n"))
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self.page)?),
            OutputFormat::Csv => to_csv(&self.columns.labels(), &self.rows()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alerts_page() -> PagedResult {
        PagedResult::from_response(
            Some(json!({
                "data": [
                    {"tiny_id": 1, "title": "Disk full", "status": "open"},
                    {"tiny_id": 2, "title": "CPU hot", "status": "acknowledged"}
                ],
                "total_count": 25,
                "has_more": true
            })),
            10,
            0,
        )
    }

    fn columns() -> FieldMap {
        FieldMap::new()
            .field("tiny_id", "ID")
            .field("title", "Title")
            .field("status", "Status")
    }

    #[test]
    fn test_output_format_names_and_parsing() {
        assert_eq!(OutputFormat::names(), vec!["table", "json", "csv"]);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("tree").is_err());
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let table = render_table(
            &["ID".to_string(), "Name".to_string()],
            &[vec!["1".to_string(), "Ops".to_string()], vec!["22".to_string(), "Platform".to_string()]],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "| ID | Name     |");
        assert_eq!(lines[1], "|----|----------|");
        assert_eq!(lines[2], "| 1  | Ops      |");
        assert_eq!(lines[3], "| 22 | Platform |");
    }

    #[test]
    fn test_list_view_table_has_summary_and_hint() {
        let page = alerts_page();
        let columns = columns();
        let view = ListView { page: &page, columns: &columns, kind: "alert" };
        let out = view.format(&OutputFormat::Table).unwrap();
        assert!(out.starts_with("Showing 2 of 25 alerts (offset: 0, limit: 10)"));
        assert!(out.contains("| Disk full |"));
        assert!(out.ends_with("More alerts available. Use --offset 10 to see next page."));
    }

    #[test]
    fn test_list_view_csv() {
        let page = alerts_page();
        let columns = columns();
        let view = ListView { page: &page, columns: &columns, kind: "alert" };
        let out = view.format(&OutputFormat::Csv).unwrap();
        assert_eq!(out, "ID,Title,Status\n1,Disk full,open\n2,CPU hot,acknowledged\n");
    }

    #[test]
    fn test_detail_view_json() {
        let view = DetailView::new(
            &FieldMap::new().field("id", "Alert ID").field("missing", "Missing"),
            &json!({"id": "a1"}),
        );
        let out = view.format(&OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!({"Alert ID": "a1", "Missing": "N/A"}));
    }
}
