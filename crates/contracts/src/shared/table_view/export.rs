//! CSV export of table rows (UTF-8 BOM, `;` separator).

use chrono::NaiveDate;
use thiserror::Error;

/// Какие строки выгружать
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// Rows passing the active filters
    Filtered,
    /// The whole raw list
    All,
}

/// Колонка выгрузки: заголовок и функция значения
pub struct ExportColumn<R> {
    pub header: &'static str,
    pub value: fn(&R) -> String,
}

impl<R> Clone for ExportColumn<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ExportColumn<R> {}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("Nothing to export")]
    Empty,
    #[error("Export failed: {0}")]
    Download(String),
}

/// Build the CSV document. Fails with `Empty` when there are no rows.
pub fn build_csv<R>(rows: &[&R], columns: &[ExportColumn<R>]) -> Result<String, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut csv_content = String::new();
    // UTF-8 BOM, иначе Excel ломает кодировку
    csv_content.push('\u{FEFF}');

    let headers: Vec<String> = columns.iter().map(|c| escape_csv_cell(c.header)).collect();
    csv_content.push_str(&headers.join(";"));
    csv_content.push('\n');

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| escape_csv_cell(&(column.value)(row)))
            .collect();
        csv_content.push_str(&cells.join(";"));
        csv_content.push('\n');
    }

    Ok(csv_content)
}

/// Quote a cell containing the separator, quotes or a line break.
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// `{dataset}[_{summary}]_{YYYY-MM-DD}.csv`, summary slugified.
pub fn export_filename(dataset: &str, filter_summary: &str, date: NaiveDate) -> String {
    let slug = slugify(filter_summary);
    let date = date.format("%Y-%m-%d");
    if slug.is_empty() {
        format!("{dataset}_{date}.csv")
    } else {
        format!("{dataset}_{slug}_{date}.csv")
    }
}

/// Lowercase alphanumerics; other runs collapse to `-`, `_` is kept as a group separator.
fn slugify(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
        } else if ch == '_' {
            out.truncate(out.trim_end_matches('-').len());
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
        } else if !out.is_empty() && !out.ends_with('-') && !out.ends_with('_') {
            out.push('-');
        }
    }
    out.trim_matches(|c| c == '-' || c == '_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        title: &'static str,
        amount: f64,
    }

    fn columns() -> Vec<ExportColumn<Line>> {
        vec![
            ExportColumn { header: "Title", value: |l: &Line| l.title.to_string() },
            ExportColumn { header: "Amount", value: |l: &Line| format!("{:.2}", l.amount) },
        ]
    }

    #[test]
    fn test_csv_layout_and_escaping() {
        let a = Line { title: "Data; Science", amount: 1499.5 };
        let b = Line { title: "The \"Pro\" plan", amount: 0.0 };
        let csv = build_csv(&[&a, &b], &columns()).unwrap();

        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines[0], "Title;Amount");
        assert_eq!(lines[1], "\"Data; Science\";1499.50");
        assert_eq!(lines[2], "\"The \"\"Pro\"\" plan\";0.00");
    }

    #[test]
    fn test_empty_export_is_error() {
        let rows: Vec<&Line> = Vec::new();
        assert_eq!(build_csv(&rows, &columns()), Err(ExportError::Empty));
        assert_eq!(ExportError::Empty.to_string(), "Nothing to export");
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(export_filename("orders", "", date), "orders_2025-01-09.csv");
        assert_eq!(
            export_filename("orders", "Full Stack (Java)_success", date),
            "orders_full-stack-java_success_2025-01-09.csv"
        );
        assert_eq!(
            export_filename("leads", "2025-01-01-2025-01-31", date),
            "leads_2025-01-01-2025-01-31_2025-01-09.csv"
        );
    }
}
