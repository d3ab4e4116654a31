//! CSV and spreadsheet stringification.
//!
//! Both formats render through the same table builder: the first record is
//! the header, data rows get a zero-based index column in front, and row and
//! column order are kept as they appear in the source.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Reader};
use tabled::{builder::Builder, settings::Style};

#[derive(Debug, thiserror::Error)]
pub enum TabularError {
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Workbook(#[from] calamine::Error),
    #[error("workbook has no worksheets")]
    NoWorksheet,
    #[error("no columns to parse from file")]
    NoColumns,
}

pub fn csv_to_text(bytes: &[u8]) -> Result<String, TabularError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(bytes);

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record?,
        None => return Err(TabularError::NoColumns),
    };
    let mut header: Vec<String> = header.iter().map(ToOwned::to_owned).collect();
    if let Some(first) = header.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        rows.push(record.iter().map(ToOwned::to_owned).collect::<Vec<_>>());
    }

    Ok(render_table(header, rows))
}

/// Renders the first worksheet of an XLSX/XLS/ODS workbook.
pub fn workbook_to_text(bytes: &[u8]) -> Result<String, TabularError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(TabularError::NoWorksheet)??;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>());
    let header = rows.next().ok_or(TabularError::NoColumns)?;
    Ok(render_table(header, rows.collect()))
}

fn render_table(header: Vec<String>, rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(std::iter::once(String::new()).chain(header));
    for (index, row) in rows.into_iter().enumerate() {
        builder.push_record(std::iter::once(index.to_string()).chain(row));
    }

    let mut table = builder.build();
    table.with(Style::blank());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::{csv_to_text, render_table, TabularError};

    #[test]
    fn index_column_numbers_data_rows() {
        let table = render_table(
            vec!["name".into(), "qty".into()],
            vec![vec!["apple".into(), "3".into()], vec!["pear".into(), "10".into()]],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("name") && lines[0].contains("qty"));
        assert!(lines[1].trim_start().starts_with('0') && lines[1].contains("apple"));
        assert!(lines[2].trim_start().starts_with('1') && lines[2].contains("pear"));
    }

    #[test]
    fn empty_csv_has_no_columns() {
        assert!(matches!(csv_to_text(b""), Err(TabularError::NoColumns)));
    }
}
