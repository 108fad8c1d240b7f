//! Record list rendering for userdir.
//!
//! The list is a pure projection: it renders one row per record of the
//! sequence it is handed, in sequence order, and never caches rows. Edit and
//! delete actions are reached through the CLI, keyed by the id each row
//! displays.

use std::io::Write;

use crate::error::Result;
use crate::record::Record;

/// Message shown in place of rows when the sequence is empty.
pub const EMPTY_PLACEHOLDER: &str = "No users added yet.";

/// Output format for the record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    /// One line per record.
    #[default]
    Plain,
    /// Aligned columns with a header.
    Table,
    /// Pretty-printed JSON array.
    Json,
}

/// Render the record sequence to the given sink.
///
/// # Errors
///
/// Returns an error if writing to the sink fails.
pub fn render(records: &[Record], format: ListFormat, out: &mut impl Write) -> Result<()> {
    match format {
        ListFormat::Plain => render_plain(records, out),
        ListFormat::Table => render_table(records, out),
        ListFormat::Json => render_json(records, out),
    }
}

/// Render one `id  name / email / contact` line per record.
fn render_plain(records: &[Record], out: &mut impl Write) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "{EMPTY_PLACEHOLDER}")?;
        return Ok(());
    }

    for record in records {
        writeln!(
            out,
            "{}  {} / {} / {}",
            record.id, record.name, record.email, record.contact
        )?;
    }
    Ok(())
}

/// Render aligned ID/NAME/EMAIL/CONTACT columns with a header.
fn render_table(records: &[Record], out: &mut impl Write) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "{EMPTY_PLACEHOLDER}")?;
        return Ok(());
    }

    let id_width = column_width("ID", records.iter().map(|r| r.id.as_str()));
    let name_width = column_width("NAME", records.iter().map(|r| r.name.as_str()));
    let email_width = column_width("EMAIL", records.iter().map(|r| r.email.as_str()));

    writeln!(
        out,
        "{:id_width$}  {:name_width$}  {:email_width$}  CONTACT",
        "ID", "NAME", "EMAIL"
    )?;
    for record in records {
        writeln!(
            out,
            "{:id_width$}  {:name_width$}  {:email_width$}  {}",
            record.id, record.name, record.email, record.contact
        )?;
    }
    Ok(())
}

/// Render the sequence as a pretty-printed JSON array.
fn render_json(records: &[Record], out: &mut impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Width of a column: the longest of the header and all values.
fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(str::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(records: &[Record], format: ListFormat) -> String {
        let mut out = Vec::new();
        render(records, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_renders_placeholder() {
        let output = render_to_string(&[], ListFormat::Plain);
        assert_eq!(output.trim(), EMPTY_PLACEHOLDER);

        let output = render_to_string(&[], ListFormat::Table);
        assert_eq!(output.trim(), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_plain_renders_one_row_per_record() {
        let records = vec![
            Record::new("Ada", "ada@example.com", "555-0100"),
            Record::new("Bea", "bea@example.com", "555-0101"),
        ];

        let output = render_to_string(&records, ListFormat::Plain);
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("Ada / ada@example.com / 555-0100"));
        assert!(output.contains("Bea / bea@example.com / 555-0101"));
    }

    #[test]
    fn test_plain_rows_include_id() {
        let record = Record::new("Ada", "ada@example.com", "555-0100");
        let id = record.id.clone();

        let output = render_to_string(&[record], ListFormat::Plain);
        assert!(output.contains(&id));
    }

    #[test]
    fn test_plain_preserves_sequence_order() {
        let records = vec![
            Record::new("Cyd", "cyd@example.com", "3"),
            Record::new("Ada", "ada@example.com", "1"),
            Record::new("Bea", "bea@example.com", "2"),
        ];

        let output = render_to_string(&records, ListFormat::Plain);
        let cyd = output.find("Cyd").unwrap();
        let ada = output.find("Ada").unwrap();
        let bea = output.find("Bea").unwrap();
        assert!(cyd < ada && ada < bea);
    }

    #[test]
    fn test_table_has_header() {
        let records = vec![Record::new("Ada", "ada@example.com", "555-0100")];

        let output = render_to_string(&records, ListFormat::Table);
        let header = output.lines().next().unwrap();
        assert!(header.contains("ID"));
        assert!(header.contains("NAME"));
        assert!(header.contains("EMAIL"));
        assert!(header.contains("CONTACT"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_json_round_trips() {
        let records = vec![
            Record::new("Ada", "ada@example.com", "555-0100"),
            Record::new("Bea", "bea@example.com", "555-0101"),
        ];

        let output = render_to_string(&records, ListFormat::Json);
        let parsed: Vec<Record> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_json_empty_is_empty_array() {
        let output = render_to_string(&[], ListFormat::Json);
        let parsed: Vec<Record> = serde_json::from_str(&output).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_list_format_default() {
        assert_eq!(ListFormat::default(), ListFormat::Plain);
    }
}
