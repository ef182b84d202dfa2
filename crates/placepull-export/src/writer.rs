//! CSV serialization of export rows.

use crate::error::ExportError;
use crate::row::{ExportRow, COLUMNS};

/// Serializes rows to UTF-8 CSV bytes: one header row naming the eleven
/// columns, then one row per place. Fields containing the delimiter, quote
/// character, or line breaks get standard RFC 4180 quoting from the `csv`
/// writer.
///
/// # Errors
///
/// Returns [`ExportError`] if a record fails to serialize or the underlying
/// buffer cannot be flushed.
pub fn write_csv(rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    // The header is written explicitly so a zero-row export still carries
    // it; has_headers(false) keeps serialize() from writing a second one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))
}

#[cfg(test)]
mod tests {
    use placepull_places::{EnrichedPlace, PlaceSummary};

    use crate::row::{to_rows, SENTINEL};

    use super::*;

    fn place(id: &str, name: &str) -> EnrichedPlace {
        let summary: PlaceSummary = serde_json::from_value(serde_json::json!({
            "place_id": id,
            "name": name,
        }))
        .unwrap();
        EnrichedPlace::from(summary)
    }

    fn parse(bytes: &[u8]) -> (Vec<String>, Vec<ExportRow>) {
        let mut reader = csv::ReaderBuilder::new().from_reader(bytes);
        let header = reader
            .headers()
            .expect("header row must parse")
            .iter()
            .map(str::to_owned)
            .collect();
        let rows = reader
            .deserialize::<ExportRow>()
            .collect::<Result<Vec<_>, _>>()
            .expect("data rows must parse");
        (header, rows)
    }

    #[test]
    fn header_plus_one_row_per_place() {
        let rows = to_rows(&[place("a", "A"), place("b", "B"), place("c", "C")]);
        let bytes = write_csv(&rows).expect("serialization should succeed");

        let (header, parsed) = parse(&bytes);
        assert_eq!(header, COLUMNS.to_vec());
        assert_eq!(parsed.len(), 3);
    }

    #[test]
    fn empty_row_set_still_writes_the_header() {
        let bytes = write_csv(&[]).expect("serialization should succeed");
        let (header, parsed) = parse(&bytes);
        assert_eq!(header, COLUMNS.to_vec());
        assert!(parsed.is_empty());
    }

    #[test]
    fn round_trip_preserves_all_eleven_fields() {
        let mut enriched = place("ChIJabc", "Cafe Luna");
        enriched.formatted_address = Some("1 Main St, Springfield".to_owned());
        enriched.website = Some("https://cafeluna.example".to_owned());
        enriched.rating = Some(4.5);
        enriched.types = vec!["cafe".to_owned(), "food".to_owned()];

        let rows = to_rows(&[enriched, place("ChIJdef", "Diner")]);
        let bytes = write_csv(&rows).expect("serialization should succeed");
        let (_, parsed) = parse(&bytes);

        assert_eq!(parsed, rows);
    }

    #[test]
    fn fields_with_delimiters_and_quotes_survive_round_trip() {
        let mut enriched = place("x", r#"The "Corner" Cafe, Ltd."#);
        enriched.formatted_address = Some("1 Main St\nSuite 2".to_owned());
        let rows = to_rows(&[enriched]);

        let bytes = write_csv(&rows).expect("serialization should succeed");
        let (_, parsed) = parse(&bytes);

        assert_eq!(parsed[0].name, r#"The "Corner" Cafe, Ltd."#);
        assert_eq!(parsed[0].address, "1 Main St\nSuite 2");
    }

    #[test]
    fn output_is_utf8() {
        let mut enriched = place("x", "Café Zürich");
        enriched.formatted_address = None;
        let rows = to_rows(&[enriched]);
        let bytes = write_csv(&rows).expect("serialization should succeed");

        let text = String::from_utf8(bytes).expect("output must be valid UTF-8");
        assert!(text.contains("Café Zürich"));
        assert!(text.contains(SENTINEL));
    }
}
