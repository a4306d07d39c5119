use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One resident row of a roster CSV.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ID")]
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("unable to open roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed roster row: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads `Name,ID` rows in file order. Fields are trimmed, nothing else is checked.
pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<RosterEntry>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for record in csv_reader.deserialize::<RosterEntry>() {
        entries.push(record?);
    }
    Ok(entries)
}

pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<RosterEntry>, RosterError> {
    let file = File::open(path)?;
    parse_roster(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_rows_in_order_with_trimming() {
        let csv = "Name,ID\n  Farhan Kabir , 221-15-042\nLamia Akter,221-15-043\n";
        let entries = parse_roster(Cursor::new(csv)).expect("roster parses");
        assert_eq!(
            entries,
            vec![
                RosterEntry {
                    name: "Farhan Kabir".to_string(),
                    id: "221-15-042".to_string(),
                },
                RosterEntry {
                    name: "Lamia Akter".to_string(),
                    id: "221-15-043".to_string(),
                },
            ]
        );
    }

    #[test]
    fn missing_id_column_is_reported() {
        let csv = "Name\nFarhan Kabir\n";
        match parse_roster(Cursor::new(csv)) {
            Err(RosterError::Csv(_)) => {}
            other => panic!("expected csv error, got {other:?}"),
        }
    }

    #[test]
    fn load_reports_missing_file() {
        match load_roster("does/not/exist.csv") {
            Err(RosterError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
