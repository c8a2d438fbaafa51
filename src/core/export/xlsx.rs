use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::models::MovieRecord;
use crate::utils::Result;

/// Write the spreadsheet copy: same columns and rows as the CSV.
pub fn write_xlsx<P: AsRef<Path>>(path: P, records: &[MovieRecord]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, title) in MovieRecord::header().iter().enumerate() {
        worksheet.write(0, col as u16, *title)?;
    }
    for (row, record) in records.iter().enumerate() {
        for (col, value) in record.columns().iter().enumerate() {
            worksheet.write(row as u32 + 1, col as u16, *value)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_a_non_empty_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.xlsx");

        let records = vec![MovieRecord {
            name: String::from("The Godfather"),
            rating: String::from("9.2"),
            votes: String::from("2027423"),
            year: String::from("1972"),
            genre: String::from("R"),
            country: String::from("N/A"),
        }];

        write_xlsx(&path, &records).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
