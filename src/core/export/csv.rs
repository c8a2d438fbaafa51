use std::path::Path;

use crate::models::MovieRecord;
use crate::utils::Result;

/// Write all records to a delimited file with a header row. Column order
/// follows the record field order; no index column is added.
pub fn write_csv<P: AsRef<Path>>(path: P, records: &[MovieRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<MovieRecord> {
        vec![
            MovieRecord {
                name: String::from("The Shawshank Redemption"),
                rating: String::from("9.3"),
                votes: String::from("2911842"),
                year: String::from("1994"),
                genre: String::from("R"),
                country: String::from("United States"),
            },
            MovieRecord {
                name: String::from("The Godfather"),
                rating: String::from("9.2"),
                votes: String::from("2027423"),
                year: String::from("1972"),
                genre: String::from("R"),
                country: String::from("N/A"),
            },
        ]
    }

    #[test]
    fn writes_header_and_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");

        write_csv(&path, &sample()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Name,Rating,Votes,Year,Genre,Country");
        assert_eq!(
            lines[1],
            "The Shawshank Redemption,9.3,2911842,1994,R,United States"
        );
        assert_eq!(lines[2], "The Godfather,9.2,2027423,1972,R,N/A");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        assert!(write_csv("/definitely/not/a/dir/movies.csv", &sample()).is_err());
    }
}
