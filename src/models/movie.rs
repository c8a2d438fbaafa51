use serde::Serialize;

/// Substituted for any field that cannot be located or extracted.
pub const PLACEHOLDER: &str = "N/A";

/// One fully extracted chart entry. Every field is either a meaningful
/// value or [`PLACEHOLDER`], never empty; field order is the export
/// column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Votes")]
    pub votes: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Country")]
    pub country: String,
}

impl MovieRecord {
    pub fn header() -> [&'static str; 6] {
        ["Name", "Rating", "Votes", "Year", "Genre", "Country"]
    }

    pub fn columns(&self) -> [&str; 6] {
        [
            &self.name,
            &self.rating,
            &self.votes,
            &self.year,
            &self.genre,
            &self.country,
        ]
    }
}
