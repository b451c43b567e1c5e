use serde::{Serialize, Deserialize};

/// One CD entry. The id is supplied by the user and intended to be unique
/// per session, but nothing enforces that.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CdRecord {
    pub id: u64,
    pub title: String,
    pub artist: String,
}

impl CdRecord {
    pub fn new(id: u64, title: &str, artist: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
        }
    }
}
