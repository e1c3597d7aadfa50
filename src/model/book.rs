use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub genre: String,

    /// May point at an author that no longer exists.
    pub author_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub name: String,
    pub genre: String,
    pub author_id: String,
}

impl NewBook {
    pub fn new(
        name: impl Into<String>,
        genre: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
            author_id: author_id.into(),
        }
    }
}
