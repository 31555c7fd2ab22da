use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: u32,
    pub title: String,
    pub genre: String,
    pub album: String,
    pub owner: String,
    pub collaborators: Vec<String>,
}
