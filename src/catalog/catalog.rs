use super::Song;

/// In-memory song catalog. Populated by `LOAD-DATA`, read-only afterwards.
/// Later loads append, so duplicate ids can exist; lookups return the first
/// match in load order.
#[derive(Debug, Default)]
pub struct SongCatalog {
    songs: Vec<Song>,
}

impl SongCatalog {
    pub fn new() -> SongCatalog {
        SongCatalog { songs: Vec::new() }
    }

    pub fn add_songs(&mut self, songs: Vec<Song>) {
        self.songs.extend(songs);
    }

    pub fn get_song_by_id(&self, song_id: u32) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == song_id)
    }

    pub fn get_songs_count(&self) -> usize {
        self.songs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: u32, title: &str) -> Song {
        Song {
            id,
            title: title.to_owned(),
            genre: "Pop".to_owned(),
            album: "Album".to_owned(),
            owner: "Owner".to_owned(),
            collaborators: vec!["Owner".to_owned()],
        }
    }

    #[test]
    fn lookup_returns_first_match_for_duplicate_ids() {
        let mut catalog = SongCatalog::new();
        catalog.add_songs(vec![song(1, "first"), song(1, "second")]);

        assert_eq!(catalog.get_song_by_id(1).unwrap().title, "first");
    }

    #[test]
    fn later_loads_append_instead_of_replacing() {
        let mut catalog = SongCatalog::new();
        catalog.add_songs(vec![song(1, "first")]);
        catalog.add_songs(vec![song(2, "second")]);

        assert_eq!(catalog.get_songs_count(), 2);
        assert_eq!(catalog.get_song_by_id(2).unwrap().title, "second");
    }

    #[test]
    fn missing_id_is_none() {
        let mut catalog = SongCatalog::new();
        catalog.add_songs(vec![song(1, "first")]);

        assert!(catalog.get_song_by_id(99).is_none());
    }
}
