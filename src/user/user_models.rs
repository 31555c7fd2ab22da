use crate::catalog::Song;

/// Weak reference pair recording a user's last playback position. Ids only,
/// no ownership: the playlist it points at may be deleted or edited later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentlyPlaying {
    pub playlist_id: usize,
    pub song_id: u32,
}

#[derive(Clone, Debug)]
pub struct Playlist {
    pub id: usize,
    pub title: String,
    pub songs: Vec<Song>,
}

impl Playlist {
    pub fn new(id: usize, title: String, songs: Vec<Song>) -> Playlist {
        Playlist { id, title, songs }
    }

    pub fn song_ids(&self) -> Vec<u32> {
        self.songs.iter().map(|song| song.id).collect()
    }

    pub fn add_song(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Removes the first song with the given id. Returns false when no song
    /// in the playlist has that id.
    pub fn remove_song(&mut self, song_id: u32) -> bool {
        match self.songs.iter().position(|song| song.id == song_id) {
            Some(index) => {
                self.songs.remove(index);
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct User {
    pub id: usize,
    pub name: String,
    pub playlists: Vec<Playlist>,
    pub currently_playing: Option<CurrentlyPlaying>,
}

impl User {
    pub fn new(id: usize, name: String) -> User {
        User {
            id,
            name,
            playlists: Vec::new(),
            currently_playing: None,
        }
    }

    pub fn playlist(&self, playlist_id: usize) -> Option<&Playlist> {
        self.playlists
            .iter()
            .find(|playlist| playlist.id == playlist_id)
    }

    pub fn playlist_mut(&mut self, playlist_id: usize) -> Option<&mut Playlist> {
        self.playlists
            .iter_mut()
            .find(|playlist| playlist.id == playlist_id)
    }

    /// Playlist ids are slot numbers: the live playlist count plus one,
    /// computed at creation time. After a deletion the formula starts
    /// handing out already-seen ids; lookups resolve to the first match.
    pub fn add_playlist(&mut self, title: String, songs: Vec<Song>) -> usize {
        let playlist_id = self.playlists.len() + 1;
        self.playlists.push(Playlist::new(playlist_id, title, songs));
        playlist_id
    }

    /// Removes the first playlist with the given id.
    pub fn remove_playlist(&mut self, playlist_id: usize) -> bool {
        match self
            .playlists
            .iter()
            .position(|playlist| playlist.id == playlist_id)
        {
            Some(index) => {
                self.playlists.remove(index);
                true
            }
            None => false,
        }
    }

    /// True when the song appears in at least one of the user's playlists,
    /// active or not.
    pub fn has_song_in_playlists(&self, song_id: u32) -> bool {
        self.playlists
            .iter()
            .any(|playlist| playlist.songs.iter().any(|song| song.id == song_id))
    }
}
