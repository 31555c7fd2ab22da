use crate::catalog::Song;
use crate::user::Playlist;
use std::fmt;

/// Successful command outcome, rendered into the fixed report strings of the
/// output contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    SongsLoaded {
        count: usize,
    },
    UserCreated {
        user_id: usize,
        name: String,
    },
    PlaylistCreated {
        playlist_id: usize,
    },
    PlaylistDeleted,
    PlaylistContents {
        playlist_id: usize,
        title: String,
        song_ids: Vec<u32>,
    },
    NowPlaying {
        title: String,
        album: String,
        collaborators: Vec<String>,
    },
}

impl Response {
    pub fn now_playing(song: &Song) -> Response {
        Response::NowPlaying {
            title: song.title.clone(),
            album: song.album.clone(),
            collaborators: song.collaborators.clone(),
        }
    }

    pub fn playlist_contents(playlist: &Playlist) -> Response {
        Response::PlaylistContents {
            playlist_id: playlist.id,
            title: playlist.title.clone(),
            song_ids: playlist.song_ids(),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::SongsLoaded { .. } => write!(f, "Songs Loaded successfully"),
            Response::UserCreated { user_id, name } => write!(f, "{} {}", user_id, name),
            Response::PlaylistCreated { playlist_id } => {
                write!(f, "Playlist ID - {}", playlist_id)
            }
            Response::PlaylistDeleted => write!(f, "Delete Successful"),
            Response::PlaylistContents {
                playlist_id,
                title,
                song_ids,
            } => {
                let ids = song_ids
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(
                    f,
                    "Playlist ID - {}\nPlaylist Name - {}\nSong IDs - {}",
                    playlist_id, title, ids
                )
            }
            Response::NowPlaying {
                title,
                album,
                collaborators,
            } => write!(
                f,
                "Current Song Playing\nSong - {}\nAlbum - {}\nArtists - {}",
                title,
                album,
                collaborators.join(",")
            ),
        }
    }
}
