use thiserror::Error;

/// Everything a command can fail with. The `Display` strings are part of the
/// output contract and must not change.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid Operation")]
    InvalidOperation,

    #[error("Username cannot be empty or null")]
    BlankUserName,

    #[error("Playlist title cannot be empty or null")]
    BlankPlaylistTitle,

    #[error("Playlist must contain at least one song")]
    NoSongsGiven,

    #[error("User not found.")]
    UserNotFound,

    #[error("Playlist not found.")]
    PlaylistNotFound,

    #[error("Song not found.")]
    SongNotFound,

    #[error("NO PLAYLIST FOUND WITH THE GIVEN PLAYLISTID")]
    NoPlaylistWithGivenId,

    #[error("Playlist is empty. No songs to play.")]
    EmptyPlaylist,

    #[error("Given song id is not a part of the active playlist")]
    SongNotInUserPlaylists,

    #[error("No song is currently playing for this user")]
    NoActivePlayback,

    #[error("Could not load songs: {0}")]
    LoadFailed(String),
}
