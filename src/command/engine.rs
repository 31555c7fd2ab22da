//! Command dispatcher and the state machine it drives.
//!
//! One `Jukebox` holds the whole in-memory library for a run: the song
//! catalog plus every user with their playlists and playback pointer.
//! Commands are applied strictly in arrival order; each one either mutates
//! the state and produces a report, or fails with a protocol error string
//! and leaves the state untouched.

use super::{Command, CommandError, PlaylistEdit, Response, SongSelection};
use crate::catalog::{load_songs, SongCatalog};
use crate::playback::{self, Direction};
use crate::user::{CurrentlyPlaying, UserStore};
use std::path::Path;
use tracing::{debug, info};

pub struct Jukebox {
    catalog: SongCatalog,
    users: UserStore,
}

impl Jukebox {
    pub fn new() -> Jukebox {
        Jukebox {
            catalog: SongCatalog::new(),
            users: UserStore::new(),
        }
    }

    pub fn with_catalog(catalog: SongCatalog) -> Jukebox {
        Jukebox {
            catalog,
            users: UserStore::new(),
        }
    }

    /// Runs one raw input line and folds success and failure into the single
    /// output string the caller prints. Never panics on user input.
    pub fn execute_line(&mut self, line: &str) -> String {
        match Command::parse(line).and_then(|command| self.execute(command)) {
            Ok(response) => response.to_string(),
            Err(error) => {
                debug!("Command \"{}\" failed: {}", line, error);
                error.to_string()
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Response, CommandError> {
        match command {
            Command::LoadData { path } => self.load_data(&path),
            Command::CreateUser { name } => self.create_user(name),
            Command::CreatePlaylist {
                user_id,
                title,
                song_ids,
            } => self.create_playlist(user_id, title, &song_ids),
            Command::DeletePlaylist {
                user_id,
                playlist_id,
            } => self.delete_playlist(user_id, playlist_id),
            Command::ModifyPlaylist {
                edit,
                user_id,
                playlist_id,
                song_id,
            } => self.modify_playlist(edit, user_id, playlist_id, song_id),
            Command::PlayPlaylist {
                user_id,
                playlist_id,
            } => self.play_playlist(user_id, playlist_id),
            Command::PlaySong { user_id, selection } => self.play_song(user_id, selection),
        }
    }

    fn load_data(&mut self, path: &Path) -> Result<Response, CommandError> {
        // A failed load leaves the catalog as it was; later commands go on.
        let songs =
            load_songs(path).map_err(|error| CommandError::LoadFailed(format!("{:#}", error)))?;
        let count = songs.len();
        self.catalog.add_songs(songs);
        info!("Catalog now has {} songs", self.catalog.get_songs_count());
        Ok(Response::SongsLoaded { count })
    }

    fn create_user(&mut self, name: String) -> Result<Response, CommandError> {
        if name.trim().is_empty() {
            return Err(CommandError::BlankUserName);
        }
        let user_id = self.users.create_user(&name);
        info!("Created user {} \"{}\"", user_id, name);
        Ok(Response::UserCreated { user_id, name })
    }

    fn create_playlist(
        &mut self,
        user_id: usize,
        title: String,
        song_ids: &[u32],
    ) -> Result<Response, CommandError> {
        if title.trim().is_empty() {
            return Err(CommandError::BlankPlaylistTitle);
        }
        if song_ids.is_empty() {
            return Err(CommandError::NoSongsGiven);
        }
        // Resolve every song before touching the user so a missing id cannot
        // leave a half-built playlist behind.
        let mut songs = Vec::with_capacity(song_ids.len());
        for song_id in song_ids {
            songs.push(
                self.catalog
                    .get_song_by_id(*song_id)
                    .ok_or(CommandError::SongNotFound)?
                    .clone(),
            );
        }
        let user = self
            .users
            .get_user_mut(user_id)
            .ok_or(CommandError::UserNotFound)?;
        let playlist_id = user.add_playlist(title, songs);
        Ok(Response::PlaylistCreated { playlist_id })
    }

    fn delete_playlist(
        &mut self,
        user_id: usize,
        playlist_id: usize,
    ) -> Result<Response, CommandError> {
        let user = self
            .users
            .get_user_mut(user_id)
            .ok_or(CommandError::UserNotFound)?;
        if user.remove_playlist(playlist_id) {
            Ok(Response::PlaylistDeleted)
        } else {
            Err(CommandError::NoPlaylistWithGivenId)
        }
    }

    fn modify_playlist(
        &mut self,
        edit: PlaylistEdit,
        user_id: usize,
        playlist_id: usize,
        song_id: u32,
    ) -> Result<Response, CommandError> {
        let song_to_add = match edit {
            PlaylistEdit::AddSong => Some(
                self.catalog
                    .get_song_by_id(song_id)
                    .ok_or(CommandError::SongNotFound)?
                    .clone(),
            ),
            PlaylistEdit::DeleteSong => None,
        };
        let user = self
            .users
            .get_user_mut(user_id)
            .ok_or(CommandError::UserNotFound)?;
        let playlist = user
            .playlist_mut(playlist_id)
            .ok_or(CommandError::PlaylistNotFound)?;
        match song_to_add {
            Some(song) => playlist.add_song(song),
            None => {
                if !playlist.remove_song(song_id) {
                    return Err(CommandError::SongNotFound);
                }
            }
        }
        Ok(Response::playlist_contents(playlist))
    }

    fn play_playlist(
        &mut self,
        user_id: usize,
        playlist_id: usize,
    ) -> Result<Response, CommandError> {
        let user = self
            .users
            .get_user_mut(user_id)
            .ok_or(CommandError::UserNotFound)?;
        let playlist = user
            .playlist(playlist_id)
            .ok_or(CommandError::PlaylistNotFound)?;
        let first_song = playlist
            .songs
            .first()
            .ok_or(CommandError::EmptyPlaylist)?
            .clone();
        user.currently_playing = Some(CurrentlyPlaying {
            playlist_id,
            song_id: first_song.id,
        });
        Ok(Response::now_playing(&first_song))
    }

    fn play_song(
        &mut self,
        user_id: usize,
        selection: SongSelection,
    ) -> Result<Response, CommandError> {
        match selection {
            SongSelection::ById(song_id) => self.play_song_by_id(user_id, song_id),
            SongSelection::Next => self.navigate(user_id, Direction::Next),
            SongSelection::Back => self.navigate(user_id, Direction::Back),
            SongSelection::Stay => self.replay_current(user_id),
        }
    }

    fn play_song_by_id(
        &mut self,
        user_id: usize,
        requested_id: i64,
    ) -> Result<Response, CommandError> {
        let user = self
            .users
            .get_user_mut(user_id)
            .ok_or(CommandError::UserNotFound)?;
        // The membership check spans all of the user's playlists, not just
        // the active one. Ids outside the catalog's range can never be
        // members, so they fail the same way as any stray id.
        let song_id = match u32::try_from(requested_id) {
            Ok(song_id) if user.has_song_in_playlists(song_id) => song_id,
            _ => return Err(CommandError::SongNotInUserPlaylists),
        };
        let active = user
            .currently_playing
            .ok_or(CommandError::NoActivePlayback)?;
        user.currently_playing = Some(CurrentlyPlaying {
            playlist_id: active.playlist_id,
            song_id,
        });
        let song = self
            .catalog
            .get_song_by_id(song_id)
            .ok_or(CommandError::SongNotFound)?;
        Ok(Response::now_playing(song))
    }

    fn navigate(&mut self, user_id: usize, direction: Direction) -> Result<Response, CommandError> {
        let user = self
            .users
            .get_user_mut(user_id)
            .ok_or(CommandError::UserNotFound)?;
        let active = user
            .currently_playing
            .ok_or(CommandError::NoActivePlayback)?;
        // The pointer is weak: the playlist may be gone or reshuffled, so
        // both resolutions happen against the state as of this command.
        let playlist = user
            .playlist(active.playlist_id)
            .ok_or(CommandError::PlaylistNotFound)?;
        let song_id = playback::step(&playlist.songs, active.song_id, direction)
            .ok_or(CommandError::SongNotFound)?;
        user.currently_playing = Some(CurrentlyPlaying {
            playlist_id: active.playlist_id,
            song_id,
        });
        let song = self
            .catalog
            .get_song_by_id(song_id)
            .ok_or(CommandError::SongNotFound)?;
        Ok(Response::now_playing(song))
    }

    fn replay_current(&mut self, user_id: usize) -> Result<Response, CommandError> {
        let user = self
            .users
            .get_user(user_id)
            .ok_or(CommandError::UserNotFound)?;
        let active = user
            .currently_playing
            .ok_or(CommandError::NoActivePlayback)?;
        let song = self
            .catalog
            .get_song_by_id(active.song_id)
            .ok_or(CommandError::SongNotFound)?;
        Ok(Response::now_playing(song))
    }

    #[cfg(test)]
    fn currently_playing_of(&self, user_id: usize) -> Option<CurrentlyPlaying> {
        self.users
            .get_user(user_id)
            .and_then(|user| user.currently_playing)
    }
}

impl Default for Jukebox {
    fn default() -> Jukebox {
        Jukebox::new()
    }
}
