use crate::catalog::Song;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Back,
}

/// Index arithmetic for playlist navigation: stepping past either end wraps
/// to the opposite end. `len` must be non-zero.
pub fn step_index(current: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Next => (current + 1) % len,
        Direction::Back => (current + len - 1) % len,
    }
}

/// Resolves the current song's position in `songs` as of this call and
/// returns the id one step away in the given direction. Returns None when
/// the current song is no longer part of the list, which can happen when the
/// playlist was edited after the playback pointer was set.
pub fn step(songs: &[Song], current_song_id: u32, direction: Direction) -> Option<u32> {
    let position = songs.iter().position(|song| song.id == current_song_id)?;
    Some(songs[step_index(position, songs.len(), direction)].id)
}
