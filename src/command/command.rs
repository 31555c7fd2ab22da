use super::CommandError;
use std::path::PathBuf;

/// Operation keywords recognized by the dispatcher.
pub const OPERATIONS: &[&str] = &[
    "LOAD-DATA",
    "CREATE-USER",
    "CREATE-PLAYLIST",
    "DELETE-PLAYLIST",
    "MODIFY-PLAYLIST",
    "PLAY-SONG",
    "PLAY-PLAYLIST",
];

/// What `PLAY-SONG` should do with its second argument. Any parseable
/// integer, negative included, is an attempted direct play; only
/// non-numeric tokens fall back to `Stay`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SongSelection {
    ById(i64),
    Next,
    Back,
    /// Any other token keeps the current song and re-emits its report.
    Stay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaylistEdit {
    AddSong,
    DeleteSong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    LoadData {
        path: PathBuf,
    },
    CreateUser {
        name: String,
    },
    CreatePlaylist {
        user_id: usize,
        title: String,
        song_ids: Vec<u32>,
    },
    DeletePlaylist {
        user_id: usize,
        playlist_id: usize,
    },
    ModifyPlaylist {
        edit: PlaylistEdit,
        user_id: usize,
        playlist_id: usize,
        song_id: u32,
    },
    PlayPlaylist {
        user_id: usize,
        playlist_id: usize,
    },
    PlaySong {
        user_id: usize,
        selection: SongSelection,
    },
}

impl Command {
    /// Parses one raw input line. The grammar splits on single spaces and
    /// the first token selects the operation. Anything that does not resolve
    /// to a well-formed operation is an invalid operation, never a panic.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let tokens: Vec<&str> = line.split(' ').collect();
        match tokens[0] {
            "LOAD-DATA" => {
                let path = tokens.get(1).ok_or(CommandError::InvalidOperation)?;
                Ok(Command::LoadData {
                    path: PathBuf::from(path),
                })
            }
            "CREATE-USER" => Ok(Command::CreateUser {
                name: tokens.get(1).copied().unwrap_or("").to_owned(),
            }),
            "CREATE-PLAYLIST" => {
                let user_id = parse_id(tokens.get(1))?;
                let title = tokens.get(2).copied().unwrap_or("").to_owned();
                let song_ids = tokens
                    .iter()
                    .skip(3)
                    .map(|token| token.parse::<u32>().map_err(|_| CommandError::InvalidOperation))
                    .collect::<Result<Vec<u32>, CommandError>>()?;
                Ok(Command::CreatePlaylist {
                    user_id,
                    title,
                    song_ids,
                })
            }
            "DELETE-PLAYLIST" => Ok(Command::DeletePlaylist {
                user_id: parse_id(tokens.get(1))?,
                playlist_id: parse_id(tokens.get(2))?,
            }),
            "MODIFY-PLAYLIST" => {
                let edit = match tokens.get(1).copied() {
                    Some("ADD-SONG") => PlaylistEdit::AddSong,
                    Some("DELETE-SONG") => PlaylistEdit::DeleteSong,
                    _ => return Err(CommandError::InvalidOperation),
                };
                Ok(Command::ModifyPlaylist {
                    edit,
                    user_id: parse_id(tokens.get(2))?,
                    playlist_id: parse_id(tokens.get(3))?,
                    song_id: parse_song_id(tokens.get(4))?,
                })
            }
            "PLAY-PLAYLIST" => Ok(Command::PlayPlaylist {
                user_id: parse_id(tokens.get(1))?,
                playlist_id: parse_id(tokens.get(2))?,
            }),
            "PLAY-SONG" => {
                let user_id = parse_id(tokens.get(1))?;
                let selection = match tokens.get(2).copied() {
                    Some("NEXT") => SongSelection::Next,
                    Some("BACK") => SongSelection::Back,
                    Some(token) => match token.parse::<i64>() {
                        Ok(song_id) => SongSelection::ById(song_id),
                        Err(_) => SongSelection::Stay,
                    },
                    None => SongSelection::Stay,
                };
                Ok(Command::PlaySong { user_id, selection })
            }
            _ => Err(CommandError::InvalidOperation),
        }
    }
}

fn parse_id(token: Option<&&str>) -> Result<usize, CommandError> {
    token
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or(CommandError::InvalidOperation)
}

fn parse_song_id(token: Option<&&str>) -> Result<u32, CommandError> {
    token
        .and_then(|token| token.parse::<u32>().ok())
        .ok_or(CommandError::InvalidOperation)
}
