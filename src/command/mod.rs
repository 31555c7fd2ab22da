mod command;
mod engine;
mod error;
mod response;

pub use command::{Command, PlaylistEdit, SongSelection, OPERATIONS};
pub use engine::Jukebox;
pub use error::CommandError;
pub use response::Response;
