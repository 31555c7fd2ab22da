mod user_models;
mod user_store;

pub use user_models::{CurrentlyPlaying, Playlist, User};
pub use user_store::UserStore;
