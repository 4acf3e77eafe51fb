#[path = "../fixtures/mod.rs"]
mod fixtures;

mod playlists;
mod playlog;
