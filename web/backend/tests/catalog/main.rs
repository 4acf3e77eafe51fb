#[path = "../fixtures/mod.rs"]
mod fixtures;

mod jamendo;
