pub mod config;
pub mod field;
pub mod game;
pub mod gesture;
pub mod judge;
pub mod ledger;
pub mod log;
pub mod note;
pub mod spawner;
pub mod strerr;

pub use config::Config;
pub use game::Game;
pub use judge::Judgment;
pub use note::{Note, NoteKind};
