//! Application screens

mod login;
mod notes;

pub use login::LoginPage;
pub use notes::NotesPage;
