//! Pages for Holocron.

mod album;
mod home;
mod packs;

pub use album::Album;
pub use home::Home;
pub use packs::Packs;
