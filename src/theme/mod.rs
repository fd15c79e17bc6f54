//! Theme for Holocron.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
