//! UI Components for Holocron.

pub mod cards;
mod carousel;
mod modal;
mod nav_header;
mod notifications;

pub use carousel::Carousel;
pub use modal::Modal;
pub use nav_header::{NavHeader, NavLocation};
pub use notifications::Notifications;
