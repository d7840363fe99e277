//! Procedural image generators that need no source image

/// Pattern descriptions and dispatch
pub mod catalog;
/// Fixed 8x8 checkerboard
pub mod checkerboard;
/// Rainbow, French, Swiss and Greek flags
pub mod flags;
/// Named colors shared by the generators
pub mod palette;

pub use catalog::Pattern;
pub use checkerboard::checkerboard;
pub use flags::{StripeDirection, french_flag, greek_flag, rainbow_flag, swiss_flag};
