//! Play catalog module.
//!
//! Pure data: play metadata plus the lookup table resolving external play
//! ids. No IO, no HTTP, no storage.

pub mod catalog;
pub mod play;

pub use catalog::Catalog;
pub use play::{Play, PlayKind};
