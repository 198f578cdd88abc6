//! Page components, one per registered route plus the not-found fallback.
//!
//! Pages are plain static views over the records in [`crate::content`]; they
//! hold no state and take no props, so rendering a page twice yields
//! identical markup.

mod chapter;
mod chapters;
mod home;
mod not_found;

pub use chapter::{ChapterFourPage, ChapterOnePage, ChapterThreePage, ChapterTwoPage};
pub use chapters::ChapterIndexPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
