//! Render decorated titles.

mod title;
pub use title::decorate_title;
