mod category;
pub use category::{Category, EmojiTable, UnknownCategory};
