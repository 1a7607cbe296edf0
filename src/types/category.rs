use derive_more::Display;
use std::{collections::HashMap, str::FromStr};

/// Travel category of a calendar event.
///
/// Events that fit none of the categories are represented by `None` wherever a
/// classification is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Category {
    #[display("FLIGHT")]
    Flight,
    #[display("HOTEL")]
    Hotel,
    #[display("CAR_RENTAL")]
    CarRental,
    #[display("PARKING")]
    Parking,
    #[display("TRAIN")]
    Train,
}

static CATEGORY_KEYS: phf::Map<&'static str, Category> = phf::phf_map! {
    "flight" => Category::Flight,
    "hotel" => Category::Hotel,
    "car_rental" => Category::CarRental,
    "parking" => Category::Parking,
    "train" => Category::Train,
};

static DEFAULT_EMOJIS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "flight" => "✈️",
    "hotel" => "🛎️",
    "car_rental" => "🚘",
    "parking" => "🚙",
    "train" => "🚆",
};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Flight,
        Category::Hotel,
        Category::CarRental,
        Category::Parking,
        Category::Train,
    ];

    /// Lowercase key used in configuration files and log fields.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Hotel => "hotel",
            Self::CarRental => "car_rental",
            Self::Parking => "parking",
            Self::Train => "train",
        }
    }

    #[must_use]
    pub fn default_emoji(&self) -> &'static str {
        DEFAULT_EMOJIS.get(self.key()).copied().unwrap_or_default()
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORY_KEYS
            .get(s.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Glyph prepended to titles, per category.
///
/// A category without a glyph (or with an empty one) is never decorated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiTable(HashMap<Category, String>);

impl Default for EmojiTable {
    fn default() -> Self {
        Self(
            Category::ALL
                .iter()
                .map(|category| (*category, category.default_emoji().to_owned()))
                .collect(),
        )
    }
}

impl EmojiTable {
    /// A table without any glyph.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    #[inline]
    pub fn get(&self, category: Category) -> Option<&str> {
        self.0
            .get(&category)
            .map(String::as_str)
            .filter(|glyph| !glyph.is_empty())
    }

    pub fn insert(&mut self, category: Category, glyph: impl Into<String>) -> Option<String> {
        self.0.insert(category, glyph.into())
    }

    pub fn remove(&mut self, category: Category) -> Option<String> {
        self.0.remove(&category)
    }

    pub fn with(mut self, category: Category, glyph: impl Into<String>) -> Self {
        self.insert(category, glyph);
        self
    }
}
