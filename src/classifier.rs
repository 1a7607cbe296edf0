//! Decide which kind of travel an event describes.
//!
//! Rules are checked in a fixed order and the first match wins, so the more
//! specific categories (parking, rail) come before the broad flight heuristics.
//! Keywords are matched against the lowercased title, tags against the
//! lowercased description. TripIt marks its descriptions with tags such as
//! `[Flight]` or `[Lodging]`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::Category;

lazy_static! {
    // ASCII word boundaries: `CAFÉ` still contains the code `CAF`
    static ref FLIGHT_NUMBER: Regex =
        Regex::new(r"(?-u:\b)[A-Z]{2,3}[0-9]{2,4}(?-u:\b)").unwrap();
    static ref AIRPORT_CODE: Regex = Regex::new(r"(?-u:\b)[A-Z]{3}(?-u:\b)").unwrap();
}

struct Rule {
    category: Category,
    keywords: &'static [&'static str],
    tags: &'static [&'static str],
}

const RULES: [Rule; 5] = [
    Rule {
        category: Category::Parking,
        keywords: &["parking"],
        tags: &["[parking]"],
    },
    Rule {
        category: Category::Train,
        keywords: &["amtrak", "train hall"],
        tags: &["[rail]"],
    },
    Rule {
        category: Category::CarRental,
        keywords: &["rental car", "pick up rental", "drop off rental"],
        tags: &["[car rental]"],
    },
    Rule {
        category: Category::Hotel,
        keywords: &["check-in:", "check-out:"],
        tags: &["[lodging]"],
    },
    Rule {
        category: Category::Flight,
        keywords: &[],
        tags: &["[flight]"],
    },
];

impl Rule {
    fn matches(&self, title: &str, title_lower: &str, description_lower: &str) -> bool {
        self.keywords.iter().any(|kw| title_lower.contains(kw))
            || self.tags.iter().any(|tag| description_lower.contains(tag))
            || (self.category == Category::Flight && looks_like_flight(title, title_lower))
    }
}

/// `DL738`, or `EWR to ATL` style titles.
fn looks_like_flight(title: &str, title_lower: &str) -> bool {
    FLIGHT_NUMBER.is_match(title) || (title_lower.contains(" to ") && AIRPORT_CODE.is_match(title))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    /// Recognise rail travel. When disabled, train events fall through to the
    /// remaining rules.
    pub train: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            train: cfg!(feature = "train"),
        }
    }
}

impl Classifier {
    pub fn new(train: bool) -> Self {
        Self { train }
    }

    pub fn classify(&self, title: &str, description: &str) -> Option<Category> {
        let title_lower = title.to_lowercase();
        let description_lower = description.to_lowercase();

        RULES
            .iter()
            .filter(|rule| self.train || rule.category != Category::Train)
            .find(|rule| rule.matches(title, &title_lower, &description_lower))
            .map(|rule| rule.category)
    }
}

/// Classify with the default [`Classifier`].
///
/// ```rust
/// use travelmoji::{Category, classify};
///
/// assert_eq!(classify("DL2353 EWR to ATL", ""), Some(Category::Flight));
/// assert_eq!(classify("Dinner", ""), None);
/// ```
pub fn classify(title: &str, description: &str) -> Option<Category> {
    Classifier::default().classify(title, description)
}
