use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

use crate::Category;

lazy_static! {
    // DL2353 EWR to ATL, in any case
    static ref FLIGHT_ROUTE: Regex =
        Regex::new(r"(?i)^([A-Z]{2,3}[0-9]{2,4})\s+([A-Z]{3})\s+to\s+([A-Z]{3})").unwrap();
}

/// Decorate a title value with the glyph of its category.
///
/// Titles already starting with the glyph are returned untouched. Flight titles
/// of the form `DL2353 EWR to ATL` are reformatted to `✈️ EWR→ATL • DL2353`,
/// any other title gets the glyph and a space prepended.
pub fn decorate_title<'t>(category: Category, glyph: &str, title: &'t str) -> Cow<'t, str> {
    if title.starts_with(glyph) {
        return Cow::Borrowed(title);
    }

    if category == Category::Flight
        && let Some(caps) = FLIGHT_ROUTE.captures(title)
    {
        return Cow::Owned(format!("{glyph} {}→{} • {}", &caps[2], &caps[3], &caps[1]));
    }

    Cow::Owned(format!("{glyph} {title}"))
}
