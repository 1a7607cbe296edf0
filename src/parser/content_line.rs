//! Recognise the shape of a raw ICS line.
//!
//! Only the handful of shapes the event rewriter reacts to are told apart:
//! - the `BEGIN:VEVENT` / `END:VEVENT` markers,
//! - `SUMMARY:` and `DESCRIPTION:` properties, with their value,
//! - fold continuations (a leading space or tab),
//! - properties at which a buffered title gets decided (`LOCATION:`, `UID:`,
//!   `DTSTART`).
//!
//! #### Warning
//!   Matching is a plain case-sensitive prefix check. Properties carrying
//!   parameters (`SUMMARY;LANGUAGE=en:...`) are not recognised as titles and
//!   pass through as [`ContentLine::Other`].

use crate::{
    BEGIN_EVENT, DECISION_PREFIXES, DESCRIPTION_PREFIX, END_EVENT, FOLD_MARKERS, SUMMARY_PREFIX,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLine<'a> {
    BeginEvent,
    EndEvent,
    /// Title property, holding its value.
    Summary(&'a str),
    /// Description property, holding its value.
    Description(&'a str),
    /// Folded continuation, holding the line without its fold marker.
    Continuation(&'a str),
    DecisionPoint,
    Other,
}

impl<'a> ContentLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        if line == BEGIN_EVENT {
            return Self::BeginEvent;
        }
        if line == END_EVENT {
            return Self::EndEvent;
        }
        if let Some(value) = line.strip_prefix(SUMMARY_PREFIX) {
            return Self::Summary(value);
        }
        if let Some(value) = line.strip_prefix(DESCRIPTION_PREFIX) {
            return Self::Description(value);
        }
        if let Some(rest) = line.strip_prefix(FOLD_MARKERS) {
            return Self::Continuation(rest);
        }
        if DECISION_PREFIXES
            .iter()
            .any(|prefix| line.starts_with(prefix))
        {
            return Self::DecisionPoint;
        }
        Self::Other
    }
}
