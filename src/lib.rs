const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";
const SUMMARY_PREFIX: &str = "SUMMARY:";
const DESCRIPTION_PREFIX: &str = "DESCRIPTION:";
const FOLD_MARKERS: [char; 2] = [' ', '\t'];
/// Property prefixes at which a buffered title gets classified and emitted.
const DECISION_PREFIXES: [&str; 3] = ["LOCATION:", "UID:", "DTSTART"];
const LINE_ENDING: &str = "\r\n";

pub mod types;
pub use types::{Category, EmojiTable};

pub mod classifier;
pub use classifier::{Classifier, classify};

pub mod parser;
pub use parser::{ContentLine, EventRewriter, Line, LineReader, RewriteOptions, Rewriter};

pub mod generator;

#[cfg(feature = "server")]
pub mod server;

/// Rewrite every travel event title of an ICS document with the default options.
///
/// The output always uses `\r\n` line endings.
///
/// ```rust
/// let ics = "BEGIN:VEVENT\nSUMMARY:Parking at LAX\nEND:VEVENT\n";
/// assert_eq!(
///     travelmoji::rewrite(ics),
///     "BEGIN:VEVENT\r\nSUMMARY:🚙 Parking at LAX\r\nEND:VEVENT\r\n"
/// );
/// ```
pub fn rewrite(ics: &str) -> String {
    Rewriter::default().rewrite(ics)
}
