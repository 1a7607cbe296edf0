mod line;
pub use line::{Line, LineReader};

mod content_line;
pub use content_line::ContentLine;

mod event;
pub use event::EventRewriter;

use itertools::Itertools;

use crate::{EmojiTable, LINE_ENDING};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Recognise rail travel as its own category.
    pub train: bool,
    pub emojis: EmojiTable,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            train: cfg!(feature = "train"),
            emojis: EmojiTable::default(),
        }
    }
}

/// Rewrites the event titles of ICS documents.
///
/// The rewriter never fails: malformed documents are passed through on a best
/// effort basis.
#[derive(Debug, Clone, Default)]
pub struct Rewriter {
    options: RewriteOptions,
}

impl Rewriter {
    pub fn new(options: RewriteOptions) -> Self {
        Rewriter { options }
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    /// Stream the rewritten lines of `ics`, without line terminators.
    pub fn lines<'a>(&'a self, ics: &'a str) -> EventRewriter<'a, LineReader<'a>> {
        EventRewriter::new(LineReader::new(ics), &self.options)
    }

    /// Rewrite `ics`, joining the output with `\r\n`.
    pub fn rewrite(&self, ics: &str) -> String {
        self.lines(ics).join(LINE_ENDING)
    }
}
