use std::borrow::Cow;
use tracing::{debug, trace};

use crate::{
    Classifier, ContentLine, EmojiTable, Line, generator::decorate_title, parser::RewriteOptions,
};

/// A `SUMMARY:` line waiting for its event to be classified.
#[derive(Debug, Clone, Copy)]
struct PendingTitle<'a> {
    line: Line<'a>,
    value: &'a str,
}

/// State of the currently open `VEVENT`.
#[derive(Debug, Default)]
struct EventState<'a> {
    title: Option<PendingTitle<'a>>,
    description: String,
}

struct TitleDecider<'a> {
    classifier: Classifier,
    emojis: &'a EmojiTable,
}

impl<'a> TitleDecider<'a> {
    /// Render the title line, decorated when the event is classified.
    fn decide(&self, title: PendingTitle<'a>, description: &str) -> Cow<'a, str> {
        let classified = self
            .classifier
            .classify(title.value, description)
            .and_then(|category| self.emojis.get(category).map(|glyph| (category, glyph)));
        let Some((category, glyph)) = classified else {
            trace!(line = title.line.number(), title = title.value, "unclassified event");
            return Cow::Borrowed(title.line.as_str());
        };

        debug!(
            line = title.line.number(),
            category = %category,
            title = title.value,
            "classified event"
        );
        match decorate_title(category, glyph, title.value) {
            Cow::Borrowed(_) => Cow::Borrowed(title.line.as_str()),
            Cow::Owned(value) => Cow::Owned(format!("{}{value}", crate::SUMMARY_PREFIX)),
        }
    }
}

/// Single pass over the lines of an ICS document, yielding the rewritten lines.
///
/// The title line of an event is held back until either a `LOCATION:`, `UID:`
/// or `DTSTART` line or the end of the event is reached, so the description can
/// take part in classifying the event. The title is then emitted right before
/// that line. Every other line is yielded unchanged and in order.
pub struct EventRewriter<'a, I: Iterator<Item = Line<'a>>> {
    lines: I,
    decider: TitleDecider<'a>,
    event: Option<EventState<'a>>,
    queued: Option<Cow<'a, str>>,
}

impl<'a, I: Iterator<Item = Line<'a>>> EventRewriter<'a, I> {
    pub fn new(lines: I, options: &'a RewriteOptions) -> Self {
        EventRewriter {
            lines,
            decider: TitleDecider {
                classifier: Classifier::new(options.train),
                emojis: &options.emojis,
            },
            event: None,
            queued: None,
        }
    }

    /// Emit the pending title (if any) in front of `line`.
    fn emit_before(
        &mut self,
        title: Option<PendingTitle<'a>>,
        description: &str,
        line: Line<'a>,
    ) -> Cow<'a, str> {
        match title {
            Some(title) => {
                self.queued = Some(Cow::Borrowed(line.as_str()));
                self.decider.decide(title, description)
            }
            None => Cow::Borrowed(line.as_str()),
        }
    }
}

impl<'a, I: Iterator<Item = Line<'a>>> Iterator for EventRewriter<'a, I> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.queued.take() {
            return Some(line);
        }

        loop {
            let Some(line) = self.lines.next() else {
                // Input ended inside an event, don't lose its title
                let event = self.event.take()?;
                return event
                    .title
                    .map(|title| self.decider.decide(title, &event.description));
            };
            let content = ContentLine::parse(line.as_str());

            let Some(event) = self.event.as_mut() else {
                match content {
                    ContentLine::BeginEvent => self.event = Some(EventState::default()),
                    ContentLine::EndEvent => {
                        trace!(line = line.number(), "END:VEVENT outside of an event")
                    }
                    _ => {}
                }
                return Some(Cow::Borrowed(line.as_str()));
            };

            match content {
                ContentLine::BeginEvent => {
                    debug!(line = line.number(), "BEGIN:VEVENT inside of an open event");
                    let previous = std::mem::take(event);
                    return Some(self.emit_before(previous.title, &previous.description, line));
                }
                ContentLine::EndEvent => {
                    let closed = std::mem::take(event);
                    self.event = None;
                    return Some(self.emit_before(closed.title, &closed.description, line));
                }
                ContentLine::Summary(value) => {
                    let Some(previous) = event.title.replace(PendingTitle { line, value }) else {
                        continue;
                    };
                    debug!(line = line.number(), "multiple SUMMARY lines in one event");
                    return Some(self.decider.decide(previous, &event.description));
                }
                ContentLine::Description(value) => {
                    event.description.clear();
                    event.description.push_str(value);
                }
                // Any fold after a description counts as part of it, even when
                // another property sits in between.
                ContentLine::Continuation(rest) if !event.description.is_empty() => {
                    event.description.push_str(rest);
                }
                ContentLine::DecisionPoint => {
                    if let Some(title) = event.title.take() {
                        let decided = self.decider.decide(title, &event.description);
                        self.queued = Some(Cow::Borrowed(line.as_str()));
                        return Some(decided);
                    }
                }
                ContentLine::Continuation(_) | ContentLine::Other => {}
            }
            return Some(Cow::Borrowed(line.as_str()));
        }
    }
}
