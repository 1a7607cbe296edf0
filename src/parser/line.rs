use std::fmt;

/// A raw line of an ICS document, without its line terminator.
///
/// Folded lines are *not* joined: continuation lines are returned on their own
/// and keep their leading fold marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub inner: &'a str,
    number: usize,
}

impl<'a> Line<'a> {
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.inner
    }

    /// 1-based position in the input.
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.inner)
    }
}

/// Split a document on `\n` or `\r\n`.
///
/// A trailing line terminator yields a final empty line so that joining the
/// lines again restores it.
pub struct LineReader<'a> {
    lines: std::str::Split<'a, char>,
    number: usize,
}

impl<'a> LineReader<'a> {
    pub fn new(input: &'a str) -> Self {
        LineReader {
            lines: input.split('\n'),
            number: 0,
        }
    }
}

impl<'a> Iterator for LineReader<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.lines.next()?;
        self.number += 1;
        Some(Line {
            inner: raw.strip_suffix('\r').unwrap_or(raw),
            number: self.number,
        })
    }
}
