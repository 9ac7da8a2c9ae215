//! Iterator over the grapheme clusters of a string.

use std::str::Chars;

use crate::line::LineBreak;
use crate::step::{step_with, Boundaries, StepCursor};
use crate::width::WidthPolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    /// [`Graphemes::advance`] was not called yet.
    Start,
    /// Positioned on a cluster.
    Cluster(StepCursor),
    /// Walked past the last cluster.
    End,
}

/// Walks the grapheme clusters of a string and reports, for the current
/// cluster, its width and the word, sentence and line boundaries after it.
///
/// ```
/// use lapa::Graphemes;
///
/// let mut graphemes = Graphemes::new("e\u{301}!");
/// while graphemes.advance() {
///     println!("{:?} {}", graphemes.as_str(), graphemes.width());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Graphemes<'a> {
    original: &'a str,
    offset: usize,
    cluster: &'a str,
    remaining: &'a str,
    position: Position,
    boundaries: Boundaries,
    policy: WidthPolicy,
}

impl<'a> Graphemes<'a> {
    /// Iterate over `text` using the process default width policy.
    pub fn new(text: &'a str) -> Self {
        Self::with_policy(text, WidthPolicy::global())
    }

    pub fn with_policy(text: &'a str, policy: WidthPolicy) -> Self {
        Self {
            original: text,
            offset: 0,
            cluster: "",
            remaining: text,
            position: Position::Start,
            boundaries: Boundaries::default(),
            policy,
        }
    }

    /// Move to the next cluster. Returns `false` once the text is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.remaining.is_empty() {
            self.position = Position::End;
            self.offset = self.original.len();
            self.cluster = "";
            return false;
        }

        let cursor = match self.position {
            Position::Cluster(cursor) => cursor,
            Position::Start | Position::End => StepCursor::START,
        };

        self.offset += self.cluster.len();
        let (cluster, remaining, boundaries, cursor) = step_with(self.remaining, cursor, self.policy);
        self.cluster = cluster;
        self.remaining = remaining;
        self.boundaries = boundaries;
        self.position = Position::Cluster(cursor);
        true
    }

    /// Go back to the start of the text.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.cluster = "";
        self.remaining = self.original;
        self.position = Position::Start;
        self.boundaries = Boundaries::default();
    }

    /// The current cluster, empty before the first and after the last one.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.cluster
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.cluster.as_bytes()
    }

    #[inline]
    pub fn chars(&self) -> Chars<'a> {
        self.cluster.chars()
    }

    /// Byte range of the current cluster in the original text.
    ///
    /// `(0, 0)` before the first cluster, `(len, len)` after the last one.
    pub fn positions(&self) -> (usize, usize) {
        match self.position {
            Position::Start => (0, 0),
            Position::End => (self.original.len(), self.original.len()),
            Position::Cluster(_) => (self.offset, self.offset + self.cluster.len()),
        }
    }

    /// Whether a word boundary follows the current cluster.
    pub fn is_word_boundary(&self) -> bool {
        match self.position {
            Position::Start => false,
            Position::End => true,
            Position::Cluster(_) => self.boundaries.is_word_boundary(),
        }
    }

    /// Whether a sentence boundary follows the current cluster.
    pub fn is_sentence_boundary(&self) -> bool {
        match self.position {
            Position::Start => false,
            Position::End => true,
            Position::Cluster(_) => self.boundaries.is_sentence_boundary(),
        }
    }

    /// Line break verdict for the position after the current cluster.
    pub fn line_break(&self) -> LineBreak {
        match self.position {
            Position::Start => LineBreak::Dont,
            Position::End => LineBreak::Must,
            Position::Cluster(_) => self.boundaries.line_break(),
        }
    }

    /// Display width of the current cluster.
    pub fn width(&self) -> usize {
        match self.position {
            Position::Cluster(_) => self.boundaries.width(),
            Position::Start | Position::End => 0,
        }
    }
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        if self.advance() {
            Some(self.cluster)
        } else {
            None
        }
    }
}

impl std::iter::FusedIterator for Graphemes<'_> {}
