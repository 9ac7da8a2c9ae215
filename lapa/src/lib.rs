//! Unicode text segmentation and monospace width.
//!
//! Splits text into grapheme clusters, words, sentences and line segments
//! following UAX #29 and UAX #14, and computes how many terminal cells a
//! cluster occupies. Every splitter works one segment at a time: it returns
//! the segment, the rest of the input and a cursor to pass on the next call.
//!
//! ```
//! let text = "Hi 👋🏽!";
//! let clusters: Vec<&str> = lapa::Graphemes::new(text).collect();
//! assert_eq!(clusters, vec!["H", "i", " ", "👋🏽", "!"]);
//! assert_eq!(lapa::string_width(text), 6);
//! ```
#![deny(clippy::all, clippy::if_not_else, clippy::enum_glob_use)]

pub mod config;
pub mod grapheme;
pub mod graphemes;
pub mod line;
pub mod properties;
pub mod sentence;
pub mod step;
pub mod transition;
pub mod width;
pub mod word;

mod utf8;

pub use grapheme::{
    first_grapheme_cluster, first_grapheme_cluster_bytes, first_grapheme_cluster_bytes_with,
    first_grapheme_cluster_with, GraphemeCursor,
};
pub use graphemes::Graphemes;
pub use line::{
    first_line_segment, first_line_segment_bytes, has_trailing_line_break,
    has_trailing_line_break_bytes, LineBreak, LineCursor,
};
pub use sentence::{first_sentence, first_sentence_bytes, SentenceCursor};
pub use step::{step, step_bytes, step_bytes_with, step_with, Boundaries, StepCursor};
pub use width::{ambiguous_width, rune_width, set_ambiguous_width, WidthPolicy};
pub use word::{first_word, first_word_bytes, WordCursor};

/// Number of terminal cells `text` occupies, using the process default
/// ambiguous width.
#[inline]
pub fn string_width(text: &str) -> usize {
    string_width_with(text, WidthPolicy::global())
}

pub fn string_width_with(text: &str, policy: WidthPolicy) -> usize {
    let mut width = 0;
    let mut rest = text;
    let mut cursor = GraphemeCursor::START;
    while !rest.is_empty() {
        let (_, next, cluster_width, next_cursor) = first_grapheme_cluster_with(rest, cursor, policy);
        width += cluster_width;
        rest = next;
        cursor = next_cursor;
    }
    width
}

/// Reverse `text` cluster by cluster, so combining marks and emoji
/// sequences stay intact.
pub fn reverse_string(text: &str) -> String {
    let mut clusters = Vec::new();
    let mut rest = text;
    let mut cursor = GraphemeCursor::START;
    while !rest.is_empty() {
        let (cluster, next, _, next_cursor) = first_grapheme_cluster(rest, cursor);
        clusters.push(cluster);
        rest = next;
        cursor = next_cursor;
    }

    let mut reversed = String::with_capacity(text.len());
    for cluster in clusters.into_iter().rev() {
        reversed.push_str(cluster);
    }
    reversed
}

/// Number of grapheme clusters in `text`.
pub fn grapheme_cluster_count(text: &str) -> usize {
    let mut count = 0;
    let mut rest = text;
    let mut cursor = GraphemeCursor::START;
    while !rest.is_empty() {
        let (_, next, _, next_cursor) = first_grapheme_cluster(rest, cursor);
        count += 1;
        rest = next;
        cursor = next_cursor;
    }
    count
}
