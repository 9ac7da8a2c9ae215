//! Single pass over the input driving all four boundary machines at once.

use crate::grapheme::{self, GraphemeState};
use crate::line::{self, LineBreak, LineContext};
use crate::properties::GraphemeProperty;
use crate::sentence::{self, SentenceState};
use crate::transition::Resume;
use crate::utf8::{decode_rune, invalid_len};
use crate::width::{ClusterWidth, WidthPolicy};
use crate::word::{self, WordContext};

/// Boundary information for the position after a grapheme cluster, plus the
/// width of the cluster.
///
/// Bits 0-1 hold the [`LineBreak`] verdict, bit 2 the word boundary, bit 3
/// the sentence boundary and the remaining bits the width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Boundaries(u32);

impl Boundaries {
    pub const MASK_LINE: u32 = 0b11;
    pub const MASK_WORD: u32 = 0b100;
    pub const MASK_SENTENCE: u32 = 0b1000;
    pub const SHIFT_WIDTH: u32 = 4;

    #[inline]
    pub(crate) fn new(line: LineBreak, word: bool, sentence: bool, width: usize) -> Self {
        let mut bits = line as u32 | ((width as u32) << Self::SHIFT_WIDTH);
        if word {
            bits |= Self::MASK_WORD;
        }
        if sentence {
            bits |= Self::MASK_SENTENCE;
        }
        Self(bits)
    }

    /// Flags at the end of the input.
    #[inline]
    fn end_of_text(width: usize) -> Self {
        Self::new(LineBreak::Must, true, true, width)
    }

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn line_break(self) -> LineBreak {
        LineBreak::from_bits(self.0 & Self::MASK_LINE)
    }

    #[inline]
    pub const fn is_word_boundary(self) -> bool {
        self.0 & Self::MASK_WORD != 0
    }

    #[inline]
    pub const fn is_sentence_boundary(self) -> bool {
        self.0 & Self::MASK_SENTENCE != 0
    }

    #[inline]
    pub const fn width(self) -> usize {
        (self.0 >> Self::SHIFT_WIDTH) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
struct StepContext {
    grapheme: GraphemeState,
    word: WordContext,
    sentence: SentenceState,
    line: LineContext,
    /// Grapheme property of the first code point of the pending cluster.
    property: GraphemeProperty,
}

impl StepContext {
    const SHIFT_WORD: u32 = 4;
    const SHIFT_SENTENCE: u32 = Self::SHIFT_WORD + WordContext::BITS;
    const SHIFT_LINE: u32 = Self::SHIFT_SENTENCE + 4;
    const SHIFT_PROPERTY: u32 = Self::SHIFT_LINE + LineContext::BITS;

    fn to_bits(self) -> i32 {
        self.grapheme as i32
            | (self.word.to_bits() << Self::SHIFT_WORD)
            | ((self.sentence as i32) << Self::SHIFT_SENTENCE)
            | (self.line.to_bits() << Self::SHIFT_LINE)
            | ((self.property as i32) << Self::SHIFT_PROPERTY)
    }

    fn from_bits(packed: i32) -> Option<Self> {
        let field = |shift: u32, bits: u32| (packed >> shift) & ((1 << bits) - 1);
        Some(Self {
            grapheme: GraphemeState::from_bits(field(0, 4) as u8)?,
            word: WordContext::from_bits(field(Self::SHIFT_WORD, WordContext::BITS))?,
            sentence: SentenceState::from_bits(field(Self::SHIFT_SENTENCE, 4) as u8)?,
            line: LineContext::from_bits(field(Self::SHIFT_LINE, LineContext::BITS))?,
            property: GraphemeProperty::from_bits(field(Self::SHIFT_PROPERTY, 4) as u8)?,
        })
    }
}

/// Position of all boundary machines between two calls to [`step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StepCursor(Resume<StepContext>);

impl StepCursor {
    pub const START: StepCursor = StepCursor(Resume::Start);

    /// Returned once the input is used up. Passing it back starts over, so
    /// text split into pieces segments as if it were one string.
    pub const END: StepCursor = StepCursor(Resume::End);

    #[inline]
    pub fn is_start(self) -> bool {
        self.0 == Resume::Start
    }

    #[inline]
    pub fn is_end(self) -> bool {
        self.0 == Resume::End
    }

    /// Encode the cursor as a single integer: `-1` for the start, `-2` past
    /// the end and non-negative otherwise.
    pub fn pack(self) -> i32 {
        self.0.pack(StepContext::to_bits)
    }

    /// Decode a cursor produced by [`StepCursor::pack`].
    pub fn unpack(packed: i32) -> Self {
        Self(Resume::unpack(packed, StepContext::from_bits))
    }
}

/// Split the first grapheme cluster off `input`, reporting the word, sentence
/// and line boundaries after it together with its width.
///
/// Equivalent to running [`crate::first_grapheme_cluster`],
/// [`crate::first_word`], [`crate::first_sentence`] and
/// [`crate::first_line_segment`] side by side, in one pass and without
/// allocating.
#[inline]
pub fn step(input: &str, cursor: StepCursor) -> (&str, &str, Boundaries, StepCursor) {
    step_with(input, cursor, WidthPolicy::global())
}

/// [`step`] with an explicit width policy.
pub fn step_with(
    input: &str,
    cursor: StepCursor,
    policy: WidthPolicy,
) -> (&str, &str, Boundaries, StepCursor) {
    let (cluster, _, boundaries, cursor) = step_bytes_with(input.as_bytes(), cursor, policy);
    let (cluster, rest) = input.split_at(cluster.len());
    (cluster, rest, boundaries, cursor)
}

/// [`step`] over bytes.
///
/// Malformed UTF-8 ends the current cluster with a line break opportunity and
/// a word boundary, and resets the cursor.
#[inline]
pub fn step_bytes(input: &[u8], cursor: StepCursor) -> (&[u8], &[u8], Boundaries, StepCursor) {
    step_bytes_with(input, cursor, WidthPolicy::global())
}

/// [`step_bytes`] with an explicit width policy.
pub fn step_bytes_with(
    input: &[u8],
    cursor: StepCursor,
    policy: WidthPolicy,
) -> (&[u8], &[u8], Boundaries, StepCursor) {
    if input.is_empty() {
        return (input, input, Boundaries::default(), cursor);
    }

    let Some((first, mut length)) = decode_rune(input) else {
        let length = invalid_len(input);
        let boundaries =
            Boundaries::new(LineBreak::Can, true, false, ClusterWidth::replacement(policy).get());
        return (&input[..length], &input[length..], boundaries, StepCursor::START);
    };

    let remainder = &input[length..];
    let mut context = match cursor.0.context() {
        Some(context) => context,
        None => {
            let (grapheme, property, _) = grapheme::transition(None, first);
            StepContext {
                grapheme,
                word: word::transition(None, first, remainder).0,
                sentence: sentence::transition(None, first, remainder).0,
                line: line::transition(None, first, remainder).0,
                property,
            }
        },
    };

    let mut width = ClusterWidth::new(first, context.property, policy);
    if remainder.is_empty() {
        return (input, remainder, Boundaries::end_of_text(width.get()), StepCursor::END);
    }

    loop {
        let Some((c, len)) = decode_rune(&input[length..]) else {
            let boundaries = Boundaries::new(LineBreak::Can, true, false, width.get());
            return (&input[..length], &input[length..], boundaries, StepCursor::START);
        };
        let remainder = &input[length + len..];

        let (grapheme, property, grapheme_boundary) =
            grapheme::transition(Some(context.grapheme), c);
        let (word, word_boundary) = word::transition(Some(context.word), c, remainder);
        let (sentence, sentence_boundary) =
            sentence::transition(Some(context.sentence), c, remainder);
        let (line, line_break) = line::transition(Some(context.line), c, remainder);

        context = StepContext { grapheme, word, sentence, line, property };

        if grapheme_boundary {
            let boundaries =
                Boundaries::new(line_break, word_boundary, sentence_boundary, width.get());
            return (&input[..length], &input[length..], boundaries, StepCursor(Resume::At(context)));
        }

        width.push(c, property);
        length += len;

        if input.len() <= length {
            return (input, &[], Boundaries::end_of_text(width.get()), StepCursor::END);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineState;
    use crate::word::WordState;

    fn steps(text: &str) -> Vec<(&str, Boundaries)> {
        let mut out = Vec::new();
        let mut rest = text;
        let mut cursor = StepCursor::START;
        while !rest.is_empty() {
            let (cluster, next, boundaries, next_cursor) =
                step_with(rest, cursor, WidthPolicy::NARROW);
            out.push((cluster, boundaries));
            rest = next;
            cursor = next_cursor;
        }
        out
    }

    #[test]
    fn boundaries_bits() {
        let boundaries = Boundaries::new(LineBreak::Can, true, false, 2);
        assert_eq!(boundaries.line_break(), LineBreak::Can);
        assert!(boundaries.is_word_boundary());
        assert!(!boundaries.is_sentence_boundary());
        assert_eq!(boundaries.width(), 2);
        assert_eq!(boundaries.bits(), 0b10_0101);
        assert_eq!(Boundaries::from_bits(boundaries.bits()), boundaries);
    }

    #[test]
    fn words_and_lines() {
        let steps = steps("Hi you.");
        let clusters: Vec<&str> = steps.iter().map(|(cluster, _)| *cluster).collect();
        assert_eq!(clusters, vec!["H", "i", " ", "y", "o", "u", "."]);

        let (_, after_i) = steps[1];
        assert!(after_i.is_word_boundary());
        assert_eq!(after_i.line_break(), LineBreak::Dont);

        let (_, after_space) = steps[2];
        assert!(after_space.is_word_boundary());
        assert_eq!(after_space.line_break(), LineBreak::Can);

        let (_, after_y) = steps[3];
        assert!(!after_y.is_word_boundary());

        let (_, end) = steps[6];
        assert_eq!(end.line_break(), LineBreak::Must);
        assert!(end.is_word_boundary());
        assert!(end.is_sentence_boundary());
        assert_eq!(end.width(), 1);
    }

    #[test]
    fn sentence_boundary_after_spaces() {
        let steps = steps("Go. Now");
        let (cluster, boundaries) = steps[3];
        assert_eq!(cluster, " ");
        assert!(boundaries.is_sentence_boundary());
        assert!(!steps[2].1.is_sentence_boundary());
    }

    #[test]
    fn cluster_widths() {
        let steps = steps("a\u{4F60}\u{1F1E9}\u{1F1EA}");
        let widths: Vec<usize> = steps.iter().map(|(_, boundaries)| boundaries.width()).collect();
        assert_eq!(widths, vec![1, 2, 2]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(step("", StepCursor::START), ("", "", Boundaries::default(), StepCursor::START));
    }

    #[test]
    fn malformed_bytes() {
        let (cluster, rest, boundaries, cursor) =
            step_bytes_with(b"a\xFF", StepCursor::START, WidthPolicy::NARROW);
        assert_eq!((cluster, rest), (&b"a"[..], &b"\xFF"[..]));
        assert_eq!(boundaries.line_break(), LineBreak::Can);
        assert!(cursor.is_start());

        let (cluster, rest, boundaries, _) = step_bytes_with(rest, cursor, WidthPolicy::NARROW);
        assert_eq!((cluster, rest), (&b"\xFF"[..], &b""[..]));
        assert_eq!(boundaries.width(), 1);
    }

    #[test]
    fn cursor_packing_covers_every_field() {
        assert_eq!(StepCursor::START.pack(), -1);
        assert_eq!(StepCursor::unpack(-1), StepCursor::START);
        assert_eq!(StepCursor::END.pack(), -2);
        assert_eq!(StepCursor::unpack(-2), StepCursor::END);

        let base = StepContext::default();
        let mut contexts = Vec::new();
        for bits in 0..GraphemeState::COUNT as u8 {
            let grapheme = GraphemeState::from_bits(bits).unwrap();
            contexts.push(StepContext { grapheme, ..base });
        }
        for bits in 0..WordState::COUNT as u8 {
            for zwj in [false, true] {
                let word = WordContext { state: WordState::from_bits(bits).unwrap(), zwj };
                contexts.push(StepContext { word, ..base });
            }
        }
        for bits in 0..SentenceState::COUNT as u8 {
            let sentence = SentenceState::from_bits(bits).unwrap();
            contexts.push(StepContext { sentence, ..base });
        }
        for bits in 0..LineState::COUNT as u8 {
            for (zwj, narrow_close) in [(false, false), (true, false), (false, true), (true, true)] {
                let line =
                    LineContext { state: LineState::from_bits(bits).unwrap(), zwj, narrow_close };
                contexts.push(StepContext { line, ..base });
            }
        }
        for bits in 0..GraphemeProperty::COUNT as u8 {
            let property = GraphemeProperty::from_bits(bits).unwrap();
            contexts.push(StepContext { property, ..base });
        }

        for context in contexts {
            let cursor = StepCursor(Resume::At(context));
            assert!(cursor.pack() >= 0);
            assert_eq!(StepCursor::unpack(cursor.pack()), cursor);
        }

        let everything = StepCursor(Resume::At(StepContext {
            grapheme: GraphemeState::RiEven,
            word: WordContext { state: WordState::EvenRi, zwj: true },
            sentence: SentenceState::Sb8aSp,
            line: LineContext { state: LineState::ExtPicCn, zwj: true, narrow_close: true },
            property: GraphemeProperty::ExtendedPictographic,
        }));
        assert!(everything.pack() >= 0);
        assert_eq!(StepCursor::unpack(everything.pack()), everything);
    }

    #[test]
    fn end_of_input_restarts_on_new_text() {
        let (cluster, rest, _, cursor) = step_with("a", StepCursor::START, WidthPolicy::NARROW);
        assert_eq!((cluster, rest), ("a", ""));
        assert!(cursor.is_end());

        let (cluster, rest, boundaries, cursor) =
            step_with("\u{1100}\u{1161}", cursor, WidthPolicy::NARROW);
        assert_eq!((cluster, rest), ("\u{1100}\u{1161}", ""));
        assert_eq!(boundaries.width(), 2);
        assert!(cursor.is_end());

        let (_, _, _, cursor) = step_with("a\u{301}", StepCursor::START, WidthPolicy::NARROW);
        assert_eq!(cursor, StepCursor::END);
        let (cluster, _, boundaries, _) = step_with("b", cursor, WidthPolicy::NARROW);
        assert_eq!(cluster, "b");
        assert_eq!(boundaries.width(), 1);
        assert_eq!(boundaries.line_break(), LineBreak::Must);
    }
}
