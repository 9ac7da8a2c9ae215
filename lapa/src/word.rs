//! Word boundaries (UAX #29).

use lapa_generate_transitions::generate_transitions;

use crate::properties::{word_property, WordProperty};
use crate::transition::{peek_property, resolve, Resume, Rules, Transition};
use crate::utf8::{decode_rune, invalid_len};

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WordState {
    #[default]
    Any,
    Cr,
    Lf,
    Newline,
    WSegSpace,
    HebrewLetter,
    ALetter,
    Wb7,
    Wb7c,
    Numeric,
    Wb11,
    Katakana,
    ExtendNumLet,
    OddRi,
    EvenRi,
}

impl WordState {
    pub const COUNT: usize = WordState::EvenRi as usize + 1;

    pub(crate) const fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0 => Self::Any,
            1 => Self::Cr,
            2 => Self::Lf,
            3 => Self::Newline,
            4 => Self::WSegSpace,
            5 => Self::HebrewLetter,
            6 => Self::ALetter,
            7 => Self::Wb7,
            8 => Self::Wb7c,
            9 => Self::Numeric,
            10 => Self::Wb11,
            11 => Self::Katakana,
            12 => Self::ExtendNumLet,
            13 => Self::OddRi,
            14 => Self::EvenRi,
            _ => return None,
        })
    }

    #[inline]
    const fn is_line_end(self) -> bool {
        matches!(self, Self::Newline | Self::Cr | Self::Lf)
    }

    #[inline]
    const fn is_letter(self) -> bool {
        matches!(self, Self::ALetter | Self::HebrewLetter)
    }
}

// Verdict `true` means a boundary before the code point.
generate_transitions!(word_transitions, WordState, WordProperty, bool, {
    // WB3b.
    Any {
        Newline => (Newline, true, 32),
        Cr => (Cr, true, 32),
        Lf => (Lf, true, 32),
    },
    // WB3a.
    Newline | Cr | Lf {
        Any => (Any, true, 31),
    },
    // WB3.
    Cr {
        Lf => (Lf, false, 30),
    },
    // WB3d.
    Any {
        WSegSpace => (WSegSpace, true, 9990),
    },
    WSegSpace {
        WSegSpace => (WSegSpace, false, 34),
    },
    // WB5.
    Any {
        ALetter => (ALetter, true, 9990),
        HebrewLetter => (HebrewLetter, true, 9990),
    },
    ALetter | HebrewLetter {
        ALetter => (ALetter, false, 50),
        HebrewLetter => (HebrewLetter, false, 50),
    },
    // WB7. Entered through the look-ahead of WB6.
    Wb7 {
        ALetter => (ALetter, false, 70),
        HebrewLetter => (HebrewLetter, false, 70),
    },
    // WB7a.
    HebrewLetter {
        SingleQuote => (Any, false, 71),
    },
    // WB7c. Entered through the look-ahead of WB7b.
    Wb7c {
        HebrewLetter => (HebrewLetter, false, 73),
    },
    // WB8.
    Any {
        Numeric => (Numeric, true, 9990),
    },
    Numeric {
        Numeric => (Numeric, false, 80),
    },
    // WB9.
    ALetter | HebrewLetter {
        Numeric => (Numeric, false, 90),
    },
    // WB10.
    Numeric {
        ALetter => (ALetter, false, 100),
        HebrewLetter => (HebrewLetter, false, 100),
    },
    // WB11. Entered through the look-ahead of WB12.
    Wb11 {
        Numeric => (Numeric, false, 110),
    },
    // WB13.
    Any {
        Katakana => (Katakana, true, 9990),
    },
    Katakana {
        Katakana => (Katakana, false, 130),
    },
    // WB13a.
    Any {
        ExtendNumLet => (ExtendNumLet, true, 9990),
    },
    ALetter | HebrewLetter | Numeric | Katakana | ExtendNumLet {
        ExtendNumLet => (ExtendNumLet, false, 131),
    },
    // WB13b.
    ExtendNumLet {
        ALetter => (ALetter, false, 132),
        HebrewLetter => (HebrewLetter, false, 132),
        Numeric => (Numeric, false, 132),
        Katakana => (Katakana, false, 132),
    },
});

static WORD_TRANSITIONS: [[Option<Transition<WordState, bool>>; WordProperty::COUNT];
    WordState::COUNT] = word_transitions();

pub(crate) struct WordRules;

impl Rules for WordRules {
    type State = WordState;
    type Property = WordProperty;
    type Verdict = bool;

    const ANY_STATE: WordState = WordState::Any;
    const ANY_PROPERTY: WordProperty = WordProperty::Any;
    // WB999.
    const FALLBACK: Transition<WordState, bool> = Transition::new(WordState::Any, true, 9990);

    #[inline]
    fn lookup(state: WordState, property: WordProperty) -> Option<Transition<WordState, bool>> {
        WORD_TRANSITIONS[state as usize][property as usize]
    }
}

/// Word machine state plus the "preceded by ZWJ" bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct WordContext {
    pub(crate) state: WordState,
    pub(crate) zwj: bool,
}

impl WordContext {
    #[inline]
    const fn plain(state: WordState) -> Self {
        Self { state, zwj: false }
    }

    pub(crate) const BITS: u32 = 5;

    #[inline]
    pub(crate) const fn to_bits(self) -> i32 {
        self.state as i32 | ((self.zwj as i32) << 4)
    }

    #[inline]
    pub(crate) const fn from_bits(bits: i32) -> Option<Self> {
        match WordState::from_bits((bits & 0xF) as u8) {
            Some(state) => Some(Self { state, zwj: bits & 0x10 != 0 }),
            None => None,
        }
    }
}

#[inline]
fn skips_in_look_ahead(property: WordProperty) -> bool {
    matches!(property, WordProperty::Extend | WordProperty::Format | WordProperty::Zwj)
}

/// Feed one code point to the word machine.
///
/// `rest` is the input after `c`, consulted by the look-ahead rules. Returns
/// the new context and whether there is a boundary before `c`.
pub(crate) fn transition(context: Option<WordContext>, c: char, rest: &[u8]) -> (WordContext, bool) {
    let property = word_property(c);

    // WB4, never suppressing WB3a.
    match property {
        WordProperty::Zwj => {
            return match context {
                Some(context) if context.state.is_line_end() => {
                    (WordContext { state: WordState::Any, zwj: true }, true)
                },
                Some(context) => (WordContext { state: context.state, zwj: true }, false),
                None => (WordContext { state: WordState::Any, zwj: true }, false),
            };
        },
        WordProperty::Extend | WordProperty::Format => {
            return match context {
                Some(context) if context.state.is_line_end() => {
                    (WordContext::plain(WordState::Any), true)
                },
                Some(WordContext { state: WordState::WSegSpace, .. }) | None => {
                    (WordContext::plain(WordState::Any), false)
                },
                Some(context) => (WordContext::plain(context.state), false),
            };
        },
        // WB3c.
        WordProperty::ExtendedPictographic if context.is_some_and(|context| context.zwj) => {
            return (WordContext::plain(WordState::Any), false);
        },
        _ => (),
    }

    let state = context.map(|context| context.state);
    let transition = resolve::<WordRules>(state, property);

    let mid_letter = matches!(
        property,
        WordProperty::MidLetter | WordProperty::MidNumLet | WordProperty::SingleQuote
    );
    let far = if transition.rule > 60
        && matches!(
            state,
            Some(WordState::ALetter | WordState::HebrewLetter | WordState::Numeric)
        )
        && (mid_letter
            || matches!(property, WordProperty::DoubleQuote | WordProperty::MidNum))
    {
        peek_property(rest, word_property, skips_in_look_ahead)
    } else {
        None
    };

    // WB6.
    if transition.rule > 60
        && state.is_some_and(WordState::is_letter)
        && mid_letter
        && matches!(far, Some(WordProperty::ALetter | WordProperty::HebrewLetter))
    {
        return (WordContext::plain(WordState::Wb7), false);
    }

    // WB7b.
    if transition.rule > 72
        && state == Some(WordState::HebrewLetter)
        && property == WordProperty::DoubleQuote
        && far == Some(WordProperty::HebrewLetter)
    {
        return (WordContext::plain(WordState::Wb7c), false);
    }

    // WB12.
    if transition.rule > 120
        && state == Some(WordState::Numeric)
        && matches!(
            property,
            WordProperty::MidNum | WordProperty::MidNumLet | WordProperty::SingleQuote
        )
        && far == Some(WordProperty::Numeric)
    {
        return (WordContext::plain(WordState::Wb11), false);
    }

    // WB15 and WB16.
    if transition.state == WordState::Any && property == WordProperty::RegionalIndicator {
        return match state {
            Some(WordState::OddRi) => (WordContext::plain(WordState::EvenRi), false),
            _ => (WordContext::plain(WordState::OddRi), true),
        };
    }

    (WordContext::plain(transition.state), transition.verdict)
}

/// Position of the word machine between two calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WordCursor(Resume<WordContext>);

impl WordCursor {
    pub const START: WordCursor = WordCursor(Resume::Start);

    /// Returned once the input is exhausted. Passing it along with new input
    /// starts a fresh segmentation.
    pub const END: WordCursor = WordCursor(Resume::End);

    #[inline]
    pub fn is_start(self) -> bool {
        self.0 == Resume::Start
    }

    #[inline]
    pub fn is_end(self) -> bool {
        self.0 == Resume::End
    }

    /// Encode the cursor as an integer, `-1` for the start and `-2` past the
    /// end.
    pub fn pack(self) -> i32 {
        self.0.pack(WordContext::to_bits)
    }

    /// Decode a cursor produced by [`WordCursor::pack`].
    pub fn unpack(packed: i32) -> Self {
        Self(Resume::unpack(packed, WordContext::from_bits))
    }
}

/// Split the first word off `input`.
///
/// Spaces, punctuation and line breaks form words of their own, so the
/// concatenation of all words is the input.
pub fn first_word(input: &str, cursor: WordCursor) -> (&str, &str, WordCursor) {
    let (word, _, cursor) = first_word_bytes(input.as_bytes(), cursor);
    let (word, rest) = input.split_at(word.len());
    (word, rest, cursor)
}

/// [`first_word`] over bytes. Malformed UTF-8 ends the current word.
pub fn first_word_bytes(input: &[u8], cursor: WordCursor) -> (&[u8], &[u8], WordCursor) {
    if input.is_empty() {
        return (input, input, cursor);
    }

    let Some((first, mut length)) = decode_rune(input) else {
        let length = invalid_len(input);
        return (&input[..length], &input[length..], WordCursor::START);
    };
    if input.len() <= length {
        return (input, &[], WordCursor::END);
    }

    let mut context = match cursor.0.context() {
        Some(context) => context,
        None => transition(None, first, &input[length..]).0,
    };

    loop {
        let Some((c, len)) = decode_rune(&input[length..]) else {
            return (&input[..length], &input[length..], WordCursor::START);
        };

        let (next, boundary) = transition(Some(context), c, &input[length + len..]);
        context = next;
        if boundary {
            return (&input[..length], &input[length..], WordCursor(Resume::At(context)));
        }

        length += len;
        if input.len() <= length {
            return (input, &[], WordCursor::END);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = text;
        let mut cursor = WordCursor::START;
        while !rest.is_empty() {
            let (word, next, next_cursor) = first_word(rest, cursor);
            out.push(word);
            rest = next;
            cursor = next_cursor;
        }
        out
    }

    #[test]
    fn simple_sentence() {
        assert_eq!(words("Hello, world!"), vec!["Hello", ",", " ", "world", "!"]);
    }

    #[test]
    fn spaces_and_newlines() {
        assert_eq!(words("a  b"), vec!["a", "  ", "b"]);
        assert_eq!(words("a\r\nb"), vec!["a", "\r\n", "b"]);
        assert_eq!(words("a\n\nb"), vec!["a", "\n", "\n", "b"]);
    }

    #[test]
    fn mid_letter_needs_letters_on_both_sides() {
        assert_eq!(words("can't stop"), vec!["can't", " ", "stop"]);
        assert_eq!(words("can' "), vec!["can", "'", " "]);
        assert_eq!(words("e.g."), vec!["e.g", "."]);
    }

    #[test]
    fn numbers() {
        assert_eq!(words("3.14 1,000"), vec!["3.14", " ", "1,000"]);
        assert_eq!(words("1,"), vec!["1", ","]);
        assert_eq!(words("a1b"), vec!["a1b"]);
        assert_eq!(words("foo_bar 42_x"), vec!["foo_bar", " ", "42_x"]);
    }

    #[test]
    fn extend_keeps_state() {
        assert_eq!(words("e\u{0301}t\u{0301}\u{0301} x"), vec!["e\u{0301}t\u{0301}\u{0301}", " ", "x"]);
        // Never across a line break.
        assert_eq!(words("\n\u{0301}"), vec!["\n", "\u{0301}"]);
    }

    #[test]
    fn emoji_zwj_sequence() {
        let family = "\u{1F468}\u{200D}\u{1F469}";
        assert_eq!(words(family), vec![family]);
    }

    #[test]
    fn zwj_only_joins_the_next_code_point() {
        assert_eq!(words("a\u{200D}\u{1F600}"), vec!["a\u{200D}\u{1F600}"]);
        assert_eq!(words("\u{200D}\u{301}\u{1F600}"), vec!["\u{200D}\u{301}", "\u{1F600}"]);
        assert_eq!(words("a\u{200D}\u{301}\u{1F600}"), vec!["a\u{200D}\u{301}", "\u{1F600}"]);
    }

    #[test]
    fn regional_indicators_pair() {
        let flags = "\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}";
        assert_eq!(words(flags), vec!["\u{1F1E9}\u{1F1EA}", "\u{1F1EB}\u{1F1F7}"]);
    }

    #[test]
    fn katakana_and_hebrew() {
        assert_eq!(words("\u{30A2}\u{30A4} x"), vec!["\u{30A2}\u{30A4}", " ", "x"]);
        assert_eq!(words("\u{05D0}\"\u{05D1}"), vec!["\u{05D0}\"\u{05D1}"]);
    }

    #[test]
    fn malformed_bytes() {
        let (word, rest, cursor) = first_word_bytes(b"ab\xFFcd", WordCursor::START);
        assert_eq!((word, rest), (&b"ab"[..], &b"\xFFcd"[..]));
        assert!(cursor.is_start());

        let (word, rest, _) = first_word_bytes(rest, cursor);
        assert_eq!((word, rest), (&b"\xFF"[..], &b"cd"[..]));
    }

    #[test]
    fn cursor_packing() {
        assert_eq!(WordCursor::START.pack(), -1);
        assert_eq!(WordCursor::unpack(-1), WordCursor::START);
        assert_eq!(WordCursor::END.pack(), -2);
        assert_eq!(WordCursor::unpack(-2), WordCursor::END);
        for state in 0..WordState::COUNT as u8 {
            for zwj in [false, true] {
                let cursor = WordCursor(Resume::At(WordContext {
                    state: WordState::from_bits(state).unwrap(),
                    zwj,
                }));
                assert!(cursor.pack() >= 0);
                assert_eq!(WordCursor::unpack(cursor.pack()), cursor);
            }
        }
    }

    #[test]
    fn end_of_input_cursor() {
        let (word, rest, cursor) = first_word("hello", WordCursor::START);
        assert_eq!((word, rest), ("hello", ""));
        assert!(cursor.is_end());
        assert_eq!(first_word("x", WordCursor::START).2, WordCursor::END);

        // The first code point of the new text is classified afresh.
        assert_eq!(first_word("it's", cursor), ("it's", "", WordCursor::END));
        assert_eq!(first_word(" a", cursor).0, " ");
    }
}
