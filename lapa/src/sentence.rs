//! Sentence boundaries (UAX #29).

use lapa_generate_transitions::generate_transitions;

use crate::properties::{sentence_property, SentenceProperty};
use crate::transition::{peek_property, resolve, Resume, Rules, Transition};
use crate::utf8::{decode_rune, invalid_len};

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SentenceState {
    #[default]
    Any,
    Cr,
    ParaSep,
    ATerm,
    Upper,
    Lower,
    Sb7,
    Sb8Close,
    Sb8Sp,
    STerm,
    Sb8aClose,
    Sb8aSp,
}

impl SentenceState {
    pub const COUNT: usize = SentenceState::Sb8aSp as usize + 1;

    pub(crate) const fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0 => Self::Any,
            1 => Self::Cr,
            2 => Self::ParaSep,
            3 => Self::ATerm,
            4 => Self::Upper,
            5 => Self::Lower,
            6 => Self::Sb7,
            7 => Self::Sb8Close,
            8 => Self::Sb8Sp,
            9 => Self::STerm,
            10 => Self::Sb8aClose,
            11 => Self::Sb8aSp,
            _ => return None,
        })
    }
}

// Verdict `true` means a boundary before the code point.
generate_transitions!(sentence_transitions, SentenceState, SentenceProperty, bool, {
    // SB3.
    Any {
        Cr => (Cr, false, 9990),
    },
    Cr {
        Lf => (ParaSep, false, 30),
    },
    // SB4.
    Any {
        Sep | Lf => (ParaSep, false, 9990),
    },
    ParaSep | Cr {
        Any => (Any, true, 40),
    },
    // SB6.
    Any {
        ATerm => (ATerm, false, 9990),
    },
    ATerm | Sb7 {
        Numeric => (Any, false, 60),
    },
    // SB7.
    Any {
        Upper => (Upper, false, 9990),
        Lower => (Lower, false, 9990),
    },
    Upper | Lower {
        ATerm => (Sb7, false, 70),
    },
    Sb7 {
        Upper => (Upper, false, 70),
    },
    // SB8a.
    Any {
        STerm => (STerm, false, 9990),
    },
    ATerm | Sb7 | Sb8Close | Sb8Sp | STerm | Sb8aClose | Sb8aSp {
        SContinue => (Any, false, 81),
        ATerm => (ATerm, false, 81),
        STerm => (STerm, false, 81),
    },
    // SB9.
    ATerm | Sb7 | Sb8Close {
        Close => (Sb8Close, false, 90),
        Sp => (Sb8Sp, false, 90),
    },
    STerm | Sb8aClose {
        Close => (Sb8aClose, false, 90),
        Sp => (Sb8aSp, false, 90),
    },
    ATerm | Sb7 | Sb8Close | STerm | Sb8aClose {
        Sep | Lf => (ParaSep, false, 90),
        Cr => (Cr, false, 90),
    },
    // SB10.
    Sb8Sp {
        Sp => (Sb8Sp, false, 100),
    },
    Sb8aSp {
        Sp => (Sb8aSp, false, 100),
    },
    Sb8Sp | Sb8aSp {
        Sep | Lf => (ParaSep, false, 100),
        Cr => (Cr, false, 100),
    },
    // SB11.
    ATerm | Sb7 | Sb8Close | Sb8Sp | STerm | Sb8aClose | Sb8aSp {
        Any => (Any, true, 110),
    },
});

static SENTENCE_TRANSITIONS: [[Option<Transition<SentenceState, bool>>; SentenceProperty::COUNT];
    SentenceState::COUNT] = sentence_transitions();

pub(crate) struct SentenceRules;

impl Rules for SentenceRules {
    type State = SentenceState;
    type Property = SentenceProperty;
    type Verdict = bool;

    const ANY_STATE: SentenceState = SentenceState::Any;
    const ANY_PROPERTY: SentenceProperty = SentenceProperty::Any;
    // SB998.
    const FALLBACK: Transition<SentenceState, bool> =
        Transition::new(SentenceState::Any, false, 9990);

    #[inline]
    fn lookup(
        state: SentenceState,
        property: SentenceProperty,
    ) -> Option<Transition<SentenceState, bool>> {
        SENTENCE_TRANSITIONS[state as usize][property as usize]
    }
}

/// Classes that end the SB8 scan.
#[inline]
fn stops_sb8(property: SentenceProperty) -> bool {
    matches!(
        property,
        SentenceProperty::OLetter
            | SentenceProperty::Upper
            | SentenceProperty::Lower
            | SentenceProperty::Sep
            | SentenceProperty::Cr
            | SentenceProperty::Lf
            | SentenceProperty::ATerm
            | SentenceProperty::STerm
    )
}

/// Feed one code point to the sentence machine.
///
/// `rest` is the input after `c`, scanned by SB8. Returns the new state and
/// whether there is a boundary before `c`.
pub(crate) fn transition(
    state: Option<SentenceState>,
    c: char,
    rest: &[u8],
) -> (SentenceState, bool) {
    let property = sentence_property(c);

    // SB5, never suppressing SB4.
    if matches!(property, SentenceProperty::Extend | SentenceProperty::Format) {
        return match state {
            Some(SentenceState::ParaSep | SentenceState::Cr) | None => (SentenceState::Any, true),
            Some(state) => (state, false),
        };
    }

    let transition = resolve::<SentenceRules>(state, property);

    // SB8.
    if transition.rule > 80
        && matches!(
            state,
            Some(
                SentenceState::ATerm
                    | SentenceState::Sb8Close
                    | SentenceState::Sb8Sp
                    | SentenceState::Sb7
            )
        )
    {
        let stop = if stops_sb8(property) {
            Some(property)
        } else {
            peek_property(rest, sentence_property, |property| !stops_sb8(property))
        };
        if stop == Some(SentenceProperty::Lower) {
            return (SentenceState::Lower, false);
        }
    }

    (transition.state, transition.verdict)
}

/// Position of the sentence machine between two calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SentenceCursor(Resume<SentenceState>);

impl SentenceCursor {
    pub const START: SentenceCursor = SentenceCursor(Resume::Start);

    /// Returned once the input is exhausted. Passing it along with new input
    /// starts a fresh segmentation.
    pub const END: SentenceCursor = SentenceCursor(Resume::End);

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
        self.0.pack(|state| state as i32)
    }

    /// Decode a cursor produced by [`SentenceCursor::pack`].
    pub fn unpack(packed: i32) -> Self {
        Self(Resume::unpack(packed, |packed| {
            u8::try_from(packed).ok().and_then(SentenceState::from_bits)
        }))
    }
}

/// Split the first sentence off `input`.
///
/// Trailing spaces and the paragraph separator belong to the sentence they
/// follow.
pub fn first_sentence(input: &str, cursor: SentenceCursor) -> (&str, &str, SentenceCursor) {
    let (sentence, _, cursor) = first_sentence_bytes(input.as_bytes(), cursor);
    let (sentence, rest) = input.split_at(sentence.len());
    (sentence, rest, cursor)
}

/// [`first_sentence`] over bytes. Malformed UTF-8 ends the current sentence.
pub fn first_sentence_bytes(
    input: &[u8],
    cursor: SentenceCursor,
) -> (&[u8], &[u8], SentenceCursor) {
    if input.is_empty() {
        return (input, input, cursor);
    }

    let Some((first, mut length)) = decode_rune(input) else {
        let length = invalid_len(input);
        return (&input[..length], &input[length..], SentenceCursor::START);
    };
    if input.len() <= length {
        return (input, &[], SentenceCursor::END);
    }

    let mut state = match cursor.0.context() {
        Some(state) => state,
        None => transition(None, first, &input[length..]).0,
    };

    loop {
        let Some((c, len)) = decode_rune(&input[length..]) else {
            return (&input[..length], &input[length..], SentenceCursor::START);
        };

        let (next, boundary) = transition(Some(state), c, &input[length + len..]);
        state = next;
        if boundary {
            return (&input[..length], &input[length..], SentenceCursor(Resume::At(state)));
        }

        length += len;
        if input.len() <= length {
            return (input, &[], SentenceCursor::END);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(text: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = text;
        let mut cursor = SentenceCursor::START;
        while !rest.is_empty() {
            let (sentence, next, next_cursor) = first_sentence(rest, cursor);
            out.push(sentence);
            rest = next;
            cursor = next_cursor;
        }
        out
    }

    #[test]
    fn terminators_and_spaces() {
        assert_eq!(sentences("This is a test. And another!"), vec![
            "This is a test. ",
            "And another!"
        ]);
        assert_eq!(sentences("Really?! Yes."), vec!["Really?! ", "Yes."]);
    }

    #[test]
    fn closing_punctuation_stays() {
        assert_eq!(sentences("(He left.) She stayed."), vec!["(He left.) ", "She stayed."]);
    }

    #[test]
    fn abbreviations_and_numbers() {
        // SB6.
        assert_eq!(sentences("Pi is 3.14 today."), vec!["Pi is 3.14 today."]);
        // SB7.
        assert_eq!(sentences("U.S. Army"), vec!["U.S. ", "Army"]);
        // SB8.
        assert_eq!(sentences("etc. and more"), vec!["etc. and more"]);
    }

    #[test]
    fn paragraph_separators() {
        assert_eq!(sentences("one\ntwo"), vec!["one\n", "two"]);
        assert_eq!(sentences("one\r\ntwo"), vec!["one\r\n", "two"]);
        assert_eq!(sentences("one\u{2029}two"), vec!["one\u{2029}", "two"]);
        assert_eq!(sentences("One. \r\nTwo."), vec!["One. \r\n", "Two."]);
        assert_eq!(sentences("One!\r\nTwo."), vec!["One!\r\n", "Two."]);
    }

    #[test]
    fn extend_after_separator_breaks() {
        assert_eq!(sentences("a\n\u{0301}b"), vec!["a\n", "\u{0301}b"]);
    }

    #[test]
    fn malformed_bytes() {
        let (sentence, rest, cursor) = first_sentence_bytes(b"Hi\xFF.", SentenceCursor::START);
        assert_eq!((sentence, rest), (&b"Hi"[..], &b"\xFF."[..]));
        assert!(cursor.is_start());
    }

    #[test]
    fn cursor_packing() {
        assert_eq!(SentenceCursor::START.pack(), -1);
        assert_eq!(SentenceCursor::unpack(-1), SentenceCursor::START);
        assert_eq!(SentenceCursor::END.pack(), -2);
        assert_eq!(SentenceCursor::unpack(-2), SentenceCursor::END);
        assert_eq!(SentenceCursor::unpack(99), SentenceCursor::START);
        for state in 0..SentenceState::COUNT as u8 {
            let cursor = SentenceCursor(Resume::At(SentenceState::from_bits(state).unwrap()));
            assert!(!cursor.is_start());
            assert!(cursor.pack() >= 0);
            assert_eq!(SentenceCursor::unpack(cursor.pack()), cursor);
        }
    }

    #[test]
    fn end_of_input_cursor() {
        let (sentence, rest, cursor) = first_sentence("Done.", SentenceCursor::START);
        assert_eq!((sentence, rest), ("Done.", ""));
        assert!(cursor.is_end());
        assert_eq!(first_sentence("Next one", cursor), ("Next one", "", SentenceCursor::END));
        assert_eq!(first_sentence("x", SentenceCursor::START).2, SentenceCursor::END);
    }
}
