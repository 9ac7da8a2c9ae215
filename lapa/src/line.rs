//! Line break opportunities (UAX #14).

use lapa_generate_transitions::generate_transitions;

use crate::properties::{
    east_asian_width, general_category, grapheme_property, line_property, GeneralCategory,
    GraphemeProperty, LineProperty,
};
use crate::transition::{peek_property, resolve, Resume, Rules, Transition};
use crate::utf8::{decode_last_rune, decode_rune, invalid_len};

/// Line break verdict for the position before a code point.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreak {
    /// No break allowed.
    #[default]
    Dont = 0,
    /// A break is allowed.
    Can = 1,
    /// A break is required.
    Must = 2,
}

impl LineBreak {
    #[inline]
    pub(crate) const fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Can,
            2 => Self::Must,
            _ => Self::Dont,
        }
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineState {
    #[default]
    Any,
    Bk,
    Cr,
    Lf,
    Nl,
    Sp,
    Zw,
    Wj,
    Gl,
    Ba,
    Hy,
    Cl,
    Cp,
    Ex,
    Is,
    Sy,
    Op,
    Qu,
    QuSp,
    Ns,
    ClCpSp,
    B2,
    B2Sp,
    Cb,
    Bb,
    Lb21a,
    Hl,
    Al,
    Nu,
    Pr,
    Eb,
    IdEm,
    NuNu,
    NuSy,
    NuIs,
    NuCl,
    NuCp,
    Po,
    Jl,
    Jv,
    Jt,
    H2,
    H3,
    OddRi,
    EvenRi,
    ExtPicCn,
}

impl LineState {
    pub const COUNT: usize = LineState::ExtPicCn as usize + 1;

    pub(crate) const fn from_bits(bits: u8) -> Option<Self> {
        const STATES: [LineState; LineState::COUNT] = [
            LineState::Any,
            LineState::Bk,
            LineState::Cr,
            LineState::Lf,
            LineState::Nl,
            LineState::Sp,
            LineState::Zw,
            LineState::Wj,
            LineState::Gl,
            LineState::Ba,
            LineState::Hy,
            LineState::Cl,
            LineState::Cp,
            LineState::Ex,
            LineState::Is,
            LineState::Sy,
            LineState::Op,
            LineState::Qu,
            LineState::QuSp,
            LineState::Ns,
            LineState::ClCpSp,
            LineState::B2,
            LineState::B2Sp,
            LineState::Cb,
            LineState::Bb,
            LineState::Lb21a,
            LineState::Hl,
            LineState::Al,
            LineState::Nu,
            LineState::Pr,
            LineState::Eb,
            LineState::IdEm,
            LineState::NuNu,
            LineState::NuSy,
            LineState::NuIs,
            LineState::NuCl,
            LineState::NuCp,
            LineState::Po,
            LineState::Jl,
            LineState::Jv,
            LineState::Jt,
            LineState::H2,
            LineState::H3,
            LineState::OddRi,
            LineState::EvenRi,
            LineState::ExtPicCn,
        ];

        if (bits as usize) < LineState::COUNT {
            Some(STATES[bits as usize])
        } else {
            None
        }
    }
}

generate_transitions!(line_transitions, LineState, LineProperty, LineBreak, {
    // LB4.
    Bk {
        Any => (Any, Must, 40),
    },
    // LB5.
    Cr {
        Lf => (Lf, Dont, 50),
    },
    Cr | Lf | Nl {
        Any => (Any, Must, 50),
    },
    // LB6.
    Any {
        Bk => (Bk, Dont, 60),
        Cr => (Cr, Dont, 60),
        Lf => (Lf, Dont, 60),
        Nl => (Nl, Dont, 60),
    },
    // LB7.
    Any {
        Sp => (Sp, Dont, 70),
        Zw => (Zw, Dont, 70),
    },
    // LB8.
    Zw {
        Sp => (Zw, Dont, 70),
        Any => (Any, Can, 80),
    },
    // LB11.
    Any {
        Wj => (Wj, Dont, 110),
    },
    Wj {
        Any => (Any, Dont, 110),
    },
    // LB12.
    Any {
        Gl => (Gl, Can, 310),
    },
    Gl {
        Any => (Any, Dont, 120),
    },
    // LB13, completed in code.
    Any {
        Cl => (Cl, Can, 310),
        Cp => (Cp, Can, 310),
        Ex => (Ex, Dont, 130),
        Is => (Is, Can, 310),
        Sy => (Sy, Can, 310),
    },
    // LB14.
    Any {
        Op => (Op, Can, 310),
    },
    Op {
        Sp => (Op, Dont, 70),
        Any => (Any, Dont, 140),
    },
    // LB15.
    Qu {
        Sp => (QuSp, Dont, 70),
        Op => (Op, Dont, 150),
    },
    QuSp {
        Op => (Op, Dont, 150),
    },
    // LB16.
    Cl | NuCl | Cp | NuCp {
        Sp => (ClCpSp, Dont, 70),
    },
    Cl | NuCl | Cp | NuCp | ClCpSp {
        Ns => (Ns, Dont, 160),
    },
    // LB17.
    Any {
        B2 => (B2, Can, 310),
    },
    B2 {
        Sp => (B2Sp, Dont, 70),
    },
    B2 | B2Sp {
        B2 => (B2, Dont, 170),
    },
    // LB18.
    Sp | QuSp | ClCpSp | B2Sp {
        Any => (Any, Can, 180),
    },
    // LB19.
    Any {
        Qu => (Qu, Dont, 190),
    },
    Qu {
        Any => (Any, Dont, 190),
    },
    // LB20.
    Any {
        Cb => (Cb, Can, 200),
    },
    Cb {
        Any => (Any, Can, 200),
    },
    // LB21.
    Any {
        Ba => (Ba, Dont, 210),
        Hy => (Hy, Dont, 210),
        Ns => (Ns, Dont, 210),
        Bb => (Bb, Can, 310),
    },
    Bb {
        Any => (Any, Dont, 210),
    },
    // LB21a.
    Any {
        Hl => (Hl, Can, 310),
    },
    Hl {
        Hy | Ba => (Lb21a, Dont, 210),
    },
    Lb21a {
        Any => (Any, Dont, 211),
    },
    // LB21b.
    Sy | NuSy {
        Hl => (Hl, Dont, 212),
    },
    // LB22.
    Any {
        In => (Any, Dont, 220),
    },
    // LB23.
    Any {
        Al => (Al, Can, 310),
        Nu => (Nu, Can, 310),
    },
    Al | Hl {
        Nu => (Nu, Dont, 230),
    },
    Nu | NuNu {
        Al => (Al, Dont, 230),
        Hl => (Hl, Dont, 230),
    },
    // LB23a.
    Any {
        Pr => (Pr, Can, 310),
        Id | Em => (IdEm, Can, 310),
        Eb => (Eb, Can, 310),
    },
    Pr {
        Id | Em => (IdEm, Dont, 231),
        Eb => (Eb, Dont, 231),
    },
    IdEm | Eb {
        Po => (Po, Dont, 231),
    },
    // LB24.
    Any {
        Po => (Po, Can, 310),
    },
    Pr | Po {
        Al => (Al, Dont, 240),
        Hl => (Hl, Dont, 240),
    },
    Al | Hl {
        Pr => (Pr, Dont, 240),
        Po => (Po, Dont, 240),
    },
    // LB25.
    Pr | Po | Op | Hy {
        Nu => (Nu, Dont, 250),
    },
    Nu | NuNu | NuSy | NuIs {
        Nu => (NuNu, Dont, 250),
        Sy => (NuSy, Dont, 250),
        Is => (NuIs, Dont, 250),
        Cl => (NuCl, Dont, 250),
        Cp => (NuCp, Dont, 250),
    },
    Nu | NuNu | NuSy | NuIs | NuCl | NuCp {
        Po => (Po, Dont, 250),
        Pr => (Pr, Dont, 250),
    },
    // LB26.
    Any {
        Jl => (Jl, Can, 310),
        Jv => (Jv, Can, 310),
        Jt => (Jt, Can, 310),
        H2 => (H2, Can, 310),
        H3 => (H3, Can, 310),
    },
    Jl {
        Jl => (Jl, Dont, 260),
        Jv => (Jv, Dont, 260),
        H2 => (H2, Dont, 260),
        H3 => (H3, Dont, 260),
    },
    Jv | H2 {
        Jv => (Jv, Dont, 260),
        Jt => (Jt, Dont, 260),
    },
    Jt | H3 {
        Jt => (Jt, Dont, 260),
    },
    // LB27.
    Jl | Jv | Jt | H2 | H3 {
        Po => (Po, Dont, 270),
    },
    Pr {
        Jl => (Jl, Dont, 270),
        Jv => (Jv, Dont, 270),
        Jt => (Jt, Dont, 270),
        H2 => (H2, Dont, 270),
        H3 => (H3, Dont, 270),
    },
    // LB28.
    Al | Hl {
        Al => (Al, Dont, 280),
        Hl => (Hl, Dont, 280),
    },
    // LB29.
    Is | NuIs {
        Al => (Al, Dont, 290),
        Hl => (Hl, Dont, 290),
    },
});

static LINE_TRANSITIONS: [[Option<Transition<LineState, LineBreak>>; LineProperty::COUNT];
    LineState::COUNT] = line_transitions();

pub(crate) struct LineRules;

impl Rules for LineRules {
    type State = LineState;
    type Property = LineProperty;
    type Verdict = LineBreak;

    const ANY_STATE: LineState = LineState::Any;
    const ANY_PROPERTY: LineProperty = LineProperty::Any;
    // LB31.
    const FALLBACK: Transition<LineState, LineBreak> =
        Transition::new(LineState::Any, LineBreak::Can, 310);

    #[inline]
    fn lookup(
        state: LineState,
        property: LineProperty,
    ) -> Option<Transition<LineState, LineBreak>> {
        LINE_TRANSITIONS[state as usize][property as usize]
    }
}

/// Line machine state plus the ZWJ (LB8a) and narrow closing parenthesis
/// (LB30) bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct LineContext {
    pub(crate) state: LineState,
    pub(crate) zwj: bool,
    pub(crate) narrow_close: bool,
}

impl LineContext {
    pub(crate) const BITS: u32 = 8;

    #[inline]
    const fn plain(state: LineState) -> Self {
        Self { state, zwj: false, narrow_close: false }
    }

    #[inline]
    pub(crate) const fn to_bits(self) -> i32 {
        self.state as i32 | ((self.zwj as i32) << 6) | ((self.narrow_close as i32) << 7)
    }

    #[inline]
    pub(crate) const fn from_bits(bits: i32) -> Option<Self> {
        match LineState::from_bits((bits & 0x3F) as u8) {
            Some(state) => Some(Self {
                state,
                zwj: bits & 0x40 != 0,
                narrow_close: bits & 0x80 != 0,
            }),
            None => None,
        }
    }
}

/// LB1: resolve classes the pair table does not know about.
fn resolved_line_property(c: char) -> LineProperty {
    match line_property(c) {
        LineProperty::Ai
        | LineProperty::Sg
        | LineProperty::Xx
        | LineProperty::Ak
        | LineProperty::Ap
        | LineProperty::As => LineProperty::Al,
        LineProperty::Sa => match general_category(c) {
            GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark => LineProperty::Cm,
            _ => LineProperty::Al,
        },
        LineProperty::Cj => LineProperty::Ns,
        LineProperty::Vf | LineProperty::Vi => LineProperty::Cm,
        property => property,
    }
}

/// Feed one code point to the line machine.
///
/// `rest` is the input after `c`, consulted by the LB25 look-ahead. Returns
/// the new context and the break verdict for the position before `c`.
pub(crate) fn transition(
    context: Option<LineContext>,
    c: char,
    rest: &[u8],
) -> (LineContext, LineBreak) {
    let (state, zwj, narrow_close) = match context {
        Some(context) => (Some(context.state), context.zwj, context.narrow_close),
        None => (None, false, false),
    };

    let (mut next, mut verdict) = decide(state, narrow_close, c, rest);

    if !next.zwj
        && matches!(next.state, LineState::Cp | LineState::NuCp)
        && !east_asian_width(c).is_east_asian()
    {
        next.narrow_close = true;
    }

    // LB8a.
    if zwj && verdict != LineBreak::Must {
        verdict = LineBreak::Dont;
    }

    (next, verdict)
}

fn decide(
    state: Option<LineState>,
    narrow_close: bool,
    c: char,
    rest: &[u8],
) -> (LineContext, LineBreak) {
    let property = resolved_line_property(c);

    // LB9 and LB10.
    if matches!(property, LineProperty::Cm | LineProperty::Zwj) {
        let zwj = property == LineProperty::Zwj;
        let must_break = matches!(
            state,
            None | Some(LineState::Bk | LineState::Cr | LineState::Lf | LineState::Nl)
        );
        return match state {
            Some(state)
                if !must_break
                    && !matches!(
                        state,
                        LineState::Sp
                            | LineState::Zw
                            | LineState::QuSp
                            | LineState::ClCpSp
                            | LineState::B2Sp
                    ) =>
            {
                (LineContext { state, zwj, narrow_close: false }, LineBreak::Dont)
            },
            _ => {
                let verdict = if must_break { LineBreak::Must } else { LineBreak::Can };
                (LineContext { state: LineState::Al, zwj, narrow_close: false }, verdict)
            },
        };
    }

    let transition = resolve::<LineRules>(state, property);

    // LB12a.
    if transition.rule > 121
        && property == LineProperty::Gl
        && !matches!(
            state,
            Some(
                LineState::Sp
                    | LineState::Ba
                    | LineState::Hy
                    | LineState::Lb21a
                    | LineState::QuSp
                    | LineState::ClCpSp
                    | LineState::B2Sp
            )
        )
    {
        return (LineContext::plain(LineState::Gl), LineBreak::Dont);
    }

    // LB13.
    if transition.rule > 130 && !matches!(state, Some(LineState::Nu | LineState::NuNu)) {
        let closing = match property {
            LineProperty::Cl => Some(LineState::Cl),
            LineProperty::Cp => Some(LineState::Cp),
            LineProperty::Is => Some(LineState::Is),
            LineProperty::Sy => Some(LineState::Sy),
            _ => None,
        };
        if let Some(closing) = closing {
            return (LineContext::plain(closing), LineBreak::Dont);
        }
    }

    // LB25, (PR | PO) × (OP | HY)? NU.
    if transition.rule > 250
        && matches!(state, Some(LineState::Pr | LineState::Po))
        && matches!(property, LineProperty::Op | LineProperty::Hy)
        && peek_property(rest, line_property, |_| false) == Some(LineProperty::Nu)
    {
        return (LineContext::plain(LineState::Nu), LineBreak::Dont);
    }

    // LB30.
    if transition.rule > 300 {
        if matches!(
            state,
            Some(LineState::Al | LineState::Hl | LineState::Nu | LineState::NuNu)
        ) && property == LineProperty::Op
        {
            if !east_asian_width(c).is_east_asian() {
                return (LineContext::plain(LineState::Op), LineBreak::Dont);
            }
        } else if narrow_close {
            let opening = match property {
                LineProperty::Al => Some(LineState::Al),
                LineProperty::Hl => Some(LineState::Hl),
                LineProperty::Nu => Some(LineState::Nu),
                _ => None,
            };
            if let Some(opening) = opening {
                return (LineContext::plain(opening), LineBreak::Dont);
            }
        }
    }

    // LB30a.
    if transition.state == LineState::Any && property == LineProperty::Ri {
        return match state {
            Some(LineState::OddRi) => (LineContext::plain(LineState::EvenRi), LineBreak::Dont),
            _ => (LineContext::plain(LineState::OddRi), transition.verdict),
        };
    }

    // LB30b.
    if transition.rule > 302 {
        if property == LineProperty::Em
            && matches!(state, Some(LineState::Eb | LineState::ExtPicCn))
        {
            return (LineContext::plain(LineState::Any), LineBreak::Dont);
        }
        if grapheme_property(c) == GraphemeProperty::ExtendedPictographic
            && general_category(c) == GeneralCategory::Unassigned
        {
            return (LineContext::plain(LineState::ExtPicCn), LineBreak::Can);
        }
    }

    (LineContext::plain(transition.state), transition.verdict)
}

/// Position of the line machine between two calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LineCursor(Resume<LineContext>);

impl LineCursor {
    pub const START: LineCursor = LineCursor(Resume::Start);

    /// Returned once the input is exhausted. Passing it along with new input
    /// starts a fresh segmentation.
    pub const END: LineCursor = LineCursor(Resume::End);

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
        self.0.pack(LineContext::to_bits)
    }

    /// Decode a cursor produced by [`LineCursor::pack`].
    pub fn unpack(packed: i32) -> Self {
        Self(Resume::unpack(packed, LineContext::from_bits))
    }
}

/// Split the first line segment off `input`.
///
/// A segment ends at the next break opportunity. The returned flag tells
/// whether the break after the segment is mandatory, which is always the case
/// at the end of the input.
pub fn first_line_segment(input: &str, cursor: LineCursor) -> (&str, &str, bool, LineCursor) {
    let (segment, _, must_break, cursor) = first_line_segment_bytes(input.as_bytes(), cursor);
    let (segment, rest) = input.split_at(segment.len());
    (segment, rest, must_break, cursor)
}

/// [`first_line_segment`] over bytes. Malformed UTF-8 ends the current
/// segment with an optional break.
pub fn first_line_segment_bytes(
    input: &[u8],
    cursor: LineCursor,
) -> (&[u8], &[u8], bool, LineCursor) {
    if input.is_empty() {
        return (input, input, false, cursor);
    }

    let Some((first, mut length)) = decode_rune(input) else {
        let length = invalid_len(input);
        return (&input[..length], &input[length..], false, LineCursor::START);
    };
    if input.len() <= length {
        return (input, &[], true, LineCursor::END);
    }

    let mut context = match cursor.0.context() {
        Some(context) => context,
        None => transition(None, first, &input[length..]).0,
    };

    loop {
        let Some((c, len)) = decode_rune(&input[length..]) else {
            return (&input[..length], &input[length..], false, LineCursor::START);
        };

        let (next, verdict) = transition(Some(context), c, &input[length + len..]);
        context = next;
        if verdict != LineBreak::Dont {
            let must_break = verdict == LineBreak::Must;
            return (&input[..length], &input[length..], must_break, LineCursor(Resume::At(context)));
        }

        length += len;
        if input.len() <= length {
            return (input, &[], true, LineCursor::END);
        }
    }
}

#[inline]
fn is_line_break(c: char) -> bool {
    matches!(
        line_property(c),
        LineProperty::Bk | LineProperty::Cr | LineProperty::Lf | LineProperty::Nl
    )
}

/// Whether `input` ends with a mandatory line break character.
#[inline]
pub fn has_trailing_line_break(input: &str) -> bool {
    input.chars().next_back().is_some_and(is_line_break)
}

/// [`has_trailing_line_break`] over bytes.
#[inline]
pub fn has_trailing_line_break_bytes(input: &[u8]) -> bool {
    decode_last_rune(input).is_some_and(is_line_break)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(text: &str) -> Vec<(&str, bool)> {
        let mut out = Vec::new();
        let mut rest = text;
        let mut cursor = LineCursor::START;
        while !rest.is_empty() {
            let (segment, next, must_break, next_cursor) = first_line_segment(rest, cursor);
            out.push((segment, must_break));
            rest = next;
            cursor = next_cursor;
        }
        out
    }

    #[test]
    fn spaces_allow_breaks() {
        assert_eq!(segments("Hello world"), vec![("Hello ", false), ("world", true)]);
        assert_eq!(segments("a, b"), vec![("a, ", false), ("b", true)]);
    }

    #[test]
    fn mandatory_breaks() {
        assert_eq!(segments("a\nb"), vec![("a\n", true), ("b", true)]);
        assert_eq!(segments("a\r\nb"), vec![("a\r\n", true), ("b", true)]);
    }

    #[test]
    fn numbers_stay_together() {
        assert_eq!(segments("1,234.5"), vec![("1,234.5", true)]);
        assert_eq!(segments("a,b"), vec![("a,b", true)]);
        // LB25 look-ahead past the opening parenthesis.
        assert_eq!(segments("$(12)"), vec![("$(12)", true)]);
    }

    #[test]
    fn postfix_punctuation_starts_a_segment() {
        assert_eq!(segments("%1"), vec![("%1", true)]);
        assert_eq!(segments("%a"), vec![("%a", true)]);
        assert_eq!(segments("a %1"), vec![("a ", false), ("%1", true)]);
    }

    #[test]
    fn hyphen_and_glue() {
        assert_eq!(segments("foo-bar"), vec![("foo-", false), ("bar", true)]);
        assert_eq!(segments("a\u{00A0}b"), vec![("a\u{00A0}b", true)]);
    }

    #[test]
    fn parentheses_around_letters() {
        assert_eq!(segments("x(y)z"), vec![("x(y)z", true)]);
    }

    #[test]
    fn ideographs_break_anywhere() {
        assert_eq!(segments("\u{4F60}\u{597D}"), vec![("\u{4F60}", false), ("\u{597D}", true)]);
    }

    #[test]
    fn regional_indicator_pairs() {
        let flags = "\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}";
        assert_eq!(
            segments(flags),
            vec![("\u{1F1E9}\u{1F1EA}", false), ("\u{1F1EB}\u{1F1F7}", true)]
        );
    }

    #[test]
    fn combining_marks_and_zwj() {
        assert_eq!(segments("a\u{0301} b"), vec![("a\u{0301} ", false), ("b", true)]);
        // LB10 then LB8a.
        assert_eq!(segments("a \u{200D}b"), vec![("a ", false), ("\u{200D}b", true)]);
    }

    #[test]
    fn trailing_line_break() {
        assert!(has_trailing_line_break("abc\n"));
        assert!(has_trailing_line_break("abc\r"));
        assert!(has_trailing_line_break("abc\u{2028}"));
        assert!(has_trailing_line_break("abc\u{85}"));
        assert!(!has_trailing_line_break("abc"));
        assert!(!has_trailing_line_break(""));
        assert!(has_trailing_line_break_bytes(b"abc\n"));
        assert!(!has_trailing_line_break_bytes(b"abc\xE2"));
    }

    #[test]
    fn malformed_bytes() {
        let (segment, rest, must_break, cursor) =
            first_line_segment_bytes(b"ab\xFF cd", LineCursor::START);
        assert_eq!((segment, rest, must_break), (&b"ab"[..], &b"\xFF cd"[..], false));
        assert!(cursor.is_start());
    }

    #[test]
    fn cursor_packing() {
        assert_eq!(LineCursor::START.pack(), -1);
        assert_eq!(LineCursor::unpack(-1), LineCursor::START);
        assert_eq!(LineCursor::END.pack(), -2);
        assert_eq!(LineCursor::unpack(-2), LineCursor::END);
        for state in 0..LineState::COUNT as u8 {
            for zwj in [false, true] {
                for narrow_close in [false, true] {
                    let cursor = LineCursor(Resume::At(LineContext {
                        state: LineState::from_bits(state).unwrap(),
                        zwj,
                        narrow_close,
                    }));
                    assert!(cursor.pack() >= 0);
                    assert_eq!(LineCursor::unpack(cursor.pack()), cursor);
                }
            }
        }
    }

    #[test]
    fn state_table_order() {
        for bits in 0..LineState::COUNT as u8 {
            assert_eq!(LineState::from_bits(bits).unwrap() as u8, bits);
        }
        assert_eq!(LineState::from_bits(LineState::COUNT as u8), None);
    }

    #[test]
    fn end_of_input_cursor() {
        let (segment, rest, must_break, cursor) = first_line_segment("a ", LineCursor::START);
        assert_eq!((segment, rest, must_break), ("a ", "", true));
        assert!(cursor.is_end());
        assert_eq!(first_line_segment("x", LineCursor::START).3, LineCursor::END);

        assert_eq!(
            first_line_segment("%1 b", cursor),
            first_line_segment("%1 b", LineCursor::START)
        );
        assert_eq!(first_line_segment("b", cursor), ("b", "", true, LineCursor::END));
    }
}
