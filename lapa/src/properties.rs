//! Unicode property lookups used by the segmentation engines.
//!
//! Every lookup has an ASCII fast path; everything else is answered by the
//! ICU compiled property data.

use icu_properties::props::{
    EastAsianWidth as IcuEastAsianWidth, EmojiPresentation, ExtendedPictographic,
    GraphemeClusterBreak, LineBreak, SentenceBreak, WordBreak,
};
use icu_properties::{CodePointMapData, CodePointSetData};

pub use icu_properties::props::GeneralCategory;

/// Grapheme cluster break class.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GraphemeProperty {
    #[default]
    Any,
    Prepend,
    Cr,
    Lf,
    Control,
    Extend,
    RegionalIndicator,
    SpacingMark,
    L,
    V,
    T,
    Lv,
    Lvt,
    Zwj,
    ExtendedPictographic,
}

impl GraphemeProperty {
    pub const COUNT: usize = GraphemeProperty::ExtendedPictographic as usize + 1;

    pub(crate) const fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0 => Self::Any,
            1 => Self::Prepend,
            2 => Self::Cr,
            3 => Self::Lf,
            4 => Self::Control,
            5 => Self::Extend,
            6 => Self::RegionalIndicator,
            7 => Self::SpacingMark,
            8 => Self::L,
            9 => Self::V,
            10 => Self::T,
            11 => Self::Lv,
            12 => Self::Lvt,
            13 => Self::Zwj,
            14 => Self::ExtendedPictographic,
            _ => return None,
        })
    }
}

/// Word break class.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WordProperty {
    #[default]
    Any,
    Cr,
    Lf,
    Newline,
    Extend,
    Zwj,
    RegionalIndicator,
    Format,
    Katakana,
    HebrewLetter,
    ALetter,
    SingleQuote,
    DoubleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    WSegSpace,
    ExtendedPictographic,
}

impl WordProperty {
    pub const COUNT: usize = WordProperty::ExtendedPictographic as usize + 1;
}

/// Sentence break class.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SentenceProperty {
    #[default]
    Any,
    Cr,
    Lf,
    Extend,
    Sep,
    Format,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    SContinue,
    STerm,
    Close,
}

impl SentenceProperty {
    pub const COUNT: usize = SentenceProperty::Close as usize + 1;
}

/// Line break class, before the tailoring of LB1.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineProperty {
    #[default]
    Any,
    Ai,
    Al,
    B2,
    Ba,
    Bb,
    Bk,
    Cb,
    Cj,
    Cl,
    Cm,
    Cp,
    Cr,
    Eb,
    Em,
    Ex,
    Gl,
    H2,
    H3,
    Hl,
    Hy,
    Id,
    In,
    Is,
    Jl,
    Jt,
    Jv,
    Lf,
    Nl,
    Ns,
    Nu,
    Op,
    Po,
    Pr,
    Qu,
    Ri,
    Sa,
    Sg,
    Sp,
    Sy,
    Wj,
    Xx,
    Zw,
    Zwj,
    Ak,
    Ap,
    As,
    Vf,
    Vi,
}

impl LineProperty {
    pub const COUNT: usize = LineProperty::Vi as usize + 1;
}

/// East Asian width class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EastAsianWidth {
    #[default]
    Neutral,
    Ambiguous,
    Halfwidth,
    Fullwidth,
    Narrow,
    Wide,
}

impl EastAsianWidth {
    /// Fullwidth, wide or halfwidth, the classes LB30 treats as East Asian.
    #[inline]
    pub const fn is_east_asian(self) -> bool {
        matches!(self, Self::Fullwidth | Self::Wide | Self::Halfwidth)
    }
}

#[inline]
pub fn grapheme_property(c: char) -> GraphemeProperty {
    match c {
        ' '..='~' => GraphemeProperty::Any,
        '\r' => GraphemeProperty::Cr,
        '\n' => GraphemeProperty::Lf,
        '\0'..='\x1f' | '\x7f' => GraphemeProperty::Control,
        _ => lookup_grapheme_property(c),
    }
}

fn lookup_grapheme_property(c: char) -> GraphemeProperty {
    match CodePointMapData::<GraphemeClusterBreak>::new().get(c) {
        GraphemeClusterBreak::Control => GraphemeProperty::Control,
        GraphemeClusterBreak::CR => GraphemeProperty::Cr,
        GraphemeClusterBreak::LF => GraphemeProperty::Lf,
        GraphemeClusterBreak::Extend | GraphemeClusterBreak::EModifier => {
            GraphemeProperty::Extend
        },
        GraphemeClusterBreak::ZWJ => GraphemeProperty::Zwj,
        GraphemeClusterBreak::RegionalIndicator => GraphemeProperty::RegionalIndicator,
        GraphemeClusterBreak::Prepend => GraphemeProperty::Prepend,
        GraphemeClusterBreak::SpacingMark => GraphemeProperty::SpacingMark,
        GraphemeClusterBreak::L => GraphemeProperty::L,
        GraphemeClusterBreak::V => GraphemeProperty::V,
        GraphemeClusterBreak::T => GraphemeProperty::T,
        GraphemeClusterBreak::LV => GraphemeProperty::Lv,
        GraphemeClusterBreak::LVT => GraphemeProperty::Lvt,
        GraphemeClusterBreak::EBase
        | GraphemeClusterBreak::EBaseGAZ
        | GraphemeClusterBreak::GlueAfterZwj => GraphemeProperty::ExtendedPictographic,
        _ if is_extended_pictographic(c) => GraphemeProperty::ExtendedPictographic,
        _ => GraphemeProperty::Any,
    }
}

#[inline]
pub fn word_property(c: char) -> WordProperty {
    match c {
        'a'..='z' | 'A'..='Z' => WordProperty::ALetter,
        '0'..='9' => WordProperty::Numeric,
        ' ' => WordProperty::WSegSpace,
        '\r' => WordProperty::Cr,
        '\n' => WordProperty::Lf,
        _ => lookup_word_property(c),
    }
}

fn lookup_word_property(c: char) -> WordProperty {
    match CodePointMapData::<WordBreak>::new().get(c) {
        WordBreak::CR => WordProperty::Cr,
        WordBreak::LF => WordProperty::Lf,
        WordBreak::Newline => WordProperty::Newline,
        WordBreak::Extend | WordBreak::EModifier => WordProperty::Extend,
        WordBreak::ZWJ => WordProperty::Zwj,
        WordBreak::RegionalIndicator => WordProperty::RegionalIndicator,
        WordBreak::Format => WordProperty::Format,
        WordBreak::Katakana => WordProperty::Katakana,
        WordBreak::HebrewLetter => WordProperty::HebrewLetter,
        WordBreak::ALetter => WordProperty::ALetter,
        WordBreak::SingleQuote => WordProperty::SingleQuote,
        WordBreak::DoubleQuote => WordProperty::DoubleQuote,
        WordBreak::MidNumLet => WordProperty::MidNumLet,
        WordBreak::MidLetter => WordProperty::MidLetter,
        WordBreak::MidNum => WordProperty::MidNum,
        WordBreak::Numeric => WordProperty::Numeric,
        WordBreak::ExtendNumLet => WordProperty::ExtendNumLet,
        WordBreak::WSegSpace => WordProperty::WSegSpace,
        WordBreak::EBase | WordBreak::EBaseGAZ | WordBreak::GlueAfterZwj => {
            WordProperty::ExtendedPictographic
        },
        _ if is_extended_pictographic(c) => WordProperty::ExtendedPictographic,
        _ => WordProperty::Any,
    }
}

#[inline]
pub fn sentence_property(c: char) -> SentenceProperty {
    match c {
        'a'..='z' => SentenceProperty::Lower,
        'A'..='Z' => SentenceProperty::Upper,
        '0'..='9' => SentenceProperty::Numeric,
        ' ' => SentenceProperty::Sp,
        '.' => SentenceProperty::ATerm,
        '\r' => SentenceProperty::Cr,
        '\n' => SentenceProperty::Lf,
        _ => lookup_sentence_property(c),
    }
}

fn lookup_sentence_property(c: char) -> SentenceProperty {
    match CodePointMapData::<SentenceBreak>::new().get(c) {
        SentenceBreak::CR => SentenceProperty::Cr,
        SentenceBreak::LF => SentenceProperty::Lf,
        SentenceBreak::Extend => SentenceProperty::Extend,
        SentenceBreak::Sep => SentenceProperty::Sep,
        SentenceBreak::Format => SentenceProperty::Format,
        SentenceBreak::Sp => SentenceProperty::Sp,
        SentenceBreak::Lower => SentenceProperty::Lower,
        SentenceBreak::Upper => SentenceProperty::Upper,
        SentenceBreak::OLetter => SentenceProperty::OLetter,
        SentenceBreak::Numeric => SentenceProperty::Numeric,
        SentenceBreak::ATerm => SentenceProperty::ATerm,
        SentenceBreak::SContinue => SentenceProperty::SContinue,
        SentenceBreak::STerm => SentenceProperty::STerm,
        SentenceBreak::Close => SentenceProperty::Close,
        _ => SentenceProperty::Any,
    }
}

#[inline]
pub fn line_property(c: char) -> LineProperty {
    match c {
        'a'..='z' | 'A'..='Z' => LineProperty::Al,
        '0'..='9' => LineProperty::Nu,
        ' ' => LineProperty::Sp,
        '\r' => LineProperty::Cr,
        '\n' => LineProperty::Lf,
        _ => lookup_line_property(c),
    }
}

fn lookup_line_property(c: char) -> LineProperty {
    match CodePointMapData::<LineBreak>::new().get(c) {
        LineBreak::Ambiguous => LineProperty::Ai,
        LineBreak::Alphabetic => LineProperty::Al,
        LineBreak::BreakBoth => LineProperty::B2,
        LineBreak::BreakAfter => LineProperty::Ba,
        LineBreak::BreakBefore => LineProperty::Bb,
        LineBreak::MandatoryBreak => LineProperty::Bk,
        LineBreak::ContingentBreak => LineProperty::Cb,
        LineBreak::ConditionalJapaneseStarter => LineProperty::Cj,
        LineBreak::ClosePunctuation => LineProperty::Cl,
        LineBreak::CombiningMark => LineProperty::Cm,
        LineBreak::CloseParenthesis => LineProperty::Cp,
        LineBreak::CarriageReturn => LineProperty::Cr,
        LineBreak::EBase => LineProperty::Eb,
        LineBreak::EModifier => LineProperty::Em,
        LineBreak::Exclamation => LineProperty::Ex,
        LineBreak::Glue => LineProperty::Gl,
        LineBreak::H2 => LineProperty::H2,
        LineBreak::H3 => LineProperty::H3,
        LineBreak::HebrewLetter => LineProperty::Hl,
        LineBreak::Hyphen => LineProperty::Hy,
        LineBreak::Ideographic => LineProperty::Id,
        LineBreak::Inseparable => LineProperty::In,
        LineBreak::InfixNumeric => LineProperty::Is,
        LineBreak::JL => LineProperty::Jl,
        LineBreak::JT => LineProperty::Jt,
        LineBreak::JV => LineProperty::Jv,
        LineBreak::LineFeed => LineProperty::Lf,
        LineBreak::NextLine => LineProperty::Nl,
        LineBreak::Nonstarter => LineProperty::Ns,
        LineBreak::Numeric => LineProperty::Nu,
        LineBreak::OpenPunctuation => LineProperty::Op,
        LineBreak::PostfixNumeric => LineProperty::Po,
        LineBreak::PrefixNumeric => LineProperty::Pr,
        LineBreak::Quotation => LineProperty::Qu,
        LineBreak::RegionalIndicator => LineProperty::Ri,
        LineBreak::ComplexContext => LineProperty::Sa,
        LineBreak::Surrogate => LineProperty::Sg,
        LineBreak::Space => LineProperty::Sp,
        LineBreak::BreakSymbols => LineProperty::Sy,
        LineBreak::WordJoiner => LineProperty::Wj,
        LineBreak::ZWSpace => LineProperty::Zw,
        LineBreak::ZWJ => LineProperty::Zwj,
        LineBreak::Aksara => LineProperty::Ak,
        LineBreak::AksaraPrebase => LineProperty::Ap,
        LineBreak::AksaraStart => LineProperty::As,
        LineBreak::ViramaFinal => LineProperty::Vf,
        LineBreak::Virama => LineProperty::Vi,
        _ => LineProperty::Xx,
    }
}

#[inline]
pub fn east_asian_width(c: char) -> EastAsianWidth {
    match c {
        ' '..='~' => EastAsianWidth::Narrow,
        '\0'..='\x1f' | '\x7f' => EastAsianWidth::Neutral,
        _ => match CodePointMapData::<IcuEastAsianWidth>::new().get(c) {
            IcuEastAsianWidth::Ambiguous => EastAsianWidth::Ambiguous,
            IcuEastAsianWidth::Halfwidth => EastAsianWidth::Halfwidth,
            IcuEastAsianWidth::Fullwidth => EastAsianWidth::Fullwidth,
            IcuEastAsianWidth::Narrow => EastAsianWidth::Narrow,
            IcuEastAsianWidth::Wide => EastAsianWidth::Wide,
            _ => EastAsianWidth::Neutral,
        },
    }
}

#[inline]
pub fn general_category(c: char) -> GeneralCategory {
    CodePointMapData::<GeneralCategory>::new().get(c)
}

#[inline]
pub fn is_extended_pictographic(c: char) -> bool {
    !c.is_ascii() && CodePointSetData::new::<ExtendedPictographic>().contains(c)
}

#[inline]
pub fn has_emoji_presentation(c: char) -> bool {
    !c.is_ascii() && CodePointSetData::new::<EmojiPresentation>().contains(c)
}
