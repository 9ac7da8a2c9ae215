//! Monospace display width of code points and grapheme clusters.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::properties::{east_asian_width, has_emoji_presentation, EastAsianWidth, GraphemeProperty};

const VARIATION_SELECTOR_15: char = '\u{FE0E}';
const VARIATION_SELECTOR_16: char = '\u{FE0F}';

/// Process default for the width of East Asian ambiguous characters.
static AMBIGUOUS_WIDTH: AtomicU8 = AtomicU8::new(1);

/// Width assigned to East Asian ambiguous characters used by the `*_with`
/// functions.
///
/// `WidthPolicy::default()` renders them narrow. [`WidthPolicy::global`] reads
/// the process default installed by [`set_ambiguous_width`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidthPolicy {
    ambiguous: u8,
}

impl Default for WidthPolicy {
    fn default() -> Self {
        Self::NARROW
    }
}

impl WidthPolicy {
    pub const NARROW: WidthPolicy = WidthPolicy { ambiguous: 1 };
    pub const WIDE: WidthPolicy = WidthPolicy { ambiguous: 2 };

    /// Policy for the given ambiguous width. Anything but 2 is treated as 1.
    #[inline]
    pub const fn new(ambiguous: u8) -> Self {
        if ambiguous == 2 {
            Self::WIDE
        } else {
            Self::NARROW
        }
    }

    #[inline]
    pub fn global() -> Self {
        Self::new(ambiguous_width())
    }

    #[inline]
    pub const fn ambiguous(self) -> usize {
        self.ambiguous as usize
    }
}

/// Current process default ambiguous width.
#[inline]
pub fn ambiguous_width() -> u8 {
    AMBIGUOUS_WIDTH.load(Ordering::Relaxed)
}

/// Install the process default ambiguous width. Meant to be called once
/// during start-up; clusters measured before the call keep their width.
pub fn set_ambiguous_width(width: u8) {
    AMBIGUOUS_WIDTH.store(WidthPolicy::new(width).ambiguous, Ordering::Relaxed);
}

/// Width of a single code point whose grapheme property is `property`.
pub fn rune_width(c: char, property: GraphemeProperty, policy: WidthPolicy) -> usize {
    match property {
        GraphemeProperty::Control
        | GraphemeProperty::Cr
        | GraphemeProperty::Lf
        | GraphemeProperty::Extend
        | GraphemeProperty::Zwj => return 0,
        GraphemeProperty::RegionalIndicator => return 2,
        GraphemeProperty::ExtendedPictographic => {
            return if has_emoji_presentation(c) { 2 } else { 1 };
        },
        _ => (),
    }

    match c {
        // Two and three em dash.
        '\u{2E3A}' => return 3,
        '\u{2E3B}' => return 4,
        _ => (),
    }

    match east_asian_width(c) {
        EastAsianWidth::Wide | EastAsianWidth::Fullwidth => 2,
        EastAsianWidth::Ambiguous => policy.ambiguous(),
        _ => 1,
    }
}

/// Width accumulated over the code points of one grapheme cluster.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ClusterWidth {
    first: GraphemeProperty,
    total: usize,
    policy: WidthPolicy,
}

impl ClusterWidth {
    #[inline]
    pub(crate) fn new(c: char, property: GraphemeProperty, policy: WidthPolicy) -> Self {
        Self { first: property, total: rune_width(c, property, policy), policy }
    }

    /// Width of a cluster made of malformed bytes, rendered as U+FFFD.
    #[inline]
    pub(crate) fn replacement(policy: WidthPolicy) -> Self {
        Self::new(char::REPLACEMENT_CHARACTER, GraphemeProperty::Any, policy)
    }

    /// Account for a code point joining the cluster.
    #[inline]
    pub(crate) fn push(&mut self, c: char, property: GraphemeProperty) {
        match self.first {
            GraphemeProperty::ExtendedPictographic => match c {
                VARIATION_SELECTOR_15 => self.total = 1,
                VARIATION_SELECTOR_16 => self.total = 2,
                _ => (),
            },
            // Flags and Hangul syllables already have their final width.
            GraphemeProperty::RegionalIndicator | GraphemeProperty::L => (),
            _ => self.total += rune_width(c, property, self.policy),
        }
    }

    #[inline]
    pub(crate) fn get(&self) -> usize {
        self.total
    }
}
