//! Rule table lookup shared by all segmentation engines.
//!
//! Each engine describes its rules as a dense table of
//! `(state, property) -> Transition` entries. A table may use the `Any` state
//! or the `Any` property as a wildcard; [`resolve`] decides which entry wins.

use crate::utf8::decode_rune;

/// Outcome of one rule lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S, V> {
    /// State after consuming the code point.
    pub state: S,
    /// Boundary verdict for the position before the code point.
    pub verdict: V,
    /// Rank of the rule that produced the entry. Lower ranks take precedence.
    pub rule: u16,
}

impl<S, V> Transition<S, V> {
    #[inline]
    pub const fn new(state: S, verdict: V, rule: u16) -> Self {
        Self { state, verdict, rule }
    }
}

/// A rule table.
pub trait Rules {
    type State: Copy + Eq;
    type Property: Copy + Eq;
    type Verdict: Copy;

    /// Wildcard state, matching any current state.
    const ANY_STATE: Self::State;

    /// Wildcard property, matching any next code point.
    const ANY_PROPERTY: Self::Property;

    /// Catch-all used when no entry applies.
    const FALLBACK: Transition<Self::State, Self::Verdict>;

    /// Explicit table entry for `(state, property)`, if there is one.
    fn lookup(
        state: Self::State,
        property: Self::Property,
    ) -> Option<Transition<Self::State, Self::Verdict>>;
}

/// Resolve the transition for the next code point.
///
/// An exact `(state, property)` entry wins. Otherwise the wildcard entries
/// `(state, Any)` and `(Any, property)` are consulted: a single match is used
/// as is, and when both match the new state comes from `(Any, property)` while
/// the verdict and rank come from whichever has the lower rank, ties going to
/// `(Any, property)`. An unknown state (`None`) only matches `(Any, property)`.
pub fn resolve<R: Rules>(
    state: Option<R::State>,
    property: R::Property,
) -> Transition<R::State, R::Verdict> {
    if let Some(state) = state {
        if let Some(exact) = R::lookup(state, property) {
            return exact;
        }
    }

    let by_state = state.and_then(|state| R::lookup(state, R::ANY_PROPERTY));
    let by_property = R::lookup(R::ANY_STATE, property);

    match (by_state, by_property) {
        (Some(by_state), Some(by_property)) if by_state.rule < by_property.rule => {
            Transition::new(by_property.state, by_state.verdict, by_state.rule)
        },
        (_, Some(by_property)) => by_property,
        (Some(by_state), None) => by_state,
        (None, None) => R::FALLBACK,
    }
}

/// Packed value of a cursor at the start of the input.
pub const PACKED_START: i32 = -1;

/// Packed value of a cursor past the end of the input.
pub const PACKED_END: i32 = -2;

/// Where a scanner picks up on its next call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Resume<C> {
    /// Nothing consumed yet.
    Start,
    /// Inside the input; the first code point of the rest was already fed.
    At(C),
    /// The previous input was exhausted. Resuming starts over.
    End,
}

impl<C> Default for Resume<C> {
    fn default() -> Self {
        Resume::Start
    }
}

impl<C: Copy> Resume<C> {
    /// Machine context to continue from, `None` when the machine restarts.
    #[inline]
    pub(crate) fn context(self) -> Option<C> {
        match self {
            Resume::At(context) => Some(context),
            Resume::Start | Resume::End => None,
        }
    }

    #[inline]
    pub(crate) fn pack(self, encode: impl FnOnce(C) -> i32) -> i32 {
        match self {
            Resume::Start => PACKED_START,
            Resume::End => PACKED_END,
            Resume::At(context) => encode(context),
        }
    }

    /// Inverse of [`Resume::pack`]. Values that decode to nothing start over.
    #[inline]
    pub(crate) fn unpack(packed: i32, decode: impl FnOnce(i32) -> Option<C>) -> Self {
        match packed {
            PACKED_END => Resume::End,
            packed if packed < 0 => Resume::Start,
            packed => decode(packed).map_or(Resume::Start, Resume::At),
        }
    }
}

/// Classify the code points following the current one, skipping the ones
/// `skip` accepts, and return the first remaining property.
///
/// Stops with `None` at the end of the input or at malformed UTF-8.
pub fn peek_property<P: Copy>(
    mut input: &[u8],
    classify: impl Fn(char) -> P,
    skip: impl Fn(P) -> bool,
) -> Option<P> {
    while let Some((c, len)) = decode_rune(input) {
        let property = classify(c);
        if !skip(property) {
            return Some(property);
        }
        input = &input[len..];
    }
    None
}
