//! Extended grapheme cluster boundaries (UAX #29).

use lapa_generate_transitions::generate_transitions;

use crate::properties::{grapheme_property, GraphemeProperty};
use crate::transition::{resolve, Resume, Rules, Transition};
use crate::utf8::{decode_rune, invalid_len};
use crate::width::{ClusterWidth, WidthPolicy};

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GraphemeState {
    #[default]
    Any,
    Cr,
    ControlLf,
    L,
    Lvv,
    Lvtt,
    Prepend,
    ExtendedPictographic,
    ExtendedPictographicZwj,
    RiOdd,
    RiEven,
}

impl GraphemeState {
    pub const COUNT: usize = GraphemeState::RiEven as usize + 1;

    pub(crate) const fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0 => Self::Any,
            1 => Self::Cr,
            2 => Self::ControlLf,
            3 => Self::L,
            4 => Self::Lvv,
            5 => Self::Lvtt,
            6 => Self::Prepend,
            7 => Self::ExtendedPictographic,
            8 => Self::ExtendedPictographicZwj,
            9 => Self::RiOdd,
            10 => Self::RiEven,
            _ => return None,
        })
    }
}

// Verdict `true` means a boundary before the code point.
generate_transitions!(grapheme_transitions, GraphemeState, GraphemeProperty, bool, {
    // GB5.
    Any {
        Cr => (Cr, true, 50),
        Lf | Control => (ControlLf, true, 50),
    },
    // GB4.
    Cr | ControlLf {
        Any => (Any, true, 40),
    },
    // GB3.
    Cr {
        Lf => (ControlLf, false, 30),
    },
    // GB6.
    Any {
        L => (L, true, 9990),
    },
    L {
        L => (L, false, 60),
        V | Lv => (Lvv, false, 60),
        Lvt => (Lvtt, false, 60),
    },
    // GB7.
    Any {
        Lv | V => (Lvv, true, 9990),
    },
    Lvv {
        V => (Lvv, false, 70),
        T => (Lvtt, false, 70),
    },
    // GB8.
    Any {
        Lvt | T => (Lvtt, true, 9990),
    },
    Lvtt {
        T => (Lvtt, false, 80),
    },
    // GB9.
    Any {
        Extend | Zwj => (Any, false, 90),
    },
    // GB9a.
    Any {
        SpacingMark => (Any, false, 91),
    },
    // GB9b.
    Any {
        Prepend => (Prepend, true, 9990),
    },
    Prepend {
        Any => (Any, false, 92),
    },
    // GB11.
    Any {
        ExtendedPictographic => (ExtendedPictographic, true, 9990),
    },
    ExtendedPictographic {
        Extend => (ExtendedPictographic, false, 110),
        Zwj => (ExtendedPictographicZwj, false, 110),
    },
    ExtendedPictographicZwj {
        ExtendedPictographic => (ExtendedPictographic, false, 110),
    },
    // GB12 and GB13.
    Any {
        RegionalIndicator => (RiOdd, true, 9990),
    },
    RiOdd {
        RegionalIndicator => (RiEven, false, 120),
    },
    RiEven {
        RegionalIndicator => (RiOdd, true, 120),
    },
});

static GRAPHEME_TRANSITIONS: [[Option<Transition<GraphemeState, bool>>; GraphemeProperty::COUNT];
    GraphemeState::COUNT] = grapheme_transitions();

pub(crate) struct GraphemeRules;

impl Rules for GraphemeRules {
    type State = GraphemeState;
    type Property = GraphemeProperty;
    type Verdict = bool;

    const ANY_STATE: GraphemeState = GraphemeState::Any;
    const ANY_PROPERTY: GraphemeProperty = GraphemeProperty::Any;
    // GB999.
    const FALLBACK: Transition<GraphemeState, bool> =
        Transition::new(GraphemeState::Any, true, 9990);

    #[inline]
    fn lookup(
        state: GraphemeState,
        property: GraphemeProperty,
    ) -> Option<Transition<GraphemeState, bool>> {
        GRAPHEME_TRANSITIONS[state as usize][property as usize]
    }
}

/// Feed one code point to the grapheme machine.
///
/// Returns the new state, the property of `c` and whether there is a
/// boundary before `c`.
#[inline]
pub(crate) fn transition(
    state: Option<GraphemeState>,
    c: char,
) -> (GraphemeState, GraphemeProperty, bool) {
    let property = grapheme_property(c);
    let transition = resolve::<GraphemeRules>(state, property);
    (transition.state, property, transition.verdict)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GraphemeContext {
    state: GraphemeState,
    /// Property of the first code point of the pending cluster.
    property: GraphemeProperty,
}

/// Position of the grapheme machine between two calls.
///
/// The default value starts a fresh segmentation. A cursor is only valid for
/// the remainder of the input that produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GraphemeCursor(Resume<GraphemeContext>);

impl GraphemeCursor {
    pub const START: GraphemeCursor = GraphemeCursor(Resume::Start);

    /// Returned once the input is exhausted. Passing it along with new input
    /// starts a fresh segmentation.
    pub const END: GraphemeCursor = GraphemeCursor(Resume::End);

    const STATE_BITS: u32 = 4;

    #[inline]
    fn new(state: GraphemeState, property: GraphemeProperty) -> Self {
        Self(Resume::At(GraphemeContext { state, property }))
    }

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
        self.0
            .pack(|context| ((context.property as i32) << Self::STATE_BITS) | context.state as i32)
    }

    /// Decode a cursor produced by [`GraphemeCursor::pack`].
    ///
    /// Other negative or unknown values decode to the start.
    pub fn unpack(packed: i32) -> Self {
        Self(Resume::unpack(packed, |packed| {
            let state = GraphemeState::from_bits((packed & 0xF) as u8)?;
            let property =
                GraphemeProperty::from_bits(((packed >> Self::STATE_BITS) & 0xF) as u8)?;
            Some(GraphemeContext { state, property })
        }))
    }
}

/// Split the first extended grapheme cluster off `input`.
///
/// Returns the cluster, the rest of the input, the display width of the
/// cluster and the cursor to pass along with the rest.
#[inline]
pub fn first_grapheme_cluster(
    input: &str,
    cursor: GraphemeCursor,
) -> (&str, &str, usize, GraphemeCursor) {
    first_grapheme_cluster_with(input, cursor, WidthPolicy::global())
}

/// [`first_grapheme_cluster`] with an explicit width policy.
pub fn first_grapheme_cluster_with(
    input: &str,
    cursor: GraphemeCursor,
    policy: WidthPolicy,
) -> (&str, &str, usize, GraphemeCursor) {
    let (cluster, _, width, cursor) =
        first_grapheme_cluster_bytes_with(input.as_bytes(), cursor, policy);
    // Clusters of valid UTF-8 always end on a char boundary.
    let (cluster, rest) = input.split_at(cluster.len());
    (cluster, rest, width, cursor)
}

/// [`first_grapheme_cluster`] over bytes.
///
/// Malformed UTF-8 ends the current cluster. A malformed sequence at the start
/// of the input is a cluster of its own, measured as U+FFFD.
#[inline]
pub fn first_grapheme_cluster_bytes(
    input: &[u8],
    cursor: GraphemeCursor,
) -> (&[u8], &[u8], usize, GraphemeCursor) {
    first_grapheme_cluster_bytes_with(input, cursor, WidthPolicy::global())
}

/// [`first_grapheme_cluster_bytes`] with an explicit width policy.
pub fn first_grapheme_cluster_bytes_with(
    input: &[u8],
    cursor: GraphemeCursor,
    policy: WidthPolicy,
) -> (&[u8], &[u8], usize, GraphemeCursor) {
    if input.is_empty() {
        return (input, input, 0, cursor);
    }

    let Some((first, mut length)) = decode_rune(input) else {
        let length = invalid_len(input);
        let width = ClusterWidth::replacement(policy).get();
        return (&input[..length], &input[length..], width, GraphemeCursor::START);
    };

    // A resumed cursor has already consumed the first code point.
    let (mut state, first_property) = match cursor.0.context() {
        Some(context) => (context.state, context.property),
        None => {
            let (state, property, _) = transition(None, first);
            (state, property)
        },
    };

    let mut width = ClusterWidth::new(first, first_property, policy);
    if input.len() <= length {
        return (input, &[], width.get(), GraphemeCursor::END);
    }

    loop {
        let rest = &input[length..];
        let Some((c, len)) = decode_rune(rest) else {
            return (&input[..length], rest, width.get(), GraphemeCursor::START);
        };

        let (next_state, property, boundary) = transition(Some(state), c);
        if boundary {
            return (&input[..length], rest, width.get(), GraphemeCursor::new(next_state, property));
        }

        state = next_state;
        width.push(c, property);
        length += len;

        if input.len() <= length {
            return (input, &[], width.get(), GraphemeCursor::END);
        }
    }
}
