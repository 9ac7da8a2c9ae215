//! Minimal UTF-8 stepping over byte slices.

/// Decode the first scalar of `bytes`, returning it with its encoded length.
///
/// Returns `None` for empty input and for malformed or truncated sequences.
#[inline]
pub(crate) fn decode_rune(bytes: &[u8]) -> Option<(char, usize)> {
    let first = *bytes.first()?;
    if first < 0x80 {
        return Some((first as char, 1));
    }

    let len = match first {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    let encoded = std::str::from_utf8(bytes.get(..len)?).ok()?;
    encoded.chars().next().map(|c| (c, len))
}

/// Length of the malformed sequence at the start of `bytes`.
///
/// A truncated sequence at the end of the buffer swallows the rest of it.
pub(crate) fn invalid_len(bytes: &[u8]) -> usize {
    let head = &bytes[..bytes.len().min(4)];
    match std::str::from_utf8(head) {
        Err(error) if error.valid_up_to() == 0 => {
            error.error_len().unwrap_or(bytes.len()).max(1)
        },
        _ => 1,
    }
}

/// Decode the last scalar of `bytes`.
pub(crate) fn decode_last_rune(bytes: &[u8]) -> Option<char> {
    let start = bytes.len().saturating_sub(4);
    let tail = &bytes[start..];
    let offset = (0..tail.len()).rev().find(|&i| tail[i] & 0xC0 != 0x80)?;
    match decode_rune(&tail[offset..]) {
        Some((c, len)) if offset + len == tail.len() => Some(c),
        _ => None,
    }
}
