use std::borrow::Cow;

/// Percent-decodes one path segment, replacing invalid UTF-8 produced by decoding.
///
/// Paths are split on `/` before their segments are decoded, so every escape is decoded here: an
/// encoded `%2F` ends up inside the segment instead of splitting it.
///
/// Borrows when there is nothing to decode. Invalid/incomplete percent-encoding sequences are
/// passed unmodified.
pub(crate) fn decode_segment(val: &str) -> Cow<'_, str> {
    match requote(val.as_bytes()) {
        Some(data) => Cow::Owned(String::from_utf8_lossy(&data).into_owned()),
        None => Cow::Borrowed(val),
    }
}

/// Percent-decodes the given bytes.
///
/// Returns `None` when no modification to the original bytes was required.
fn requote(val: &[u8]) -> Option<Vec<u8>> {
    let mut remaining = val;

    let (prev, ch) = decode_next(&mut remaining)?;
    let mut buf = Vec::<u8>::with_capacity(val.len());
    buf.extend_from_slice(prev);
    buf.push(ch);

    while let Some((prev, ch)) = decode_next(&mut remaining) {
        if !prev.is_empty() {
            buf.extend_from_slice(prev);
        }
        buf.push(ch);
    }

    buf.extend_from_slice(remaining);
    Some(buf)
}

/// Decodes the next escape sequence, if any, and advances `val`.
#[inline(always)]
fn decode_next<'a>(val: &mut &'a [u8]) -> Option<(&'a [u8], u8)> {
    for i in 0..val.len() {
        if let (prev, [b'%', p1, p2, rem @ ..]) = val.split_at(i) {
            if let Some(ch) = hex_pair_to_char(*p1, *p2) {
                *val = rem;
                return Some((prev, ch));
            }
        }
    }

    None
}

/// Decode a ASCII hex-encoded pair to an integer.
///
/// Returns `None` if either portion of the decoded pair does not evaluate to a valid hex value.
///
/// - `0x33 ('3'), 0x30 ('0') => 0x30 ('0')`
/// - `0x34 ('4'), 0x31 ('1') => 0x41 ('A')`
/// - `0x36 ('6'), 0x31 ('1') => 0x61 ('a')`
#[inline(always)]
fn hex_pair_to_char(d1: u8, d2: u8) -> Option<u8> {
    let d_high = char::from(d1).to_digit(16)?;
    let d_low = char::from(d2).to_digit(16)?;

    // left shift high nibble by 4 bits
    Some((d_high as u8) << 4 | (d_low as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_segment_decode() {
        assert_eq!(decode_segment("a%2Fb"), "a/b");
        assert_eq!(decode_segment("hello%20world"), "hello world");
        assert_eq!(decode_segment("1%2B1"), "1+1");
        assert!(matches!(decode_segment("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn invalid_sequences() {
        assert_eq!(requote(b"a%2x%2X%%"), None);
        assert_eq!(requote(b"a%20%2X%%").unwrap(), b"a %2X%%");
        assert_eq!(requote(b"a%"), None);
    }

    #[test]
    fn lossy_utf8() {
        assert_eq!(decode_segment("%FF"), "\u{FFFD}");
        assert_eq!(decode_segment("J%C3%BCrgen"), "Jürgen");
    }
}
