//! Colon-separated hex text such as `"00:11:22:33"`.
//!
//! Byte order in the text is array order. Output is lowercase; input accepts
//! either case.

use std::fmt;

/// Display adapter writing a byte slice as colon-separated hex
pub(crate) struct ColonHex<'a>(pub(crate) &'a [u8]);

impl fmt::Display for ColonHex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = hex::encode(self.0);
        for (i, pair) in encoded.as_bytes().chunks(2).enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            f.write_str(std::str::from_utf8(pair).map_err(|_| fmt::Error)?)?;
        }
        Ok(())
    }
}

/// Parse exactly `N` colon-separated two-digit hex bytes
pub(crate) fn parse<const N: usize>(input: &str) -> Option<[u8; N]> {
    // "xx" per byte plus N - 1 separators
    if input.len() != (N * 3).saturating_sub(1) {
        return None;
    }

    let mut out = [0u8; N];
    let mut parts = input.split(':');
    for slot in out.chunks_mut(1) {
        hex::decode_to_slice(parts.next()?, slot).ok()?;
    }
    parts.next().is_none().then_some(out)
}
