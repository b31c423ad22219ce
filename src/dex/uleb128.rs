//! ULEB128 decoding
//!
//! DEX string data items prefix their contents with an unsigned LEB128
//! integer: each byte contributes 7 value bits, least-significant group
//! first, with the top bit flagging continuation. Values are capped at
//! 32 bits, so a well-formed encoding never exceeds 5 bytes.

use crate::error::{DexError, Result};

/// Decode one ULEB128 value from `image` starting at `offset`.
///
/// # Returns
/// `(bytes_consumed, value)` on success.
///
/// # Errors
/// - `TruncatedInput` if the encoding runs past the end of the image
/// - `MalformedVarint` if the value would not fit in 32 bits (a 5th byte
///   with nonzero high nibble, or a 5th byte still flagging continuation)
pub fn decode_uleb128(image: &[u8], offset: u64) -> Result<(usize, u32)> {
    // Accumulate in u64: the 5th byte shifts by 28 and may carry bits
    // 32..34, which must be observable to reject them.
    let mut value: u64 = 0;

    for i in 0..5 {
        let pos = offset + i as u64;
        let byte = *image
            .get(pos as usize)
            .ok_or(DexError::TruncatedInput {
                offset: pos,
                need: 1,
                len: image.len() as u64,
            })?;

        value |= u64::from(byte & 0x7F) << (i * 7);

        if byte & 0x80 == 0 {
            let value = u32::try_from(value).map_err(|_| DexError::MalformedVarint)?;
            return Ok((i + 1, value));
        }
    }

    // A 5th continuation bit would demand a 6th byte, past the 32-bit range.
    Err(DexError::MalformedVarint)
}
