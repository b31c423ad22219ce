//! DEX string-pool decoding
//!
//! The string identifiers list is an array of 4-byte little-endian offsets
//! into the file, one per string. Each offset points at a string data item:
//! a ULEB128 UTF-16 code-unit count, the modified-UTF-8 bytes, and a null
//! terminator. The table stores no lengths; an entry's extent runs to its
//! successor's offset, and the final entry's to its null terminator.

use crate::error::{DexError, Result};

use super::{slice_at, uleb128::decode_uleb128};

/// Decode the string pool as zero-copy views into `image`.
///
/// Returns `string_ids_size` payload slices in table order, each stripped of
/// its length prefix and null terminator. An empty table decodes to an empty
/// vector without touching the image.
///
/// Every entry, including the last, skips the number of bytes its ULEB128
/// length prefix actually occupies.
///
/// # Errors
/// - `TruncatedInput` if the table, an entry, or the final entry's null
///   terminator lies outside the image
/// - `MalformedVarint` from a bad length prefix
pub fn decode_string_pool<'a>(
    image: &'a [u8],
    string_ids_off: u32,
    string_ids_size: u32,
) -> Result<Vec<&'a [u8]>> {
    let count = string_ids_size as usize;
    if count == 0 {
        return Ok(Vec::new());
    }

    let table = slice_at(image, u64::from(string_ids_off), count as u64 * 4)?;
    let offsets: Vec<u64> = table
        .chunks_exact(4)
        .map(|c| u64::from(u32::from_le_bytes([c[0], c[1], c[2], c[3]])))
        .collect();

    let mut strings = Vec::with_capacity(count);
    for (i, &start) in offsets.iter().enumerate() {
        let (skip, _utf16_len) = decode_uleb128(image, start)?;
        let payload_start = start + skip as u64;

        let payload = match offsets.get(i + 1) {
            // The next item's offset sits one past this item's terminator.
            Some(&next) => {
                let end = next.checked_sub(1).filter(|end| *end >= payload_start).ok_or(
                    DexError::TruncatedInput {
                        offset: payload_start,
                        need: 0,
                        len: image.len() as u64,
                    },
                )?;
                slice_at(image, payload_start, end - payload_start)?
            }
            // Final entry: scan forward for the terminator.
            None => {
                let tail = slice_at(
                    image,
                    payload_start,
                    (image.len() as u64).saturating_sub(payload_start),
                )?;
                let nul = tail.iter().position(|b| *b == 0).ok_or(
                    DexError::TruncatedInput {
                        offset: payload_start,
                        need: tail.len() as u64 + 1,
                        len: image.len() as u64,
                    },
                )?;
                &tail[..nul]
            }
        };
        strings.push(payload);
    }

    Ok(strings)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lay out string data items back to back at `data_off` and return
    /// (image, table_off) with the offset table appended after the data.
    fn pool_image(data_off: usize, strings: &[&[u8]], prefixes: &[&[u8]]) -> (Vec<u8>, u32) {
        let mut image = vec![0xEEu8; data_off];
        let mut offsets = Vec::new();
        for (payload, prefix) in strings.iter().zip(prefixes) {
            offsets.push(image.len() as u32);
            image.extend_from_slice(prefix);
            image.extend_from_slice(payload);
            image.push(0);
        }
        let table_off = image.len() as u32;
        for off in &offsets {
            image.extend_from_slice(&off.to_le_bytes());
        }
        (image, table_off)
    }

    #[test]
    fn test_empty_pool_reads_nothing() {
        // Offset is garbage on purpose: an empty pool must not dereference it.
        let strings = decode_string_pool(&[], 0xFFFF_FFFF, 0).unwrap();
        assert!(strings.is_empty());
    }

    #[test]
    fn test_two_entries_in_table_order() {
        let (image, table_off) = pool_image(8, &[b"ab", b"xyz"], &[&[2], &[3]]);
        let strings = decode_string_pool(&image, table_off, 2).unwrap();
        assert_eq!(strings, vec![b"ab".as_slice(), b"xyz".as_slice()]);
    }

    #[test]
    fn test_empty_string_entry() {
        let (image, table_off) = pool_image(8, &[b"", b"a"], &[&[0], &[1]]);
        let strings = decode_string_pool(&image, table_off, 2).unwrap();
        assert_eq!(strings, vec![b"".as_slice(), b"a".as_slice()]);
    }

    #[test]
    fn test_multi_byte_prefix_on_inner_entry() {
        let long = vec![b'q'; 200];
        // 200 encodes as 0xC8 0x01.
        let (image, table_off) = pool_image(8, &[&long, b"tail"], &[&[0xC8, 0x01], &[4]]);
        let strings = decode_string_pool(&image, table_off, 2).unwrap();
        assert_eq!(strings[0], long.as_slice());
        assert_eq!(strings[1], b"tail");
    }

    #[test]
    fn test_last_entry_uses_uleb_skip() {
        // A final string long enough to need a two-byte length prefix: the
        // skip must come from the decoded prefix width, not a fixed byte.
        let long = vec![b'z'; 130];
        let (image, table_off) = pool_image(8, &[b"ab", &long], &[&[2], &[0x82, 0x01]]);
        let strings = decode_string_pool(&image, table_off, 2).unwrap();
        assert_eq!(strings[1], long.as_slice());
    }

    #[test]
    fn test_table_out_of_bounds() {
        let image = vec![0u8; 16];
        assert!(matches!(
            decode_string_pool(&image, 12, 2),
            Err(DexError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_entry_offset_out_of_bounds() {
        let mut image = vec![0u8; 8];
        image[0..4].copy_from_slice(&1000u32.to_le_bytes());
        assert!(matches!(
            decode_string_pool(&image, 0, 1),
            Err(DexError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_missing_terminator_on_last_entry() {
        // Table first so its zero bytes cannot stand in for the terminator;
        // the data item at offset 4 has no null byte after its prefix.
        let mut image = Vec::new();
        image.extend_from_slice(&4u32.to_le_bytes());
        image.extend_from_slice(&[2, b'a', b'b', b'c']);
        assert!(matches!(
            decode_string_pool(&image, 0, 1),
            Err(DexError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_unordered_offsets_rejected() {
        // Second offset points before the first entry's payload.
        let mut image = vec![0xEEu8; 8];
        image.extend_from_slice(&[2, b'a', b'b', 0]);
        let table_off = image.len() as u32;
        image.extend_from_slice(&8u32.to_le_bytes());
        image.extend_from_slice(&8u32.to_le_bytes());
        assert!(matches!(
            decode_string_pool(&image, table_off, 2),
            Err(DexError::TruncatedInput { .. })
        ));
    }
}
