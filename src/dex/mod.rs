//! DEX container parsing and verification
//!
//! This module covers the front of a DEX file:
//! - Magic validation and fixed-header decoding
//! - Adler-32 and SHA-1 integrity verification
//! - String-identifier table and string-pool decoding

mod file;
mod header;
mod integrity;
mod strings;
mod uleb128;

pub use file::DexFile;
#[cfg(test)]
pub(crate) use file::tests::build_dex;
pub use header::Header;
pub use integrity::{adler32, verify, IntegrityCheck, IntegrityReport};
pub use strings::decode_string_pool;
pub use uleb128::decode_uleb128;

use crate::error::{DexError, Result};

/// Magic bytes of a standard DEX file, version 035
pub const DEX_MAGIC: [u8; 8] = *b"dex\n035\0";

/// DEX file header size (standard)
pub const HEADER_SIZE: usize = 0x70;

/// DEX header offsets
pub const CHECKSUM_OFFSET: usize = 0x08;
pub const SIGNATURE_OFFSET: usize = 0x0C;
pub const SIGNATURE_END: usize = 0x20;

/// The payload covered by both integrity checks starts right after the
/// signature field and runs to the end of the file.
pub const PAYLOAD_OFFSET: usize = SIGNATURE_END;

/// Bounds-checked subslice of the image.
///
/// Offsets and lengths accumulate in u64 so that adversarial 32-bit header
/// fields cannot wrap the arithmetic.
pub(crate) fn slice_at(image: &[u8], offset: u64, need: u64) -> Result<&[u8]> {
    let end = offset
        .checked_add(need)
        .ok_or(DexError::TruncatedInput {
            offset,
            need,
            len: image.len() as u64,
        })?;
    if end > image.len() as u64 {
        return Err(DexError::TruncatedInput {
            offset,
            need,
            len: image.len() as u64,
        });
    }
    Ok(&image[offset as usize..end as usize])
}
