//! Parsed view of one DEX image
//!
//! Ties the stages together: decode the header, recompute both digests,
//! then decode the string pool only if the image verified intact.

use crate::error::Result;

use super::{decode_string_pool, integrity, Header, IntegrityReport};

/// Result of parsing one DEX image
///
/// Header fields stay inspectable even when the integrity checks fail;
/// `strings` is `None` in that case because the offsets in a corrupt file
/// cannot be trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DexFile<'a> {
    pub header: Header,
    pub integrity: IntegrityReport,
    /// Decoded string pool, present only when both integrity checks passed.
    pub strings: Option<Vec<&'a [u8]>>,
}

impl<'a> DexFile<'a> {
    /// Parse the image: header, integrity verification, string pool.
    ///
    /// # Errors
    /// Structural failures (`NotADexFile`, `TruncatedInput`,
    /// `MalformedVarint`) abort the parse. Integrity failures do not; they
    /// are carried in `integrity` and can be raised via
    /// [`IntegrityReport::ensure`].
    pub fn parse(image: &'a [u8]) -> Result<DexFile<'a>> {
        let header = Header::parse(image)?;
        let integrity = integrity::verify(image, &header);

        let strings = if integrity.passed() {
            Some(decode_string_pool(
                image,
                header.string_ids_off,
                header.string_ids_size,
            )?)
        } else {
            None
        };

        Ok(DexFile {
            header,
            integrity,
            strings,
        })
    }
}
