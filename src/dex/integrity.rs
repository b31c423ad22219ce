//! DEX integrity verification
//!
//! A DEX header stores two independent digests of the file: an Adler-32
//! checksum covering the signature field plus everything after it, and a
//! SHA-1 signature covering everything after the signature field. Both are
//! recomputed here and compared against the stored values.

use sha1::{Digest, Sha1};

use crate::error::{DexError, Result};

use super::{Header, PAYLOAD_OFFSET, SIGNATURE_OFFSET};

/// Stored and recomputed value of one integrity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityCheck<T> {
    pub stored: T,
    pub computed: T,
}

impl<T: PartialEq> IntegrityCheck<T> {
    pub fn passed(&self) -> bool {
        self.stored == self.computed
    }
}

/// Outcome of both integrity checks over one image
///
/// Both checks are always evaluated, so a caller can report both kinds of
/// corruption at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityReport {
    pub adler32: IntegrityCheck<u32>,
    pub sha1: IntegrityCheck<[u8; 20]>,
}

impl IntegrityReport {
    pub fn passed(&self) -> bool {
        self.adler32.passed() && self.sha1.passed()
    }

    /// Surface the first failing check as an error, checksum first.
    pub fn ensure(&self) -> Result<()> {
        if !self.adler32.passed() {
            return Err(DexError::ChecksumError {
                stored: self.adler32.stored,
                computed: self.adler32.computed,
            });
        }
        if !self.sha1.passed() {
            return Err(DexError::HashError {
                stored: self.sha1.stored,
                computed: self.sha1.computed,
            });
        }
        Ok(())
    }
}

/// Recompute both digests of `image` and compare to the header's values.
///
/// The Adler-32 coverage is the signature concatenated with the payload;
/// those regions are contiguous, so one pass over bytes [0x0C..) covers
/// both. The SHA-1 coverage is the payload alone, bytes [0x20..).
///
/// Caller guarantees `image` is at least a full header (0x70 bytes).
pub fn verify(image: &[u8], header: &Header) -> IntegrityReport {
    let mut hasher = Sha1::new();
    hasher.update(&image[PAYLOAD_OFFSET..]);
    let digest: [u8; 20] = hasher.finalize().into();

    IntegrityReport {
        adler32: IntegrityCheck {
            stored: header.checksum,
            computed: adler32(&image[SIGNATURE_OFFSET..]),
        },
        sha1: IntegrityCheck {
            stored: header.signature,
            computed: digest,
        },
    }
}

/// Compute Adler-32 checksum (as used in DEX files)
///
/// Adler-32 is not cryptographic: collisions are easy to construct, so it
/// only guards against accidental corruption.
pub fn adler32(data: &[u8]) -> u32 {
    const MOD: u32 = 65_521;
    let mut a = 1u32;
    let mut b = 0u32;

    for &byte in data {
        a = (a + byte as u32) % MOD;
        b = (b + a) % MOD;
    }

    (b << 16) | a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dex::{DEX_MAGIC, HEADER_SIZE, SIGNATURE_END};

    fn image_with_valid_digests() -> Vec<u8> {
        let mut buf = vec![0u8; HEADER_SIZE + 32];
        buf[..8].copy_from_slice(&DEX_MAGIC);
        for i in SIGNATURE_END..buf.len() {
            buf[i] = (i * 7) as u8;
        }

        let mut hasher = Sha1::new();
        hasher.update(&buf[SIGNATURE_END..]);
        let digest = hasher.finalize();
        buf[SIGNATURE_OFFSET..SIGNATURE_END].copy_from_slice(&digest);

        let checksum = adler32(&buf[SIGNATURE_OFFSET..]);
        buf[crate::dex::CHECKSUM_OFFSET..SIGNATURE_OFFSET]
            .copy_from_slice(&checksum.to_le_bytes());
        buf
    }

    #[test]
    fn test_adler32_empty() {
        assert_eq!(adler32(&[]), 1);
    }

    #[test]
    fn test_adler32_known_value() {
        // "Wikipedia" has a known Adler-32 of 0x11E60398
        let data = b"Wikipedia";
        assert_eq!(adler32(data), 0x11E60398);
    }

    #[test]
    fn test_verify_intact_image() {
        let buf = image_with_valid_digests();
        let header = Header::parse(&buf).unwrap();

        let report = verify(&buf, &header);
        assert!(report.adler32.passed());
        assert!(report.sha1.passed());
        assert!(report.passed());
        assert_eq!(report.ensure(), Ok(()));
    }

    #[test]
    fn test_verify_corrupt_payload_fails_both() {
        let mut buf = image_with_valid_digests();
        let header = Header::parse(&buf).unwrap();
        let last = buf.len() - 1;
        buf[last] ^= 0xFF;

        let report = verify(&buf, &header);
        assert!(!report.adler32.passed());
        assert!(!report.sha1.passed());

        // Checksum failure is reported first.
        assert!(matches!(
            report.ensure(),
            Err(DexError::ChecksumError { .. })
        ));
    }

    #[test]
    fn test_ensure_reports_hash_failure_alone() {
        let buf = image_with_valid_digests();
        let mut header = Header::parse(&buf).unwrap();
        header.signature[0] ^= 0x01;

        let report = verify(&buf, &header);
        assert!(report.adler32.passed());
        assert!(!report.sha1.passed());
        assert!(matches!(report.ensure(), Err(DexError::HashError { .. })));
    }
}
