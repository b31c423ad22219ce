//! Unified error handling for dexcheck
//!
//! This module defines domain-specific error types that carry the stored and
//! recomputed values of a failed check, so corruption can be diagnosed from
//! the error message alone.

use thiserror::Error;

/// Main error type for dexcheck operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DexError {
    /// Input is too short for a DEX header or the magic does not match
    #[error("not a DEX file (bad magic or shorter than a 112-byte header)")]
    NotADexFile,

    /// Recomputed Adler-32 over signature + payload disagrees with the header
    #[error("Adler-32 mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumError { stored: u32, computed: u32 },

    /// Recomputed SHA-1 over the payload disagrees with the stored signature
    #[error("SHA-1 mismatch: stored {}, computed {}", hex(.stored), hex(.computed))]
    HashError {
        stored: [u8; 20],
        computed: [u8; 20],
    },

    /// A ULEB128 sequence encodes a value outside the 32-bit range
    #[error("malformed ULEB128: value exceeds 32 bits")]
    MalformedVarint,

    /// A computed offset or range falls outside the loaded image
    #[error("truncated input: need {need} byte(s) at offset {offset:#x}, image is {len} byte(s)")]
    TruncatedInput { offset: u64, need: u64, len: u64 },
}

/// Result type alias for dexcheck operations
pub type Result<T> = std::result::Result<T, DexError>;

/// Render a SHA-1 digest as lowercase hex
pub fn hex(digest: &[u8; 20]) -> String {
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
