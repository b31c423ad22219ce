//! DEX header decoding
//!
//! The fixed header occupies bytes [0, 0x70): the 8-byte magic, the Adler-32
//! checksum, the SHA-1 signature, and twenty little-endian u32 fields
//! describing the sections of the file. All offsets are relative to the start
//! of the image.

use crate::error::{DexError, Result};

use super::{CHECKSUM_OFFSET, DEX_MAGIC, HEADER_SIZE, SIGNATURE_END, SIGNATURE_OFFSET};

/// Decoded DEX file header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Adler-32 of the rest of the file (everything but `magic` and this
    /// field); used to detect corruption.
    pub checksum: u32,

    /// SHA-1 of the rest of the file (everything but `magic`, `checksum`,
    /// and this field); used to uniquely identify files.
    pub signature: [u8; 20],

    /// Size of the entire file including the header.
    pub file_size: u32,

    /// Size of the header, always 0x70 in a well-formed file.
    pub header_size: u32,

    /// Endianness constant.
    pub endian_tag: u32,

    /// Size of the link section, or 0 if not statically linked.
    pub link_size: u32,

    /// Offset of the link section, or 0 if `link_size == 0`.
    pub link_off: u32,

    /// Offset of the map item.
    pub map_off: u32,

    /// Count of entries in the string identifiers list.
    pub string_ids_size: u32,

    /// Offset of the string identifiers list, or 0 if empty.
    pub string_ids_off: u32,

    pub type_ids_size: u32,
    pub type_ids_off: u32,
    pub proto_ids_size: u32,
    pub proto_ids_off: u32,
    pub field_ids_size: u32,
    pub field_ids_off: u32,
    pub method_ids_size: u32,
    pub method_ids_off: u32,
    pub class_defs_size: u32,
    pub class_defs_off: u32,

    /// Size of the data section, in bytes.
    pub data_size: u32,

    /// Offset of the data section.
    pub data_off: u32,
}

impl Header {
    /// Decode the fixed header from the start of `image`.
    ///
    /// # Errors
    /// `NotADexFile` if the image is shorter than 0x70 bytes or does not
    /// start with the `dex\n035\0` magic.
    pub fn parse(image: &[u8]) -> Result<Header> {
        if image.len() < HEADER_SIZE || image[..8] != DEX_MAGIC {
            return Err(DexError::NotADexFile);
        }

        let checksum = read_u32_le(image, CHECKSUM_OFFSET);

        let mut signature = [0u8; 20];
        signature.copy_from_slice(&image[SIGNATURE_OFFSET..SIGNATURE_END]);

        let mut fields = [0u32; 20];
        for (i, field) in fields.iter_mut().enumerate() {
            *field = read_u32_le(image, SIGNATURE_END + i * 4);
        }

        Ok(Header {
            checksum,
            signature,
            file_size: fields[0],
            header_size: fields[1],
            endian_tag: fields[2],
            link_size: fields[3],
            link_off: fields[4],
            map_off: fields[5],
            string_ids_size: fields[6],
            string_ids_off: fields[7],
            type_ids_size: fields[8],
            type_ids_off: fields[9],
            proto_ids_size: fields[10],
            proto_ids_off: fields[11],
            field_ids_size: fields[12],
            field_ids_off: fields[13],
            method_ids_size: fields[14],
            method_ids_off: fields[15],
            class_defs_size: fields[16],
            class_defs_off: fields[17],
            data_size: fields[18],
            data_off: fields[19],
        })
    }
}

/// Read a little-endian u32 at `offset`. Caller guarantees bounds.
fn read_u32_le(image: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        image[offset],
        image[offset + 1],
        image[offset + 2],
        image[offset + 3],
    ])
}
