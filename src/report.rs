//! Human-readable report of a parsed DEX file

use crate::dex::DexFile;
use crate::error::hex;

/// Print header fields, both integrity outcomes, and the string pool.
pub fn print_report(dex: &DexFile<'_>, show_strings: bool) {
    let adler = &dex.integrity.adler32;
    if adler.passed() {
        println!("[+]  Adler32 Checksum: {:#x}", adler.computed);
    } else {
        println!(
            "[!]  Adler32 Checksum MISMATCH: stored {:#x}, computed {:#x}",
            adler.stored, adler.computed
        );
    }

    let sha = &dex.integrity.sha1;
    if sha.passed() {
        println!("[+]  SHA1: {}", hex(&sha.computed));
    } else {
        println!(
            "[!]  SHA1 MISMATCH: stored {}, computed {}",
            hex(&sha.stored),
            hex(&sha.computed)
        );
    }

    let h = &dex.header;
    println!("[+]  File size: {} byte(s)", h.file_size);
    println!("[+]  Header size: {} byte(s)", h.header_size);
    println!("[+]  Endian tag: {:#x}", h.endian_tag);
    println!("[+]  Link size: {} bytes.", h.link_size);
    println!("[+]  Link offset: {:#x}", h.link_off);
    println!("[+]  Map offset: {:#x}", h.map_off);
    println!("[+]  String IDs size: {}", h.string_ids_size);
    println!("[+]  String IDs offset: {:#x}", h.string_ids_off);
    println!("[+]  Type IDs size: {}", h.type_ids_size);
    println!("[+]  Type IDs offset: {:#x}", h.type_ids_off);
    println!("[+]  Proto IDs size: {}", h.proto_ids_size);
    println!("[+]  Proto IDs offset: {:#x}", h.proto_ids_off);
    println!("[+]  Field IDs size: {}", h.field_ids_size);
    println!("[+]  Field IDs offset: {:#x}", h.field_ids_off);
    println!("[+]  Method IDs size: {}", h.method_ids_size);
    println!("[+]  Method IDs offset: {:#x}", h.method_ids_off);
    println!("[+]  Class defs size: {}", h.class_defs_size);
    println!("[+]  Class defs offset: {:#x}", h.class_defs_off);
    println!("[+]  Data size: {}", h.data_size);
    println!("[+]  Data offset: {:#x}", h.data_off);

    match &dex.strings {
        Some(strings) => {
            println!("[+]  Decoded {} string(s)", strings.len());
            if show_strings {
                for (i, s) in strings.iter().enumerate() {
                    println!("[+]    #{i}: {}", String::from_utf8_lossy(s));
                }
            }
        }
        None => eprintln!("[!]  Integrity check failed; string pool not decoded."),
    }
}
