//! Fixed-length digest helper.

use sha2::{Digest, Sha512};

/// Length in bytes of a [`sha512_binary`] digest.
pub const SHA512_LEN: usize = 64;

/// SHA-512 of `input`, as raw bytes (not hex or base64 encoded).
pub fn sha512_binary(input: &str) -> [u8; SHA512_LEN] {
    let mut out = [0u8; SHA512_LEN];
    out.copy_from_slice(&Sha512::digest(input.as_bytes()));
    out
}
