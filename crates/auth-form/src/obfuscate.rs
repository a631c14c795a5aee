//! Password checksum used by the legacy registration page.
//!
//! This is NOT cryptography. It is a 32-bit rolling checksum that only keeps
//! the literal password out of the request body; anyone can invert or
//! brute-force it. Credential protection comes from the transport (HTTPS),
//! never from this function. Changing it to a real hash would break the
//! server, which compares the checksum it stored at sign-up.

/// `h = h * 31 + unit` over the UTF-16 code units, wrapping at 32 bits.
pub fn checksum(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(unit))
        })
}
