use std::fmt::Write;

/// Lowercase hex rendering of a byte slice, two digits per byte, no separators.
pub(crate) fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // writing to a String cannot fail
        let _ = write!(out, "{b:02x}");
    }
    out
}
