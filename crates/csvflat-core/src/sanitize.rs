// crates/csvflat-core/src/sanitize.rs
//
// Byte-level newline scrubbing for field content.
// Rules:
// - Every LF (10) or CR (13) becomes a single space (32).
// - Length and all other bytes unchanged.

pub const NEWLINE_REPLACEMENT: u8 = b' ';

pub fn replace_newlines(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    for &b in input {
        if b == b'\n' || b == b'\r' {
            out.push(NEWLINE_REPLACEMENT);
        } else {
            out.push(b);
        }
    }
    out
}
