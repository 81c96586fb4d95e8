//! Per-position rotating XOR transform. Self-inverse: applying it twice with
//! the same key restores the original bytes.

/// Effective key byte for position `i`: (key + i) mod 256. When this is zero
/// the byte at `i` passes through unchanged; accepted property of the scheme.
pub const fn keystream_byte(key: u8, i: usize) -> u8 {
    key.wrapping_add(i as u8)
}

/// Const-context encode used by the `cloak!` macro, so only transformed bytes
/// reach the compiled artifact. `plain` must have exactly `N` bytes.
pub const fn encode<const N: usize>(plain: &[u8], key: u8) -> [u8; N] {
    let mut out = [0u8; N];
    let mut i = 0;
    while i < N {
        out[i] = plain[i] ^ keystream_byte(key, i);
        i += 1;
    }
    out
}

/// Runtime form of the same transform; used for decoding and as the test
/// surface for round-trip checks.
pub fn apply(data: &[u8], key: u8) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, b)| b ^ keystream_byte(key, i))
        .collect()
}
