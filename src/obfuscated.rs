use tracing::trace;

use crate::decrypted::DecryptedString;
use crate::encoder;

/// Immutable (call-site key, transformed bytes) pair embedded in the binary.
///
/// One `static` instance exists per `cloak!` call site, alive for the whole
/// process. It is plain data and never mutated, so unsynchronized concurrent
/// reads from any number of threads are fine.
pub struct ObfuscatedStr<const N: usize> {
    key: u8,
    data: [u8; N],
}

impl<const N: usize> ObfuscatedStr<N> {
    pub const fn new(key: u8, data: [u8; N]) -> Self {
        Self { key, data }
    }

    /// Reverses the rotating-XOR transform into a fresh, exclusively-owned
    /// [`DecryptedString`]. Read-only on the holder; never fails; repeated
    /// calls yield identical plaintext.
    pub fn decrypt(&self) -> DecryptedString {
        trace!(len = N, "decrypting obfuscated literal");
        DecryptedString::from_plaintext(encoder::apply(&self.data, self.key))
    }

    pub const fn key(&self) -> u8 {
        self.key
    }

    /// Transformed bytes as embedded in the artifact.
    pub const fn masked(&self) -> &[u8; N] {
        &self.data
    }
}
