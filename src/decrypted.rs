use std::fmt;

use zeroize::Zeroize;

/// Exclusively-owned plaintext buffer (N bytes + NUL terminator), produced by
/// [`ObfuscatedStr::decrypt`](crate::obfuscated::ObfuscatedStr::decrypt).
///
/// Deliberately not `Clone`: the only sanctioned way to retain the plaintext
/// beyond this value's lifetime is [`to_string_copy`](Self::to_string_copy).
/// Every byte of the buffer is zeroed on drop via `zeroize`, which the
/// optimizer cannot elide.
pub struct DecryptedString {
    buf: Box<[u8]>,
}

impl DecryptedString {
    pub(crate) fn from_plaintext(mut plain: Vec<u8>) -> Self {
        plain.push(0);
        Self {
            buf: plain.into_boxed_slice(),
        }
    }

    /// Plaintext bytes, terminator excluded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.buf.len() - 1]
    }

    /// Plaintext bytes including the trailing NUL.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf
    }

    /// Read-only pointer to a NUL-terminated byte sequence, valid while this
    /// value is alive. Suited for handing to C APIs expecting `const char*`.
    pub fn as_ptr(&self) -> *const u8 {
        self.buf.as_ptr()
    }

    /// Borrowed text view, read up to the first NUL like a C string. Yields
    /// "" if the bytes are not valid UTF-8 rather than panicking; literals
    /// obfuscated by `cloak!` always round-trip.
    pub fn as_str(&self) -> &str {
        let end = self
            .buf
            .iter()
            .position(|&b| b == 0)
            .unwrap_or_else(|| self.len());
        std::str::from_utf8(&self.buf[..end]).unwrap_or_default()
    }

    /// The one sanctioned plaintext copy-out: duplicates the text into a
    /// separately-owned `String` that outlives this value and is NOT zeroed
    /// on drop.
    pub fn to_string_copy(&self) -> String {
        self.as_str().to_owned()
    }

    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overwrites the whole buffer (terminator included) with zeros in place.
    /// Drop runs this unconditionally; exposed so tests can observe the wipe
    /// while the allocation is still owned.
    pub fn wipe(&mut self) {
        self.buf.zeroize();
    }
}

/// The empty value: a lone NUL terminator. `std::mem::take` relies on this to
/// leave a taken-from source exposing "" instead of stale plaintext.
impl Default for DecryptedString {
    fn default() -> Self {
        Self::from_plaintext(Vec::new())
    }
}

impl Drop for DecryptedString {
    fn drop(&mut self) {
        self.wipe();
    }
}

/// Never reveals the plaintext through debug formatting.
impl fmt::Debug for DecryptedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptedString")
            .field("len", &self.len())
            .finish()
    }
}

impl fmt::Display for DecryptedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<[u8]> for DecryptedString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<str> for DecryptedString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
