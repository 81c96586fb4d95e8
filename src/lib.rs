//! Compile-time string literal obfuscation.
//!
//! `cloak!("...")` XOR-masks a literal during constant evaluation with a key
//! derived from the build timestamp and the call-site line number, so the
//! plaintext never appears in the compiled artifact and `strings`-style
//! scanning finds nothing. At runtime the masked bytes are reversed into a
//! [`DecryptedString`] that zeroes its buffer when dropped.
//!
//! This defeats naive byte scanning, nothing more: the transform is a
//! reversible XOR and the key is recoverable by anyone with the algorithm.
//! It is not, and must not be turned into, a cipher.
//!
//! ```
//! use litcloak::cloak;
//!
//! let endpoint = cloak!("/api/v1/debug/session");
//! assert_eq!(endpoint.as_str(), "/api/v1/debug/session");
//! // `endpoint` wipes its buffer here.
//! ```

pub mod decrypted;
pub mod encoder;
pub mod obfuscated;
pub mod seed;

pub use decrypted::DecryptedString;
pub use obfuscated::ObfuscatedStr;

/// Obfuscates a string literal at compile time; evaluates to a fresh
/// [`DecryptedString`] at runtime.
///
/// The key is `(build seed + line!()) mod 256`, so the same literal on two
/// different lines embeds two different byte sequences, and every rebuild
/// re-keys all call sites.
#[macro_export]
macro_rules! cloak {
    ($s:literal) => {{
        const PLAIN: &[u8] = $s.as_bytes();
        const N: usize = PLAIN.len();
        const KEY: u8 = $crate::seed::call_site_key($crate::seed::BUILD_SEED, line!());
        const MASKED: [u8; N] = $crate::encoder::encode::<N>(PLAIN, KEY);
        static HOLDER: $crate::obfuscated::ObfuscatedStr<N> =
            $crate::obfuscated::ObfuscatedStr::new(KEY, MASKED);
        HOLDER.decrypt()
    }};
}
