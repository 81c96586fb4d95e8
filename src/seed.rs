/// Build timestamp in fixed "HH:MM:SS" layout, emitted by build.rs.
pub const BUILD_TIME: &str = env!("LITCLOAK_BUILD_TIME");

/// Seconds since midnight for the build timestamp, fixed for the life of the
/// compiled artifact. Range [0, 86399].
pub const BUILD_SEED: u32 = seed_from_timestamp(BUILD_TIME);

const fn digit(b: u8) -> u32 {
    (b - b'0') as u32
}

/// Parses "HH:MM:SS" into seconds since midnight. Const-evaluated once per
/// build; a malformed timestamp fails the build, not the program.
pub const fn seed_from_timestamp(ts: &str) -> u32 {
    let t = ts.as_bytes();
    digit(t[0]) * 36000
        + digit(t[1]) * 3600
        + digit(t[3]) * 600
        + digit(t[4]) * 60
        + digit(t[6]) * 10
        + digit(t[7])
}

/// Derives the 8-bit key for one call site: (seed + line) mod 256. Two sites
/// on different lines only share a key on a mod-256 collision.
pub const fn call_site_key(seed: u32, line: u32) -> u8 {
    seed.wrapping_add(line) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_midnight() {
        assert_eq!(seed_from_timestamp("00:00:00"), 0);
    }

    #[test]
    fn parses_end_of_day() {
        assert_eq!(seed_from_timestamp("23:59:59"), 86_399);
    }

    #[test]
    fn parses_mixed_digits() {
        assert_eq!(seed_from_timestamp("12:34:56"), 12 * 3600 + 34 * 60 + 56);
    }

    #[test]
    fn build_seed_within_day() {
        assert!(BUILD_SEED <= 86_399);
    }

    #[test]
    fn key_truncates_mod_256() {
        assert_eq!(call_site_key(0, 0), 0);
        assert_eq!(call_site_key(255, 1), 0);
        assert_eq!(call_site_key(86_399, 42), ((86_399u32 + 42) % 256) as u8);
    }

    #[test]
    fn distinct_lines_distinct_keys() {
        // Holds whenever the lines don't collide mod 256.
        let a = call_site_key(1234, 10);
        let b = call_site_key(1234, 11);
        assert_ne!(a, b);
    }
}
