/// Binary unit ladder, ascending. Each threshold is `1024^rank` with K at rank 1.
///
/// Z and Y are beyond the range of `i64` inputs but are kept so the ladder is complete.
const UNITS: [(char, u128); 8] = [
    ('K', 1 << 10),
    ('M', 1 << 20),
    ('G', 1 << 30),
    ('T', 1 << 40),
    ('P', 1 << 50),
    ('E', 1 << 60),
    ('Z', 1 << 70),
    ('Y', 1 << 80),
];

/// Formats a signed byte count as a short human-readable string.
///
/// Values below 1024 are printed as an integer with a `B` suffix. Larger values are divided by
/// the largest binary unit (K = 1024, M = 1024², ... Y = 1024⁸) that does not exceed them and
/// printed with exactly one fractional digit followed by the unit symbol. The sign of negative
/// values is preserved in every case.
///
/// # Examples
///
/// ```
/// use lap_log::bytes_to_human;
///
/// assert_eq!(bytes_to_human(0), "0B");
/// assert_eq!(bytes_to_human(1536), "1.5K");
/// assert_eq!(bytes_to_human(-3 * 1024 * 1024), "-3.0M");
/// ```
#[must_use]
pub fn bytes_to_human(n: i64) -> String {
    let sign = if n < 0 { "-" } else { "" };
    let magnitude = u128::from(n.unsigned_abs());

    for &(symbol, threshold) in UNITS.iter().rev() {
        if magnitude >= threshold {
            #[expect(
                clippy::cast_precision_loss,
                reason = "one fractional digit of output needs far less precision than f64 has"
            )]
            let value = magnitude as f64 / threshold as f64;

            return format!("{sign}{value:.1}{symbol}");
        }
    }

    format!("{sign}{magnitude}B")
}
