use chrono::{DateTime, Local};

/// Seconds from `earlier` to `later`, negative if the clock moved backwards.
#[must_use]
pub(crate) fn seconds_between(later: DateTime<Local>, earlier: DateTime<Local>) -> f64 {
    let delta = later.signed_duration_since(earlier);

    #[expect(
        clippy::cast_precision_loss,
        reason = "millisecond counts of realistic sessions fit exactly in f64"
    )]
    let millis = delta.num_milliseconds() as f64;

    millis / 1000.0
}

/// Formats a number of seconds rounded to two decimals, e.g. `0.05s`, `1.5s`, `2.0s`.
///
/// At least one fractional digit is always printed; a trailing zero hundredth is dropped.
#[must_use]
pub(crate) fn format_seconds(seconds: f64) -> String {
    let mut formatted = format!("{seconds:.2}");

    if formatted == "-0.00" {
        formatted.remove(0);
    }

    if formatted.ends_with('0') {
        formatted.pop();
    }

    formatted.push('s');
    formatted
}
