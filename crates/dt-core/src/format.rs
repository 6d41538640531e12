//! Duration formatting for reports.

use std::fmt::Write;
use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Formats a duration with unit suffixes, e.g. `3m2.1s`, `750ms`, `1h0m0s`.
///
/// Sub-second values use the largest of ns/µs/ms that fits. From one second
/// up, hours appear when non-zero, minutes appear once the value reaches a
/// minute, and seconds always appear with any fraction trimmed of trailing
/// zeros.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    if nanos < NANOS_PER_SEC {
        let (scale, unit) = if nanos < NANOS_PER_MICRO {
            (1, "ns")
        } else if nanos < NANOS_PER_MILLI {
            (NANOS_PER_MICRO, "µs")
        } else {
            (NANOS_PER_MILLI, "ms")
        };
        return format!("{}{unit}", decimal(nanos, scale));
    }

    let whole_secs = nanos / NANOS_PER_SEC;
    let hours = whole_secs / 3600;
    let minutes = (whole_secs / 60) % 60;
    let secs_nanos = nanos % (60 * NANOS_PER_SEC);

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if whole_secs >= 60 {
        let _ = write!(out, "{minutes}m");
    }
    let _ = write!(out, "{}s", decimal(secs_nanos, NANOS_PER_SEC));
    out
}

/// Renders `value / scale` with the fractional digits trimmed.
fn decimal(value: u128, scale: u128) -> String {
    let whole = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let width = scale.ilog10() as usize;
    let digits = format!("{frac:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}
