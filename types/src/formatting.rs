//! Centralized number formatting utilities.
//!
//! All numeric display formatting for the meter panel and the CLI goes through
//! this module to keep output consistent, and to support European-style number
//! formatting (swapping `.` and `,`).

/// Apply European number format by swapping `.` and `,` in a formatted string.
fn europeanize(s: &str) -> String {
    // Formatted strings here are purely numeric (with optional K/M/% suffix),
    // so a global swap is safe.
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '.' => result.push(','),
            ',' => result.push('.'),
            _ => result.push(c),
        }
    }
    result
}

/// Apply European formatting conditionally.
#[inline]
fn maybe_eu(s: String, european: bool) -> String {
    if european { europeanize(&s) } else { s }
}

/// Drop trailing fractional zeros (and a dangling decimal point).
fn trim_fraction(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format a rate for the meter's "humanized" display.
///
/// - Values >= 1,000,000 use up to two decimals and an `M` suffix
/// - Values >= 1,000 use up to one decimal and a `K` suffix
/// - Smaller values are rounded to a whole number
///
/// Trailing zeros in the fraction are dropped.
///
/// # Examples
/// ```
/// use dpsmeter_types::formatting::humanize_rate;
/// assert_eq!(humanize_rate(742.4, false), "742");
/// assert_eq!(humanize_rate(12_345.0, false), "12.3K");
/// assert_eq!(humanize_rate(5_000.0, false), "5K");
/// assert_eq!(humanize_rate(1_500_000.0, false), "1.5M");
/// assert_eq!(humanize_rate(12_345.0, true), "12,3K");
/// ```
pub fn humanize_rate(v: f64, european: bool) -> String {
    let s = if v >= 1_000_000.0 {
        format!("{}M", trim_fraction(format!("{:.2}", v / 1_000_000.0)))
    } else if v >= 1_000.0 {
        format!("{}K", trim_fraction(format!("{:.1}", v / 1_000.0)))
    } else {
        format!("{:.0}", v)
    };
    maybe_eu(s, european)
}

/// Format a rate either humanized or as a plain rounded integer.
///
/// # Examples
/// ```
/// use dpsmeter_types::formatting::format_rate;
/// assert_eq!(format_rate(12_345.6, true, false), "12.3K");
/// assert_eq!(format_rate(12_345.6, false, false), "12346");
/// ```
pub fn format_rate(v: f64, humanize: bool, european: bool) -> String {
    if humanize {
        humanize_rate(v, european)
    } else {
        format!("{:.0}", v)
    }
}

/// Format a large total with K/M suffix for compact display.
///
/// - Values >= 1,000,000 are formatted as `X.XXM`
/// - Values >= 1,000 are formatted as `X.XXK`
/// - Values below 1,000 are formatted as-is
///
/// # Examples
/// ```
/// use dpsmeter_types::formatting::format_compact;
/// assert_eq!(format_compact(500, false), "500");
/// assert_eq!(format_compact(1_500, false), "1.50K");
/// assert_eq!(format_compact(1_500_000, false), "1.50M");
/// assert_eq!(format_compact(1_500, true), "1,50K");
/// ```
pub fn format_compact(n: u64, european: bool) -> String {
    let s = if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    };
    maybe_eu(s, european)
}

/// Format a percentage value with 1 decimal place.
///
/// # Examples
/// ```
/// use dpsmeter_types::formatting::format_pct;
/// assert_eq!(format_pct(42.7, false), "42.7%");
/// assert_eq!(format_pct(42.7, true), "42,7%");
/// ```
pub fn format_pct(n: f64, european: bool) -> String {
    maybe_eu(format!("{:.1}%", n), european)
}

/// Format elapsed seconds as `M:SS` (rounded).
///
/// # Examples
/// ```
/// use dpsmeter_types::formatting::format_elapsed;
/// assert_eq!(format_elapsed(125.7), "2:06");
/// assert_eq!(format_elapsed(0.0), "0:00");
/// ```
pub fn format_elapsed(secs: f64) -> String {
    let total = secs.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_rate() {
        assert_eq!(humanize_rate(0.0, false), "0");
        assert_eq!(humanize_rate(37.5, false), "38");
        assert_eq!(humanize_rate(999.0, false), "999");
        assert_eq!(humanize_rate(1_000.0, false), "1K");
        assert_eq!(humanize_rate(1_260.0, false), "1.3K");
        assert_eq!(humanize_rate(999_000.0, false), "999K");
        assert_eq!(humanize_rate(1_000_000.0, false), "1M");
        assert_eq!(humanize_rate(1_234_567.0, false), "1.23M");
        assert_eq!(humanize_rate(2_500_000.0, false), "2.5M");
    }

    #[test]
    fn test_humanize_rate_european() {
        assert_eq!(humanize_rate(500.0, true), "500");
        assert_eq!(humanize_rate(1_260.0, true), "1,3K");
        assert_eq!(humanize_rate(1_234_567.0, true), "1,23M");
    }

    #[test]
    fn test_format_rate_plain() {
        assert_eq!(format_rate(37.5, false, false), "38");
        assert_eq!(format_rate(1_234_567.0, false, true), "1234567");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0, false), "0");
        assert_eq!(format_compact(999, false), "999");
        assert_eq!(format_compact(1_000, false), "1.00K");
        assert_eq!(format_compact(15_000, false), "15.00K");
        assert_eq!(format_compact(1_500_000, false), "1.50M");
        assert_eq!(format_compact(1_500_000, true), "1,50M");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(0.0, false), "0.0%");
        assert_eq!(format_pct(100.0, false), "100.0%");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(59.4), "0:59");
        assert_eq!(format_elapsed(60.0), "1:00");
        assert_eq!(format_elapsed(-3.0), "0:00");
    }

    #[test]
    fn test_europeanize() {
        assert_eq!(europeanize("1.50K"), "1,50K");
        assert_eq!(europeanize("42.7%"), "42,7%");
        assert_eq!(europeanize("500"), "500");
    }

    #[test]
    fn test_trim_fraction() {
        assert_eq!(trim_fraction("1.50".to_string()), "1.5");
        assert_eq!(trim_fraction("2.00".to_string()), "2");
        assert_eq!(trim_fraction("100".to_string()), "100");
    }
}
