//! Terminal formatting helpers.

use chrono::NaiveDateTime;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Format a number with thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Phrase the distance from `now` to a future `target`.
///
/// Granularity coarsens with distance: minutes, then hours, days, weeks.
pub fn relative_time(target: NaiveDateTime, now: NaiveDateTime) -> String {
    let minutes = (target - now).num_minutes().max(0);
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 60 {
        return format!("in {minutes} min");
    }
    if hours < 24 {
        let remaining_minutes = minutes % 60;
        if remaining_minutes == 0 {
            return format!("in {hours} hr");
        }
        return format!("in {hours} hr {remaining_minutes} min");
    }
    if days < 7 {
        let plural = if days > 1 { "s" } else { "" };
        let remaining_hours = hours % 24;
        if remaining_hours == 0 {
            return format!("in {days} day{plural}");
        }
        return format!("in {days} day{plural} {remaining_hours} hr");
    }

    let weeks = days / 7;
    let plural = if weeks > 1 { "s" } else { "" };
    format!("in {weeks} week{plural}")
}
