//! Natural-language rendering of parsed cron expressions.
//!
//! Best-effort templated prose: a time phrase, an optional day phrase, an
//! optional month phrase, joined with single spaces. Deterministic for the
//! same input.

use itertools::Itertools;

use crate::models::CronExpression;

const MONTH_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_FULL: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Render a parsed expression as readable prose.
pub fn describe(expr: &CronExpression) -> String {
    let raw = expr.raw();

    if raw.join(" ") == "* * * * *" {
        return "Every minute".to_string();
    }

    let mut parts: Vec<String> = Vec::new();

    // Time phrase
    if raw[0] == "*" && raw[1] == "*" {
        parts.push("Every minute".to_string());
    } else if let Some(step) = raw[0].strip_prefix("*/") {
        parts.push(format!("Every {step} minutes"));
    } else if let Some(step) = raw[1].strip_prefix("*/") {
        if raw[0] == "0" {
            parts.push(format!("Every {step} hours"));
        } else {
            parts.push(format!(
                "At minute {}, every {step} hours",
                expr.minute.first()
            ));
        }
    } else if raw[1] == "*" {
        let minutes = expr.minute.values();
        if minutes.len() == 1 {
            parts.push(format!("At minute {} of every hour", minutes[0]));
        } else {
            parts.push(format!(
                "At minutes {} of every hour",
                minutes.iter().join(", ")
            ));
        }
    } else {
        let times = expr
            .hour
            .values()
            .iter()
            .map(|&h| {
                expr.minute
                    .values()
                    .iter()
                    .map(|&m| format_time_12h(h, m))
                    .join(", ")
            })
            .join(", ");
        parts.push(format!("At {times}"));
    }

    // Day phrase
    if raw[2] != "*" && raw[4] != "*" {
        parts.push(format!(
            "on day {} and {}",
            expr.day_of_month.values().iter().join(", "),
            format_weekdays(expr.weekday.values())
        ));
    } else if raw[2] != "*" {
        let days = expr.day_of_month.values();
        if days.len() == 1 {
            parts.push(format!("on day {} of the month", days[0]));
        } else {
            parts.push(format!("on days {} of the month", days.iter().join(", ")));
        }
    } else if raw[4] != "*" {
        parts.push(format!("on {}", format_weekdays(expr.weekday.values())));
    }

    // Month phrase
    if raw[3] != "*" {
        let months = expr
            .month
            .values()
            .iter()
            .map(|&m| MONTH_FULL[usize::from(m) - 1])
            .join(", ");
        parts.push(format!("in {months}"));
    }

    parts.join(" ")
}

fn format_time_12h(hour: u8, minute: u8) -> String {
    let h12 = if hour % 12 == 0 { 12 } else { hour % 12 };
    let ampm = if hour < 12 { "AM" } else { "PM" };
    format!("{h12}:{minute:02} {ampm}")
}

/// Weekday sets get a name when they form a well-known group.
fn format_weekdays(values: &[u8]) -> String {
    if values.len() == 7 {
        return "every day".to_string();
    }
    if values.len() == 5 && !values.contains(&0) && !values.contains(&6) {
        return "weekdays".to_string();
    }
    if values.len() == 2 && values.contains(&0) && values.contains(&6) {
        return "weekends".to_string();
    }

    values
        .iter()
        .map(|&v| DAY_FULL[usize::from(v)])
        .join(", ")
}
