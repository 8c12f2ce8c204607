//! Bounded forward search for cron execution times.
//!
//! The search walks minute-by-minute from the instant after `from`, skipping
//! whole days while the date fields cannot match, and gives up at a 24-month
//! horizon. A sparse expression that never matches terminates in bounded time.

use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::CronExpression;

/// How far ahead the search will look before giving up.
const HORIZON_MONTHS: u32 = 24;

/// Whether the timestamp matches all five fields of the expression.
///
/// Day of month and day of week are combined with AND: when both are
/// restricted, a timestamp must satisfy both to match.
pub fn matches_at(expr: &CronExpression, at: NaiveDateTime) -> bool {
    expr.minute.accepts(at.minute() as u8)
        && expr.hour.accepts(at.hour() as u8)
        && date_matches(expr, at.date())
}

/// Whether the date part (day of month, month, day of week) matches.
fn date_matches(expr: &CronExpression, date: NaiveDate) -> bool {
    expr.day_of_month.accepts(date.day() as u8)
        && expr.month.accepts(date.month() as u8)
        && expr.weekday.accepts(date.weekday().num_days_from_sunday() as u8)
}

/// Find up to `count` execution times strictly after `from`.
///
/// Timestamps come back minute-granular and strictly increasing. Fewer than
/// `count` results (possibly none) means the horizon was reached first; that
/// is a valid outcome, not an error.
pub fn next_executions_after(
    expr: &CronExpression,
    from: NaiveDateTime,
    count: usize,
) -> Vec<NaiveDateTime> {
    let mut executions = Vec::new();

    // Start from the next whole minute after `from`
    let mut current = from
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .expect("zero is a valid second and nanosecond")
        + Duration::minutes(1);

    let horizon = from
        .checked_add_months(Months::new(HORIZON_MONTHS))
        .unwrap_or(NaiveDateTime::MAX);

    while executions.len() < count && current < horizon {
        if matches_at(expr, current) {
            executions.push(current);
            current += Duration::minutes(1);
        } else if !date_matches(expr, current.date()) {
            // The whole day is a miss, jump to the next midnight
            match current.date().succ_opt() {
                Some(next_day) => current = next_day.and_time(NaiveTime::MIN),
                None => break,
            }
        } else {
            current += Duration::minutes(1);
        }
    }

    if executions.len() < count {
        log::debug!(
            "cron search for '{expr}' hit the {HORIZON_MONTHS}-month horizon after {} match(es)",
            executions.len()
        );
    }
    executions
}

/// Find up to `count` execution times after now, in the local calendar.
pub fn next_executions(expr: &CronExpression, count: usize) -> Vec<NaiveDateTime> {
    next_executions_after(expr, Local::now().naive_local(), count)
}
