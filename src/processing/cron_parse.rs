//! Cron expression parsing.
//!
//! A 5-field expression (minute, hour, day of month, month, day of week) is
//! split into tokens and each token parsed independently into its set of
//! accepted values. Month and weekday tokens accept three-letter names
//! (jan..dec, sun..sat).

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

use crate::error::CronError;
use crate::models::{CronExpression, CronField, FieldKind};

/// Three-letter month names, 1-based numeric equivalents.
const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Three-letter day names, Sunday=0.
const DAY_NAMES: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

lazy_static! {
    // Step suffix on a sub-expression, e.g. */5 or 1-10/2
    static ref STEP_RE: Regex = Regex::new(r"^(.+)/(\d+)$").expect("Invalid Regex?");
}

/// Parse a 5-field cron expression into its accepted value sets.
pub fn parse_expression(expr: &str) -> Result<CronExpression, CronError> {
    let tokens: Vec<&str> = expr.split_whitespace().collect();

    if tokens.len() != 5 {
        return Err(CronError::FieldCount(tokens.len()));
    }

    let mut fields = Vec::with_capacity(5);
    for (kind, token) in FieldKind::ORDER.into_iter().zip(tokens.iter().copied()) {
        fields.push(parse_field(token, kind)?);
    }
    log::debug!("parsed cron expression: {expr}");

    let fields: [CronField; 5] = fields.try_into().expect("exactly five fields parsed");
    let raw: [String; 5] = [
        tokens[0].to_string(),
        tokens[1].to_string(),
        tokens[2].to_string(),
        tokens[3].to_string(),
        tokens[4].to_string(),
    ];
    Ok(CronExpression::new(fields, raw))
}

/// Parse a single field token into its sorted set of accepted values.
fn parse_field(token: &str, kind: FieldKind) -> Result<CronField, CronError> {
    let field = kind.label();
    let (min, max) = kind.bounds();

    let mut normalized = token.to_lowercase();

    // Substitute month and day names with their numeric equivalents
    match kind {
        FieldKind::Month => {
            for (i, name) in MONTH_NAMES.iter().enumerate() {
                normalized = normalized.replace(name, &(i + 1).to_string());
            }
        }
        FieldKind::Weekday => {
            for (i, name) in DAY_NAMES.iter().enumerate() {
                normalized = normalized.replace(name, &i.to_string());
            }
        }
        _ => {}
    }

    let mut values = BTreeSet::new();

    for part in normalized.split(',') {
        let (spec, step) = match STEP_RE.captures(part) {
            Some(caps) => {
                let step: i64 = caps[2]
                    .parse()
                    .map_err(|_| CronError::InvalidValue {
                        field,
                        token: part.to_string(),
                    })?;
                (caps.get(1).expect("regex group 1").as_str(), step)
            }
            None => (part, 1),
        };

        if step < 1 {
            return Err(CronError::StepTooSmall { field });
        }

        let (start, end) = parse_range_spec(spec, field, min, max)?;

        let mut value = start;
        while value <= end {
            values.insert(value as u8);
            value += step;
        }
    }

    Ok(CronField::new(kind, values.into_iter().collect()))
}

/// Resolve a range spec (`*`, `A-B`, or a bare value) to inclusive bounds.
fn parse_range_spec(
    spec: &str,
    field: &'static str,
    min: u8,
    max: u8,
) -> Result<(i64, i64), CronError> {
    if spec == "*" {
        return Ok((i64::from(min), i64::from(max)));
    }

    if spec.contains('-') {
        let bounds: Vec<&str> = spec.split('-').collect();
        if bounds.len() != 2 {
            return Err(CronError::InvalidRange {
                field,
                spec: spec.to_string(),
            });
        }
        let start: i64 = bounds[0].parse().map_err(|_| CronError::InvalidRange {
            field,
            spec: spec.to_string(),
        })?;
        let end: i64 = bounds[1].parse().map_err(|_| CronError::InvalidRange {
            field,
            spec: spec.to_string(),
        })?;
        if start < i64::from(min) || end > i64::from(max) {
            return Err(CronError::RangeOutOfBounds { field, min, max });
        }
        if start > end {
            return Err(CronError::RangeOrder { field });
        }
        return Ok((start, end));
    }

    let value: i64 = spec.parse().map_err(|_| CronError::InvalidValue {
        field,
        token: spec.to_string(),
    })?;
    if value < i64::from(min) || value > i64::from(max) {
        return Err(CronError::ValueOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok((value, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wildcard_expression() {
        let expr = parse_expression("* * * * *").unwrap();
        assert_eq!(expr.minute.values().len(), 60);
        assert_eq!(expr.hour.values().len(), 24);
        assert_eq!(expr.day_of_month.values().len(), 31);
        assert_eq!(expr.month.values().len(), 12);
        assert_eq!(expr.weekday.values().len(), 7);
        assert_eq!(expr.to_string(), "* * * * *");
    }

    #[test]
    fn test_parse_step_values() {
        let expr = parse_expression("*/15 * * * *").unwrap();
        assert_eq!(expr.minute.values(), &[0, 15, 30, 45]);

        // Step need not divide the range exactly
        let expr = parse_expression("10-20/4 * * * *").unwrap();
        assert_eq!(expr.minute.values(), &[10, 14, 18]);

        let expr = parse_expression("1-10/3 * * * *").unwrap();
        assert_eq!(expr.minute.values(), &[1, 4, 7, 10]);
    }

    #[test]
    fn test_parse_lists_deduplicated() {
        let expr = parse_expression("1-5,3-8,5 * * * *").unwrap();
        assert_eq!(expr.minute.values(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_month_names() {
        let expr = parse_expression("0 0 1 jan,JUL *").unwrap();
        assert_eq!(expr.month.values(), &[1, 7]);

        let expr = parse_expression("0 0 1 mar-may *").unwrap();
        assert_eq!(expr.month.values(), &[3, 4, 5]);
    }

    #[test]
    fn test_parse_day_names() {
        let expr = parse_expression("0 9 * * mon-fri").unwrap();
        assert_eq!(expr.weekday.values(), &[1, 2, 3, 4, 5]);

        let expr = parse_expression("0 9 * * sun,sat").unwrap();
        assert_eq!(expr.weekday.values(), &[0, 6]);
    }

    #[test]
    fn test_parse_field_count_mismatch() {
        assert_eq!(
            parse_expression("* * * *").unwrap_err(),
            CronError::FieldCount(4)
        );
        assert_eq!(
            parse_expression("* * * * * *").unwrap_err(),
            CronError::FieldCount(6)
        );
        assert_eq!(parse_expression("").unwrap_err(), CronError::FieldCount(0));
    }

    #[test]
    fn test_parse_invalid_value_cites_field() {
        let err = parse_expression("a b c d e").unwrap_err();
        assert_eq!(
            err,
            CronError::InvalidValue {
                field: "Minute",
                token: "a".to_string()
            }
        );
        assert_eq!(err.to_string(), "Minute: Invalid value: a");
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(
            parse_expression("60 * * * *").unwrap_err(),
            CronError::ValueOutOfRange {
                field: "Minute",
                value: 60,
                min: 0,
                max: 59
            }
        );
        assert_eq!(
            parse_expression("* 24 * * *").unwrap_err(),
            CronError::ValueOutOfRange {
                field: "Hour",
                value: 24,
                min: 0,
                max: 23
            }
        );
        assert_eq!(
            parse_expression("* * 0 * *").unwrap_err(),
            CronError::ValueOutOfRange {
                field: "Day of Month",
                value: 0,
                min: 1,
                max: 31
            }
        );
        assert_eq!(
            parse_expression("0-75 * * * *").unwrap_err(),
            CronError::RangeOutOfBounds {
                field: "Minute",
                min: 0,
                max: 59
            }
        );
    }

    #[test]
    fn test_parse_range_order() {
        assert_eq!(
            parse_expression("30-10 * * * *").unwrap_err(),
            CronError::RangeOrder { field: "Minute" }
        );
    }

    #[test]
    fn test_parse_step_too_small() {
        assert_eq!(
            parse_expression("*/0 * * * *").unwrap_err(),
            CronError::StepTooSmall { field: "Minute" }
        );
    }

    #[test]
    fn test_parse_malformed_range() {
        assert_eq!(
            parse_expression("1-2-3 * * * *").unwrap_err(),
            CronError::InvalidRange {
                field: "Minute",
                spec: "1-2-3".to_string()
            }
        );
        assert!(parse_expression("1-x * * * *").is_err());
    }
}
