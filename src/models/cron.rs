//! Cron expression model.
//!
//! A parsed expression is an immutable 5-tuple of per-field value sets plus
//! the raw tokens it was parsed from. Expressions are re-created on every
//! edit, never mutated.

use serde::Serialize;

/// The five cron fields, in expression order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    Weekday,
}

impl FieldKind {
    /// Fields in the order they appear in an expression.
    pub const ORDER: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::Weekday,
    ];

    /// Inclusive value bounds for this field. Weekday runs Sunday=0 to
    /// Saturday=6.
    pub const fn bounds(self) -> (u8, u8) {
        match self {
            FieldKind::Minute => (0, 59),
            FieldKind::Hour => (0, 23),
            FieldKind::DayOfMonth => (1, 31),
            FieldKind::Month => (1, 12),
            FieldKind::Weekday => (0, 6),
        }
    }

    /// Human-facing field label, used in error reasons.
    pub const fn label(self) -> &'static str {
        match self {
            FieldKind::Minute => "Minute",
            FieldKind::Hour => "Hour",
            FieldKind::DayOfMonth => "Day of Month",
            FieldKind::Month => "Month",
            FieldKind::Weekday => "Day of Week",
        }
    }
}

/// One parsed cron field: a strictly-ascending, deduplicated set of accepted
/// values within the field's bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CronField {
    kind: FieldKind,
    values: Vec<u8>,
}

impl CronField {
    /// `values` must already be sorted ascending without duplicates.
    pub(crate) fn new(kind: FieldKind, values: Vec<u8>) -> CronField {
        debug_assert!(values.windows(2).all(|w| w[0] < w[1]));
        CronField { kind, values }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The accepted values, ascending.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// The lowest accepted value.
    pub fn first(&self) -> u8 {
        self.values[0]
    }

    /// Membership test for a candidate value.
    pub fn accepts(&self, value: u8) -> bool {
        self.values.binary_search(&value).is_ok()
    }
}

/// An immutable, fully parsed 5-field cron expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CronExpression {
    pub minute: CronField,
    pub hour: CronField,
    pub day_of_month: CronField,
    pub month: CronField,
    pub weekday: CronField,
    raw: [String; 5],
}

impl CronExpression {
    pub(crate) fn new(fields: [CronField; 5], raw: [String; 5]) -> CronExpression {
        let [minute, hour, day_of_month, month, weekday] = fields;
        CronExpression {
            minute,
            hour,
            day_of_month,
            month,
            weekday,
            raw,
        }
    }

    /// The raw tokens the expression was parsed from, in field order.
    pub fn raw(&self) -> &[String; 5] {
        &self.raw
    }
}

impl std::fmt::Display for CronExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.raw.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_bounds() {
        assert_eq!(FieldKind::Minute.bounds(), (0, 59));
        assert_eq!(FieldKind::Hour.bounds(), (0, 23));
        assert_eq!(FieldKind::DayOfMonth.bounds(), (1, 31));
        assert_eq!(FieldKind::Month.bounds(), (1, 12));
        assert_eq!(FieldKind::Weekday.bounds(), (0, 6));
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(FieldKind::DayOfMonth.label(), "Day of Month");
        assert_eq!(FieldKind::Weekday.label(), "Day of Week");
    }

    #[test]
    fn test_cron_field_accepts() {
        let field = CronField::new(FieldKind::Minute, vec![0, 15, 30, 45]);
        assert!(field.accepts(0));
        assert!(field.accepts(45));
        assert!(!field.accepts(1));
        assert!(!field.accepts(59));
        assert_eq!(field.first(), 0);
        assert_eq!(field.values(), &[0, 15, 30, 45]);
    }
}
