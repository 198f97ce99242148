//! Shift model and related types.
//!
//! A [`Shift`] is never stored. It is reconstructed from one employee's
//! punches for one calendar day, see
//! [`reconstruct_shift`](crate::calculation::reconstruct_shift).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A break taken during a shift.
///
/// Reconstruction only produces breaks where `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    /// The start time of the break.
    pub start: NaiveDateTime,
    /// The end time of the break.
    pub end: NaiveDateTime,
}

impl Break {
    /// Returns the duration of the break in seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}

/// One employee's reconstructed working interval for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The employee the shift belongs to.
    pub employee_id: String,
    /// The calendar day of the shift.
    pub date: NaiveDate,
    /// The first clock-in of the day, if any.
    pub clock_in: Option<NaiveDateTime>,
    /// The first clock-out after `clock_in`, if any.
    pub clock_out: Option<NaiveDateTime>,
    /// Breaks taken between `clock_in` and `clock_out`.
    #[serde(default)]
    pub breaks: Vec<Break>,
}

impl Shift {
    /// Returns true when either boundary is missing.
    pub fn is_open(&self) -> bool {
        self.bounds().is_none()
    }

    fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.clock_in, self.clock_out) {
            (Some(clock_in), Some(clock_out)) if clock_out > clock_in => {
                Some((clock_in, clock_out))
            }
            _ => None,
        }
    }

    /// Total seconds spent on breaks.
    ///
    /// Always zero for an open shift.
    pub fn break_seconds(&self) -> i64 {
        if self.is_open() {
            return 0;
        }
        self.breaks.iter().map(Break::duration_seconds).sum()
    }

    /// Seconds worked, net of breaks.
    ///
    /// Open shifts contribute nothing, and breaks that add up to more than
    /// the shift itself floor the result at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{Break, Shift};
    /// use chrono::{NaiveDate, NaiveDateTime};
    ///
    /// let at = |t: &str| {
    ///     NaiveDateTime::parse_from_str(&format!("2026-01-12 {t}"), "%Y-%m-%d %H:%M").unwrap()
    /// };
    /// let shift = Shift {
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
    ///     clock_in: Some(at("09:00")),
    ///     clock_out: Some(at("17:00")),
    ///     breaks: vec![Break { start: at("12:00"), end: at("12:30") }],
    /// };
    /// assert_eq!(shift.worked_seconds(), 450 * 60);
    /// assert_eq!(shift.break_seconds(), 30 * 60);
    /// ```
    pub fn worked_seconds(&self) -> i64 {
        match self.bounds() {
            Some((clock_in, clock_out)) => {
                let span = (clock_out - clock_in).num_seconds();
                (span - self.break_seconds()).max(0)
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_shift(clock_in: Option<&str>, clock_out: Option<&str>, breaks: Vec<Break>) -> Shift {
        Shift {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            clock_in: clock_in.map(|t| make_datetime("2026-01-12", t)),
            clock_out: clock_out.map(|t| make_datetime("2026-01-12", t)),
            breaks,
        }
    }

    #[test]
    fn test_8_hour_shift_no_breaks() {
        let shift = make_shift(Some("09:00:00"), Some("17:00:00"), vec![]);
        assert_eq!(shift.worked_seconds(), 480 * 60);
        assert_eq!(shift.break_seconds(), 0);
        assert!(!shift.is_open());
    }

    #[test]
    fn test_open_shift_contributes_nothing() {
        let shift = make_shift(Some("09:00:00"), None, vec![]);
        assert!(shift.is_open());
        assert_eq!(shift.worked_seconds(), 0);
    }

    #[test]
    fn test_break_longer_than_shift_floors_at_zero() {
        let shift = make_shift(
            Some("09:00:00"),
            Some("10:00:00"),
            vec![Break {
                start: make_datetime("2026-01-12", "08:00:00"),
                end: make_datetime("2026-01-12", "11:00:00"),
            }],
        );
        assert_eq!(shift.worked_seconds(), 0);
    }

    #[test]
    fn test_multiple_breaks() {
        let shift = make_shift(
            Some("08:00:00"),
            Some("18:00:00"),
            vec![
                Break {
                    start: make_datetime("2026-01-12", "10:00:00"),
                    end: make_datetime("2026-01-12", "10:15:00"),
                },
                Break {
                    start: make_datetime("2026-01-12", "12:00:00"),
                    end: make_datetime("2026-01-12", "12:30:00"),
                },
            ],
        );
        // 600 - 45 minutes
        assert_eq!(shift.worked_seconds(), 555 * 60);
        assert_eq!(shift.break_seconds(), 45 * 60);
    }

    #[test]
    fn test_breaks_keep_their_seconds() {
        // Six breaks of 9m59s each; truncating each to whole minutes would lose 5m54s.
        let breaks = (10..16)
            .map(|hour| Break {
                start: make_datetime("2026-01-12", &format!("{}:00:01", hour)),
                end: make_datetime("2026-01-12", &format!("{}:10:00", hour)),
            })
            .collect();
        let shift = make_shift(Some("09:00:00"), Some("17:00:00"), breaks);

        assert_eq!(shift.break_seconds(), 6 * 599);
        assert_eq!(shift.worked_seconds(), 8 * 3600 - 6 * 599);
    }
}
