//! Shift reconstruction from raw punches.
//!
//! This module turns one employee's punches for one calendar day into a
//! [`Shift`]: a clock-in/clock-out boundary plus the breaks taken inside it.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Break, PunchEvent, PunchType, Shift};

/// Reconstructs the shift for one employee on one calendar day.
///
/// `punches` must be that employee's punches for `date`, in ascending time
/// order.
///
/// The shift is anchored on the **earliest** `clock_in` of the day and closed
/// by the earliest `clock_out` strictly after it. Any later clock-in/out pairs
/// on the same day are ignored. Between the two boundaries, every
/// `break_start` immediately followed by a `break_end` becomes a break; a
/// `break_start` with no directly following `break_end` is dropped.
///
/// A day without both boundaries yields an open shift with no breaks, which
/// contributes zero hours.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::reconstruct_shift;
/// use attendance_engine::models::{NewPunch, PunchEvent, PunchType};
/// use chrono::{NaiveDate, NaiveDateTime, Utc};
///
/// let punch = |punch_type, t: &str| {
///     PunchEvent::from_new(
///         NewPunch {
///             employee_id: "emp_001".to_string(),
///             business_id: "biz_001".to_string(),
///             punch_type,
///             occurred_at: NaiveDateTime::parse_from_str(
///                 &format!("2026-01-12 {t}"),
///                 "%Y-%m-%d %H:%M",
///             )
///             .unwrap(),
///             is_manual: false,
///             notes: None,
///         },
///         Utc::now(),
///     )
/// };
/// let punches = vec![
///     punch(PunchType::ClockIn, "09:00"),
///     punch(PunchType::BreakStart, "12:00"),
///     punch(PunchType::BreakEnd, "12:30"),
///     punch(PunchType::ClockOut, "17:00"),
/// ];
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let shift = reconstruct_shift("emp_001", date, &punches);
/// assert_eq!(shift.breaks.len(), 1);
/// assert_eq!(shift.worked_seconds(), 450 * 60);
/// ```
pub fn reconstruct_shift(employee_id: &str, date: NaiveDate, punches: &[PunchEvent]) -> Shift {
    let clock_in_idx = punches
        .iter()
        .position(|p| p.punch_type == PunchType::ClockIn);

    let clock_out_idx = clock_in_idx.and_then(|start| {
        let clock_in = punches[start].occurred_at;
        punches[start + 1..]
            .iter()
            .position(|p| p.punch_type == PunchType::ClockOut && p.occurred_at > clock_in)
            .map(|offset| start + 1 + offset)
    });

    let (Some(start), Some(end)) = (clock_in_idx, clock_out_idx) else {
        debug!(
            employee_id,
            %date,
            punches = punches.len(),
            "No complete clock-in/clock-out pair, shift is open"
        );
        return Shift {
            employee_id: employee_id.to_string(),
            date,
            clock_in: clock_in_idx.map(|i| punches[i].occurred_at),
            clock_out: None,
            breaks: Vec::new(),
        };
    };

    let window = &punches[start..=end];
    let breaks: Vec<Break> = window
        .windows(2)
        .filter_map(|pair| match (pair[0].punch_type, pair[1].punch_type) {
            (PunchType::BreakStart, PunchType::BreakEnd)
                if pair[1].occurred_at > pair[0].occurred_at =>
            {
                Some(Break {
                    start: pair[0].occurred_at,
                    end: pair[1].occurred_at,
                })
            }
            _ => None,
        })
        .collect();

    let break_starts = window
        .iter()
        .filter(|p| p.punch_type == PunchType::BreakStart)
        .count();
    if break_starts > breaks.len() {
        debug!(
            employee_id,
            %date,
            discarded = break_starts - breaks.len(),
            "Discarded unmatched break starts"
        );
    }

    Shift {
        employee_id: employee_id.to_string(),
        date,
        clock_in: Some(punches[start].occurred_at),
        clock_out: Some(punches[end].occurred_at),
        breaks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPunch;
    use chrono::{NaiveDateTime, Utc};

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn punch(punch_type: PunchType, time: &str) -> PunchEvent {
        PunchEvent::from_new(
            NewPunch {
                employee_id: "emp_001".to_string(),
                business_id: "biz_001".to_string(),
                punch_type,
                occurred_at: NaiveDateTime::parse_from_str(
                    &format!("2026-01-12 {}", time),
                    "%Y-%m-%d %H:%M",
                )
                .unwrap(),
                is_manual: false,
                notes: None,
            },
            Utc::now(),
        )
    }

    fn reconstruct(punches: &[PunchEvent]) -> Shift {
        reconstruct_shift("emp_001", make_date("2026-01-12"), punches)
    }

    // ==========================================================================
    // SR-001: 09:00-17:00 with 12:00-12:30 break
    // ==========================================================================
    #[test]
    fn test_sr_001_shift_with_lunch_break() {
        let shift = reconstruct(&[
            punch(PunchType::ClockIn, "09:00"),
            punch(PunchType::BreakStart, "12:00"),
            punch(PunchType::BreakEnd, "12:30"),
            punch(PunchType::ClockOut, "17:00"),
        ]);

        assert_eq!(shift.worked_seconds(), 450 * 60);
        assert_eq!(shift.break_seconds(), 30 * 60);
    }

    // ==========================================================================
    // SR-002: clock-in only is an open shift
    // ==========================================================================
    #[test]
    fn test_sr_002_clock_in_without_clock_out_is_open() {
        let shift = reconstruct(&[
            punch(PunchType::ClockIn, "09:00"),
            punch(PunchType::BreakStart, "12:00"),
        ]);

        assert!(shift.is_open());
        assert!(shift.clock_in.is_some());
        assert!(shift.breaks.is_empty());
        assert_eq!(shift.worked_seconds(), 0);
    }

    #[test]
    fn test_clock_out_before_clock_in_is_ignored() {
        let shift = reconstruct(&[
            punch(PunchType::ClockOut, "08:00"),
            punch(PunchType::ClockIn, "09:00"),
        ]);

        assert!(shift.is_open());
        assert_eq!(shift.worked_seconds(), 0);
    }

    #[test]
    fn test_unmatched_break_start_is_discarded() {
        let shift = reconstruct(&[
            punch(PunchType::ClockIn, "09:00"),
            punch(PunchType::BreakStart, "12:00"),
            punch(PunchType::ClockOut, "17:00"),
        ]);

        assert!(shift.breaks.is_empty());
        assert_eq!(shift.worked_seconds(), 480 * 60);
    }

    #[test]
    fn test_break_start_must_be_immediately_followed_by_break_end() {
        let shift = reconstruct(&[
            punch(PunchType::ClockIn, "09:00"),
            punch(PunchType::BreakStart, "10:00"),
            punch(PunchType::BreakStart, "12:00"),
            punch(PunchType::BreakEnd, "12:30"),
            punch(PunchType::ClockOut, "17:00"),
        ]);

        assert_eq!(shift.breaks.len(), 1);
        assert_eq!(shift.break_seconds(), 30 * 60);
    }

    #[test]
    fn test_breaks_outside_shift_are_ignored() {
        let shift = reconstruct(&[
            punch(PunchType::BreakStart, "07:00"),
            punch(PunchType::BreakEnd, "07:30"),
            punch(PunchType::ClockIn, "09:00"),
            punch(PunchType::ClockOut, "17:00"),
            punch(PunchType::BreakStart, "17:30"),
            punch(PunchType::BreakEnd, "18:00"),
        ]);

        assert!(shift.breaks.is_empty());
        assert_eq!(shift.worked_seconds(), 480 * 60);
    }

    #[test]
    fn test_second_shift_of_day_is_ignored() {
        let shift = reconstruct(&[
            punch(PunchType::ClockIn, "06:00"),
            punch(PunchType::ClockOut, "10:00"),
            punch(PunchType::ClockIn, "16:00"),
            punch(PunchType::ClockOut, "20:00"),
        ]);

        assert_eq!(shift.worked_seconds(), 240 * 60);
        assert_eq!(
            shift.clock_out.map(|t| t.format("%H:%M").to_string()),
            Some("10:00".to_string())
        );
    }

    #[test]
    fn test_multiple_breaks_in_one_shift() {
        let shift = reconstruct(&[
            punch(PunchType::ClockIn, "08:00"),
            punch(PunchType::BreakStart, "10:00"),
            punch(PunchType::BreakEnd, "10:15"),
            punch(PunchType::BreakStart, "12:00"),
            punch(PunchType::BreakEnd, "12:45"),
            punch(PunchType::ClockOut, "18:00"),
        ]);

        assert_eq!(shift.breaks.len(), 2);
        assert_eq!(shift.break_seconds(), 60 * 60);
        assert_eq!(shift.worked_seconds(), 540 * 60);
    }

    #[test]
    fn test_no_punches_is_open() {
        let shift = reconstruct(&[]);
        assert!(shift.is_open());
        assert!(shift.clock_in.is_none());
    }
}
