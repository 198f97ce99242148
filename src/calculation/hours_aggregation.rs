//! Weekly hours aggregation.
//!
//! This module groups an employee's punches by calendar day, reconstructs a
//! shift per day, and sums the results over a pay period into regular,
//! overtime and break hours.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DailyHours, PayPeriod, PunchEvent, WeeklySummary};

use super::reconstruct_shift;

/// Hours are rounded to this many decimal places.
pub const HOURS_DECIMAL_PLACES: u32 = 2;

/// The result of aggregating a period's punches.
///
/// `summary.estimated_pay` is left at zero; see
/// [`apply_pay`](super::apply_pay).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursAggregation {
    /// Period totals.
    pub summary: WeeklySummary,
    /// One entry per day that had punches, in date order.
    pub days: Vec<DailyHours>,
}

/// Converts seconds to hours, rounded to [`HOURS_DECIMAL_PLACES`].
///
/// Durations are summed in whole seconds and rounded only here, so no
/// per-break or per-day truncation accumulates.
pub fn seconds_to_hours(seconds: i64) -> Decimal {
    (Decimal::from(seconds) / Decimal::from(3600)).round_dp(HOURS_DECIMAL_PLACES)
}

/// Splits total hours into regular and overtime hours at `threshold`.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::split_overtime;
/// use rust_decimal::Decimal;
///
/// let (regular, overtime) = split_overtime(Decimal::from(45), Decimal::from(40));
/// assert_eq!(regular, Decimal::from(40));
/// assert_eq!(overtime, Decimal::from(5));
/// ```
pub fn split_overtime(total_hours: Decimal, threshold: Decimal) -> (Decimal, Decimal) {
    let regular = total_hours.min(threshold).max(Decimal::ZERO);
    let overtime = (total_hours - regular).max(Decimal::ZERO);
    (regular, overtime)
}

/// Aggregates one employee's punches over a pay period.
///
/// Punches for other employees or outside the period are ignored, so the
/// caller may pass a wider slice of the ledger. Punches do not need to be
/// sorted. Open shifts and unmatched breaks count as zero; they are never
/// errors.
///
/// # Arguments
///
/// * `employee_id` - The employee to aggregate for
/// * `punches` - Punch events, in any order
/// * `period` - The pay period (inclusive)
/// * `weekly_threshold` - Hours before overtime starts (typically 40)
pub fn aggregate_hours(
    employee_id: &str,
    punches: &[PunchEvent],
    period: &PayPeriod,
    weekly_threshold: Decimal,
) -> HoursAggregation {
    let by_day: BTreeMap<NaiveDate, Vec<PunchEvent>> = punches
        .iter()
        .filter(|p| p.employee_id == employee_id && period.contains_date(p.date()))
        .fold(BTreeMap::new(), |mut acc, punch| {
            acc.entry(punch.date())
                .or_insert_with(Vec::new)
                .push(punch.clone());
            acc
        });

    let days: Vec<DailyHours> = by_day
        .into_iter()
        .map(|(date, mut day_punches)| {
            // Stable, so equal timestamps keep ledger order.
            day_punches.sort_by_key(|p| p.occurred_at);
            let shift = reconstruct_shift(employee_id, date, &day_punches);
            DailyHours {
                date,
                clock_in: shift.clock_in,
                clock_out: shift.clock_out,
                worked_seconds: shift.worked_seconds(),
                break_seconds: shift.break_seconds(),
                is_open: shift.is_open(),
                punch_count: day_punches.len(),
            }
        })
        .collect();

    let worked_seconds: i64 = days.iter().map(|d| d.worked_seconds).sum();
    let break_seconds: i64 = days.iter().map(|d| d.break_seconds).sum();

    let total_hours = seconds_to_hours(worked_seconds);
    let (regular_hours, overtime_hours) = split_overtime(total_hours, weekly_threshold);

    debug!(
        employee_id,
        period_start = %period.start_date,
        period_end = %period.end_date,
        days = days.len(),
        open_days = days.iter().filter(|d| d.is_open).count(),
        %total_hours,
        "Aggregated weekly hours"
    );

    HoursAggregation {
        summary: WeeklySummary {
            regular_hours,
            overtime_hours,
            total_hours,
            break_hours: seconds_to_hours(break_seconds),
            estimated_pay: Decimal::ZERO,
        },
        days,
    }
}
