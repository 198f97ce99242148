//! Pay calculation functionality.
//!
//! This module applies an hourly rate and the overtime multiplier to a
//! weekly summary's regular and overtime hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::WeeklySummary;

/// Default weekly overtime threshold in hours.
pub const DEFAULT_WEEKLY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Default overtime pay multiplier (time and a half).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Monetary amounts are rounded to this many decimal places.
pub const PAY_DECIMAL_PLACES: u32 = 2;

/// The weekly overtime rule.
///
/// Hours up to `weekly_threshold_hours` are regular; the rest are paid at
/// `multiplier` times the hourly rate. There is no daily rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePolicy {
    /// Hours per period before overtime starts.
    pub weekly_threshold_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub multiplier: Decimal,
}

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self {
            weekly_threshold_hours: DEFAULT_WEEKLY_OVERTIME_THRESHOLD,
            multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

/// Calculates estimated pay for a summary.
///
/// `estimated_pay = regular × rate + overtime × rate × multiplier`, rounded to
/// cents. A missing, zero or negative rate yields zero pay.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::{calculate_pay, OvertimePolicy};
/// use attendance_engine::models::WeeklySummary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let summary = WeeklySummary {
///     regular_hours: Decimal::from(40),
///     overtime_hours: Decimal::from(5),
///     total_hours: Decimal::from(45),
///     ..WeeklySummary::default()
/// };
/// let pay = calculate_pay(&summary, Some(Decimal::from(20)), &OvertimePolicy::default());
///
/// // 40 × 20 + 5 × 20 × 1.5
/// assert_eq!(pay, Decimal::from_str("950.00").unwrap());
/// ```
pub fn calculate_pay(
    summary: &WeeklySummary,
    pay_rate: Option<Decimal>,
    policy: &OvertimePolicy,
) -> Decimal {
    let rate = match pay_rate {
        Some(rate) if rate > Decimal::ZERO => rate,
        _ => return Decimal::ZERO,
    };

    let regular_pay = summary.regular_hours * rate;
    let overtime_pay = summary.overtime_hours * rate * policy.multiplier;

    (regular_pay + overtime_pay).round_dp(PAY_DECIMAL_PLACES)
}

/// Returns `summary` with `estimated_pay` filled in.
pub fn apply_pay(
    summary: WeeklySummary,
    pay_rate: Option<Decimal>,
    policy: &OvertimePolicy,
) -> WeeklySummary {
    let estimated_pay = calculate_pay(&summary, pay_rate, policy);
    WeeklySummary {
        estimated_pay,
        ..summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn summary(regular: &str, overtime: &str) -> WeeklySummary {
        let regular_hours = dec(regular);
        let overtime_hours = dec(overtime);
        WeeklySummary {
            regular_hours,
            overtime_hours,
            total_hours: regular_hours + overtime_hours,
            break_hours: Decimal::ZERO,
            estimated_pay: Decimal::ZERO,
        }
    }

    // ==========================================================================
    // PAY-001: overtime boundary, 45h at $24.50
    // ==========================================================================
    #[test]
    fn test_pay_001_forty_five_hours() {
        let rate = dec("24.50");
        let pay = calculate_pay(&summary("40", "5"), Some(rate), &OvertimePolicy::default());

        let expected = dec("40") * rate + dec("5") * rate * dec("1.5");
        assert_eq!(pay, expected.round_dp(2));
        assert_eq!(pay, dec("1163.75"));
    }

    #[test]
    fn test_regular_hours_only() {
        let pay = calculate_pay(&summary("37.5", "0"), Some(dec("20")), &OvertimePolicy::default());
        assert_eq!(pay, dec("750.00"));
    }

    #[test]
    fn test_missing_rate_yields_zero() {
        let pay = calculate_pay(&summary("40", "5"), None, &OvertimePolicy::default());
        assert_eq!(pay, Decimal::ZERO);
    }

    #[test]
    fn test_zero_rate_yields_zero() {
        let pay = calculate_pay(&summary("40", "5"), Some(Decimal::ZERO), &OvertimePolicy::default());
        assert_eq!(pay, Decimal::ZERO);
    }

    #[test]
    fn test_custom_multiplier() {
        let policy = OvertimePolicy {
            weekly_threshold_hours: dec("38"),
            multiplier: dec("2"),
        };
        let pay = calculate_pay(&summary("38", "2"), Some(dec("10")), &policy);
        assert_eq!(pay, dec("420.00"));
    }

    #[test]
    fn test_pay_is_rounded_to_cents() {
        let pay = calculate_pay(&summary("0.33", "0"), Some(dec("10.01")), &OvertimePolicy::default());
        // 3.3033
        assert_eq!(pay, dec("3.30"));
    }

    #[test]
    fn test_apply_pay_keeps_hours() {
        let applied = apply_pay(summary("40", "1"), Some(dec("10")), &OvertimePolicy::default());
        assert_eq!(applied.total_hours, dec("41"));
        assert_eq!(applied.estimated_pay, dec("415.00"));
    }
}
