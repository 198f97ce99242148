//! Calculation logic for the Time & Attendance Engine.
//!
//! Everything here is a pure function of a ledger snapshot: shift
//! reconstruction per day, weekly hours aggregation with the overtime split,
//! pay calculation, and live status derivation.

mod hours_aggregation;
mod live_status;
mod pay;
mod shift_reconstruction;

pub use hours_aggregation::{
    HOURS_DECIMAL_PLACES, HoursAggregation, aggregate_hours, seconds_to_hours, split_overtime,
};
pub use live_status::{currently_working, derive_statuses};
pub use pay::{
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_WEEKLY_OVERTIME_THRESHOLD, OvertimePolicy,
    PAY_DECIMAL_PLACES, apply_pay, calculate_pay,
};
pub use shift_reconstruction::reconstruct_shift;
