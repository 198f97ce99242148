//! The engine facade.
//!
//! [`AttendanceEngine`] wires the punch ledger, the employee directory and
//! the timesheet lifecycle together and exposes the operations callers use:
//! record a punch, query a week, submit and decide timesheets, and read the
//! live roster.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::calculation::{
    OvertimePolicy, aggregate_hours, apply_pay, currently_working, derive_statuses,
};
use crate::config::EngineConfig;
use crate::directory::{EmployeeDirectory, MemoryDirectory};
use crate::error::EngineResult;
use crate::ledger::{MemoryPunchLedger, PunchLedger, validate_punch};
use crate::lifecycle::TimesheetManager;
use crate::models::{
    EmployeeStatus, NewPunch, PayPeriod, PunchEvent, Timesheet, TimesheetStatus, WeeklyReport,
};
use crate::notify::TimesheetNotifier;
use crate::store::{MemoryTimesheetStore, TimesheetStore};

/// The Time & Attendance Engine.
#[derive(Clone)]
pub struct AttendanceEngine {
    ledger: Arc<dyn PunchLedger>,
    directory: Arc<dyn EmployeeDirectory>,
    timesheets: TimesheetManager,
    policy: OvertimePolicy,
}

impl AttendanceEngine {
    /// Assembles an engine from its collaborators.
    pub fn new(
        ledger: Arc<dyn PunchLedger>,
        directory: Arc<dyn EmployeeDirectory>,
        store: Arc<dyn TimesheetStore>,
        notifier: TimesheetNotifier,
        policy: OvertimePolicy,
    ) -> Self {
        Self {
            ledger,
            directory,
            timesheets: TimesheetManager::new(store, notifier),
            policy,
        }
    }

    /// Builds an engine on in-memory storage, seeded from configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::config::EngineConfig;
    /// use attendance_engine::engine::AttendanceEngine;
    ///
    /// let engine = AttendanceEngine::in_memory(&EngineConfig::default());
    /// assert!(engine.policy().weekly_threshold_hours > rust_decimal::Decimal::ZERO);
    /// ```
    pub fn in_memory(config: &EngineConfig) -> Self {
        Self::new(
            Arc::new(MemoryPunchLedger::new()),
            Arc::new(MemoryDirectory::new(config.directory.members.clone())),
            Arc::new(MemoryTimesheetStore::new()),
            TimesheetNotifier::new(config.notifications.capacity),
            config.overtime.policy(),
        )
    }

    /// The overtime rule in force.
    pub fn policy(&self) -> &OvertimePolicy {
        &self.policy
    }

    /// The notifier timesheet transitions are published on.
    pub fn notifier(&self) -> &TimesheetNotifier {
        self.timesheets.notifier()
    }

    /// Appends a punch to the ledger.
    ///
    /// Only the punch's shape is checked; out-of-sequence punches are
    /// accepted and dealt with during aggregation.
    pub fn record_punch(&self, punch: NewPunch) -> EngineResult<PunchEvent> {
        validate_punch(&punch)?;

        let event = PunchEvent::from_new(punch, Utc::now());
        self.ledger.append(event.clone())?;

        info!(
            punch_id = %event.id,
            employee_id = %event.employee_id,
            business_id = %event.business_id,
            punch_type = %event.punch_type,
            occurred_at = %event.occurred_at,
            is_manual = event.is_manual,
            "Punch recorded"
        );
        Ok(event)
    }

    /// Computes an employee's hours and estimated pay over a period.
    ///
    /// The hourly rate comes from the employee's membership of
    /// `business_id`; a missing or non-positive rate yields zero pay.
    pub fn weekly_summary(
        &self,
        employee_id: &str,
        business_id: &str,
        period: PayPeriod,
    ) -> EngineResult<WeeklyReport> {
        period.validate()?;
        let punches =
            self.ledger
                .punches_for_employee(employee_id, period.start_date, period.end_date)?;
        // A non-positive rate on file earns nothing and is reported as zero
        let pay_rate = self
            .directory
            .pay_rate(employee_id, business_id)
            .filter(|rate| *rate > Decimal::ZERO);

        let aggregation = aggregate_hours(
            employee_id,
            &punches,
            &period,
            self.policy.weekly_threshold_hours,
        );
        let summary = apply_pay(aggregation.summary, pay_rate, &self.policy);

        Ok(WeeklyReport {
            employee_id: employee_id.to_string(),
            business_id: business_id.to_string(),
            period,
            pay_rate: pay_rate.unwrap_or(Decimal::ZERO),
            summary,
            days: aggregation.days,
        })
    }

    /// Snapshots an employee's period into a submitted timesheet.
    pub fn submit_timesheet(
        &self,
        employee_id: &str,
        business_id: &str,
        period: PayPeriod,
    ) -> EngineResult<Timesheet> {
        let report = self.weekly_summary(employee_id, business_id, period)?;
        self.timesheets.submit(
            employee_id,
            business_id,
            period,
            &report.summary,
            report.pay_rate,
        )
    }

    /// Approves a submitted timesheet.
    pub fn approve_timesheet(&self, timesheet_id: Uuid, approver_id: &str) -> EngineResult<Timesheet> {
        self.timesheets.approve(timesheet_id, approver_id)
    }

    /// Rejects a submitted timesheet.
    pub fn reject_timesheet(
        &self,
        timesheet_id: Uuid,
        approver_id: &str,
        reason: &str,
    ) -> EngineResult<Timesheet> {
        self.timesheets.reject(timesheet_id, approver_id, reason)
    }

    /// Looks up a timesheet.
    pub fn timesheet(&self, timesheet_id: Uuid) -> EngineResult<Timesheet> {
        self.timesheets.get(timesheet_id)
    }

    /// Lists an employee's timesheets.
    pub fn employee_timesheets(&self, employee_id: &str) -> EngineResult<Vec<Timesheet>> {
        self.timesheets.list_for_employee(employee_id)
    }

    /// Lists a business's timesheets, e.g. the `submitted` approval queue.
    pub fn business_timesheets(
        &self,
        business_id: &str,
        status: Option<TimesheetStatus>,
    ) -> EngineResult<Vec<Timesheet>> {
        self.timesheets.list_for_business(business_id, status)
    }

    /// Employees of a business who are working or on a break on `date`.
    pub fn currently_working(
        &self,
        business_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Vec<EmployeeStatus>> {
        let punches = self.ledger.punches_for_business_on(business_id, date)?;
        Ok(currently_working(&punches))
    }

    /// Every known employee of a business with their status on `date`.
    pub fn roster_status(
        &self,
        business_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Vec<EmployeeStatus>> {
        let punches = self.ledger.punches_for_business_on(business_id, date)?;
        let roster = self.directory.members(business_id);
        Ok(derive_statuses(&punches, &roster))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::directory::Membership;
    use crate::error::EngineError;
    use crate::models::{PunchStatus, PunchType};
    use chrono::{Days, NaiveDateTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn engine() -> AttendanceEngine {
        let mut config = EngineConfig::default();
        config.directory.members = vec![
            Membership {
                employee_id: "emp_001".to_string(),
                business_id: "biz_001".to_string(),
                pay_rate: Some(dec("20")),
            },
            Membership {
                employee_id: "emp_002".to_string(),
                business_id: "biz_001".to_string(),
                pay_rate: None,
            },
            Membership {
                employee_id: "emp_003".to_string(),
                business_id: "biz_001".to_string(),
                pay_rate: Some(dec("-5")),
            },
        ];
        AttendanceEngine::in_memory(&config)
    }

    fn record(engine: &AttendanceEngine, employee_id: &str, punch_type: PunchType, at: String) {
        engine
            .record_punch(NewPunch {
                employee_id: employee_id.to_string(),
                business_id: "biz_001".to_string(),
                punch_type,
                occurred_at: NaiveDateTime::parse_from_str(&at, "%Y-%m-%d %H:%M").unwrap(),
                is_manual: false,
                notes: None,
            })
            .unwrap();
    }

    fn work_day(engine: &AttendanceEngine, employee_id: &str, date: NaiveDate, clock_out: &str) {
        record(engine, employee_id, PunchType::ClockIn, format!("{} 08:00", date));
        record(engine, employee_id, PunchType::ClockOut, format!("{} {}", date, clock_out));
    }

    fn week() -> PayPeriod {
        PayPeriod::week_containing(make_date("2026-01-12"))
    }

    #[test]
    fn test_weekly_summary_with_overtime_and_pay() {
        let engine = engine();
        for offset in 0..5 {
            work_day(&engine, "emp_001", week().start_date + Days::new(offset), "17:00");
        }

        let report = engine.weekly_summary("emp_001", "biz_001", week()).unwrap();

        assert_eq!(report.summary.total_hours, dec("45"));
        assert_eq!(report.summary.regular_hours, dec("40"));
        assert_eq!(report.summary.overtime_hours, dec("5"));
        // 40 × 20 + 5 × 20 × 1.5
        assert_eq!(report.summary.estimated_pay, dec("950.00"));
        assert_eq!(report.days.len(), 5);
    }

    #[test]
    fn test_missing_rate_yields_zero_pay() {
        let engine = engine();
        work_day(&engine, "emp_002", week().start_date, "16:00");

        let report = engine.weekly_summary("emp_002", "biz_001", week()).unwrap();

        assert_eq!(report.summary.total_hours, dec("8"));
        assert_eq!(report.summary.estimated_pay, Decimal::ZERO);
        assert_eq!(report.pay_rate, Decimal::ZERO);
    }

    #[test]
    fn test_negative_rate_is_reported_as_zero() {
        let engine = engine();
        work_day(&engine, "emp_003", week().start_date, "16:00");

        let report = engine.weekly_summary("emp_003", "biz_001", week()).unwrap();
        assert_eq!(report.summary.total_hours, dec("8"));
        assert_eq!(report.summary.estimated_pay, Decimal::ZERO);
        assert_eq!(report.pay_rate, Decimal::ZERO);

        let timesheet = engine.submit_timesheet("emp_003", "biz_001", week()).unwrap();
        assert_eq!(timesheet.pay_rate, Decimal::ZERO);
        assert_eq!(timesheet.total_pay, Decimal::ZERO);
    }

    #[test]
    fn test_summary_refuses_partial_week() {
        let engine = engine();
        let short = PayPeriod {
            start_date: week().start_date,
            end_date: make_date("2026-01-17"),
        };

        let result = engine.weekly_summary("emp_001", "biz_001", short);

        assert!(matches!(result, Err(EngineError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_submit_then_duplicate() {
        let engine = engine();
        work_day(&engine, "emp_001", week().start_date, "16:00");

        let timesheet = engine.submit_timesheet("emp_001", "biz_001", week()).unwrap();
        assert_eq!(timesheet.total_pay, dec("160.00"));

        let again = engine.submit_timesheet("emp_001", "biz_001", week());
        assert!(matches!(again, Err(EngineError::DuplicateSubmission { .. })));
    }

    #[test]
    fn test_empty_period_submits_zero_timesheet() {
        let engine = engine();
        let timesheet = engine.submit_timesheet("emp_001", "biz_001", week()).unwrap();
        assert_eq!(timesheet.total_hours, Decimal::ZERO);
        assert_eq!(timesheet.total_pay, Decimal::ZERO);
    }

    #[test]
    fn test_record_punch_rejects_blank_employee() {
        let engine = engine();
        let result = engine.record_punch(NewPunch {
            employee_id: String::new(),
            business_id: "biz_001".to_string(),
            punch_type: PunchType::ClockIn,
            occurred_at: NaiveDateTime::parse_from_str("2026-01-12 09:00", "%Y-%m-%d %H:%M")
                .unwrap(),
            is_manual: false,
            notes: None,
        });
        assert!(matches!(result, Err(EngineError::InvalidPunch { .. })));
    }

    #[test]
    fn test_live_views() {
        let engine = engine();
        let today = make_date("2026-01-12");
        record(&engine, "emp_001", PunchType::ClockIn, format!("{} 09:00", today));
        record(&engine, "emp_001", PunchType::BreakStart, format!("{} 12:00", today));

        let working = engine.currently_working("biz_001", today).unwrap();
        assert_eq!(working.len(), 1);
        assert_eq!(working[0].status, PunchStatus::OnBreak);

        let roster = engine.roster_status("biz_001", today).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[1].employee_id, "emp_002");
        assert_eq!(roster[1].status, PunchStatus::ClockedOut);

        let yesterday = engine
            .currently_working("biz_001", make_date("2026-01-11"))
            .unwrap();
        assert!(yesterday.is_empty());
    }

    #[test]
    fn test_approval_queue() {
        let engine = engine();
        let first = engine.submit_timesheet("emp_001", "biz_001", week()).unwrap();
        engine.submit_timesheet("emp_002", "biz_001", week()).unwrap();
        engine.approve_timesheet(first.id, "emp_002").unwrap();

        let queue = engine
            .business_timesheets("biz_001", Some(TimesheetStatus::Submitted))
            .unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].employee_id, "emp_002");
    }
}
