//! Timesheet lifecycle management.
//!
//! A period with no timesheet is implicitly "not yet submitted". Submission
//! creates the timesheet in `submitted`; a manager then moves it to
//! `approved` or `rejected`, and there it stays.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriod, Timesheet, TimesheetStatus, WeeklySummary};
use crate::notify::{TimesheetEventKind, TimesheetNotifier};
use crate::store::{CompareAndSet, TimesheetStore};

/// Owns the timesheet approval state machine.
#[derive(Clone)]
pub struct TimesheetManager {
    store: Arc<dyn TimesheetStore>,
    notifier: TimesheetNotifier,
}

impl TimesheetManager {
    /// Creates a manager over a store, publishing transitions to `notifier`.
    pub fn new(store: Arc<dyn TimesheetStore>, notifier: TimesheetNotifier) -> Self {
        Self { store, notifier }
    }

    /// The notifier transitions are published on.
    pub fn notifier(&self) -> &TimesheetNotifier {
        &self.notifier
    }

    /// Submits an employee's period.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidPeriod`] unless the period spans exactly seven
    /// days.
    ///
    /// [`EngineError::DuplicateSubmission`] if the period already has a
    /// timesheet. This holds under concurrent calls because the store checks
    /// and inserts atomically.
    pub fn submit(
        &self,
        employee_id: &str,
        business_id: &str,
        period: PayPeriod,
        summary: &WeeklySummary,
        pay_rate: Decimal,
    ) -> EngineResult<Timesheet> {
        period.validate()?;
        let timesheet = Timesheet::submitted(
            employee_id,
            business_id,
            period,
            summary,
            pay_rate,
            Utc::now(),
        );

        let stored = self.store.insert(timesheet).inspect_err(|err| {
            warn!(
                employee_id,
                period_start = %period.start_date,
                period_end = %period.end_date,
                error = %err,
                "Timesheet submission refused"
            );
        })?;

        info!(
            timesheet_id = %stored.id,
            employee_id,
            business_id,
            total_hours = %stored.total_hours,
            total_pay = %stored.total_pay,
            "Timesheet submitted"
        );
        self.notifier.publish(TimesheetEventKind::Submitted, &stored);
        Ok(stored)
    }

    /// Approves a submitted timesheet.
    ///
    /// # Errors
    ///
    /// - [`EngineError::TimesheetNotFound`] for an unknown id
    /// - [`EngineError::InvalidTransition`] unless the timesheet is `submitted`
    /// - [`EngineError::SelfApproval`] if `approver_id` owns the timesheet
    pub fn approve(&self, timesheet_id: Uuid, approver_id: &str) -> EngineResult<Timesheet> {
        let current = self.load_for_decision(timesheet_id, approver_id, "approve")?;

        let updated = Timesheet {
            status: TimesheetStatus::Approved,
            approved_at: Some(Utc::now()),
            approved_by: Some(approver_id.to_string()),
            ..current
        };

        let stored = self.commit(updated, "approve")?;
        info!(
            timesheet_id = %stored.id,
            employee_id = %stored.employee_id,
            approver_id,
            "Timesheet approved"
        );
        self.notifier.publish(TimesheetEventKind::Approved, &stored);
        Ok(stored)
    }

    /// Rejects a submitted timesheet with a reason.
    ///
    /// The deciding manager and time are stamped in `approved_by` and
    /// `approved_at`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingReason`] if `reason` is blank
    /// - [`EngineError::TimesheetNotFound`] for an unknown id
    /// - [`EngineError::InvalidTransition`] unless the timesheet is `submitted`
    /// - [`EngineError::SelfApproval`] if `approver_id` owns the timesheet
    pub fn reject(
        &self,
        timesheet_id: Uuid,
        approver_id: &str,
        reason: &str,
    ) -> EngineResult<Timesheet> {
        let reason = reason.trim();
        if reason.is_empty() {
            warn!(%timesheet_id, approver_id, "Rejection without a reason refused");
            return Err(EngineError::MissingReason { timesheet_id });
        }

        let current = self.load_for_decision(timesheet_id, approver_id, "reject")?;

        let updated = Timesheet {
            status: TimesheetStatus::Rejected,
            approved_at: Some(Utc::now()),
            approved_by: Some(approver_id.to_string()),
            rejection_reason: Some(reason.to_string()),
            ..current
        };

        let stored = self.commit(updated, "reject")?;
        info!(
            timesheet_id = %stored.id,
            employee_id = %stored.employee_id,
            approver_id,
            reason,
            "Timesheet rejected"
        );
        self.notifier.publish(TimesheetEventKind::Rejected, &stored);
        Ok(stored)
    }

    /// Looks up a timesheet by id.
    pub fn get(&self, timesheet_id: Uuid) -> EngineResult<Timesheet> {
        self.store
            .get(timesheet_id)?
            .ok_or(EngineError::TimesheetNotFound { timesheet_id })
    }

    /// Lists an employee's timesheets.
    pub fn list_for_employee(&self, employee_id: &str) -> EngineResult<Vec<Timesheet>> {
        self.store.list_for_employee(employee_id)
    }

    /// Lists a business's timesheets, optionally only those in `status`.
    pub fn list_for_business(
        &self,
        business_id: &str,
        status: Option<TimesheetStatus>,
    ) -> EngineResult<Vec<Timesheet>> {
        self.store.list_for_business(business_id, status)
    }

    fn load_for_decision(
        &self,
        timesheet_id: Uuid,
        approver_id: &str,
        action: &'static str,
    ) -> EngineResult<Timesheet> {
        let current = self.get(timesheet_id)?;

        if current.status.is_terminal() {
            warn!(%timesheet_id, status = %current.status, action, "Invalid timesheet transition");
            return Err(EngineError::InvalidTransition {
                timesheet_id,
                status: current.status,
                action,
            });
        }

        if current.employee_id == approver_id {
            warn!(%timesheet_id, approver_id, action, "Self-approval refused");
            return Err(EngineError::SelfApproval {
                timesheet_id,
                approver_id: approver_id.to_string(),
            });
        }

        Ok(current)
    }

    fn commit(&self, updated: Timesheet, action: &'static str) -> EngineResult<Timesheet> {
        let timesheet_id = updated.id;
        match self
            .store
            .compare_and_set(updated.clone(), TimesheetStatus::Submitted)?
        {
            CompareAndSet::Applied => Ok(updated),
            CompareAndSet::Conflict(status) => {
                warn!(%timesheet_id, %status, action, "Timesheet decided concurrently");
                Err(EngineError::InvalidTransition {
                    timesheet_id,
                    status,
                    action,
                })
            }
        }
    }
}
