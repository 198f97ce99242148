//! Timesheet persistence.
//!
//! The store is where the correctness guarantees of the lifecycle live: at
//! most one timesheet per `(employee, period)`, and status changes applied
//! only when the stored status still matches what the caller saw.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriod, Timesheet, TimesheetStatus};

/// Outcome of [`TimesheetStore::compare_and_set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareAndSet {
    /// The stored status matched and the update was written.
    Applied,
    /// The stored status differed; nothing was written.
    Conflict(TimesheetStatus),
}

/// Storage for timesheets.
pub trait TimesheetStore: Send + Sync {
    /// Inserts a new timesheet.
    ///
    /// Fails with [`EngineError::DuplicateSubmission`] if one already exists
    /// for the same employee and period. The check and the insert are atomic.
    fn insert(&self, timesheet: Timesheet) -> EngineResult<Timesheet>;

    /// Looks up a timesheet by id.
    fn get(&self, id: Uuid) -> EngineResult<Option<Timesheet>>;

    /// Replaces a timesheet if its stored status is still `expected`.
    ///
    /// Fails with [`EngineError::TimesheetNotFound`] for an unknown id.
    fn compare_and_set(
        &self,
        updated: Timesheet,
        expected: TimesheetStatus,
    ) -> EngineResult<CompareAndSet>;

    /// Lists an employee's timesheets, oldest period first.
    fn list_for_employee(&self, employee_id: &str) -> EngineResult<Vec<Timesheet>>;

    /// Lists a business's timesheets, optionally narrowed to one status,
    /// oldest period first.
    fn list_for_business(
        &self,
        business_id: &str,
        status: Option<TimesheetStatus>,
    ) -> EngineResult<Vec<Timesheet>>;
}

type PeriodKey = (String, PayPeriod);

#[derive(Debug, Default)]
struct Table {
    by_id: HashMap<Uuid, Timesheet>,
    by_period: HashMap<PeriodKey, Uuid>,
}

impl Table {
    fn sorted<F>(&self, predicate: F) -> Vec<Timesheet>
    where
        F: Fn(&Timesheet) -> bool,
    {
        let mut selected: Vec<Timesheet> = self.by_id.values().filter(|t| predicate(t)).cloned().collect();
        selected.sort_by(|a, b| {
            (a.period_start, a.submitted_at, &a.employee_id).cmp(&(
                b.period_start,
                b.submitted_at,
                &b.employee_id,
            ))
        });
        selected
    }
}

/// In-memory timesheet store.
///
/// Both the rows and the unique period index sit behind a single lock, so
/// concurrent submissions for the same period cannot both pass the check.
#[derive(Debug, Default)]
pub struct MemoryTimesheetStore {
    table: RwLock<Table>,
}

impl MemoryTimesheetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> EngineError {
    EngineError::Storage {
        message: "timesheet store lock poisoned".to_string(),
    }
}

impl TimesheetStore for MemoryTimesheetStore {
    fn insert(&self, timesheet: Timesheet) -> EngineResult<Timesheet> {
        let mut table = self.table.write().map_err(|_| poisoned())?;

        let key = (timesheet.employee_id.clone(), timesheet.period());
        if table.by_period.contains_key(&key) {
            return Err(EngineError::DuplicateSubmission {
                employee_id: timesheet.employee_id,
                period_start: timesheet.period_start,
                period_end: timesheet.period_end,
            });
        }

        table.by_period.insert(key, timesheet.id);
        table.by_id.insert(timesheet.id, timesheet.clone());
        Ok(timesheet)
    }

    fn get(&self, id: Uuid) -> EngineResult<Option<Timesheet>> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.by_id.get(&id).cloned())
    }

    fn compare_and_set(
        &self,
        updated: Timesheet,
        expected: TimesheetStatus,
    ) -> EngineResult<CompareAndSet> {
        let mut table = self.table.write().map_err(|_| poisoned())?;

        let current = table
            .by_id
            .get_mut(&updated.id)
            .ok_or(EngineError::TimesheetNotFound {
                timesheet_id: updated.id,
            })?;

        if current.status != expected {
            return Ok(CompareAndSet::Conflict(current.status));
        }

        *current = updated;
        Ok(CompareAndSet::Applied)
    }

    fn list_for_employee(&self, employee_id: &str) -> EngineResult<Vec<Timesheet>> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.sorted(|t| t.employee_id == employee_id))
    }

    fn list_for_business(
        &self,
        business_id: &str,
        status: Option<TimesheetStatus>,
    ) -> EngineResult<Vec<Timesheet>> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.sorted(|t| {
            t.business_id == business_id && status.is_none_or(|s| t.status == s)
        }))
    }
}
