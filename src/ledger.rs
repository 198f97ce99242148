//! Punch ledger.
//!
//! The ledger is an append-only record of punch events. It validates the
//! shape of each punch and nothing else: sequencing problems such as a
//! clock-out without a clock-in are left for the derivations to absorb.

use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{NewPunch, PunchEvent};

/// Storage for punch events.
///
/// Implementations must never mutate or remove an appended event. Reads
/// return events in ascending `occurred_at` order, with ties kept in append
/// order.
pub trait PunchLedger: Send + Sync {
    /// Appends a punch event.
    fn append(&self, punch: PunchEvent) -> EngineResult<()>;

    /// Returns one employee's punches whose date falls in `from..=to`.
    fn punches_for_employee(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<PunchEvent>>;

    /// Returns every punch made at a business on one date.
    fn punches_for_business_on(
        &self,
        business_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Vec<PunchEvent>>;
}

/// Checks the shape of a punch before it is recorded.
///
/// # Example
///
/// ```
/// use attendance_engine::ledger::validate_punch;
/// use attendance_engine::models::{NewPunch, PunchType};
/// use chrono::NaiveDateTime;
///
/// let punch = NewPunch {
///     employee_id: " ".to_string(),
///     business_id: "biz_001".to_string(),
///     punch_type: PunchType::ClockIn,
///     occurred_at: NaiveDateTime::parse_from_str("2026-01-12 09:00", "%Y-%m-%d %H:%M").unwrap(),
///     is_manual: false,
///     notes: None,
/// };
/// assert!(validate_punch(&punch).is_err());
/// ```
pub fn validate_punch(punch: &NewPunch) -> EngineResult<()> {
    let required = [
        ("employee_id", &punch.employee_id),
        ("business_id", &punch.business_id),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(EngineError::InvalidPunch {
                field: field.to_string(),
                message: "must not be empty".to_string(),
            });
        }
    }
    Ok(())
}

/// In-memory punch ledger.
#[derive(Debug, Default)]
pub struct MemoryPunchLedger {
    events: RwLock<Vec<PunchEvent>>,
}

impl MemoryPunchLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    fn select<F>(&self, predicate: F) -> EngineResult<Vec<PunchEvent>>
    where
        F: Fn(&PunchEvent) -> bool,
    {
        let events = self.events.read().map_err(|_| poisoned())?;
        let mut selected: Vec<PunchEvent> = events.iter().filter(|e| predicate(e)).cloned().collect();
        selected.sort_by_key(|e| e.occurred_at);
        Ok(selected)
    }
}

fn poisoned() -> EngineError {
    EngineError::Storage {
        message: "punch ledger lock poisoned".to_string(),
    }
}

impl PunchLedger for MemoryPunchLedger {
    fn append(&self, punch: PunchEvent) -> EngineResult<()> {
        self.events.write().map_err(|_| poisoned())?.push(punch);
        Ok(())
    }

    fn punches_for_employee(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<PunchEvent>> {
        self.select(|e| e.employee_id == employee_id && e.date() >= from && e.date() <= to)
    }

    fn punches_for_business_on(
        &self,
        business_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Vec<PunchEvent>> {
        self.select(|e| e.business_id == business_id && e.date() == date)
    }
}
