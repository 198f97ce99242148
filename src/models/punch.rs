//! Punch event model.
//!
//! A punch is a single timestamped clock event. Punches are immutable once
//! recorded; corrections are made by recording new punches.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of clock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchType {
    /// Start of a shift.
    ClockIn,
    /// End of a shift.
    ClockOut,
    /// Start of a break within a shift.
    BreakStart,
    /// End of a break within a shift.
    BreakEnd,
}

impl PunchType {
    /// Returns the wire name of the punch type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchType::ClockIn => "clock_in",
            PunchType::ClockOut => "clock_out",
            PunchType::BreakStart => "break_start",
            PunchType::BreakEnd => "break_end",
        }
    }
}

impl fmt::Display for PunchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A punch as submitted by the time clock or a manager's manual-entry tool,
/// before the ledger has assigned it an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPunch {
    /// The employee who punched.
    pub employee_id: String,
    /// The business the punch was made at.
    pub business_id: String,
    /// The kind of clock event.
    #[serde(rename = "type")]
    pub punch_type: PunchType,
    /// Business-local wall-clock time of the event.
    pub occurred_at: NaiveDateTime,
    /// Whether a manager entered the punch by hand.
    #[serde(default)]
    pub is_manual: bool,
    /// Optional free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A punch event as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEvent {
    /// Unique identifier assigned by the ledger.
    pub id: Uuid,
    /// The employee who punched.
    pub employee_id: String,
    /// The business the punch was made at.
    pub business_id: String,
    /// The kind of clock event.
    #[serde(rename = "type")]
    pub punch_type: PunchType,
    /// Business-local wall-clock time of the event.
    pub occurred_at: NaiveDateTime,
    /// Whether a manager entered the punch by hand.
    pub is_manual: bool,
    /// Optional free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the ledger accepted the punch.
    pub recorded_at: DateTime<Utc>,
}

impl PunchEvent {
    /// Stamps a new punch with an id and the time it was recorded.
    pub fn from_new(punch: NewPunch, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: punch.employee_id,
            business_id: punch.business_id,
            punch_type: punch.punch_type,
            occurred_at: punch.occurred_at,
            is_manual: punch.is_manual,
            notes: punch.notes,
            recorded_at,
        }
    }

    /// The calendar day the punch belongs to.
    pub fn date(&self) -> NaiveDate {
        self.occurred_at.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punch_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&PunchType::BreakStart).unwrap(),
            "\"break_start\""
        );
        assert_eq!(PunchType::ClockOut.to_string(), "clock_out");
    }

    #[test]
    fn test_new_punch_deserialization() {
        let json = r#"{
            "employee_id": "emp_001",
            "business_id": "biz_001",
            "type": "clock_in",
            "occurred_at": "2026-01-12T09:00:00"
        }"#;

        let punch: NewPunch = serde_json::from_str(json).unwrap();
        assert_eq!(punch.punch_type, PunchType::ClockIn);
        assert!(!punch.is_manual);
        assert!(punch.notes.is_none());
    }

    #[test]
    fn test_unknown_punch_type_is_rejected() {
        let json = r#"{
            "employee_id": "emp_001",
            "business_id": "biz_001",
            "type": "lunch",
            "occurred_at": "2026-01-12T09:00:00"
        }"#;

        assert!(serde_json::from_str::<NewPunch>(json).is_err());
    }

    #[test]
    fn test_from_new_keeps_fields_and_assigns_id() {
        let punch = NewPunch {
            employee_id: "emp_001".to_string(),
            business_id: "biz_001".to_string(),
            punch_type: PunchType::ClockOut,
            occurred_at: NaiveDateTime::parse_from_str("2026-01-12 17:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            is_manual: true,
            notes: Some("forgot to punch out".to_string()),
        };

        let a = PunchEvent::from_new(punch.clone(), Utc::now());
        let b = PunchEvent::from_new(punch, Utc::now());

        assert_ne!(a.id, b.id);
        assert!(a.is_manual);
        assert_eq!(a.date(), NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
        assert_eq!(a.notes.as_deref(), Some("forgot to punch out"));
    }
}
