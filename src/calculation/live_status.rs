//! Live punch status derivation.
//!
//! The roster view is a pure fold over one day's punches: nothing is kept
//! between calls, so it is safe to recompute on every read.

use std::collections::BTreeMap;

use crate::models::{EmployeeStatus, PunchEvent, PunchStatus};

/// Derives every employee's status from one day's punches.
///
/// Each employee's status comes from their chronologically last punch; when
/// two punches share a timestamp, the one later in `punches` wins. Employees
/// in `roster` with no punches are reported as clocked out. The result is
/// sorted by employee id.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::derive_statuses;
/// use attendance_engine::models::PunchStatus;
///
/// let statuses = derive_statuses(&[], &["emp_001".to_string()]);
/// assert_eq!(statuses[0].status, PunchStatus::ClockedOut);
/// assert!(statuses[0].since.is_none());
/// ```
pub fn derive_statuses(punches: &[PunchEvent], roster: &[String]) -> Vec<EmployeeStatus> {
    let latest: BTreeMap<&str, &PunchEvent> =
        punches.iter().fold(BTreeMap::new(), |mut acc, punch| {
            let replace = acc
                .get(punch.employee_id.as_str())
                .is_none_or(|current: &&PunchEvent| punch.occurred_at >= current.occurred_at);
            if replace {
                acc.insert(punch.employee_id.as_str(), punch);
            }
            acc
        });

    let mut statuses: BTreeMap<&str, EmployeeStatus> = roster
        .iter()
        .map(|employee_id| {
            (
                employee_id.as_str(),
                EmployeeStatus {
                    employee_id: employee_id.clone(),
                    status: PunchStatus::ClockedOut,
                    since: None,
                },
            )
        })
        .collect();

    for (employee_id, punch) in latest {
        statuses.insert(
            employee_id,
            EmployeeStatus {
                employee_id: employee_id.to_string(),
                status: punch.punch_type.into(),
                since: Some(punch.occurred_at),
            },
        );
    }

    statuses.into_values().collect()
}

/// Returns only the employees who are working or on a break.
pub fn currently_working(punches: &[PunchEvent]) -> Vec<EmployeeStatus> {
    derive_statuses(punches, &[])
        .into_iter()
        .filter(|s| s.status.is_on_shift())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewPunch, PunchType};
    use chrono::{NaiveDateTime, Utc};

    fn punch(employee_id: &str, punch_type: PunchType, time: &str) -> PunchEvent {
        PunchEvent::from_new(
            NewPunch {
                employee_id: employee_id.to_string(),
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

    // ==========================================================================
    // LS-001: clock in then break start reports on_break
    // ==========================================================================
    #[test]
    fn test_ls_001_on_break_after_break_start() {
        let punches = vec![
            punch("emp_001", PunchType::ClockIn, "09:00"),
            punch("emp_001", PunchType::BreakStart, "12:00"),
        ];

        let statuses = currently_working(&punches);

        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].employee_id, "emp_001");
        assert_eq!(statuses[0].status, PunchStatus::OnBreak);
    }

    #[test]
    fn test_clocked_out_employees_are_not_currently_working() {
        let punches = vec![
            punch("emp_001", PunchType::ClockIn, "09:00"),
            punch("emp_001", PunchType::ClockOut, "17:00"),
            punch("emp_002", PunchType::ClockIn, "10:00"),
        ];

        let statuses = currently_working(&punches);

        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].employee_id, "emp_002");
        assert_eq!(statuses[0].status, PunchStatus::Working);
    }

    #[test]
    fn test_last_punch_is_chronological_not_insertion_order() {
        let punches = vec![
            punch("emp_001", PunchType::BreakEnd, "12:30"),
            punch("emp_001", PunchType::BreakStart, "12:00"),
        ];

        let statuses = derive_statuses(&punches, &[]);
        assert_eq!(statuses[0].status, PunchStatus::Working);
    }

    #[test]
    fn test_roster_members_without_punches_are_clocked_out() {
        let punches = vec![punch("emp_002", PunchType::ClockIn, "09:00")];
        let roster = vec!["emp_001".to_string(), "emp_002".to_string()];

        let statuses = derive_statuses(&punches, &roster);

        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].employee_id, "emp_001");
        assert_eq!(statuses[0].status, PunchStatus::ClockedOut);
        assert_eq!(statuses[1].status, PunchStatus::Working);
    }

    #[test]
    fn test_no_punches_yields_empty_view() {
        assert!(currently_working(&[]).is_empty());
    }
}
