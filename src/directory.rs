//! Employee directory boundary.
//!
//! The engine does not own employees. It asks the directory for two things:
//! an employee's hourly rate at a business, and who belongs to a business.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee's membership of a business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// The employee.
    pub employee_id: String,
    /// The business they work at.
    pub business_id: String,
    /// Hourly rate at this business, if one is on file.
    #[serde(default)]
    pub pay_rate: Option<Decimal>,
}

/// Read access to employee memberships.
pub trait EmployeeDirectory: Send + Sync {
    /// Returns the employee's hourly rate at a business, if known.
    fn pay_rate(&self, employee_id: &str, business_id: &str) -> Option<Decimal>;

    /// Returns the ids of every employee of a business, sorted.
    fn members(&self, business_id: &str) -> Vec<String>;
}

/// Directory backed by a fixed list of memberships.
///
/// # Example
///
/// ```
/// use attendance_engine::directory::{EmployeeDirectory, Membership, MemoryDirectory};
/// use rust_decimal::Decimal;
///
/// let directory = MemoryDirectory::new(vec![Membership {
///     employee_id: "emp_001".to_string(),
///     business_id: "biz_001".to_string(),
///     pay_rate: Some(Decimal::from(25)),
/// }]);
///
/// assert_eq!(directory.pay_rate("emp_001", "biz_001"), Some(Decimal::from(25)));
/// assert_eq!(directory.pay_rate("emp_001", "biz_002"), None);
/// assert_eq!(directory.members("biz_001"), vec!["emp_001".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    memberships: BTreeMap<(String, String), Option<Decimal>>,
}

impl MemoryDirectory {
    /// Builds a directory; a later membership for the same pair wins.
    pub fn new(memberships: impl IntoIterator<Item = Membership>) -> Self {
        let memberships = memberships
            .into_iter()
            .map(|m| ((m.business_id, m.employee_id), m.pay_rate))
            .collect();
        Self { memberships }
    }
}

impl EmployeeDirectory for MemoryDirectory {
    fn pay_rate(&self, employee_id: &str, business_id: &str) -> Option<Decimal> {
        self.memberships
            .get(&(business_id.to_string(), employee_id.to_string()))
            .copied()
            .flatten()
    }

    fn members(&self, business_id: &str) -> Vec<String> {
        self.memberships
            .keys()
            .filter(|(business, _)| business == business_id)
            .map(|(_, employee)| employee.clone())
            .collect()
    }
}
