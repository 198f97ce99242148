//! Timesheet transition notifications.
//!
//! Every lifecycle transition is published on a broadcast channel. Delivery
//! (email, SMS, chat) belongs to whoever subscribes; the engine only emits.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::models::Timesheet;

/// Default number of events buffered per subscriber.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Which transition happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimesheetEventKind {
    /// A timesheet was submitted.
    #[serde(rename = "timesheet.submitted")]
    Submitted,
    /// A timesheet was approved.
    #[serde(rename = "timesheet.approved")]
    Approved,
    /// A timesheet was rejected.
    #[serde(rename = "timesheet.rejected")]
    Rejected,
}

impl TimesheetEventKind {
    /// Returns the event name, e.g. `timesheet.submitted`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimesheetEventKind::Submitted => "timesheet.submitted",
            TimesheetEventKind::Approved => "timesheet.approved",
            TimesheetEventKind::Rejected => "timesheet.rejected",
        }
    }
}

/// A transition event carrying the full timesheet after the transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetEvent {
    /// Which transition happened.
    #[serde(rename = "event")]
    pub kind: TimesheetEventKind,
    /// The timesheet as stored after the transition.
    pub timesheet: Timesheet,
}

/// Publishes timesheet events to any number of subscribers.
#[derive(Debug, Clone)]
pub struct TimesheetNotifier {
    event_tx: broadcast::Sender<TimesheetEvent>,
}

impl TimesheetNotifier {
    /// Creates a notifier buffering up to `capacity` events per subscriber.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (event_tx, _) = broadcast::channel(capacity.max(1));
        Self { event_tx }
    }

    /// Publishes an event, returning how many subscribers received it.
    ///
    /// Having no subscribers is not an error.
    pub fn publish(&self, kind: TimesheetEventKind, timesheet: &Timesheet) -> usize {
        let event = TimesheetEvent {
            kind,
            timesheet: timesheet.clone(),
        };
        self.event_tx.send(event).unwrap_or(0)
    }

    /// Subscribes to future events.
    pub fn subscribe(&self) -> broadcast::Receiver<TimesheetEvent> {
        self.event_tx.subscribe()
    }
}

impl Default for TimesheetNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}
