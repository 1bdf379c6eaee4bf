//! Attendance tallies for the dashboards.

use crate::model::{AttendanceStatus, Participant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-status counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub present_on_account: usize,
}

impl StatusCounts {
    fn record(&mut self, status: AttendanceStatus) {
        self.total += 1;
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::PresentOnAccount => self.present_on_account += 1,
        }
    }

    pub fn count(&self, status: AttendanceStatus) -> usize {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::PresentOnAccount => self.present_on_account,
        }
    }

    /// Share of participants that are present, on account or in person.
    pub fn attendance_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.present + self.present_on_account) as f64 / self.total as f64
    }
}

/// Attendance summary across all participants and per committee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub overall: StatusCounts,
    /// Keyed by committee id.
    pub by_committee: BTreeMap<String, StatusCounts>,
    pub generated_at: DateTime<Utc>,
}

impl AttendanceSummary {
    pub fn tally<'a>(participants: impl IntoIterator<Item = &'a Participant>) -> Self {
        let mut overall = StatusCounts::default();
        let mut by_committee: BTreeMap<String, StatusCounts> = BTreeMap::new();

        for participant in participants {
            overall.record(participant.status);
            by_committee
                .entry(participant.committee_id.clone())
                .or_default()
                .record(participant.status);
        }

        Self {
            overall,
            by_committee,
            generated_at: Utc::now(),
        }
    }

    pub fn attendance_rate(&self) -> f64 {
        self.overall.attendance_rate()
    }
}
