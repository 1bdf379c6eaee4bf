//! API request and response types.

use mun_core::{AttendanceStatus, Participant, ParticipantFilter, StaffMember};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

// =============================================================================
// Participants
// =============================================================================

/// Query parameters for participant listings. Empty values mean "any".
#[derive(Debug, Default, Deserialize)]
pub struct ParticipantQuery {
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub committee: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ParticipantQuery {
    pub fn to_filter(&self) -> Result<ParticipantFilter, DashboardError> {
        let status = non_empty(&self.status)
            .map(|s| s.parse::<AttendanceStatus>())
            .transpose()
            .map_err(|e| DashboardError::InvalidRequest(e.to_string()))?;

        Ok(ParticipantFilter {
            school_id: non_empty(&self.school).map(str::to_string),
            committee_id: non_empty(&self.committee).map(str::to_string),
            status,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Quick-action form for changing a participant's attendance.
#[derive(Debug, Deserialize)]
pub struct AttendanceForm {
    pub status: String,
}

impl AttendanceForm {
    pub fn status(&self) -> Result<AttendanceStatus, DashboardError> {
        self.status
            .parse()
            .map_err(|e: mun_core::ModelError| DashboardError::InvalidRequest(e.to_string()))
    }
}

/// Response for participant listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParticipantListResponse {
    pub participants: Vec<Participant>,
    pub total: usize,
}

// =============================================================================
// Staff
// =============================================================================

/// Team selector for the staff roster.
#[derive(Debug, Default, Deserialize)]
pub struct TeamQuery {
    #[serde(default)]
    pub team: Option<String>,
}

/// Response for the staff roster.
#[derive(Debug, Serialize, Deserialize)]
pub struct StaffMembersResponse {
    pub team: Option<String>,
    pub staff_members: Vec<StaffMember>,
}
