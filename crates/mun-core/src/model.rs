//! Attendance domain types.
//!
//! Records coming out of either datastore are decoded into the `*Record`
//! shapes first and then validated into the strongly typed entities. A
//! participant whose status is not one of the three known values never
//! becomes a [`Participant`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors raised while validating domain records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("invalid attendance status '{0}'")]
    InvalidStatus(String),

    #[error("{entity} record is missing '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
}

/// Attendance state of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    #[serde(rename = "Present On Account")]
    PresentOnAccount,
}

impl AttendanceStatus {
    /// All statuses in display order.
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::PresentOnAccount,
    ];

    /// The exact string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::PresentOnAccount => "Present On Account",
        }
    }

    /// Whether the participant counts towards the attendance rate.
    pub fn is_attending(&self) -> bool {
        !matches!(self, AttendanceStatus::Absent)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttendanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ModelError::InvalidStatus(s.to_string()))
    }
}

/// A conference attendee tracked for attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub school_id: String,
    pub committee_id: String,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Unvalidated participant as stored. The external database does not enforce
/// non-null names or statuses, so both are optional here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub school_id: String,
    #[serde(default)]
    pub committee_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl TryFrom<ParticipantRecord> for Participant {
    type Error = ModelError;

    fn try_from(record: ParticipantRecord) -> Result<Self, Self::Error> {
        if record.id.trim().is_empty() {
            return Err(ModelError::MissingField {
                entity: "participant",
                field: "id",
            });
        }
        let name = record
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ModelError::MissingField {
                entity: "participant",
                field: "name",
            })?;
        let status = record
            .status
            .ok_or(ModelError::MissingField {
                entity: "participant",
                field: "status",
            })?
            .parse()?;
        Ok(Participant {
            id: record.id,
            name,
            school_id: record.school_id,
            committee_id: record.committee_id,
            status,
            image_url: record.image_url.filter(|url| !url.is_empty()),
        })
    }
}

/// A school, used to group participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: String,
    pub name: String,
}

/// A committee, the second lookup dimension for participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Committee {
    pub id: String,
    pub name: String,
}

/// A member of the conference staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Filter applied when listing participants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantFilter {
    #[serde(default)]
    pub school_id: Option<String>,
    #[serde(default)]
    pub committee_id: Option<String>,
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
}

impl ParticipantFilter {
    pub fn matches(&self, participant: &Participant) -> bool {
        self.school_id
            .as_deref()
            .is_none_or(|id| participant.school_id == id)
            && self
                .committee_id
                .as_deref()
                .is_none_or(|id| participant.committee_id == id)
            && self.status.is_none_or(|s| participant.status == s)
    }
}
