//! # mun-store
//!
//! Datastore clients for the attendance tracker.
//!
//! - [`AdminDb`]: privileged Postgres handle, built from a service-account credential
//! - [`PublicClient`]: anonymous REST client for public lookup tables
//!
//! Both are constructed once by the binary and handed to the dashboard behind
//! the [`AttendanceStore`] and [`LookupDirectory`] traits.

use async_trait::async_trait;
use mun_core::{
    AttendanceStatus, Committee, Participant, ParticipantFilter, School, StaffMember,
};

pub mod admin;
pub mod error;
pub mod fetch;
pub mod public;

pub use admin::{AdminDb, ServiceAccountKey};
pub use error::StoreError;
pub use fetch::{Lookups, get_system_staff_teams, load_lookups};
pub use public::PublicClient;

/// Privileged reads and writes. Only reachable behind an authenticated session.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Participants matching `filter`, ordered by name. Records with an
    /// unknown status are dropped.
    async fn list_participants(
        &self,
        filter: &ParticipantFilter,
    ) -> Result<Vec<Participant>, StoreError>;

    async fn get_participant(&self, id: &str) -> Result<Option<Participant>, StoreError>;

    /// Set a participant's attendance, returning the updated record.
    async fn set_attendance(
        &self,
        id: &str,
        status: AttendanceStatus,
    ) -> Result<Participant, StoreError>;

    /// The staff roster, optionally restricted to one team.
    async fn list_staff_members(&self, team: Option<&str>) -> Result<Vec<StaffMember>, StoreError>;
}

/// Public lookup data, readable without a session.
#[async_trait]
pub trait LookupDirectory: Send + Sync {
    async fn list_schools(&self) -> Result<Vec<School>, StoreError>;

    async fn list_committees(&self) -> Result<Vec<Committee>, StoreError>;

    async fn system_staff_teams(&self) -> Result<Vec<String>, StoreError>;
}
