//! Shared vocabulary for the MUN attendance tracker: participants, schools,
//! committees, staff, attendance tallies and configuration.

pub mod config;
pub mod model;
pub mod summary;

pub use config::{
    AdminConfig, AuthConfig, BasicAuthUser, CONFIG_PATH_ENV, ConfigError, DEFAULT_CONFIG_PATH,
    DashboardConfig, MunConfig, PoolConfig, PublicConfig,
};
pub use model::{
    AttendanceStatus, Committee, ModelError, Participant, ParticipantFilter, ParticipantRecord,
    School, StaffMember,
};
pub use summary::{AttendanceSummary, StatusCounts};

/// Filter value meaning "every team" on the staff dashboard.
pub const ALL_TEAMS: &str = "All Teams";
