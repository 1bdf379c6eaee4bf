//! Two-phase loading for the staff dashboard.
//!
//! Phase one resolves public lookup data (team names) before the page is
//! rendered. Phase two fetches the privileged staff roster, and may only start
//! once a session exists:
//!
//! ```text
//! Loading --session_established--> AuthenticatedLoading --members_loaded--> Ready
//!    |                                   |
//!    +--------------fail-----------------+--> Error
//! ```

use mun_core::{ALL_TEAMS, StaffMember};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the staff dashboard is in its load sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    Loading,
    AuthenticatedLoading,
    Ready,
    Error,
}

impl LoadPhase {
    /// Wire name, as used in the page's `data-phase` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            LoadPhase::Loading => "loading",
            LoadPhase::AuthenticatedLoading => "authenticated_loading",
            LoadPhase::Ready => "ready",
            LoadPhase::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("cannot apply '{event}' to a loader in phase {from:?}")]
    InvalidTransition {
        from: LoadPhase,
        event: &'static str,
    },
}

/// Data embedded in the staff page for the client to hydrate from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffDashboardProps {
    pub initial_staff_members: Vec<StaffMember>,
    pub system_staff_teams: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct StaffDashboardLoader {
    phase: LoadPhase,
    teams: Vec<String>,
    members: Vec<StaffMember>,
    error: Option<String>,
}

impl Default for StaffDashboardLoader {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl StaffDashboardLoader {
    /// Start a loader with phase-one team names already resolved.
    pub fn new(teams: Vec<String>) -> Self {
        let mut options = Vec::with_capacity(teams.len() + 1);
        options.push(ALL_TEAMS.to_string());
        options.extend(teams.into_iter().filter(|t| t != ALL_TEAMS));

        Self {
            phase: LoadPhase::Loading,
            teams: options,
            members: Vec::new(),
            error: None,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Team filter options, starting with "All Teams".
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Props for the initial render. The roster is always empty here; it is
    /// only fetched after a session is established.
    pub fn props(&self) -> StaffDashboardProps {
        StaffDashboardProps {
            initial_staff_members: Vec::new(),
            system_staff_teams: self.teams.clone(),
        }
    }

    pub fn session_established(&mut self) -> Result<(), LoadError> {
        self.transition(LoadPhase::Loading, LoadPhase::AuthenticatedLoading, "session_established")
    }

    pub fn members_loaded(&mut self, members: Vec<StaffMember>) -> Result<(), LoadError> {
        self.transition(LoadPhase::AuthenticatedLoading, LoadPhase::Ready, "members_loaded")?;
        self.members = members;
        Ok(())
    }

    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), LoadError> {
        match self.phase {
            LoadPhase::Loading | LoadPhase::AuthenticatedLoading => {
                self.phase = LoadPhase::Error;
                self.error = Some(message.into());
                Ok(())
            }
            from => Err(LoadError::InvalidTransition { from, event: "fail" }),
        }
    }

    fn transition(
        &mut self,
        expected: LoadPhase,
        next: LoadPhase,
        event: &'static str,
    ) -> Result<(), LoadError> {
        if self.phase != expected {
            return Err(LoadError::InvalidTransition {
                from: self.phase,
                event,
            });
        }
        self.phase = next;
        Ok(())
    }
}

/// Map a team query value to a store filter. "All Teams" and blanks mean no filter.
pub fn team_filter(team: Option<&str>) -> Option<&str> {
    team.map(str::trim)
        .filter(|t| !t.is_empty() && *t != ALL_TEAMS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, team: &str) -> StaffMember {
        StaffMember {
            id: name.to_lowercase(),
            name: name.to_string(),
            team: team.to_string(),
            role: None,
            email: None,
        }
    }

    #[test]
    fn test_initial_props_seed_all_teams() {
        let loader = StaffDashboardLoader::new(vec!["Executive".into(), "Logistics".into()]);
        let props = loader.props();
        assert!(props.initial_staff_members.is_empty());
        assert_eq!(
            props.system_staff_teams,
            vec!["All Teams", "Executive", "Logistics"]
        );
        assert_eq!(loader.phase(), LoadPhase::Loading);

        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_all_teams_not_duplicated() {
        let loader = StaffDashboardLoader::new(vec!["All Teams".into(), "Press".into()]);
        assert_eq!(loader.teams(), ["All Teams", "Press"]);
    }

    #[test]
    fn test_happy_path() {
        let mut loader = StaffDashboardLoader::default();
        loader.session_established().unwrap();
        assert_eq!(loader.phase(), LoadPhase::AuthenticatedLoading);

        loader
            .members_loaded(vec![member("Ada", "Executive")])
            .unwrap();
        assert_eq!(loader.phase(), LoadPhase::Ready);
        assert_eq!(loader.members().len(), 1);
        assert!(loader.props().initial_staff_members.is_empty());
    }

    #[test]
    fn test_members_require_session() {
        let mut loader = StaffDashboardLoader::default();
        let err = loader.members_loaded(vec![]).unwrap_err();
        assert_eq!(
            err,
            LoadError::InvalidTransition {
                from: LoadPhase::Loading,
                event: "members_loaded"
            }
        );
        assert_eq!(loader.phase(), LoadPhase::Loading);
    }

    #[test]
    fn test_failure_is_terminal() {
        let mut loader = StaffDashboardLoader::default();
        loader.session_established().unwrap();
        loader.fail("connection refused").unwrap();
        assert_eq!(loader.phase(), LoadPhase::Error);
        assert_eq!(loader.error(), Some("connection refused"));

        assert!(loader.session_established().is_err());
        assert!(loader.members_loaded(vec![]).is_err());
        assert!(loader.fail("again").is_err());
    }

    #[test]
    fn test_ready_cannot_fail() {
        let mut loader = StaffDashboardLoader::default();
        loader.session_established().unwrap();
        loader.members_loaded(vec![]).unwrap();
        assert!(matches!(
            loader.fail("late"),
            Err(LoadError::InvalidTransition {
                from: LoadPhase::Ready,
                ..
            })
        ));
    }

    #[test]
    fn test_team_filter() {
        assert_eq!(team_filter(None), None);
        assert_eq!(team_filter(Some("")), None);
        assert_eq!(team_filter(Some("All Teams")), None);
        assert_eq!(team_filter(Some(" Logistics ")), Some("Logistics"));
    }
}
