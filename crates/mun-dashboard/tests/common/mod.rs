// Shared fixtures for dashboard integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use mun_core::{
    AttendanceStatus, AuthConfig, BasicAuthUser, Committee, DashboardConfig, Participant,
    ParticipantFilter, School, StaffMember,
};
use mun_dashboard::{AppState, SessionSigner, auth::SESSION_COOKIE_NAME, create_router};
use mun_store::{AttendanceStore, LookupDirectory, StoreError};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
pub struct MockStore {
    pub participants: Mutex<Vec<Participant>>,
    pub staff: Vec<StaffMember>,
    pub fail_staff: bool,
}

#[async_trait]
impl AttendanceStore for MockStore {
    async fn list_participants(
        &self,
        filter: &ParticipantFilter,
    ) -> Result<Vec<Participant>, StoreError> {
        Ok(self
            .participants
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn get_participant(&self, id: &str) -> Result<Option<Participant>, StoreError> {
        Ok(self
            .participants
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn set_attendance(
        &self,
        id: &str,
        status: AttendanceStatus,
    ) -> Result<Participant, StoreError> {
        let mut participants = self.participants.lock().unwrap();
        let participant = participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("participant '{id}'")))?;
        participant.status = status;
        Ok(participant.clone())
    }

    async fn list_staff_members(&self, team: Option<&str>) -> Result<Vec<StaffMember>, StoreError> {
        if self.fail_staff {
            return Err(StoreError::NotFound("staff_members table".to_string()));
        }
        Ok(self
            .staff
            .iter()
            .filter(|m| team.is_none_or(|t| m.team == t))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MockDirectory {
    pub teams: Vec<String>,
    pub unavailable: bool,
}

#[async_trait]
impl LookupDirectory for MockDirectory {
    async fn list_schools(&self) -> Result<Vec<School>, StoreError> {
        if self.unavailable {
            return Err(StoreError::NotConfigured("url"));
        }
        Ok(vec![School {
            id: "s-1".to_string(),
            name: "Lincoln High".to_string(),
        }])
    }

    async fn list_committees(&self) -> Result<Vec<Committee>, StoreError> {
        if self.unavailable {
            return Err(StoreError::NotConfigured("url"));
        }
        Ok(vec![
            Committee {
                id: "ga".to_string(),
                name: "General Assembly".to_string(),
            },
            Committee {
                id: "sc".to_string(),
                name: "Security Council".to_string(),
            },
        ])
    }

    async fn system_staff_teams(&self) -> Result<Vec<String>, StoreError> {
        if self.unavailable {
            return Err(StoreError::NotConfigured("url"));
        }
        Ok(self.teams.clone())
    }
}

pub fn participant(id: &str, committee: &str, status: AttendanceStatus) -> Participant {
    Participant {
        id: id.to_string(),
        name: format!("Delegate {id}"),
        school_id: "s-1".to_string(),
        committee_id: committee.to_string(),
        status,
        image_url: None,
    }
}

pub fn staff(name: &str, team: &str) -> StaffMember {
    StaffMember {
        id: name.to_lowercase(),
        name: name.to_string(),
        team: team.to_string(),
        role: None,
        email: None,
    }
}

pub fn seeded_store() -> MockStore {
    MockStore {
        participants: Mutex::new(vec![
            participant("p1", "ga", AttendanceStatus::Present),
            participant("p2", "ga", AttendanceStatus::Absent),
            participant("p3", "sc", AttendanceStatus::PresentOnAccount),
        ]),
        staff: vec![
            staff("Ada", "Executive"),
            staff("Grace", "Logistics"),
            staff("Linus", "Logistics"),
        ],
        fail_staff: false,
    }
}

pub fn dashboard_config() -> DashboardConfig {
    DashboardConfig {
        auth: AuthConfig {
            users: vec![BasicAuthUser {
                username: "chair".to_string(),
                password: Some("gavel".to_string()),
                password_env: None,
            }],
            session_secret_env: "MUN_TEST_UNSET_SESSION_SECRET".to_string(),
            session_secret: Some("dashboard-test-secret".to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn app_state(store: MockStore, directory: MockDirectory) -> AppState {
    AppState::new(&dashboard_config(), Arc::new(store), Arc::new(directory))
}

pub fn app(store: MockStore, directory: MockDirectory) -> Router {
    create_router(app_state(store, directory))
}

/// A cookie the dashboard itself would have issued to `username`.
pub fn session_cookie_for(username: &str) -> String {
    let token = SessionSigner::from_config(&dashboard_config().auth)
        .issue(username)
        .unwrap();
    format!("{SESSION_COOKIE_NAME}={token}")
}

pub fn session_cookie() -> String {
    session_cookie_for("chair")
}

pub async fn get(app: &Router, uri: &str, authenticated: bool) -> (StatusCode, String) {
    let mut builder = Request::builder().uri(uri);
    if authenticated {
        builder = builder.header(header::COOKIE, session_cookie());
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
