//! Request handlers for the dashboard.

use axum::{
    Extension, Form, Json,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Html,
};
use mun_core::{AttendanceSummary, ParticipantFilter};
use mun_store::{Lookups, get_system_staff_teams, load_lookups};
use serde_json::json;

use crate::api_types::{AttendanceForm, ParticipantQuery, TeamQuery};
use crate::auth::{Session, current_session};
use crate::error::DashboardError;
use crate::loader::{StaffDashboardLoader, team_filter};
use crate::pages;
use crate::state::AppState;

/// Lookup data for display purposes. Participant pages still render with raw
/// ids when the public datastore is unavailable.
async fn display_lookups(state: &AppState) -> Lookups {
    load_lookups(state.directory().as_ref())
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Lookup data unavailable, showing raw ids");
            Lookups::default()
        })
}

// =============================================================================
// Page Handlers (HTML responses)
// =============================================================================

pub async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "mun-dashboard" }))
}

pub async fn about() -> Html<String> {
    Html(pages::about_page())
}

/// Handler for the dashboard home page.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, DashboardError> {
    let participants = state
        .store()
        .list_participants(&ParticipantFilter::default())
        .await?;
    let lookups = display_lookups(&state).await;
    let summary = AttendanceSummary::tally(&participants);

    Ok(Html(pages::home_page(&summary, &lookups)))
}

/// Handler for the participants page.
pub async fn participants(
    State(state): State<AppState>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Html<String>, DashboardError> {
    let filter = query.to_filter()?;
    let participants = state.store().list_participants(&filter).await?;
    let lookups = display_lookups(&state).await;
    let summary = AttendanceSummary::tally(&participants);

    Ok(Html(pages::participants_page(
        &participants,
        &lookups,
        &filter,
        &summary,
    )))
}

/// Quick action: set a participant's attendance and return the updated row.
pub async fn set_attendance(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Form(form): Form<AttendanceForm>,
) -> Result<Html<String>, DashboardError> {
    let status = form.status()?;
    let participant = state.store().set_attendance(&id, status).await?;
    tracing::info!(
        participant_id = %id,
        status = %status,
        by = %session.username,
        "Attendance marked"
    );

    let lookups = display_lookups(&state).await;
    Ok(Html(pages::participant_row(&participant, &lookups)))
}

/// Staff dashboard, phase one: resolve public team names and render the shell.
///
/// This route is public. When the request already carries a session the
/// loader moves on to `AuthenticatedLoading` and the page asks for the roster.
pub async fn staff(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, DashboardError> {
    let loader = match get_system_staff_teams(state.directory().as_ref()).await {
        Ok(teams) => {
            let mut loader = StaffDashboardLoader::new(teams);
            if let Some(session) = current_session(&state, &headers) {
                tracing::debug!(username = %session.username, "Staff page with session");
                loader.session_established()?;
            }
            loader
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load staff teams");
            let mut loader = StaffDashboardLoader::default();
            loader.fail(format!("Staff teams are unavailable: {e}"))?;
            loader
        }
    };

    Ok(Html(pages::staff_page(&loader)))
}

/// Staff dashboard, phase two: fetch the roster once a session exists.
///
/// The loader is rebuilt per request. This route sits behind
/// [`require_session`](crate::auth::require_session), so the session is
/// established before the handler runs and the loader starts from there.
pub async fn staff_members(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(query): Query<TeamQuery>,
) -> Result<Html<String>, DashboardError> {
    let mut loader = StaffDashboardLoader::default();
    loader.session_established()?;
    tracing::debug!(username = %session.username, "Loading staff roster");

    let team = team_filter(query.team.as_deref());
    match state.store().list_staff_members(team).await {
        Ok(members) => loader.members_loaded(members)?,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load staff roster");
            loader.fail(e.to_string())?;
        }
    }

    Ok(Html(pages::staff_members_fragment(&loader)))
}

// =============================================================================
// API Handlers (JSON responses)
// =============================================================================

pub mod api {
    use super::*;
    use crate::api_types::{ParticipantListResponse, StaffMembersResponse};

    pub async fn participants(
        State(state): State<AppState>,
        Query(query): Query<ParticipantQuery>,
    ) -> Result<Json<ParticipantListResponse>, DashboardError> {
        let filter = query.to_filter()?;
        let participants = state.store().list_participants(&filter).await?;
        Ok(Json(ParticipantListResponse {
            total: participants.len(),
            participants,
        }))
    }

    pub async fn summary(
        State(state): State<AppState>,
    ) -> Result<Json<AttendanceSummary>, DashboardError> {
        let participants = state
            .store()
            .list_participants(&ParticipantFilter::default())
            .await?;
        Ok(Json(AttendanceSummary::tally(&participants)))
    }

    pub async fn staff(
        State(state): State<AppState>,
        Query(query): Query<TeamQuery>,
    ) -> Result<Json<StaffMembersResponse>, DashboardError> {
        let team = team_filter(query.team.as_deref());
        let staff_members = state.store().list_staff_members(team).await?;
        Ok(Json(StaffMembersResponse {
            team: team.map(str::to_string),
            staff_members,
        }))
    }

    /// Public lookup data. No session required.
    pub async fn lookups(State(state): State<AppState>) -> Result<Json<Lookups>, DashboardError> {
        Ok(Json(load_lookups(state.directory().as_ref()).await?))
    }
}
