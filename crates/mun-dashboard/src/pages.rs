//! Page templates for dashboard views.

use mun_core::{AttendanceStatus, AttendanceSummary, Participant, ParticipantFilter, StaffMember};
use mun_store::Lookups;

use crate::loader::{LoadPhase, StaffDashboardLoader};
use crate::templates::{
    card, cell, empty_state, error_banner, escape, layout, select, spinner, stats_card,
    status_badge, table,
};

/// Element id of the JSON props block on the staff page.
pub const STAFF_PROPS_ID: &str = "staff-dashboard-props";

// =============================================================================
// Home Page
// =============================================================================

pub fn home_page(summary: &AttendanceSummary, lookups: &Lookups) -> String {
    let overall = &summary.overall;
    let stats = format!(
        r##"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
            {total}
            {present}
            {absent}
            {rate}
        </div>"##,
        total = stats_card("Participants", &overall.total.to_string(), "users", "blue"),
        present = stats_card(
            "Present",
            &(overall.present + overall.present_on_account).to_string(),
            "user-check",
            "green"
        ),
        absent = stats_card("Absent", &overall.absent.to_string(), "user-times", "red"),
        rate = stats_card(
            "Attendance",
            &format!("{:.0}%", summary.attendance_rate() * 100.0),
            "chart-pie",
            "purple"
        ),
    );

    let rows: Vec<String> = summary
        .by_committee
        .iter()
        .map(|(committee_id, counts)| {
            format!(
                r#"<tr>{}{}{}{}{}</tr>"#,
                cell(&format!(
                    r#"<a class="text-primary-600 hover:underline" href="/participants?committee={}">{}</a>"#,
                    escape(&urlencoding::encode(committee_id)),
                    escape(lookups.committee_name(committee_id))
                )),
                cell(&counts.present.to_string()),
                cell(&counts.present_on_account.to_string()),
                cell(&counts.absent.to_string()),
                cell(&format!("{:.0}%", counts.attendance_rate() * 100.0)),
            )
        })
        .collect();

    let committees = if rows.is_empty() {
        empty_state("inbox", "No participants", "No participants have been registered yet.")
    } else {
        table(
            &["Committee", "Present", "On account", "Absent", "Rate"],
            &rows,
        )
    };

    let quick_actions = card(
        "Quick Actions",
        r##"<div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <a href="/participants?status=Absent" class="flex items-center gap-4 p-4 bg-gray-50 dark:bg-gray-700/50 rounded-lg hover:bg-gray-100">
                <i class="fas fa-user-clock text-red-500"></i>
                <span class="font-medium text-gray-900 dark:text-white">Review absentees</span>
            </a>
            <a href="/staff" class="flex items-center gap-4 p-4 bg-gray-50 dark:bg-gray-700/50 rounded-lg hover:bg-gray-100">
                <i class="fas fa-id-badge text-blue-500"></i>
                <span class="font-medium text-gray-900 dark:text-white">Staff roster</span>
            </a>
        </div>"##,
    );

    let content = format!(
        r##"<div class="mb-8">
            <h1 class="text-3xl font-bold text-gray-900 dark:text-white">Conference Attendance</h1>
            <p class="mt-2 text-gray-600 dark:text-gray-400">Live roll call across all committees.</p>
        </div>
        {stats}
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2">{by_committee}</div>
            {quick_actions}
        </div>"##,
        by_committee = card("By Committee", &committees),
    );

    layout("Home", &content)
}

// =============================================================================
// About Page
// =============================================================================

pub fn about_page() -> String {
    let content = card(
        "About",
        r##"<div class="space-y-4 text-gray-700 dark:text-gray-300">
            <p>This dashboard tracks delegate attendance for the Model United Nations conference.</p>
            <p>Chairs and the secretariat mark each delegate as <strong>Present</strong>,
               <strong>Absent</strong> or <strong>Present On Account</strong> during roll call.
               Schools and committees are public reference data; the delegate and staff
               rosters are only visible after signing in.</p>
        </div>"##,
    );
    layout("About", &content)
}

// =============================================================================
// Participants Page
// =============================================================================

pub fn participants_page(
    participants: &[Participant],
    lookups: &Lookups,
    filter: &ParticipantFilter,
    summary: &AttendanceSummary,
) -> String {
    let mut school_options = vec![(String::new(), "All schools".to_string(), filter.school_id.is_none())];
    school_options.extend(lookups.schools.iter().map(|s| {
        (s.id.clone(), s.name.clone(), filter.school_id.as_deref() == Some(s.id.as_str()))
    }));

    let mut committee_options =
        vec![(String::new(), "All committees".to_string(), filter.committee_id.is_none())];
    committee_options.extend(lookups.committees.iter().map(|c| {
        (c.id.clone(), c.name.clone(), filter.committee_id.as_deref() == Some(c.id.as_str()))
    }));

    let mut status_options = vec![(String::new(), "Any status".to_string(), filter.status.is_none())];
    status_options.extend(AttendanceStatus::ALL.iter().map(|s| {
        (s.as_str().to_string(), s.as_str().to_string(), filter.status == Some(*s))
    }));

    let filters = format!(
        r##"<form method="GET" action="/participants" class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-6 items-end">
            {school}
            {committee}
            {status}
            <button type="submit" class="bg-primary-600 hover:bg-primary-700 text-white px-4 py-2 rounded-lg font-medium">Filter</button>
        </form>"##,
        school = select("school", "School", &school_options),
        committee = select("committee", "Committee", &committee_options),
        status = select("status", "Status", &status_options),
    );

    let list = if participants.is_empty() {
        empty_state("search", "No participants", "No participants match these filters.")
    } else {
        let rows: Vec<String> = participants
            .iter()
            .map(|p| participant_row(p, lookups))
            .collect();
        table(&["Name", "School", "Committee", "Status", "Mark"], &rows)
    };

    let overall = &summary.overall;
    let content = format!(
        r##"<div class="mb-6 flex items-end justify-between">
            <div>
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">Participants</h1>
                <p class="mt-2 text-gray-600 dark:text-gray-400">{total} shown · {present} present · {on_account} on account · {absent} absent</p>
            </div>
        </div>
        {filters}
        {list}"##,
        total = overall.total,
        present = overall.present,
        on_account = overall.present_on_account,
        absent = overall.absent,
        list = card("Roll Call", &list),
    );

    layout("Participants", &content)
}

/// DOM id for a participant row. ASCII letters, digits and `-` pass through;
/// every other byte becomes `_xx`, so the id is also a valid CSS selector.
pub fn participant_dom_id(id: &str) -> String {
    let mut dom_id = String::from("participant-");
    for byte in id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            dom_id.push(char::from(byte));
        } else {
            dom_id.push_str(&format!("_{byte:02x}"));
        }
    }
    dom_id
}

/// A participant row with quick-action buttons. Swapped in place after an update.
pub fn participant_row(participant: &Participant, lookups: &Lookups) -> String {
    let row_id = participant_dom_id(&participant.id);
    let action = format!(
        "/participants/{}/attendance",
        escape(&urlencoding::encode(&participant.id))
    );

    let buttons: String = AttendanceStatus::ALL
        .iter()
        .filter(|s| **s != participant.status)
        .map(|s| {
            format!(
                r##"<button class="text-xs px-2 py-1 rounded bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 mr-1"
                        hx-post="{action}" hx-vals='{{"status": "{status}"}}' hx-target="#{row_id}" hx-swap="outerHTML">{status}</button>"##,
                status = s.as_str(),
            )
        })
        .collect();

    let avatar = participant
        .image_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<img src="{}" alt="" class="inline h-6 w-6 rounded-full mr-2">"#,
                escape(url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<tr id="{row_id}" data-status="{status}">{name}{school}{committee}{badge}{buttons}</tr>"#,
        status = participant.status.as_str(),
        name = cell(&format!("{avatar}{}", escape(&participant.name))),
        school = cell(&escape(lookups.school_name(&participant.school_id))),
        committee = cell(&escape(lookups.committee_name(&participant.committee_id))),
        badge = cell(&status_badge(participant.status)),
        buttons = cell(&buttons),
    )
}

// =============================================================================
// Staff Dashboard
// =============================================================================

/// Staff dashboard shell. It only carries public team names; the roster is
/// requested by the browser through the session-gated fragment endpoint, and
/// only when the loader has seen a session.
pub fn staff_page(loader: &StaffDashboardLoader) -> String {
    let props = serde_json::to_string(&loader.props())
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    let options: Vec<(String, String, bool)> = loader
        .teams()
        .iter()
        .enumerate()
        .map(|(i, team)| (team.clone(), team.clone(), i == 0))
        .collect();

    let body = match loader.phase() {
        LoadPhase::Error => error_banner(loader.error().unwrap_or("Failed to load staff teams")),
        LoadPhase::Loading => r##"<p class="text-gray-600 dark:text-gray-400">
                <a class="text-primary-600 hover:underline" href="/login?redirect=%2Fstaff">Sign in</a>
                to view the staff roster.
            </p>"##
            .to_string(),
        LoadPhase::AuthenticatedLoading | LoadPhase::Ready => format!(
            r##"<form hx-get="/staff/members" hx-target="#staff-members" hx-trigger="load, change" class="mb-6 max-w-xs">
                {team_select}
            </form>
            <div id="staff-members">{roster}</div>"##,
            team_select = select("team", "Team", &options),
            roster = staff_members_fragment(loader),
        ),
    };

    let content = format!(
        r##"<script type="application/json" id="{STAFF_PROPS_ID}" data-phase="{phase}">{props}</script>
        <div class="mb-6">
            <h1 class="text-3xl font-bold text-gray-900 dark:text-white">Staff</h1>
            <p class="mt-2 text-gray-600 dark:text-gray-400">Conference staff by team.</p>
        </div>
        {roster}"##,
        phase = loader.phase().as_str(),
        roster = card("Roster", &body),
    );

    layout("Staff", &content)
}

/// Roster fragment rendered once the loader has settled.
pub fn staff_members_fragment(loader: &StaffDashboardLoader) -> String {
    match loader.phase() {
        LoadPhase::Ready if loader.members().is_empty() => {
            empty_state("users-slash", "No staff", "No staff members in this team.")
        }
        LoadPhase::Ready => {
            let rows: Vec<String> = loader.members().iter().map(staff_row).collect();
            table(&["Name", "Team", "Role", "Email"], &rows)
        }
        LoadPhase::Error => error_banner(loader.error().unwrap_or("Failed to load staff")),
        LoadPhase::Loading | LoadPhase::AuthenticatedLoading => spinner().to_string(),
    }
}

fn staff_row(member: &StaffMember) -> String {
    format!(
        "<tr>{}{}{}{}</tr>",
        cell(&escape(&member.name)),
        cell(&escape(&member.team)),
        cell(&escape(member.role.as_deref().unwrap_or("-"))),
        cell(&escape(member.email.as_deref().unwrap_or("-"))),
    )
}
