//! `mun summary` - print attendance totals from the admin datastore.

use mun_core::{AttendanceSummary, MunConfig, ParticipantFilter};
use mun_store::{AdminDb, AttendanceStore, Lookups, PublicClient, load_lookups};
use std::fmt::Write;

pub async fn run(config: &MunConfig, json: bool) -> anyhow::Result<()> {
    let admin = AdminDb::connect(&config.admin).await?;
    let participants = admin
        .list_participants(&ParticipantFilter::default())
        .await?;
    let summary = AttendanceSummary::tally(&participants);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let public = PublicClient::from_config(&config.public);
    let lookups = load_lookups(&public).await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Committee names unavailable, showing ids");
        Lookups::default()
    });
    print!("{}", render(&summary, &lookups));
    Ok(())
}

/// Plain-text table of per-committee counts followed by the overall line.
pub fn render(summary: &AttendanceSummary, lookups: &Lookups) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<32} {:>7} {:>10} {:>6} {:>6}",
        "Committee", "Present", "On account", "Absent", "Rate"
    );
    let _ = writeln!(out, "{}", "-".repeat(65));
    for (committee_id, counts) in &summary.by_committee {
        let _ = writeln!(
            out,
            "{:<32} {:>7} {:>10} {:>6} {:>5.0}%",
            lookups.committee_name(committee_id),
            counts.present,
            counts.present_on_account,
            counts.absent,
            counts.attendance_rate() * 100.0
        );
    }
    let overall = &summary.overall;
    let _ = writeln!(out, "{}", "-".repeat(65));
    let _ = writeln!(
        out,
        "{:<32} {:>7} {:>10} {:>6} {:>5.0}%",
        format!("All ({} participants)", overall.total),
        overall.present,
        overall.present_on_account,
        overall.absent,
        summary.attendance_rate() * 100.0
    );
    out
}
