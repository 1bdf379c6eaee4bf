//! Read queries used while rendering pages.

use mun_core::{Committee, School};
use serde::Serialize;
use std::collections::HashSet;

use crate::LookupDirectory;
use crate::error::StoreError;

/// Team names for the staff dashboard filter.
///
/// Names are trimmed, blanks dropped and duplicates removed, keeping the
/// order the directory returned them in.
pub async fn get_system_staff_teams(
    directory: &dyn LookupDirectory,
) -> Result<Vec<String>, StoreError> {
    let raw = directory.system_staff_teams().await?;
    let mut seen = HashSet::new();
    Ok(raw
        .into_iter()
        .map(|team| team.trim().to_string())
        .filter(|team| !team.is_empty() && seen.insert(team.clone()))
        .collect())
}

/// All public lookup data, fetched concurrently.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Lookups {
    pub schools: Vec<School>,
    pub committees: Vec<Committee>,
    pub teams: Vec<String>,
}

impl Lookups {
    /// Display name for a school id, falling back to the id itself.
    pub fn school_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.schools
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.as_str())
            .unwrap_or(id)
    }

    /// Display name for a committee id, falling back to the id itself.
    pub fn committee_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.committees
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or(id)
    }
}

pub async fn load_lookups(directory: &dyn LookupDirectory) -> Result<Lookups, StoreError> {
    let (schools, committees, teams) = tokio::try_join!(
        directory.list_schools(),
        directory.list_committees(),
        get_system_staff_teams(directory),
    )?;
    Ok(Lookups {
        schools,
        committees,
        teams,
    })
}
