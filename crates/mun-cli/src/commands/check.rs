//! `mun check` command implementation.
//!
//! Validates configuration and credential sources without opening any
//! connection:
//! - the admin service-account credential resolves and parses
//! - the public datastore URL and key are available
//! - at least one dashboard user can sign in

use anyhow::Result;
use mun_core::MunConfig;
use mun_store::ServiceAccountKey;

/// Severity level for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => f.pad("INFO"),
            Severity::Warning => f.pad("WARN"),
            Severity::Error => f.pad("ERROR"),
        }
    }
}

/// A single check finding.
#[derive(Debug, Clone)]
pub struct CheckFinding {
    pub severity: Severity,
    pub category: &'static str,
    pub message: String,
}

impl CheckFinding {
    fn error(category: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category,
            message: message.into(),
        }
    }

    fn warning(category: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            message: message.into(),
        }
    }

    fn info(category: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            category,
            message: message.into(),
        }
    }
}

/// Run every check against `config`.
pub fn collect(config: &MunConfig) -> Vec<CheckFinding> {
    let mut findings = Vec::new();
    check_admin(config, &mut findings);
    check_public(config, &mut findings);
    check_dashboard(config, &mut findings);
    findings
}

fn check_admin(config: &MunConfig, findings: &mut Vec<CheckFinding>) {
    let blob = match config.admin.resolve_credential() {
        Ok(blob) => blob,
        Err(e) => {
            findings.push(CheckFinding::error("admin", e.to_string()));
            return;
        }
    };
    match ServiceAccountKey::parse(&blob) {
        Ok(key) => findings.push(CheckFinding::info(
            "admin",
            format!("service account for project '{}'", key.project_id),
        )),
        Err(e) => findings.push(CheckFinding::error("admin", e.to_string())),
    }
}

fn check_public(config: &MunConfig, findings: &mut Vec<CheckFinding>) {
    let public = &config.public;
    match public.resolve_url() {
        Some(url) => findings.push(CheckFinding::info("public", format!("url {url}"))),
        None => findings.push(CheckFinding::warning(
            "public",
            format!("{} is not set; lookups will fail", public.url_env),
        )),
    }
    if public.resolve_key().is_none() {
        findings.push(CheckFinding::warning(
            "public",
            format!("none of {} is set; lookups will fail", public.key_envs.join(", ")),
        ));
    }
}

fn check_dashboard(config: &MunConfig, findings: &mut Vec<CheckFinding>) {
    let auth = &config.dashboard.auth;
    if auth.allow_anonymous {
        findings.push(CheckFinding::warning(
            "dashboard",
            "allow_anonymous is enabled; privileged pages need no sign-in",
        ));
    } else if !auth.is_configured() {
        findings.push(CheckFinding::error(
            "dashboard",
            "no user has a password; nobody can sign in",
        ));
    }
    if !auth.allow_anonymous && auth.resolve_session_secret().is_none() {
        findings.push(CheckFinding::warning(
            "dashboard",
            format!(
                "no session secret in {}; sign-ins end when the dashboard restarts",
                auth.session_secret_env
            ),
        ));
    }
    for user in auth.users.iter().filter(|u| u.get_password().is_none()) {
        findings.push(CheckFinding::warning(
            "dashboard",
            format!("user '{}' has no password", user.username),
        ));
    }
}

pub fn run(config: &MunConfig) -> Result<()> {
    let findings = collect(config);
    for finding in &findings {
        println!(
            "[{:5}] {:<10} {}",
            finding.severity, finding.category, finding.message
        );
    }

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    if errors > 0 {
        anyhow::bail!("configuration has {errors} error(s)");
    }
    println!("All checks passed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mun_core::BasicAuthUser;
    use std::io::Write;

    fn isolated() -> MunConfig {
        let mut config = MunConfig::default();
        config.admin.credential_env = "MUN_TEST_UNSET_CREDENTIAL".into();
        config.public.url_env = "MUN_TEST_UNSET_URL".into();
        config.public.key_envs = vec!["MUN_TEST_UNSET_KEY".into()];
        config.dashboard.auth.session_secret_env = "MUN_TEST_UNSET_SESSION_SECRET".into();
        config
    }

    fn errors(findings: &[CheckFinding]) -> Vec<&CheckFinding> {
        findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .collect()
    }

    #[test]
    fn test_missing_everything() {
        let findings = collect(&isolated());
        let errors = errors(&findings);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].category, "admin");
        assert_eq!(errors[1].category, "dashboard");
        assert_eq!(
            findings
                .iter()
                .filter(|f| f.category == "public" && f.severity == Severity::Warning)
                .count(),
            2
        );
        assert!(findings.iter().any(|f| f.message.contains("no session secret")));
    }

    #[test]
    fn test_complete_configuration() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"type":"service_account","project_id":"mun-2026","client_email":"svc@mun.test","private_key":"k","database_url":"postgres://localhost/mun"}}"#
        )
        .unwrap();

        let mut config = isolated();
        config.admin.credential_file = Some(file.path().to_path_buf());
        config.public.url = Some("https://mun.test".into());
        config.public.anon_key = Some("anon".into());
        config.dashboard.auth.users = vec![BasicAuthUser {
            username: "chair".into(),
            password: Some("gavel".into()),
            password_env: None,
        }];
        config.dashboard.auth.session_secret = Some("long-random-secret".into());

        let findings = collect(&config);
        assert!(errors(&findings).is_empty());
        assert!(!findings.iter().any(|f| f.message.contains("session secret")));
        assert!(findings.iter().any(|f| f.message.contains("mun-2026")));
        assert!(run(&config).is_ok());
    }

    #[test]
    fn test_malformed_credential_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"type":"authorized_user"}}"#).unwrap();

        let mut config = isolated();
        config.admin.credential_file = Some(file.path().to_path_buf());
        config.dashboard.auth.allow_anonymous = true;

        let findings = collect(&config);
        let errors = errors(&findings);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].category, "admin");
        assert!(run(&config).is_err());
    }
}
