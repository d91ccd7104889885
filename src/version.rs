//! Registry version-freshness check.
//!
//! One blocking GET against the package registry, compared against the local
//! version by exact string equality (build metadata after `+` is ignored on
//! the local side). Failures never propagate: the caller always gets a
//! three-way status it can render.

use serde::Deserialize;

use crate::consts::REGISTRY_TIMEOUT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum VersionStatus {
    UpToDate { remote: String },
    Outdated { local: String, remote: String },
    Unknown { reason: String },
}

impl VersionStatus {
    /// The latest published version, or an empty string when the registry
    /// could not be reached.
    pub(crate) fn remote_version(&self) -> &str {
        match self {
            VersionStatus::UpToDate { remote } => remote,
            VersionStatus::Outdated { remote, .. } => remote,
            VersionStatus::Unknown { .. } => "",
        }
    }

    /// Short machine-readable tag for JSON output.
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            VersionStatus::UpToDate { .. } => "up-to-date",
            VersionStatus::Outdated { .. } => "outdated",
            VersionStatus::Unknown { .. } => "unknown",
        }
    }

    /// Human-readable freshness message.
    pub(crate) fn message(&self) -> String {
        match self {
            VersionStatus::UpToDate { .. } => "Your bidskit version is up-to-date :-)".to_string(),
            VersionStatus::Outdated { local, remote } => {
                format!("NB: Your bidskit version is NOT up-to-date: {local} -> {remote}")
            }
            VersionStatus::Unknown { .. } => {
                "(Could not check the registry for new bidskit versions)".to_string()
            }
        }
    }
}

#[derive(Deserialize)]
struct RegistryResponse {
    info: RegistryInfo,
}

#[derive(Deserialize)]
struct RegistryInfo {
    version: String,
}

/// Compare the local version against the latest published one.
///
/// Network and parse failures are swallowed into `Unknown` with a
/// best-effort diagnostic on stderr.
pub(crate) fn check_version(local: &str, registry_url: &str) -> VersionStatus {
    match fetch_remote_version(registry_url) {
        Ok(remote) => compare_versions(local, &remote),
        Err(reason) => {
            eprintln!("{reason}");
            VersionStatus::Unknown { reason }
        }
    }
}

/// Exact equality after stripping any `+build` suffix from the local
/// version. A lexically older remote still counts as "outdated"; the
/// registry is taken as the source of truth.
pub(crate) fn compare_versions(local: &str, remote: &str) -> VersionStatus {
    let base = local.split('+').next().unwrap_or(local);
    if base == remote {
        VersionStatus::UpToDate {
            remote: remote.to_string(),
        }
    } else {
        VersionStatus::Outdated {
            local: local.to_string(),
            remote: remote.to_string(),
        }
    }
}

fn fetch_remote_version(url: &str) -> Result<String, String> {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(REGISTRY_TIMEOUT))
        .build();
    let agent: ureq::Agent = config.into();

    let response = agent
        .get(url)
        .call()
        .map_err(|e| format!("Could not reach {url}: {e}"))?;
    let mut body = response.into_body();
    let parsed: RegistryResponse = serde_json::from_reader(body.as_reader())
        .map_err(|e| format!("Unexpected response from {url}: {e}"))?;
    Ok(parsed.info.version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_versions_are_up_to_date() {
        let status = compare_versions("4.3.2", "4.3.2");
        assert_eq!(
            status,
            VersionStatus::UpToDate {
                remote: "4.3.2".to_string()
            }
        );
        assert!(status.message().contains("up-to-date"));
        assert_eq!(status.remote_version(), "4.3.2");
    }

    #[test]
    fn different_versions_are_outdated() {
        let status = compare_versions("4.3.2", "4.4.0");
        assert_eq!(
            status,
            VersionStatus::Outdated {
                local: "4.3.2".to_string(),
                remote: "4.4.0".to_string()
            }
        );
        let msg = status.message();
        assert!(msg.contains("NOT up-to-date"));
        assert!(msg.contains("4.3.2"));
        assert!(msg.contains("4.4.0"));
    }

    #[test]
    fn local_build_metadata_is_ignored() {
        let status = compare_versions("4.3.2+git.abc123", "4.3.2");
        assert!(matches!(status, VersionStatus::UpToDate { .. }));
    }

    #[test]
    fn lexically_older_remote_still_counts_as_outdated() {
        // No semver ordering: any mismatch is reported as outdated
        let status = compare_versions("4.4.0", "4.3.9");
        assert!(matches!(status, VersionStatus::Outdated { .. }));
    }

    #[test]
    fn unreachable_registry_yields_unknown() {
        // Port 1 refuses immediately; no external network involved
        let status = check_version("4.3.2", "http://127.0.0.1:1/json");
        assert!(matches!(status, VersionStatus::Unknown { .. }));
        assert_eq!(status.remote_version(), "");
        assert!(!status.message().is_empty());
    }

    #[test]
    fn registry_response_deserializes_info_version() {
        let parsed: RegistryResponse =
            serde_json::from_str(r#"{"info": {"version": "4.4.0", "name": "bidskit"}}"#).unwrap();
        assert_eq!(parsed.info.version, "4.4.0");
    }
}
