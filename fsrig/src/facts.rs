//! Host platform facts.
//!
//! `HostFacts` is the read-only snapshot of the platform the harness runs
//! on. It is built once (detected or injected) and passed into the
//! dispatcher, so exclusion rules never reach into the environment
//! themselves.

use serde::{Deserialize, Serialize};
use sysinfo::System;

const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Platform facts consumed by the exclusion predicates.
///
/// Fields follow the conventional uname/os-release spellings, e.g.
/// `system = "FreeBSD"`, `distribution = "Ubuntu"`, `release = "trusty"`.
/// Unknown values are empty strings, which never match a predicate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostFacts {
    /// Kernel/system name (`Linux`, `FreeBSD`, `Darwin`, ...).
    pub system: String,
    /// Distribution name (`Ubuntu`, `Debian`, ...). Empty off Linux.
    pub distribution: String,
    /// Distribution release codename (`trusty`, `bookworm`, ...).
    pub release: String,
}

impl HostFacts {
    /// Construct facts explicitly (tests, CLI overrides).
    pub fn new(
        system: impl Into<String>,
        distribution: impl Into<String>,
        release: impl Into<String>,
    ) -> Self {
        Self {
            system: system.into(),
            distribution: distribution.into(),
            release: release.into(),
        }
    }

    /// Detect facts from the running host.
    pub fn detect() -> Self {
        let facts = Self {
            system: system_name().to_string(),
            distribution: System::name().unwrap_or_default(),
            release: detect_release().unwrap_or_default(),
        };
        tracing::debug!(
            system = %facts.system,
            distribution = %facts.distribution,
            release = %facts.release,
            "detected host facts"
        );
        facts
    }
}

/// Map the compile-time OS identifier to its uname spelling.
fn system_name() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "freebsd" => "FreeBSD",
        "macos" => "Darwin",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        other => other,
    }
}

fn detect_release() -> Option<String> {
    if !cfg!(target_os = "linux") {
        return None;
    }
    let content = std::fs::read_to_string(OS_RELEASE_PATH).ok()?;
    codename_from_os_release(&content)
}

/// Extract the release codename from os-release content.
///
/// Prefers `VERSION_CODENAME`, falls back to the `UBUNTU_CODENAME`
/// spelling used by derivatives. Values may be quoted or bare.
fn codename_from_os_release(content: &str) -> Option<String> {
    let mut fallback = None;
    for line in content.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("VERSION_CODENAME=") {
            let value = value.trim().trim_matches('"');
            if !value.is_empty() {
                return Some(value.to_string());
            }
        } else if let Some(value) = line.strip_prefix("UBUNTU_CODENAME=") {
            let value = value.trim().trim_matches('"');
            if !value.is_empty() && fallback.is_none() {
                fallback = Some(value.to_string());
            }
        }
    }
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codename_quoted() {
        let content = "NAME=\"Ubuntu\"\nVERSION_CODENAME=\"trusty\"\n";
        assert_eq!(
            codename_from_os_release(content),
            Some("trusty".to_string())
        );
    }

    #[test]
    fn test_codename_bare() {
        let content = "ID=debian\nVERSION_CODENAME=bookworm\n";
        assert_eq!(
            codename_from_os_release(content),
            Some("bookworm".to_string())
        );
    }

    #[test]
    fn test_ubuntu_codename_fallback() {
        let content = "ID=linuxmint\nUBUNTU_CODENAME=jammy\n";
        assert_eq!(codename_from_os_release(content), Some("jammy".to_string()));
    }

    #[test]
    fn test_version_codename_wins_over_fallback() {
        let content = "UBUNTU_CODENAME=jammy\nVERSION_CODENAME=vanessa\n";
        assert_eq!(
            codename_from_os_release(content),
            Some("vanessa".to_string())
        );
    }

    #[test]
    fn test_no_codename() {
        let content = "NAME=\"CentOS Linux\"\nVERSION_ID=\"7\"\n";
        assert_eq!(codename_from_os_release(content), None);
    }

    #[test]
    fn test_injected_facts() {
        let facts = HostFacts::new("FreeBSD", "", "");
        assert_eq!(facts.system, "FreeBSD");
        assert!(facts.distribution.is_empty());
    }
}
