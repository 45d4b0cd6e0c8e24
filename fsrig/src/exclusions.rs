//! Platform exclusion rules.
//!
//! Some filesystem/platform combinations cannot be provisioned and must
//! be skipped rather than attempted. Rather than inlining those
//! conditionals in the dispatcher, they live here as a registered table
//! of `(filesystem type, platform predicate) -> reason` entries, so each
//! rule is data and independently testable.

use crate::facts::HostFacts;

/// Predicate over host facts. Matching is exact and case sensitive,
/// following the uname/os-release spellings `HostFacts` carries.
#[derive(Clone, Debug)]
pub enum PlatformPredicate {
    /// Matches the kernel/system name (`"FreeBSD"`).
    System(&'static str),

    /// Matches the distribution, optionally pinned to a release codename.
    Distribution {
        name: &'static str,
        release: Option<&'static str>,
    },
}

impl PlatformPredicate {
    pub fn matches(&self, facts: &HostFacts) -> bool {
        match self {
            Self::System(name) => facts.system == *name,
            Self::Distribution { name, release } => {
                facts.distribution == *name
                    && release.map_or(true, |r| facts.release == r)
            }
        }
    }
}

/// A single skip rule: the filesystem type it applies to, the platform
/// it fires on, and the reason recorded for the skip.
#[derive(Clone, Debug)]
pub struct ExclusionRule {
    pub fstype: &'static str,
    pub predicate: PlatformPredicate,
    pub reason: &'static str,
}

/// Ordered table of exclusion rules. First match wins.
#[derive(Clone, Debug, Default)]
pub struct ExclusionTable {
    rules: Vec<ExclusionRule>,
}

impl ExclusionTable {
    /// Empty table: nothing is ever skipped.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in rules.
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                ExclusionRule {
                    fstype: "btrfs",
                    predicate: PlatformPredicate::System("FreeBSD"),
                    reason: "btrfs tooling is not available on FreeBSD",
                },
                // The btrfs-progs shipped with trusty cannot create
                // filesystems as small as the test images.
                ExclusionRule {
                    fstype: "btrfs",
                    predicate: PlatformPredicate::Distribution {
                        name: "Ubuntu",
                        release: Some("trusty"),
                    },
                    reason: "btrfs-progs on Ubuntu trusty cannot create small filesystems",
                },
            ],
        }
    }

    pub fn push(&mut self, rule: ExclusionRule) {
        self.rules.push(rule);
    }

    /// Why `fstype` must be skipped on this host, if at all.
    ///
    /// `None` means the entry proceeds: a rule only fires when BOTH its
    /// filesystem type and its platform predicate match.
    pub fn skip_reason(&self, fstype: &str, facts: &HostFacts) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.fstype == fstype && rule.predicate.matches(facts))
            .map(|rule| rule.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freebsd() -> HostFacts {
        HostFacts::new("FreeBSD", "FreeBSD", "")
    }

    fn trusty() -> HostFacts {
        HostFacts::new("Linux", "Ubuntu", "trusty")
    }

    fn debian() -> HostFacts {
        HostFacts::new("Linux", "Debian", "bookworm")
    }

    #[test]
    fn test_btrfs_skipped_on_freebsd() {
        let table = ExclusionTable::builtin();
        assert!(table.skip_reason("btrfs", &freebsd()).is_some());
    }

    #[test]
    fn test_btrfs_skipped_on_trusty() {
        let table = ExclusionTable::builtin();
        assert!(table.skip_reason("btrfs", &trusty()).is_some());
    }

    #[test]
    fn test_btrfs_allowed_elsewhere() {
        let table = ExclusionTable::builtin();
        assert_eq!(table.skip_reason("btrfs", &debian()), None);
        // Other Ubuntu releases are fine
        let jammy = HostFacts::new("Linux", "Ubuntu", "jammy");
        assert_eq!(table.skip_reason("btrfs", &jammy), None);
    }

    #[test]
    fn test_other_fstypes_never_skipped() {
        let table = ExclusionTable::builtin();
        for fstype in ["ext2", "ext3", "ext4", "xfs", "vfat"] {
            assert_eq!(table.skip_reason(fstype, &freebsd()), None);
            assert_eq!(table.skip_reason(fstype, &trusty()), None);
        }
    }

    #[test]
    fn test_release_pin_is_exact() {
        let predicate = PlatformPredicate::Distribution {
            name: "Ubuntu",
            release: Some("trusty"),
        };
        assert!(predicate.matches(&trusty()));
        assert!(!predicate.matches(&HostFacts::new("Linux", "Ubuntu", "xenial")));
        assert!(!predicate.matches(&HostFacts::new("Linux", "Debian", "trusty")));
    }

    #[test]
    fn test_distribution_without_release_pin() {
        let predicate = PlatformPredicate::Distribution {
            name: "Ubuntu",
            release: None,
        };
        assert!(predicate.matches(&trusty()));
        assert!(predicate.matches(&HostFacts::new("Linux", "Ubuntu", "jammy")));
        assert!(!predicate.matches(&debian()));
    }

    #[test]
    fn test_empty_table_skips_nothing() {
        let table = ExclusionTable::empty();
        assert_eq!(table.skip_reason("btrfs", &freebsd()), None);
    }

    #[test]
    fn test_first_match_wins() {
        let mut table = ExclusionTable::empty();
        table.push(ExclusionRule {
            fstype: "xfs",
            predicate: PlatformPredicate::System("Linux"),
            reason: "first",
        });
        table.push(ExclusionRule {
            fstype: "xfs",
            predicate: PlatformPredicate::System("Linux"),
            reason: "second",
        });
        assert_eq!(table.skip_reason("xfs", &debian()), Some("first"));
    }
}
