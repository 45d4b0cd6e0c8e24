//! Run outcome reporting.

use serde::{Deserialize, Serialize};

use crate::options::FsProfile;

/// What happened to a single matrix entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    /// The creator was invoked and succeeded.
    Created,
    /// An exclusion rule fired; the creator was never invoked.
    Skipped { reason: String },
}

/// Per-entry record: the derived parameters plus the outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOutcome {
    pub fstype: String,
    pub fssize: String,
    pub grow: bool,
    pub status: EntryStatus,
}

impl EntryOutcome {
    pub fn created(fstype: &str, profile: &FsProfile) -> Self {
        Self {
            fstype: fstype.to_string(),
            fssize: profile.fssize.clone(),
            grow: profile.grow,
            status: EntryStatus::Created,
        }
    }

    pub fn skipped(fstype: &str, profile: &FsProfile, reason: &str) -> Self {
        Self {
            fstype: fstype.to_string(),
            fssize: profile.fssize.clone(),
            grow: profile.grow,
            status: EntryStatus::Skipped {
                reason: reason.to_string(),
            },
        }
    }
}

/// Outcome of a whole run, in matrix order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub entries: Vec<EntryOutcome>,
}

impl RunReport {
    pub fn record(&mut self, outcome: EntryOutcome) {
        self.entries.push(outcome);
    }

    pub fn created(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == EntryStatus::Created)
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.entries.len() - self.created()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut report = RunReport::default();
        assert!(report.is_empty());

        let ext4 = FsProfile::new("512M", false);
        let btrfs = FsProfile::new("1G", true);
        report.record(EntryOutcome::created("ext4", &ext4));
        report.record(EntryOutcome::skipped("btrfs", &btrfs, "not here"));

        assert_eq!(report.created(), 1);
        assert_eq!(report.skipped(), 1);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_outcome_carries_profile_values() {
        let profile = FsProfile::new("1G", true);
        let outcome = EntryOutcome::created("btrfs", &profile);
        assert_eq!(outcome.fssize, "1G");
        assert!(outcome.grow);
    }
}
