//! CLI definition and argument parsing for fsrig-cli.
//! This module contains all CLI-related code including the main CLI
//! structure, subcommands, and flag definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fsrig::{HostFacts, RigOptions};

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "fsrig", author, version, about = "Filesystem test-image harness")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Provision the configured filesystems
    Run(crate::commands::run::RunArgs),

    /// Show what a run would do, without touching the filesystem
    Plan(crate::commands::plan::PlanArgs),

    /// Print the detected host facts
    Facts(crate::commands::facts::FactsArgs),
}

// ============================================================================
// GLOBAL FLAGS
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct GlobalFlags {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Harness home directory
    #[arg(long, global = true, env = "FSRIG_HOME")]
    pub home: Option<PathBuf>,

    /// Configuration file (defaults to config.json in the home directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GlobalFlags {
    /// Resolve options: home directory, then config file, then defaults.
    pub fn load_options(&self) -> anyhow::Result<RigOptions> {
        let home_dir = self.home.clone().unwrap_or_else(|| {
            let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push(".fsrig");
            path
        });

        match self.config.as_deref() {
            Some(path) => crate::config::load_config_file(&home_dir, path),
            None => Ok(crate::config::load_config(&home_dir)),
        }
    }
}

// ============================================================================
// MATRIX FLAGS
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct MatrixFlags {
    /// Restrict the run to these filesystem types (repeatable)
    #[arg(long = "only", value_name = "FSTYPE")]
    pub only: Vec<String>,
}

impl MatrixFlags {
    /// Apply the filter to the configured matrix.
    pub fn apply_to(&self, options: &mut RigOptions) {
        if self.only.is_empty() {
            return;
        }
        options.matrix.retain(|fstype, _| self.only.contains(fstype));
        for fstype in &self.only {
            if !options.matrix.contains_key(fstype) {
                tracing::warn!("filesystem '{}' is not in the matrix, ignoring", fstype);
            }
        }
    }
}

// ============================================================================
// FACT OVERRIDE FLAGS
// ============================================================================

/// Pretend to run on a different platform. Useful for previewing skip
/// decisions from another host.
#[derive(Args, Debug, Clone)]
pub struct PretendFlags {
    /// Override the detected system name (e.g. FreeBSD)
    #[arg(long, value_name = "NAME")]
    pub pretend_system: Option<String>,

    /// Override the detected distribution (e.g. Ubuntu)
    #[arg(long, value_name = "NAME")]
    pub pretend_distribution: Option<String>,

    /// Override the detected release codename (e.g. trusty)
    #[arg(long, value_name = "NAME")]
    pub pretend_release: Option<String>,
}

impl PretendFlags {
    pub fn apply_to(&self, facts: &mut HostFacts) {
        if let Some(ref system) = self.pretend_system {
            facts.system = system.clone();
        }
        if let Some(ref distribution) = self.pretend_distribution {
            facts.distribution = distribution.clone();
        }
        if let Some(ref release) = self.pretend_release {
            facts.release = release.clone();
        }
    }
}
