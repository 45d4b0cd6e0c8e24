//! fsrig: a filesystem test-image provisioning harness.
//!
//! Given a matrix of filesystem types and per-type profiles, fsrig runs
//! an ordered pipeline (announce, setup, dispatch) that provisions a
//! test image per entry through a [`FilesystemCreator`], skipping the
//! combinations the host platform cannot support according to a
//! data-driven exclusion table.

pub mod create;
pub mod errors;
pub mod exclusions;
pub mod facts;
pub mod image;
pub mod layout;
pub mod options;
pub mod pipeline;
pub mod report;
pub mod size;

pub use create::{CreateRequest, FilesystemCreator, MkfsCreator};
pub use errors::{RigError, RigResult};
pub use exclusions::{ExclusionRule, ExclusionTable, PlatformPredicate};
pub use facts::HostFacts;
pub use layout::RigLayout;
pub use options::{FsMatrix, FsProfile, RigOptions};
pub use pipeline::{Pipeline, RunContext};
pub use report::{EntryOutcome, EntryStatus, RunReport};
