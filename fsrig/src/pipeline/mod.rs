//! Run orchestration.
//!
//! ## Architecture
//!
//! A run is an ordered pipeline of stages over one immutable context:
//!
//! ```text
//! Announce ──→ Setup ──→ Dispatch
//! ```
//!
//! Stages execute strictly in order, fail fast, and share no mutable
//! state; the dispatcher is handed the `FilesystemCreator` to invoke per
//! qualifying matrix entry.

mod stages;

use crate::create::FilesystemCreator;
use crate::errors::RigResult;
use crate::exclusions::ExclusionTable;
use crate::facts::HostFacts;
use crate::layout::RigLayout;
use crate::options::{FsMatrix, RigOptions};
use crate::report::RunReport;

/// Immutable context handed to every stage.
#[derive(Clone, Debug)]
pub struct RunContext {
    pub facts: HostFacts,
    pub layout: RigLayout,
    pub matrix: FsMatrix,
    pub exclusions: ExclusionTable,
}

impl RunContext {
    /// Build a context from options and facts, with the built-in
    /// exclusion table.
    pub fn new(facts: HostFacts, options: &RigOptions) -> Self {
        Self {
            facts,
            layout: RigLayout::new(&options.home_dir),
            matrix: options.matrix.clone(),
            exclusions: ExclusionTable::builtin(),
        }
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionTable) -> Self {
        self.exclusions = exclusions;
        self
    }
}

/// Executes the stages over a context.
pub struct Pipeline {
    ctx: RunContext,
}

impl Pipeline {
    pub fn new(ctx: RunContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &RunContext {
        &self.ctx
    }

    /// Run all stages. The first failure aborts the run.
    pub fn run(&self, creator: &dyn FilesystemCreator) -> RigResult<RunReport> {
        stages::announce::run(&self.ctx);
        stages::setup::run(&self.ctx)?;
        stages::dispatch::run(&self.ctx, creator)
    }

    /// Evaluate the dispatch decisions without touching the filesystem
    /// or invoking any creator.
    pub fn plan(&self) -> RunReport {
        stages::dispatch::plan(&self.ctx)
    }
}
