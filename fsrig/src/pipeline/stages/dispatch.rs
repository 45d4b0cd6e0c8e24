//! Stage 3: Dispatch.
//!
//! Walks the filesystem matrix in order. Per entry: derive the four
//! creator parameters, consult the exclusion table, then either invoke
//! the creator or record a silent skip. The first creator failure aborts
//! the run; there is no per-entry isolation.

use crate::create::{CreateRequest, FilesystemCreator};
use crate::errors::RigResult;
use crate::pipeline::RunContext;
use crate::report::{EntryOutcome, RunReport};

pub fn run(ctx: &RunContext, creator: &dyn FilesystemCreator) -> RigResult<RunReport> {
    let mut report = RunReport::default();
    let dev = ctx.layout.image_path();

    for (fstype, profile) in &ctx.matrix {
        if let Some(reason) = ctx.exclusions.skip_reason(fstype, &ctx.facts) {
            // A skip is not an error: no output beyond the debug line.
            tracing::debug!(fstype = %fstype, reason, "skipping filesystem");
            report.record(EntryOutcome::skipped(fstype, profile, reason));
            continue;
        }

        let req = CreateRequest {
            dev: dev.clone(),
            fstype: fstype.clone(),
            fssize: profile.fssize.clone(),
            grow: profile.grow,
        };
        creator.create(&req)?;
        report.record(EntryOutcome::created(fstype, profile));
    }

    Ok(report)
}

/// The decisions `run` would take, without invoking anything.
pub fn plan(ctx: &RunContext) -> RunReport {
    let mut report = RunReport::default();
    for (fstype, profile) in &ctx.matrix {
        let outcome = match ctx.exclusions.skip_reason(fstype, &ctx.facts) {
            Some(reason) => EntryOutcome::skipped(fstype, profile, reason),
            None => EntryOutcome::created(fstype, profile),
        };
        report.record(outcome);
    }
    report
}
