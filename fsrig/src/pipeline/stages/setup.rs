//! Stage 2: Setup.
//!
//! Unconditional environment preparation, always before the first
//! dispatch iteration. Failure here is fatal; nothing recovers it.

use crate::errors::{RigError, RigResult};
use crate::pipeline::RunContext;

pub fn run(ctx: &RunContext) -> RigResult<()> {
    let testing_dir = ctx.layout.testing_dir();
    std::fs::create_dir_all(&testing_dir).map_err(|e| {
        RigError::Setup(format!(
            "failed to create testing directory {}: {}",
            testing_dir.display(),
            e
        ))
    })?;

    // A stale image from an aborted run must not leak into this one.
    let image = ctx.layout.image_path();
    match std::fs::remove_file(&image) {
        Ok(()) => {
            tracing::debug!(image = %image.display(), "removed stale image");
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(RigError::Setup(format!(
                "failed to remove stale image {}: {}",
                image.display(),
                e
            )));
        }
    }

    tracing::debug!(dir = %testing_dir.display(), "testing directory ready");
    Ok(())
}
