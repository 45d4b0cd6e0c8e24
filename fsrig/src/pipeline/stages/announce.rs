//! Stage 1: Announce.
//!
//! Emits two diagnostic lines before any work happens: the harness name
//! and the basename of the image the run will target. Pure output, no
//! state mutation, no error conditions.

use crate::pipeline::RunContext;

pub fn run(ctx: &RunContext) {
    tracing::info!(harness = env!("CARGO_PKG_NAME"), "starting filesystem run");

    let image = ctx.layout.image_path();
    let basename = image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::info!(image = %basename, "target image");
}
