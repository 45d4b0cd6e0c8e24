use clap::Args;
use fsrig::{HostFacts, MkfsCreator, Pipeline, RunContext};

use crate::cli::{GlobalFlags, MatrixFlags};

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub matrix: MatrixFlags,
}

pub fn execute(args: RunArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    let mut options = global.load_options()?;
    args.matrix.apply_to(&mut options);
    options.sanitize()?;

    let facts = HostFacts::detect();
    let pipeline = Pipeline::new(RunContext::new(facts, &options));
    let report = pipeline.run(&MkfsCreator::new())?;

    println!(
        "{} filesystem(s) created, {} skipped",
        report.created(),
        report.skipped()
    );
    Ok(())
}
