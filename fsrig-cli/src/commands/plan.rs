use clap::Args;
use fsrig::{EntryStatus, HostFacts, Pipeline, RunContext, RunReport};
use tabled::Tabled;

use crate::cli::{GlobalFlags, MatrixFlags, PretendFlags};
use crate::formatter::{self, OutputFormat};

#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub matrix: MatrixFlags,

    #[command(flatten)]
    pub pretend: PretendFlags,

    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "FSTYPE")]
    fstype: String,
    #[tabled(rename = "SIZE")]
    fssize: String,
    #[tabled(rename = "GROW")]
    grow: bool,
    #[tabled(rename = "ACTION")]
    action: String,
}

pub fn execute(args: PlanArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    let format = OutputFormat::from_str(&args.format)?;

    let mut options = global.load_options()?;
    args.matrix.apply_to(&mut options);
    options.sanitize()?;

    let mut facts = HostFacts::detect();
    args.pretend.apply_to(&mut facts);

    let pipeline = Pipeline::new(RunContext::new(facts, &options));
    let plan = pipeline.plan();

    match format {
        OutputFormat::Json => println!("{}", formatter::format_json(&plan)?),
        OutputFormat::Table => println!("{}", formatter::format_table(rows(&plan))),
    }
    Ok(())
}

fn rows(plan: &RunReport) -> Vec<PlanRow> {
    plan.entries
        .iter()
        .map(|entry| PlanRow {
            fstype: entry.fstype.clone(),
            fssize: entry.fssize.clone(),
            grow: entry.grow,
            action: match &entry.status {
                EntryStatus::Created => "create".to_string(),
                EntryStatus::Skipped { reason } => format!("skip ({})", reason),
            },
        })
        .collect()
}
