use clap::Args;
use fsrig::HostFacts;

use crate::cli::GlobalFlags;
use crate::formatter::{self, OutputFormat};

#[derive(Args, Debug)]
pub struct FactsArgs {
    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    pub format: String,
}

pub fn execute(args: FactsArgs, _global: &GlobalFlags) -> anyhow::Result<()> {
    let format = OutputFormat::from_str(&args.format)?;
    let facts = HostFacts::detect();

    match format {
        OutputFormat::Json => println!("{}", formatter::format_json(&facts)?),
        OutputFormat::Table => {
            println!("system:       {}", facts.system);
            println!("distribution: {}", facts.distribution);
            println!("release:      {}", facts.release);
        }
    }
    Ok(())
}
