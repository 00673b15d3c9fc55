#[macro_use]
extern crate log;

use anyhow::Context;
use clap::Parser as _;
use pod_spread_exporter::{run_export, ExportPlan, Tables};

mod cli;

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()?;

    let args = cli::CliArgs::parse();
    info!("{CRATE_NAME} {CRATE_VERSION}");

    let tables = Tables::from_flags(args.summary_only, args.deployments_only);
    let plan = ExportPlan::resolve(&args.input_path, args.output_dir, tables).inspect_err(|e| {
        error!("{e}");
    })?;
    debug!("Export plan: {plan:?}");

    run_export(&plan).with_context(|| {
        format!(
            "Failed to export measurements from {}",
            args.input_path.display()
        )
    })?;

    info!("Export complete!");

    Ok(())
}
