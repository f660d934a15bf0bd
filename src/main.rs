use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use shuttle_gtfs::Schedule;

#[derive(Parser)]
#[clap(name = "shuttle-gtfs", about = "Generate the GTFS feed of the conference shuttles.")]
struct Args {
    /// Path of the output file. Should end in .zip
    #[clap(long, default_value = "google_transit.zip")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let schedule = Schedule::bundled().context("loading the bundled schedule")?;
    let feed = schedule.assemble().context("assembling the schedule")?;
    feed.validate().context("validating the feed")?;
    feed.write(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    info!("GTFS feed generated successfully in '{}'", args.output.display());
    Ok(())
}
