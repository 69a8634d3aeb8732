use std::{io, time::Instant};

use log::info;

use petal_core::{Result, RunOptions, logging, report, runner};

fn main() -> Result<()> {
    let now = Instant::now();
    let options = RunOptions::from_args()?;
    logging::init_logger(&options)?;

    info!("options: {options}");

    let outcome = runner::run(&options)?;

    let stdout = io::stdout();
    report::print_summary(&mut stdout.lock(), &options, &outcome)?;
    report::persist(&options, &outcome)?;

    info!(
        "output: n={} sequential={:.2} petal={:.2} time={:.3}s",
        outcome.coords.len(),
        outcome.sequential.cost,
        outcome.petal.cost,
        now.elapsed().as_secs_f32()
    );

    Ok(())
}
