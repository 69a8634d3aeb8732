//! Console tables, flat result files and the SVG plot for one run.

pub mod console;
pub mod files;
pub mod plot;
mod writer;

use std::io::Write;

use crate::{Result, RunOptions, runner::RunOutcome};

pub use console::{AngleReport, ClientVector, CoordinateTable, RouteSteps};
pub use files::write_result_files;
pub use plot::TourPlot;

/// Prints the console report for `outcome` to `out`.
pub fn print_summary(
    out: &mut impl Write,
    options: &RunOptions,
    outcome: &RunOutcome,
) -> Result<()> {
    writeln!(
        out,
        "Read {} nodes from {}\n",
        outcome.coords.len(),
        options.input.display()
    )?;
    if options.start_city != 1 {
        writeln!(
            out,
            "City {} is now the starting point (new city 1)\n",
            options.start_city
        )?;
    }
    writeln!(out, "{}", CoordinateTable(&outcome.coords))?;
    writeln!(out, "{}", ClientVector(outcome.coords.len()))?;

    for scored in outcome.tours() {
        writeln!(out, "{}", RouteSteps(scored))?;
    }

    writeln!(
        out,
        "{}",
        AngleReport {
            angles: &outcome.angles,
            config: outcome.config,
        }
    )?;
    Ok(())
}

/// Writes the result files and plot that `options` ask for.
pub fn persist(options: &RunOptions, outcome: &RunOutcome) -> Result<()> {
    if options.write_files {
        let written = write_result_files(&options.output_dir, outcome)?;
        log::info!(
            "report: files={} dir={}",
            written.len(),
            options.output_dir.display()
        );
    }

    if let Some(plot_path) = options.plot_path() {
        TourPlot {
            coords: &outcome.coords,
            scored: &outcome.petal,
        }
        .write_to_file(plot_path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::print_summary;
    use crate::{CoordinateSet, RunOptions, node::City, runner::evaluate};

    #[test]
    fn print_summary_contains_every_section() {
        let coords: CoordinateSet = [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]
            .into_iter()
            .map(City::from)
            .collect();
        let options = RunOptions {
            start_city: 2,
            ..RunOptions::default()
        };
        let outcome = evaluate(coords, options.petal_config()).expect("evaluate");

        let mut out = Vec::new();
        print_summary(&mut out, &options, &outcome).expect("print");
        let text = String::from_utf8(out).expect("utf8");

        assert!(text.starts_with("Read 3 nodes from bayg29.tsp\n"));
        assert!(text.contains("City 2 is now the starting point"));
        assert!(text.contains("Clients: [1 2 3]"));
        assert!(text.contains("Sequential tour: [1 2 3]"));
        assert!(text.contains("Petal tour: [1 2 3]"));
        assert!(text.contains("Petal angles (reference=first-city direction=ascending"));
    }
}
