use std::{
    fmt::{self, Display, Formatter},
    fs,
    path::{Path, PathBuf},
};

use super::writer::ReportWriter;
use crate::{
    DistanceMatrix, Error, Result,
    runner::{RunOutcome, ScoredTour},
    utils::{display_id, fmt_cost},
};

pub const CLIENTS_FILE_NAME: &str = "clients.txt";
pub const MATRIX_FILE_NAME: &str = "matrix.txt";
pub const ROUTE_FILE_NAME: &str = "route_and_cost.txt";

/// `clients.txt`: header plus the 1-based city ids.
pub struct ClientsFile(pub usize);

impl Display for ClientsFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut w = ReportWriter::new(f);
        w.line("Client vector (city ids):")?;
        w.row((0..self.0).map(display_id))
    }
}

/// `matrix.txt`: the rounded matrix, one right-aligned row per city.
pub struct MatrixFile<'a>(pub &'a DistanceMatrix);

impl Display for MatrixFile<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut w = ReportWriter::new(f);
        writeln!(w, "Rounded distance matrix (1..{}):", self.0.size())?;
        for row in self.0.rows() {
            w.row(row.iter().map(|d| format!("{d:6.0}")))?;
        }
        Ok(())
    }
}

/// `route_and_cost.txt`: every scored tour as ids plus total cost.
pub struct RouteFile<'a>(pub &'a [&'a ScoredTour]);

impl Display for RouteFile<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut w = ReportWriter::new(f);
        for (i, scored) in self.0.iter().enumerate() {
            if i > 0 {
                w.blank()?;
            }
            writeln!(w, "{}:", scored.label)?;
            w.row(scored.tour.display_ids())?;
            w.kv_colon("Total cost", fmt_cost(scored.cost))?;
        }
        Ok(())
    }
}

/// Writes the three result files into `dir`, creating it if needed.
pub fn write_result_files(dir: &Path, outcome: &RunOutcome) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| {
        Error::other(format!("failed to create output dir {}: {e}", dir.display()))
    })?;

    let tours = outcome.tours();
    let files = [
        (CLIENTS_FILE_NAME, ClientsFile(outcome.coords.len()).to_string()),
        (MATRIX_FILE_NAME, MatrixFile(&outcome.matrix).to_string()),
        (ROUTE_FILE_NAME, RouteFile(&tours).to_string()),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, contents) in files {
        let path = dir.join(name);
        fs::write(&path, contents)?;
        log::debug!("report: wrote path={}", path.display());
        written.push(path);
    }
    Ok(written)
}
