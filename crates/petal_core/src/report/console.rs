use std::fmt::{self, Display, Formatter};

use super::writer::ReportWriter;
use crate::{
    CoordinateSet,
    petal::{AngleTable, PetalConfig},
    runner::ScoredTour,
    utils::{display_id, fmt_cost},
};

/// `ID  X  Y` table of the loaded cities, 1-based.
pub struct CoordinateTable<'a>(pub &'a CoordinateSet);

impl Display for CoordinateTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut w = ReportWriter::new(f);
        w.line("ID\tX\t\tY")?;
        w.rule()?;
        for (idx, city) in self.0.iter().enumerate() {
            writeln!(w, "{:2}\t{:.2}\t{:.2}", display_id(idx), city.x, city.y)?;
        }
        w.rule()
    }
}

/// The client vector `[1 2 ... n]`.
pub struct ClientVector(pub usize);

impl Display for ClientVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut w = ReportWriter::new(f);
        write!(w, "Clients: ")?;
        w.bracketed((0..self.0).map(display_id))
    }
}

/// Hop-by-hop listing of a tour followed by its total cost.
pub struct RouteSteps<'a>(pub &'a ScoredTour);

impl Display for RouteSteps<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let scored = self.0;
        let mut w = ReportWriter::new(f);
        write!(w, "{}: ", scored.label)?;
        w.bracketed(scored.tour.display_ids())?;
        w.line("Step by step:")?;
        for leg in &scored.legs {
            write!(
                w,
                "From city {:2} to city {:2} -> distance: {}",
                display_id(leg.from),
                display_id(leg.to),
                fmt_cost(leg.distance)
            )?;
            if leg.closing {
                write!(w, " (return to start)")?;
            }
            w.blank()?;
        }
        w.blank()?;
        w.kv_colon("Total cost", fmt_cost(scored.cost))
    }
}

/// Per-city polar angles used by the petal ordering.
pub struct AngleReport<'a> {
    pub angles: &'a AngleTable,
    pub config: PetalConfig,
}

impl Display for AngleReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut w = ReportWriter::new(f);
        match self.angles.reference {
            Some(origin) => writeln!(
                w,
                "Petal angles ({}, origin=({:.2}, {:.2})):",
                self.config, origin.x, origin.y
            )?,
            None => writeln!(w, "Petal angles ({}): none", self.config)?,
        }
        w.line("ID\tAngle (deg)")?;
        w.rule()?;
        for (idx, angle) in self.angles.degrees.iter().enumerate() {
            writeln!(w, "{:2}\t{angle:.2}", display_id(idx))?;
        }
        w.rule()
    }
}
