use std::{
    fmt::{self, Display, Formatter},
    fs,
    path::Path,
};

use super::writer::ReportWriter;
use crate::{
    CoordinateSet, Result,
    node::City,
    runner::ScoredTour,
    utils::{display_id, fmt_cost},
};

const CANVAS: f64 = 800.0;
const MARGIN: f64 = 40.0;
const LABEL_OFFSET: f64 = 6.0;

/// SVG rendering of one tour: labelled cities, the open path in solid blue and
/// the closing edge dashed red. Y grows upwards as in the input coordinates.
pub struct TourPlot<'a> {
    pub coords: &'a CoordinateSet,
    pub scored: &'a ScoredTour,
}

impl TourPlot<'_> {
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string())?;
        log::info!("plot: wrote path={}", path.display());
        Ok(())
    }
}

/// Maps input coordinates into the padded canvas, preserving aspect ratio.
struct Viewport {
    min_x: f64,
    max_y: f64,
    scale: f64,
}

impl Viewport {
    fn fit(cities: &[City]) -> Self {
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for c in cities {
            min_x = min_x.min(c.x);
            max_x = max_x.max(c.x);
            min_y = min_y.min(c.y);
            max_y = max_y.max(c.y);
        }
        if cities.is_empty() {
            return Self {
                min_x: 0.0,
                max_y: 0.0,
                scale: 1.0,
            };
        }

        let span = (max_x - min_x).max(max_y - min_y);
        let scale = if span > 0.0 {
            (CANVAS - 2.0 * MARGIN) / span
        } else {
            1.0
        };
        Self {
            min_x,
            max_y,
            scale,
        }
    }

    fn project(&self, c: City) -> (f64, f64) {
        (
            MARGIN + (c.x - self.min_x) * self.scale,
            MARGIN + (self.max_y - c.y) * self.scale,
        )
    }
}

impl Display for TourPlot<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let view = Viewport::fit(self.coords.cities());
        let order = self.scored.tour.order();
        let mut w = ReportWriter::new(f);

        writeln!(
            w,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS}" height="{CANVAS}" viewBox="0 0 {CANVAS} {CANVAS}">"#
        )?;
        w.line(r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            w,
            r#"<text x="{}" y="{}" font-size="16" text-anchor="middle">{} - total cost: {}</text>"#,
            CANVAS / 2.0,
            MARGIN / 2.0,
            self.scored.label,
            fmt_cost(self.scored.cost)
        )?;

        if order.len() > 1 {
            write!(w, r#"<polyline fill="none" stroke="blue" stroke-width="1.5" points=""#)?;
            let points = order.iter().map(|&idx| {
                let (x, y) = view.project(self.coords[idx]);
                format!("{x:.2},{y:.2}")
            });
            for (i, point) in points.enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                write!(w, "{point}")?;
            }
            w.line(r#""/>"#)?;

            let (x1, y1) = view.project(self.coords[order[order.len() - 1]]);
            let (x2, y2) = view.project(self.coords[order[0]]);
            writeln!(
                w,
                r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="red" stroke-dasharray="6 4"/>"#
            )?;
        }

        for (idx, &city) in self.coords.iter().enumerate() {
            let (x, y) = view.project(city);
            writeln!(
                w,
                r#"<circle cx="{x:.2}" cy="{y:.2}" r="3" fill="blue"/><text x="{:.2}" y="{:.2}" font-size="10">{}</text>"#,
                x + LABEL_OFFSET,
                y - LABEL_OFFSET,
                display_id(idx)
            )?;
        }

        w.line("</svg>")
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::{TourPlot, Viewport};
    use crate::{CoordinateSet, node::City, petal::PetalConfig, runner::evaluate};

    fn triangle() -> CoordinateSet {
        [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]
            .into_iter()
            .map(City::from)
            .collect()
    }

    #[test]
    fn viewport_flips_y_and_keeps_margin() {
        let view = Viewport::fit(triangle().cities());
        assert_eq!(view.project(City::new(0.0, 10.0)), (40.0, 40.0));
        assert_eq!(view.project(City::new(10.0, 0.0)), (760.0, 760.0));
    }

    #[test]
    fn viewport_handles_degenerate_sets() {
        let view = Viewport::fit(&[City::new(5.0, 5.0)]);
        assert_eq!(view.project(City::new(5.0, 5.0)), (40.0, 40.0));
        let view = Viewport::fit(&[]);
        assert_eq!(view.scale, 1.0);
    }

    #[test]
    fn plot_contains_path_closing_edge_and_labels() {
        let coords = triangle();
        let outcome = evaluate(coords.clone(), PetalConfig::default()).expect("evaluate");
        let svg = TourPlot {
            coords: &coords,
            scored: &outcome.petal,
        }
        .to_string();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Petal tour - total cost: 34.00"));
        assert!(svg.contains(r#"points="40.00,760.00 760.00,760.00 40.00,40.00""#));
        assert!(svg.contains(r#"x1="40.00" y1="40.00" x2="40.00" y2="760.00""#));
        assert_eq!(svg.matches("<circle").count(), 3);
    }

    #[test]
    fn plot_of_empty_set_is_valid_svg() {
        let coords = CoordinateSet::default();
        let outcome = evaluate(coords.clone(), PetalConfig::default()).expect("evaluate");
        let svg = TourPlot {
            coords: &coords,
            scored: &outcome.petal,
        }
        .to_string();
        assert!(!svg.contains("<polyline"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn write_to_file_persists_svg() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("petal-tests-plot-{nanos}.svg"));
        let coords = triangle();
        let outcome = evaluate(coords.clone(), PetalConfig::default()).expect("evaluate");

        TourPlot {
            coords: &coords,
            scored: &outcome.petal,
        }
        .write_to_file(&path)
        .expect("write svg");
        assert!(fs::read_to_string(&path).expect("read svg").contains("<polyline"));

        fs::remove_file(&path).expect("cleanup svg");
    }
}
