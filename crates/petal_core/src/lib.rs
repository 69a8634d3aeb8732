//! Distance matrix, closed-tour cost and angular ("petal") tour construction
//! for small Euclidean TSP instances read from TSPLIB-style coordinate files.

mod algo;
mod coords;
mod error;
mod geo;
mod io;
pub mod logging;
mod matrix;
pub mod node;
pub mod report;
pub mod runner;
pub mod tour;
pub mod utils;

pub(crate) use geo::geometry;
pub(crate) use io::options;

pub use algo::petal;
pub use coords::CoordinateSet;
pub use error::{Error, Result};
pub use io::input::{parse_coordinates, read_coordinates};
pub use io::options::{DEFAULT_MAX_NODES, LogFormat, LogLevel, RunOptions};
pub use matrix::DistanceMatrix;
pub use node::City;
pub use petal::{AngleTable, PetalConfig, PetalTour, Reference, SortDirection};
pub use tour::{Leg, Tour, TourCostEvaluator};
