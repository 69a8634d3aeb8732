use crate::{
    CoordinateSet, DistanceMatrix, Error, Result, RunOptions,
    io::input::read_coordinates,
    petal::{self, AngleTable, PetalConfig},
    tour::{Leg, Tour, TourCostEvaluator},
};

/// A tour together with its closed cost and per-hop breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredTour {
    pub label: &'static str,
    pub tour: Tour,
    pub cost: f64,
    pub legs: Vec<Leg>,
}

impl ScoredTour {
    pub fn score(label: &'static str, tour: Tour, matrix: &DistanceMatrix) -> Result<Self> {
        let evaluator = TourCostEvaluator::new(matrix);
        let legs = evaluator.legs(&tour)?;
        let cost = evaluator.cost(&tour)?;
        Ok(Self {
            label,
            tour,
            cost,
            legs,
        })
    }
}

/// Everything one run derives from its (already re-anchored) city set.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutcome {
    pub coords: CoordinateSet,
    pub matrix: DistanceMatrix,
    pub config: PetalConfig,
    pub sequential: ScoredTour,
    pub petal: ScoredTour,
    pub angles: AngleTable,
}

impl RunOutcome {
    pub fn tours(&self) -> [&ScoredTour; 2] {
        [&self.sequential, &self.petal]
    }
}

pub const SEQUENTIAL_LABEL: &str = "Sequential tour";
pub const PETAL_LABEL: &str = "Petal tour";

/// Derives the matrix, the sequential baseline and the petal tour for `coords`.
pub fn evaluate(coords: CoordinateSet, config: PetalConfig) -> Result<RunOutcome> {
    let matrix = DistanceMatrix::from_coords(&coords);

    let sequential = ScoredTour::score(SEQUENTIAL_LABEL, Tour::sequential(coords.len()), &matrix)?;
    let built = petal::construct(&coords, &matrix, config)?;
    let petal = ScoredTour::score(PETAL_LABEL, built.tour, &matrix)?;
    debug_assert_eq!(petal.cost, built.cost);

    log::info!(
        "evaluate: n={} sequential_cost={:.2} petal_cost={:.2}",
        coords.len(),
        sequential.cost,
        petal.cost
    );

    Ok(RunOutcome {
        coords,
        matrix,
        config,
        sequential,
        petal,
        angles: built.angles,
    })
}

/// Loads the input file, re-anchors the start city and evaluates both tours.
pub fn run(options: &RunOptions) -> Result<RunOutcome> {
    let coords = read_coordinates(&options.input, options.max_nodes)?;
    if coords.is_empty() {
        return Err(Error::invalid_input(format!(
            "no valid nodes found in {}",
            options.input.display()
        )));
    }

    let coords = reanchor(coords, options.start_city)?;
    evaluate(coords, options.petal_config())
}

/// Swaps the city with 1-based id `start_city` into the first slot.
pub fn reanchor(coords: CoordinateSet, start_city: usize) -> Result<CoordinateSet> {
    let n = coords.len();
    if start_city == 0 || start_city > n {
        return Err(Error::invalid_input(format!(
            "start_city={start_city} but only {n} cities were read"
        )));
    }
    if start_city == 1 {
        return Ok(coords);
    }

    log::info!("reanchor: city {start_city} is now city 1");
    coords.reanchored(start_city - 1)
}
