//! Angular ("petal") tour construction.
//!
//! Cities are ordered by their polar angle around a reference point and the
//! resulting order is scored as a closed tour. This is a construction step,
//! not an optimizer: the tour can be arbitrarily worse than optimal.

use std::{cmp::Ordering, fmt};

use petal_derive::CliValue;

use crate::{
    CoordinateSet, DistanceMatrix, Error, Result, geometry::PlaneGeometry, node::City,
    tour::{Tour, TourCostEvaluator},
};

/// Point the angles are measured around.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, CliValue)]
#[cli_value(option = "reference")]
pub enum Reference {
    /// Position of city 0.
    #[default]
    #[cli(alias = "first")]
    FirstCity,
    /// Arithmetic mean of all positions.
    #[cli(alias = "center")]
    Centroid,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, CliValue)]
#[cli_value(option = "direction")]
pub enum SortDirection {
    #[default]
    #[cli(alias = "asc")]
    Ascending,
    #[cli(alias = "desc")]
    Descending,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PetalConfig {
    pub reference: Reference,
    pub direction: SortDirection,
}

impl PetalConfig {
    pub fn new(reference: Reference, direction: SortDirection) -> Self {
        Self {
            reference,
            direction,
        }
    }
}

impl fmt::Display for PetalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reference={} direction={}",
            self.reference, self.direction
        )
    }
}

/// Polar angle of every city, in degrees within (-180, 180], aligned by index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AngleTable {
    /// `None` only for an empty city set.
    pub reference: Option<City>,
    pub degrees: Vec<f64>,
}

impl AngleTable {
    pub fn compute(coords: &CoordinateSet, reference: Reference) -> Self {
        let reference_point = match reference {
            Reference::FirstCity => coords.get(0),
            Reference::Centroid => PlaneGeometry::centroid(coords.cities()),
        };
        let Some(origin) = reference_point else {
            return Self::default();
        };

        Self {
            reference: Some(origin),
            degrees: coords
                .iter()
                .map(|&city| PlaneGeometry::polar_angle_deg(city, origin))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Indices sorted by angle. The sort is stable in both directions, so
    /// cities with equal angles keep their input order.
    pub fn order(&self, direction: SortDirection) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.degrees.len()).collect();
        let cmp = |a: &usize, b: &usize| -> Ordering {
            let (da, db) = (self.degrees[*a], self.degrees[*b]);
            match direction {
                SortDirection::Ascending => da.total_cmp(&db),
                SortDirection::Descending => db.total_cmp(&da),
            }
        };
        order.sort_by(cmp);
        order
    }
}

/// Output of one heuristic run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PetalTour {
    pub tour: Tour,
    pub cost: f64,
    pub angles: AngleTable,
}

/// Builds the angular tour for `coords` and scores it against `matrix`.
pub fn construct(
    coords: &CoordinateSet,
    matrix: &DistanceMatrix,
    config: PetalConfig,
) -> Result<PetalTour> {
    if coords.len() != matrix.size() {
        return Err(Error::invalid_input(format!(
            "coordinate set has {} cities but the matrix has {}",
            coords.len(),
            matrix.size()
        )));
    }
    if coords.is_empty() {
        log::info!("petal: n=0 so the tour is empty");
        return Ok(PetalTour::default());
    }

    let angles = AngleTable::compute(coords, config.reference);
    let tour = Tour::new(angles.order(config.direction))?;
    let cost = TourCostEvaluator::new(matrix).cost(&tour)?;

    log::info!("petal: n={} {config} cost={cost:.2}", coords.len());
    if let Some(origin) = angles.reference {
        log::debug!("petal: origin={origin} first={:?}", tour.first());
    }

    Ok(PetalTour { tour, cost, angles })
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::{AngleTable, PetalConfig, PetalTour, Reference, SortDirection, construct};
    use crate::{CoordinateSet, DistanceMatrix, node::City, tour::TourCostEvaluator};

    fn coords(points: &[(f64, f64)]) -> CoordinateSet {
        points.iter().copied().map(City::from).collect()
    }

    fn assert_degrees(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    fn square() -> CoordinateSet {
        coords(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)])
    }

    fn run(set: &CoordinateSet, reference: Reference, direction: SortDirection) -> PetalTour {
        let m = DistanceMatrix::from_coords(set);
        construct(set, &m, PetalConfig::new(reference, direction)).expect("construct")
    }

    #[test]
    fn square_around_centroid_ascending_walks_the_perimeter() {
        let out = run(&square(), Reference::Centroid, SortDirection::Ascending);
        assert_eq!(out.tour.order(), &[0, 1, 2, 3]);
        assert_eq!(out.cost, 400.0);
        assert_degrees(&out.angles.degrees, &[-135.0, -45.0, 45.0, 135.0]);
        assert_eq!(out.angles.reference, Some(City::new(50.0, 50.0)));
    }

    #[test]
    fn square_around_centroid_descending_walks_it_backwards() {
        let out = run(&square(), Reference::Centroid, SortDirection::Descending);
        assert_eq!(out.tour.order(), &[3, 2, 1, 0]);
        assert_eq!(out.cost, 400.0);
    }

    #[test]
    fn first_city_reference_keeps_input_order_on_ties() {
        // city 0 is the origin (angle 0) and city 1 lies on the +x axis (angle 0)
        let out = run(
            &coords(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]),
            Reference::FirstCity,
            SortDirection::Ascending,
        );
        assert_degrees(&out.angles.degrees, &[0.0, 0.0, 90.0]);
        assert_eq!(out.tour.order(), &[0, 1, 2]);
        assert_eq!(out.cost, 34.0);
    }

    #[test]
    fn descending_sort_is_stable_for_ties() {
        let angles = AngleTable {
            reference: Some(City::new(0.0, 0.0)),
            degrees: vec![10.0, 30.0, 10.0, 30.0, -5.0],
        };
        assert_eq!(angles.order(SortDirection::Ascending), vec![4, 0, 2, 1, 3]);
        assert_eq!(angles.order(SortDirection::Descending), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn empty_set_gives_empty_tour_with_zero_cost() {
        for reference in [Reference::FirstCity, Reference::Centroid] {
            let out = run(&CoordinateSet::default(), reference, SortDirection::Ascending);
            assert!(out.tour.is_empty());
            assert_eq!(out.cost, 0.0);
            assert!(out.angles.is_empty());
            assert!(out.angles.reference.is_none());
        }
    }

    #[test]
    fn single_city_tour_is_trivial() {
        let out = run(&coords(&[(3.0, 4.0)]), Reference::Centroid, SortDirection::Ascending);
        assert_eq!(out.tour.order(), &[0]);
        assert_eq!(out.cost, 0.0);
        assert_eq!(out.angles.degrees, vec![0.0]);
    }

    #[test]
    fn returned_cost_matches_evaluator_on_returned_tour() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..20 {
            let set: CoordinateSet = (0..40)
                .map(|_| City::new(rng.random_range(0.0..1_000.0), rng.random_range(0.0..1_000.0)))
                .collect();
            let m = DistanceMatrix::from_coords(&set);
            for reference in [Reference::FirstCity, Reference::Centroid] {
                for direction in [SortDirection::Ascending, SortDirection::Descending] {
                    let out = construct(&set, &m, PetalConfig::new(reference, direction))
                        .expect("construct");
                    let rescored = TourCostEvaluator::new(&m).cost(&out.tour).expect("cost");
                    assert_eq!(out.cost, rescored);
                    assert_eq!(out.angles.len(), set.len());
                    assert!(
                        out.angles
                            .degrees
                            .iter()
                            .all(|a| *a > -180.0 && *a <= 180.0)
                    );
                }
            }
        }
    }

    #[test]
    fn construct_rejects_foreign_matrix() {
        let set = square();
        let other = DistanceMatrix::from_coords(&coords(&[(0.0, 0.0)]));
        let err = construct(&set, &other, PetalConfig::default()).expect_err("mismatch");
        assert!(err.to_string().contains("coordinate set has 4 cities but the matrix has 1"));
    }

    #[test]
    fn options_parse_case_insensitively_with_aliases() {
        assert_eq!(Reference::parse("Centroid").expect("parse"), Reference::Centroid);
        assert_eq!(Reference::parse("first").expect("parse"), Reference::FirstCity);
        assert_eq!(SortDirection::parse("DESC").expect("parse"), SortDirection::Descending);
        assert_eq!(Reference::FirstCity.to_string(), "first-city");
        assert_eq!(Reference::VARIANTS, &["first-city", "centroid"]);

        let err = SortDirection::parse("sideways").expect_err("bad value");
        assert!(
            err.to_string()
                .contains("Invalid value for --direction: sideways (expected ascending|descending)")
        );
    }

    #[test]
    fn negative_zero_coordinate_ties_with_other_zero_angles() {
        let set = crate::parse_coordinates("1 0 0\n2 5 0\n3 3 -0\n", 200).expect("parse");
        let out = run(&set, Reference::FirstCity, SortDirection::Ascending);
        assert!(out.angles.degrees.iter().all(|d| *d == 0.0 && d.is_sign_positive()));
        assert_eq!(out.tour.order(), &[0, 1, 2]);

        let out = run(&set, Reference::FirstCity, SortDirection::Descending);
        assert_eq!(out.tour.order(), &[0, 1, 2]);
    }
}
