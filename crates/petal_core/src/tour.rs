use std::{fmt, ops::Deref};

use crate::{DistanceMatrix, Error, Result, utils::display_id};

/// Visiting order over city indices, implicitly closed back to its first entry.
///
/// A `Tour` built through [`Tour::new`] is always a permutation of `0..n`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Validates that `order` visits each of `0..order.len()` exactly once.
    pub fn new(order: Vec<usize>) -> Result<Self> {
        let n = order.len();
        let mut seen = vec![false; n];
        for (pos, &idx) in order.iter().enumerate() {
            if idx >= n {
                return Err(Error::invalid_tour(format!(
                    "index {idx} at position {pos} is out of range for {n} cities"
                )));
            }
            if std::mem::replace(&mut seen[idx], true) {
                return Err(Error::invalid_tour(format!(
                    "index {idx} is visited more than once"
                )));
            }
        }
        Ok(Self { order })
    }

    /// The identity tour `[0, 1, ..., n-1]`.
    pub fn sequential(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consecutive index pairs, ending with the closing `(last, first)` pair.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.order.len();
        (0..n).map(move |i| (self.order[i], self.order[(i + 1) % n]))
    }

    /// Order as 1-based city ids.
    pub fn display_ids(&self) -> Vec<usize> {
        self.order.iter().copied().map(display_id).collect()
    }
}

impl Deref for Tour {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.order
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids = self.order.iter().map(|&idx| display_id(idx));
        if let Some(first) = ids.next() {
            write!(f, "{first}")?;
            for id in ids {
                write!(f, " {id}")?;
            }
        }
        Ok(())
    }
}

/// One hop of a closed tour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Leg {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
    /// Set on the final hop back to the first city.
    pub closing: bool,
}

/// Scores closed tours against one distance matrix.
#[derive(Clone, Copy, Debug)]
pub struct TourCostEvaluator<'a> {
    matrix: &'a DistanceMatrix,
}

impl<'a> TourCostEvaluator<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Self { matrix }
    }

    /// Sum of all `n` edges, closing edge included. Empty tours cost 0 and a
    /// single city costs its self-loop, which is 0.
    pub fn cost(&self, tour: &Tour) -> Result<f64> {
        self.check_dimension(tour)?;
        Ok(tour.edges().map(|(a, b)| self.matrix.get(a, b)).sum())
    }

    /// Validates a raw order first, then scores it.
    pub fn cost_of_order(&self, order: &[usize]) -> Result<f64> {
        self.cost(&Tour::new(order.to_vec())?)
    }

    pub fn legs(&self, tour: &Tour) -> Result<Vec<Leg>> {
        self.check_dimension(tour)?;
        let n = tour.len();
        Ok(tour
            .edges()
            .enumerate()
            .map(|(i, (from, to))| Leg {
                from,
                to,
                distance: self.matrix.get(from, to),
                closing: i + 1 == n,
            })
            .collect())
    }

    fn check_dimension(&self, tour: &Tour) -> Result<()> {
        if tour.len() != self.matrix.size() {
            return Err(Error::invalid_tour(format!(
                "tour visits {} cities but the matrix has {}",
                tour.len(),
                self.matrix.size()
            )));
        }
        Ok(())
    }
}
