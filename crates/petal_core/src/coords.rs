use std::ops::Index;

use crate::{Error, Result, node::City};

/// Ordered, immutable set of cities. Position `i` is city `i`.
///
/// Re-anchoring the tour start never mutates a set in place: [`swapped`] and
/// [`reanchored`] return a new set, so structures derived from the old one
/// (distance matrix, angles, tours) stay consistent with it.
///
/// [`swapped`]: CoordinateSet::swapped
/// [`reanchored`]: CoordinateSet::reanchored
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinateSet {
    cities: Vec<City>,
}

impl CoordinateSet {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Builds a set, rejecting more than `max_nodes` cities or non-finite coordinates.
    pub fn with_limit(cities: Vec<City>, max_nodes: usize) -> Result<Self> {
        if cities.len() > max_nodes {
            return Err(Error::invalid_input(format!(
                "too many nodes: {} (max_nodes={max_nodes})",
                cities.len()
            )));
        }
        if let Some(idx) = cities.iter().position(|c| !c.is_finite()) {
            return Err(Error::invalid_input(format!(
                "city {} has non-finite coordinates",
                idx + 1
            )));
        }
        Ok(Self::new(cities))
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn get(&self, idx: usize) -> Option<City> {
        self.cities.get(idx).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &City> {
        self.cities.iter()
    }

    /// Copy of this set with the cities at `p` and `q` exchanged.
    pub fn swapped(&self, p: usize, q: usize) -> Result<Self> {
        let n = self.len();
        if p >= n || q >= n {
            return Err(Error::invalid_index(format!(
                "cannot swap positions {p} and {q} in a set of {n} cities"
            )));
        }
        let mut cities = self.cities.clone();
        cities.swap(p, q);
        Ok(Self { cities })
    }

    /// Copy of this set where the city at `start` becomes city 0.
    ///
    /// Implemented as a swap with position 0, so the former first city takes
    /// the slot `start` leaves free.
    pub fn reanchored(&self, start: usize) -> Result<Self> {
        self.swapped(0, start)
    }
}

impl Index<usize> for CoordinateSet {
    type Output = City;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.cities[idx]
    }
}

impl FromIterator<City> for CoordinateSet {
    fn from_iter<T: IntoIterator<Item = City>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
