use crate::{CoordinateSet, geometry::PlaneGeometry, utils::round_half_away};

/// Dense n×n table of rounded Euclidean distances, stored row-major.
///
/// Every entry is integer-valued (see [`round_half_away`]), the diagonal is
/// zero and the table is symmetric: each pair is computed once and mirrored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    pub fn from_coords(coords: &CoordinateSet) -> Self {
        let n = coords.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = round_half_away(PlaneGeometry::dist(coords[i], coords[j]));
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        log::debug!("matrix: n={n} entries={}", data.len());
        Self { data, size: n }
    }

    /// Distance between cities `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= size()`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.size && to < self.size,
            "matrix index ({from}, {to}) out of bounds for size {}",
            self.size
        );
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Distances from city `idx` to every city.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= size()`.
    pub fn row(&self, idx: usize) -> &[f64] {
        assert!(
            idx < self.size,
            "matrix row {idx} out of bounds for size {}",
            self.size
        );
        &self.data[idx * self.size..(idx + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on 0
        self.data.chunks_exact(self.size.max(1))
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }
}
