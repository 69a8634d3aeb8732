use std::fmt;

/// A city position in the plane.
///
/// Cities carry no identifier of their own: their identity is their position
/// in the owning [`CoordinateSet`](crate::CoordinateSet) (0-based internally,
/// shown 1-based only when reported).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b1 = ryu::Buffer::new();
        let mut b2 = ryu::Buffer::new();
        write!(f, "{} {}", b1.format(self.x), b2.format(self.y))
    }
}
