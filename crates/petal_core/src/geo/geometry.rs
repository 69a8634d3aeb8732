use crate::node::City;

const HALF_TURN_DEGREES: f64 = 180.0;

pub(crate) struct PlaneGeometry;

impl PlaneGeometry {
    #[inline]
    pub(crate) fn dist(a: City, b: City) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Arithmetic mean of all positions; `None` for an empty slice.
    pub(crate) fn centroid(cities: &[City]) -> Option<City> {
        if cities.is_empty() {
            return None;
        }
        let (sx, sy) = cities
            .iter()
            .fold((0.0, 0.0), |(sx, sy), c| (sx + c.x, sy + c.y));
        let n = cities.len() as f64;
        Some(City::new(sx / n, sy / n))
    }

    /// Polar angle of `city` around `reference`, in degrees within (-180, 180].
    ///
    /// A city sitting on the reference point has angle 0.
    pub(crate) fn polar_angle_deg(city: City, reference: City) -> f64 {
        let dy = city.y - reference.y;
        let dx = city.x - reference.x;
        // + 0.0 folds -0.0 into 0.0 so total_cmp ties it with other zeros
        let angle = dy.atan2(dx).to_degrees() + 0.0;
        if angle <= -HALF_TURN_DEGREES {
            HALF_TURN_DEGREES
        } else {
            angle
        }
    }
}
