//! Points, distances and tour lengths.

use crate::error::{ConfigError, InvalidTour};
use crate::tour::check_permutation;

/// A city location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Length of the closed tour visiting `cities` in `tour` order.
///
/// The closing edge from the last city back to the first is included.
///
/// # Errors
/// Returns [`InvalidTour`] if `tour` is not a permutation of `0..cities.len()`.
pub fn tour_length(tour: &[usize], cities: &[Point]) -> Result<f64, InvalidTour> {
    check_permutation(tour, cities.len())?;
    Ok(cycle_length(tour, cities))
}

/// Checks that there are at least two cities and that every coordinate is finite.
pub fn validate_cities(cities: &[Point]) -> Result<(), ConfigError> {
    if cities.len() < 2 {
        return Err(ConfigError::TooFewCities {
            count: cities.len(),
        });
    }
    if let Some(index) = cities
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(ConfigError::NonFiniteCity { index });
    }
    Ok(())
}

/// Closed tour length without validation. `order` must index into `cities`.
pub(crate) fn cycle_length(order: &[usize], cities: &[Point]) -> f64 {
    let n = order.len();
    if n == 0 {
        return 0.0;
    }
    let mut total = 0.0;
    for k in 0..n - 1 {
        total += distance(cities[order[k]], cities[order[k + 1]]);
    }
    total + distance(cities[order[n - 1]], cities[order[0]])
}

/// Change in closed tour length if positions `i` and `j` of `order` were swapped.
///
/// Only the (at most four) edges touching the two positions are evaluated.
/// Adjacent positions, including the wrap-around pair `(0, n - 1)`, share
/// edges; each edge is counted once.
pub(crate) fn swap_delta(order: &[usize], cities: &[Point], i: usize, j: usize) -> f64 {
    let n = order.len();
    if i == j || n < 2 {
        return 0.0;
    }

    // Start positions of the edges touched by the swap, deduplicated.
    let mut starts = [(i + n - 1) % n, i, (j + n - 1) % n, j];
    starts.sort_unstable();
    let mut len = 0;
    for k in 0..starts.len() {
        if k == 0 || starts[k] != starts[len - 1] {
            starts[len] = starts[k];
            len += 1;
        }
    }

    let after = |p: usize| {
        if p == i {
            order[j]
        } else if p == j {
            order[i]
        } else {
            order[p]
        }
    };

    let mut delta = 0.0;
    for &s in &starts[..len] {
        let t = (s + 1) % n;
        delta += distance(cities[after(s)], cities[after(t)]);
        delta -= distance(cities[order[s]], cities[order[t]]);
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_distance_basic() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
        assert!((distance(b, a) - 5.0).abs() < 1e-12);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_tour_length_square() {
        let cities = square();
        let len = tour_length(&[0, 1, 2, 3], &cities).unwrap();
        assert!((len - 40.0).abs() < 1e-9);

        let crossed = tour_length(&[0, 2, 1, 3], &cities).unwrap();
        let expected = 20.0 + 2.0 * 200.0_f64.sqrt();
        assert!((crossed - expected).abs() < 1e-9, "got {crossed}");
    }

    #[test]
    fn test_tour_length_two_cities() {
        let cities = vec![Point::new(1.0, 1.0), Point::new(4.0, 5.0)];
        let len = tour_length(&[1, 0], &cities).unwrap();
        assert!((len - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_tour_length_rejects_bad_tours() {
        let cities = square();
        assert_eq!(
            tour_length(&[0, 1, 2], &cities),
            Err(InvalidTour::WrongLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            tour_length(&[0, 1, 1, 3], &cities),
            Err(InvalidTour::Duplicate {
                position: 2,
                index: 1
            })
        );
        assert!(matches!(
            tour_length(&[0, 1, 2, 9], &cities),
            Err(InvalidTour::IndexOutOfRange { index: 9, .. })
        ));
    }

    #[test]
    fn test_validate_cities() {
        assert!(validate_cities(&square()).is_ok());
        assert_eq!(
            validate_cities(&[Point::new(0.0, 0.0)]),
            Err(ConfigError::TooFewCities { count: 1 })
        );
        assert_eq!(
            validate_cities(&[]),
            Err(ConfigError::TooFewCities { count: 0 })
        );
        assert_eq!(
            validate_cities(&[Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)]),
            Err(ConfigError::NonFiniteCity { index: 1 })
        );
    }

    #[test]
    fn test_swap_delta_matches_full_recompute() {
        let cities: Vec<Point> = (0..9)
            .map(|k| {
                let t = k as f64;
                Point::new((t * 1.7).sin() * 50.0 + t, (t * 0.9).cos() * 30.0 - t)
            })
            .collect();
        let order = vec![3, 7, 0, 5, 1, 8, 2, 6, 4];
        let base = cycle_length(&order, &cities);

        for i in 0..order.len() {
            for j in 0..order.len() {
                let mut swapped = order.clone();
                swapped.swap(i, j);
                let expected = cycle_length(&swapped, &cities) - base;
                let delta = swap_delta(&order, &cities, i, j);
                assert!(
                    (delta - expected).abs() < 1e-9,
                    "swap ({i}, {j}): delta {delta} vs recompute {expected}"
                );
            }
        }
    }

    #[test]
    fn test_swap_delta_small_tours() {
        let cities = square();
        for n in 2..=4 {
            let sub = &cities[..n];
            let order: Vec<usize> = (0..n).collect();
            let base = cycle_length(&order, sub);
            for i in 0..n {
                for j in 0..n {
                    let mut swapped = order.clone();
                    swapped.swap(i, j);
                    let expected = cycle_length(&swapped, sub) - base;
                    assert!((swap_delta(&order, sub, i, j) - expected).abs() < 1e-9);
                }
            }
        }
    }
}
