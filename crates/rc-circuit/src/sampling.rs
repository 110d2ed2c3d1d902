//! Evenly spaced sample generation.

use rc_core::Real;

/// `num_points` evenly spaced values over `[start, end]`, both ends included.
///
/// One point yields `[start]`; zero points yield an empty vector. The last
/// value is pinned to `end` so accumulated rounding never moves the endpoint.
pub fn linspace(start: Real, end: Real, num_points: usize) -> Vec<Real> {
    match num_points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let delta = (end - start) / (n - 1) as Real;
            let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();

            // Ensure exact endpoint
            points[n - 1] = end;
            points
        }
    }
}
