use nalgebra::Point3;

/// Euclidean distance between two points.
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

/// Index and value of the position closest to `target`.
///
/// Ties resolve to the earliest index, so repeated runs over the same input
/// select the same atom. Returns `None` for an empty slice; callers decide
/// whether that is an error.
pub fn nearest_position(
    positions: &[Point3<f64>],
    target: &Point3<f64>,
) -> Option<(usize, Point3<f64>)> {
    positions
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            let da = (*a - target).norm_squared();
            let db = (*b - target).norm_squared();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(index, position)| (index, *position))
}
