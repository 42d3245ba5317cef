use super::Point2;

/// Returns twice the signed area of triangle `(a, b, c)`.
///
/// Positive for counter-clockwise, negative for clockwise, zero when the
/// three points are collinear.
#[must_use]
pub fn orient_2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Returns `true` if `p` lies strictly inside the circumcircle of `(a, b, c)`.
///
/// The determinant is positive for an interior point only when `(a, b, c)` is
/// counter-clockwise. Points exactly on the circle are not inside.
#[must_use]
pub fn in_circle(a: &Point2, b: &Point2, c: &Point2, p: &Point2) -> bool {
    let (ax, ay) = (a.x - p.x, a.y - p.y);
    let (bx, by) = (b.x - p.x, b.y - p.y);
    let (cx, cy) = (c.x - p.x, c.y - p.y);

    let det = (ax * ax + ay * ay) * (bx * cy - cx * by)
        - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay);
    det > 0.0
}

/// Euclidean distance between two 2D points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}
