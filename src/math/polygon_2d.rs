use super::{Point2, Vector2, COLLINEAR_EPSILON};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise in a y-up frame, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Even-odd crossing test for a closed polygon.
///
/// A point lying exactly on a bottom or left boundary counts as inside, one on
/// a top or right boundary as outside, so adjacent polygons never both claim
/// a pixel.
#[must_use]
pub fn point_in_polygon(points: &[Point2], x: f64, y: f64) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = points[i];
        let vj = points[j];
        let spans = (vi.y <= y && y < vj.y) || (vj.y <= y && y < vi.y);
        if spans && x < (vj.x - vi.x) * (y - vi.y) / (vj.y - vi.y) + vi.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Returns the unit vector along `v`, or `v` unchanged when it has zero length.
#[must_use]
pub fn normalize_or_zero(v: Vector2) -> Vector2 {
    let len = v.norm();
    if len > 0.0 {
        v / len
    } else {
        v
    }
}

/// Returns `true` when `p` lies on the infinite line through `v1` and `v2`.
///
/// Both offsets are normalized before taking the cross product, so the test
/// is scale-free. A zero-length edge or `p == v1` always reports collinear.
#[must_use]
pub fn is_on_line(v1: &Point2, v2: &Point2, p: &Point2) -> bool {
    let d1 = normalize_or_zero(p - v1);
    let d2 = normalize_or_zero(v2 - v1);
    let deter = d1.x * d2.y - d2.x * d1.y;
    deter.abs() < COLLINEAR_EPSILON
}

/// Returns the minimum and maximum corners of a point set.
#[must_use]
pub fn bounds(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = *points.first()?;
    let mut min = first;
    let mut max = first;
    for pt in &points[1..] {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    Some((min, max))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = square();
        pts.reverse();
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point2::new(0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn point_in_polygon_interior_and_exterior() {
        let pts = square();
        assert!(point_in_polygon(&pts, 0.5, 0.5));
        assert!(!point_in_polygon(&pts, 1.5, 0.5));
        assert!(!point_in_polygon(&pts, 0.5, -0.1));
    }

    #[test]
    fn point_in_polygon_half_open_boundary() {
        let pts = square();
        assert!(point_in_polygon(&pts, 0.0, 0.0));
        assert!(point_in_polygon(&pts, 0.0, 0.5));
        assert!(!point_in_polygon(&pts, 1.0, 0.5));
        assert!(!point_in_polygon(&pts, 0.5, 1.0));
    }

    #[test]
    fn point_in_polygon_concave_notch() {
        // L-shape with the top-right quadrant cut away.
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 5.0),
            Point2::new(5.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(&pts, 2.0, 8.0));
        assert!(point_in_polygon(&pts, 8.0, 2.0));
        assert!(!point_in_polygon(&pts, 8.0, 8.0));
    }

    #[test]
    fn normalize_or_zero_keeps_zero() {
        let v = normalize_or_zero(Vector2::zeros());
        assert!(v.x.abs() < TOLERANCE && v.y.abs() < TOLERANCE);
        let u = normalize_or_zero(Vector2::new(3.0, 4.0));
        assert!((u.x - 0.6).abs() < TOLERANCE);
        assert!((u.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn on_line_beyond_segment() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(2.0, 0.0);
        assert!(is_on_line(&a, &b, &Point2::new(5.0, 0.0)));
        assert!(is_on_line(&a, &b, &Point2::new(-3.0, 0.0)));
        assert!(!is_on_line(&a, &b, &Point2::new(1.0, 0.5)));
    }

    #[test]
    fn on_line_degenerate_inputs() {
        let a = Point2::new(1.0, 1.0);
        assert!(is_on_line(&a, &a, &Point2::new(4.0, -2.0)));
        assert!(is_on_line(&a, &Point2::new(3.0, 7.0), &a));
    }

    #[test]
    fn bounds_basic() {
        let pts = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-0.5, 1.0),
            Point2::new(2.0, -3.0),
        ];
        let (min, max) = bounds(&pts).unwrap();
        assert!((min.x + 0.5).abs() < TOLERANCE);
        assert!((min.y + 3.0).abs() < TOLERANCE);
        assert!((max.x - 2.0).abs() < TOLERANCE);
        assert!((max.y - 2.0).abs() < TOLERANCE);
        assert!(bounds(&[]).is_none());
    }
}
