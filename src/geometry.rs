use crate::types::Point;
use svg::node::element::path::Data;

/// Linear map from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Multiples of `step` that fall inside the domain, inclusive.
    pub fn ticks(&self, step: u32) -> Vec<u32> {
        let step = step.max(1);
        let (lo, hi) = (self.domain.0.min(self.domain.1), self.domain.0.max(self.domain.1));
        let first = (lo / step as f64).ceil().max(0.0) as u32 * step;
        (first..=hi.floor().max(0.0) as u32).step_by(step as usize).collect()
    }
}

// Uniform cubic B-spline through the control points: starts and ends on the
// end points, passes near the interior ones.
pub fn basis_curve_data(points: &[Point]) -> Option<Data> {
    let (head, _) = points.split_first()?;
    let mut d = Data::new().move_to((head.x, head.y));
    match points.len() {
        1 => return Some(d),
        2 => return Some(d.line_to((points[1].x, points[1].y))),
        _ => {}
    }

    let (p0, p1) = (points[0], points[1]);
    d = d.line_to(((5.0 * p0.x + p1.x) / 6.0, (5.0 * p0.y + p1.y) / 6.0));

    let segment = |d: Data, a: Point, b: Point, c: Point| -> Data {
        d.cubic_curve_to((
            (2.0 * a.x + b.x) / 3.0,
            (2.0 * a.y + b.y) / 3.0,
            (a.x + 2.0 * b.x) / 3.0,
            (a.y + 2.0 * b.y) / 3.0,
            (a.x + 4.0 * b.x + c.x) / 6.0,
            (a.y + 4.0 * b.y + c.y) / 6.0,
        ))
    };

    for w in points.windows(3) {
        d = segment(d, w[0], w[1], w[2]);
    }

    let n = points.len();
    let (a, b) = (points[n - 2], points[n - 1]);
    d = segment(d, a, b, b);
    d = d.line_to((b.x, b.y));
    Some(d)
}

/// `points` attribute value for an SVG polygon.
pub fn polygon_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
