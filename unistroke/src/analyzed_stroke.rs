use super::entities::QUAD_NONE;
use super::error::StrokeError;
use super::{Point, Stroke};

// Fractions of the total path length walked to pick the samples that the
// start/stop direction features are measured against.
const NEAR_START_FRACTION: f32 = 0.1;
const NEAR_END_FRACTION: f32 = 0.9;

// Coordinate assigned to an axis whose raw extent is zero, so a degenerate
// stroke still lands inside the unit box instead of dividing by zero.
const FLAT_AXIS_COORD: f32 = 0.5;

// One stroke rescaled into the unit box, with every feature the dictionary
// templates constrain already computed.
#[derive(Debug)]
pub struct AnalyzedStroke {
    // Points after rescaling; a zero-extent axis maps to FLAT_AXIS_COORD.
    pub points: Vec<Point>,
    // Raw extents before rescaling.
    pub x_spread: f32,
    pub y_spread: f32,
    // Summed per-axis displacement magnitudes over the rescaled points.
    pub kx: f32,
    pub ky: f32,
    // Total Euclidean path length over the rescaled points.
    pub kz: f32,
    // Quadrant of the first point, of the first point whose quadrant differs
    // from it, mirrored from the far end, and of the last point. The two
    // middle values degrade to QUAD_NONE when the stroke never changes
    // quadrant.
    pub quad_first: i8,
    pub quad_second: i8,
    pub quad_penultimate: i8,
    pub quad_last: i8,
    // 1 = rightward (x) or upward (y), 0 otherwise. Screen y grows downward,
    // so upward is the negative y direction.
    pub start_x: i8,
    pub start_y: i8,
    pub stop_x: i8,
    pub stop_y: i8,
}

impl AnalyzedStroke {
    pub fn from_stroke(stroke: &Stroke) -> Result<AnalyzedStroke, StrokeError> {
        if stroke.points.is_empty() {
            return Err(StrokeError::EmptyStroke);
        }

        let (min_x, max_x, min_y, max_y) = bounds(&stroke.points);
        let x_spread = max_x - min_x;
        let y_spread = max_y - min_y;
        let points = rescale(&stroke.points, min_x, x_spread, min_y, y_spread);

        let (kx, ky, kz) = cumulative_distances(&points);

        let last = points.len() - 1;
        let quad_first = quadrant(points[0]);
        let quad_last = quadrant(points[last]);
        let quad_second = scan_forward(&points, quad_first);
        let quad_penultimate = scan_backward(&points, quad_last);

        let near_start = walk_to(&points, NEAR_START_FRACTION * kz);
        let near_end = walk_to(&points, NEAR_END_FRACTION * kz);
        let start_x = if points[near_start].x > points[0].x { 1 } else { 0 };
        let start_y = if points[near_start].y < points[0].y { 1 } else { 0 };
        let stop_x = if points[last].x > points[near_end].x { 1 } else { 0 };
        let stop_y = if points[last].y < points[near_end].y { 1 } else { 0 };

        Ok(AnalyzedStroke {
            points: points,
            x_spread: x_spread,
            y_spread: y_spread,
            kx: kx,
            ky: ky,
            kz: kz,
            quad_first: quad_first,
            quad_second: quad_second,
            quad_penultimate: quad_penultimate,
            quad_last: quad_last,
            start_x: start_x,
            start_y: start_y,
            stop_x: stop_x,
            stop_y: stop_y,
        })
    }
}

fn bounds(points: &[Point]) -> (f32, f32, f32, f32) {
    let mut min_x = std::f32::MAX;
    let mut max_x = std::f32::MIN;
    let mut min_y = std::f32::MAX;
    let mut max_y = std::f32::MIN;
    for pt in points {
        if pt.x < min_x { min_x = pt.x; }
        if pt.x > max_x { max_x = pt.x; }
        if pt.y < min_y { min_y = pt.y; }
        if pt.y > max_y { max_y = pt.y; }
    }
    (min_x, max_x, min_y, max_y)
}

fn rescale(points: &[Point], min_x: f32, x_spread: f32, min_y: f32, y_spread: f32) -> Vec<Point> {
    let mut res: Vec<Point> = Vec::with_capacity(points.len());
    for pt in points {
        let x = if x_spread > 0f32 { (pt.x - min_x) / x_spread } else { FLAT_AXIS_COORD };
        let y = if y_spread > 0f32 { (pt.y - min_y) / y_spread } else { FLAT_AXIS_COORD };
        res.push(Point { x: x, y: y });
    }
    res
}

fn cumulative_distances(points: &[Point]) -> (f32, f32, f32) {
    let mut kx = 0f32;
    let mut ky = 0f32;
    let mut kz = 0f32;
    for i in 1..points.len() {
        let dx = points[i].x - points[i - 1].x;
        let dy = points[i].y - points[i - 1].y;
        kx += dx.abs();
        ky += dy.abs();
        kz += (dx * dx + dy * dy).sqrt();
    }
    (kx, ky, kz)
}

// Quadrants of the unit box, split at the 0.5 midline on both axes:
// 0 upper-right, 1 lower-right, 2 lower-left, 3 upper-left. Inputs outside
// the box report QUAD_NONE.
fn quadrant(pt: Point) -> i8 {
    if pt.x < 0f32 || pt.x > 1f32 || pt.y < 0f32 || pt.y > 1f32 {
        return QUAD_NONE;
    }
    if pt.y < 0.5 {
        if pt.x >= 0.5 { 0 } else { 3 }
    } else {
        if pt.x >= 0.5 { 1 } else { 2 }
    }
}

fn scan_forward(points: &[Point], quad_first: i8) -> i8 {
    for pt in points {
        let q = quadrant(*pt);
        if q != quad_first {
            return q;
        }
    }
    QUAD_NONE
}

fn scan_backward(points: &[Point], quad_last: i8) -> i8 {
    for pt in points.iter().rev() {
        let q = quadrant(*pt);
        if q != quad_last {
            return q;
        }
    }
    QUAD_NONE
}

// Index of the first sample at which the running path length reaches the
// target; clamps to the last sample when the walk ends before crossing it.
fn walk_to(points: &[Point], target: f32) -> usize {
    let mut running = 0f32;
    for i in 1..points.len() {
        let dx = points[i].x - points[i - 1].x;
        let dy = points[i].y - points[i - 1].y;
        running += (dx * dx + dy * dy).sqrt();
        if running >= target {
            return i;
        }
    }
    points.len() - 1
}
