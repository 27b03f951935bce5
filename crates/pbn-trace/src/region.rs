use pbn_core::{Color, Point};

/// One traced region: an implicitly closed polygon and its fill color.
///
/// Vertices run counter-clockwise when `y` grows upward (clockwise on a
/// screen where `y` grows downward).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    color: Color,
    origin: Point,
    vertices: Vec<Point>,
}

impl Region {
    pub fn new(color: Color, origin: Point, vertices: Vec<Point>) -> Self {
        Self {
            color,
            origin,
            vertices,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// South-west corner pixel the walk started from. It is always inside
    /// the region, which makes it a usable label anchor.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Closing edges, last vertex back to the first included.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Twice the shoelace area; positive for counter-clockwise in a y-up frame.
    pub fn signed_area2(&self) -> i64 {
        self.edges()
            .map(|(a, b)| i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y))
            .sum()
    }

    pub fn area(&self) -> f64 {
        self.signed_area2().unsigned_abs() as f64 * 0.5
    }

    /// Outline length. Edges are axis-aligned, so this is exact.
    pub fn perimeter(&self) -> i64 {
        self.edges()
            .map(|(a, b)| {
                (i64::from(b.x) - i64::from(a.x)).abs() + (i64::from(b.y) - i64::from(a.y)).abs()
            })
            .sum()
    }

    /// Inclusive `(min, max)` corners of the polygon.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        Some((min, max))
    }

    /// Strict interior test: points on the outline are outside.
    pub fn contains(&self, p: Point) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }

        let mut inside = false;
        for (a, b) in self.edges() {
            if on_segment(p, a, b) {
                return false;
            }

            if (a.y > p.y) != (b.y > p.y) {
                let t = f64::from(p.y - a.y) / f64::from(b.y - a.y);
                let x_cross = f64::from(a.x) + t * f64::from(b.x - a.x);
                if x_cross > f64::from(p.x) {
                    inside = !inside;
                }
            }
        }

        inside
    }
}

fn on_segment(p: Point, a: Point, b: Point) -> bool {
    let cross = i64::from(b.x - a.x) * i64::from(p.y - a.y)
        - i64::from(b.y - a.y) * i64::from(p.x - a.x);
    if cross != 0 {
        return false;
    }

    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// All regions found in one scan, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct RegionSet {
    pub width: usize,
    pub height: usize,
    pub regions: Vec<Region>,
}

impl RegionSet {
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn num_vertices(&self) -> usize {
        self.regions.iter().map(Region::len).sum()
    }

    pub fn iter_color(&self, color: Color) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(move |r| r.color() == color)
    }

    /// Fill colors in order of first appearance.
    pub fn distinct_colors(&self) -> Vec<Color> {
        let mut out: Vec<Color> = Vec::new();
        for r in &self.regions {
            if !out.contains(&r.color()) {
                out.push(r.color());
            }
        }
        out
    }

    /// Innermost region whose polygon strictly contains `p`.
    pub fn region_at(&self, p: Point) -> Option<&Region> {
        self.regions
            .iter()
            .filter(|r| r.contains(p))
            .min_by_key(|r| r.signed_area2().unsigned_abs())
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = core::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
