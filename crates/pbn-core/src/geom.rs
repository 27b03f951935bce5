use core::ops::{Add, Neg, Sub};

/// Integer pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Integer displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Vec2i {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Counter-clockwise quarter turn: `(x, y) -> (-y, x)`.
    pub const fn rotate_left(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Clockwise quarter turn: `(x, y) -> (y, -x)`.
    pub const fn rotate_right(self) -> Self {
        Self {
            x: self.y,
            y: -self.x,
        }
    }
}

impl Add<Vec2i> for Point {
    type Output = Point;

    fn add(self, rhs: Vec2i) -> Self::Output {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub<Vec2i> for Point {
    type Output = Point;

    fn sub(self, rhs: Vec2i) -> Self::Output {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Sub<Point> for Point {
    type Output = Vec2i;

    fn sub(self, rhs: Point) -> Self::Output {
        Vec2i {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Add for Vec2i {
    type Output = Vec2i;

    fn add(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2i {
    type Output = Vec2i;

    fn sub(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Neg for Vec2i {
    type Output = Vec2i;

    fn neg(self) -> Self::Output {
        Vec2i {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Axis-aligned walking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    pub const fn vector(self) -> Vec2i {
        match self {
            Self::East => Vec2i::new(1, 0),
            Self::North => Vec2i::new(0, 1),
            Self::West => Vec2i::new(-1, 0),
            Self::South => Vec2i::new(0, -1),
        }
    }

    pub const fn rotate_left(self) -> Self {
        match self {
            Self::East => Self::North,
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
        }
    }

    pub const fn rotate_right(self) -> Self {
        match self {
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
            Self::North => Self::East,
        }
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, rhs: Direction) -> Self::Output {
        self + rhs.vector()
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Point, Vec2i};

    #[test]
    fn vec_rotations_are_quarter_turns() {
        let v = Vec2i::new(3, 1);

        assert_eq!(v.rotate_left(), Vec2i::new(-1, 3));
        assert_eq!(v.rotate_right(), Vec2i::new(1, -3));
        assert_eq!(v.rotate_left().rotate_right(), v);
        assert_eq!(v.rotate_left().rotate_left(), -v);
    }

    #[test]
    fn direction_rotation_matches_vector_rotation() {
        for d in Direction::ALL {
            assert_eq!(d.rotate_left().vector(), d.vector().rotate_left());
            assert_eq!(d.rotate_right().vector(), d.vector().rotate_right());
            assert_eq!(d.rotate_left().rotate_left().rotate_left().rotate_left(), d);
        }
    }

    #[test]
    fn point_vec_ops() {
        let p = Point::new(2, 3);
        let v = Vec2i::new(-1, 4);

        assert_eq!(p + v, Point::new(1, 7));
        assert_eq!(p - v, Point::new(3, -1));
        assert_eq!(p - Point::new(1, 1), Vec2i::new(1, 2));
        assert_eq!(p + Direction::South, Point::new(2, 2));
        assert_eq!(p + Direction::West, Point::new(1, 3));
    }
}
