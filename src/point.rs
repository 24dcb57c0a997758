use core::fmt;
use core::ops::Add;

/// A cell coordinate on the grid, addressed as (row, column). Rows grow downwards and columns
/// grow to the right, so [Direction::Up] decrements the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

/// The four cardinal moves. [Direction::ALL] fixes the order in which neighbours are generated,
/// which in turn decides how ties between equal-cost routes are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// (row, column) offset of a single step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
        }
    }
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Point {
        Point { row, col }
    }

    pub fn up(&self) -> Point {
        *self + Direction::Up
    }

    pub fn down(&self) -> Point {
        *self + Direction::Down
    }

    pub fn left(&self) -> Point {
        *self + Direction::Left
    }

    pub fn right(&self) -> Point {
        *self + Direction::Right
    }

    /// The 4-neighbourhood (von Neumann neighbourhood) in [Direction::ALL] order. Points may lie
    /// outside of any grid; filtering is up to the caller.
    pub fn neumann_neighborhood(&self) -> [Point; 4] {
        Direction::ALL.map(|dir| *self + dir)
    }

    pub fn manhattan_distance(&self, other: &Point) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    pub fn euclidean_distance(&self, other: &Point) -> f64 {
        let d_row = (self.row - other.row) as f64;
        let d_col = (self.col - other.col) as f64;
        d_row.hypot(d_col)
    }

    /// True if `other` is exactly one cardinal step away.
    pub fn is_adjacent(&self, other: &Point) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, dir: Direction) -> Point {
        let (d_row, d_col) = dir.offset();
        Point::new(self.row + d_row, self.col + d_col)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Point {
        Point::new(row, col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
