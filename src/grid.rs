use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::error::OutOfRange;
use crate::point::Point;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Open,
    Blocked,
}

impl Cell {
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }
}

/// `true` marks an occupied cell, as in a boolean obstacle mask.
impl From<bool> for Cell {
    fn from(blocked: bool) -> Cell {
        if blocked {
            Cell::Blocked
        } else {
            Cell::Open
        }
    }
}

macro_rules! cell_from_int {
    ($($t:ty),*) => {
        $(
            /// `0` is open, anything else is blocked.
            impl From<$t> for Cell {
                fn from(state: $t) -> Cell {
                    if state == 0 {
                        Cell::Open
                    } else {
                        Cell::Blocked
                    }
                }
            }
        )*
    };
}

cell_from_int!(u8, i32, u32, i64, usize);

/// [Grid] is the immutable obstacle map a search runs over. Rows are stored row-major in a
/// single buffer; rows may have different lengths, in which case column validity is checked
/// per row. Connected components over open cells are computed once at construction using a
/// [UnionFind] structure so that disconnected start/goal pairs can be rejected without
/// flood-filling.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    row_offsets: Vec<usize>,
    start: Point,
    goal: Point,
    components: UnionFind<usize>,
}

impl Grid {
    /// Builds a grid from a row-major layout. Cells may be given as [bool] (`true` blocked) or
    /// as integers (`0` open).
    pub fn new<R, T>(layout: impl IntoIterator<Item = R>, start: Point, goal: Point) -> Grid
    where
        R: IntoIterator<Item = T>,
        T: Into<Cell>,
    {
        let mut cells = Vec::new();
        let mut row_offsets = vec![0];
        for row in layout {
            cells.extend(row.into_iter().map(Into::into));
            row_offsets.push(cells.len());
        }
        let mut grid = Grid {
            components: UnionFind::new(cells.len()),
            cells,
            row_offsets,
            start,
            goal,
        };
        grid.generate_components();
        info!(
            "Built {}-row grid with {} cells ({} open)",
            grid.rows(),
            grid.cell_count(),
            grid.open_cells().count()
        );
        grid
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn rows(&self) -> usize {
        self.row_offsets.len() - 1
    }

    /// Number of columns in `row`, [None] if the row does not exist.
    pub fn row_len(&self, row: i32) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        if row < self.rows() {
            Some(self.row_offsets[row + 1] - self.row_offsets[row])
        } else {
            None
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, point: &Point) -> Option<usize> {
        let len = self.row_len(point.row)?;
        let col = usize::try_from(point.col).ok()?;
        if col < len {
            Some(self.row_offsets[point.row as usize] + col)
        } else {
            None
        }
    }

    pub fn is_valid(&self, point: &Point) -> bool {
        self.index(point).is_some()
    }

    pub fn cell(&self, point: &Point) -> Result<Cell, OutOfRange> {
        self.index(point)
            .map(|ix| self.cells[ix])
            .ok_or(OutOfRange { point: *point })
    }

    pub fn is_open(&self, point: &Point) -> Result<bool, OutOfRange> {
        self.cell(point).map(Cell::is_open)
    }

    fn can_move_to(&self, point: &Point) -> bool {
        self.index(point).is_some_and(|ix| self.cells[ix].is_open())
    }

    /// Valid, open 4-neighbours of `point` in up, left, down, right order.
    pub fn neighbors(&self, point: &Point) -> SmallVec<[Point; 4]> {
        point
            .neumann_neighborhood()
            .into_iter()
            .filter(|p| self.can_move_to(p))
            .collect()
    }

    /// Iterates over all open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows()).flat_map(move |row| {
            let (from, to) = (self.row_offsets[row], self.row_offsets[row + 1]);
            (from..to)
                .filter(move |&ix| self.cells[ix].is_open())
                .map(move |ix| Point::new(row as i32, (ix - from) as i32))
        })
    }

    /// Retrieves the component id of an open cell.
    pub fn component(&self, point: &Point) -> Option<usize> {
        self.index(point)
            .filter(|&ix| self.cells[ix].is_open())
            .map(|ix| self.components.find(ix))
    }

    /// Checks if both points are open and on the same component.
    pub fn connected(&self, a: &Point, b: &Point) -> bool {
        match (self.component(a), self.component(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Links up each open cell with its open right and lower neighbours. The lower neighbour
    /// only exists if the next row is long enough.
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.cells.len());
        for point in self.open_cells() {
            let Some(ix) = self.index(&point) else {
                continue;
            };
            for n in [point.right(), point.down()] {
                if let Some(n_ix) = self.index(&n).filter(|&n_ix| self.cells[n_ix].is_open()) {
                    components.union(ix, n_ix);
                }
            }
        }
        self.components = components;
    }
}
