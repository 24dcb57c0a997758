use fxhash::FxHashSet;
use grid_route::{Grid, Path, Point, SearchEngine};

// Routes across a 14x14 area with scattered obstacles and prints it before and after, where
// - ♢ marks an open cell
// - ⚠ marks an obstacle
// - ☗ marks the path
//
// The default corners are on different components, so the first search reports that the goal
// is unreachable; the second one picks a goal that can be reached.

const AREA: [[u8; 14]; 14] = [
    [0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0],
    [0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0],
    [0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0],
    [0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0],
    [1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0],
    [1, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0],
    [0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0],
];

fn render(grid: &Grid, path: &FxHashSet<Point>) -> String {
    let mut out = String::from("\n");
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.row_len(row).unwrap_or(0) as i32 {
            let p = Point::new(row, col);
            let symbol = if path.contains(&p) {
                " ☗ "
            } else if grid.is_open(&p) == Ok(true) {
                " ♢ "
            } else {
                " ⚠ "
            };
            out.push_str(symbol);
        }
        out.push('\n');
    }
    out
}

fn route(goal: Point) {
    let grid = Grid::new(AREA, Point::new(0, 0), goal);
    print!("{}", render(&grid, &FxHashSet::default()));
    let engine = SearchEngine::dijkstra();
    match engine.find_path::<i32>(&grid) {
        Ok(path) => show_path(&grid, &path),
        Err(err) if err.is_unreachable() => println!("unreachable"),
        Err(err) => println!("search failed: {}", err),
    }
}

fn show_path(grid: &Grid, path: &Path<i32>) {
    print!("{}", render(grid, &path.overlay()));
    println!("Path of cost {}:", path.cost());
    for p in path {
        println!("{}", p);
    }
}

fn main() {
    route(Point::new(0, 13));
    route(Point::new(13, 8));
}
