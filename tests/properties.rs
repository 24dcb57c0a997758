use grid_route::{
    CostMap, Grid, Manhattan, Path, PathReconstructor, Point, Reconstruction, SearchEngine,
    UnitStep,
};

/// The obstacle layout the demo routes across, 0 open and 1 blocked.
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
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0],
];

fn open_grid(rows: usize, cols: usize) -> Grid {
    Grid::new(vec![vec![false; cols]; rows], Point::new(0, 0), Point::new(0, 0))
}

#[test]
fn three_by_three_example() {
    let grid = Grid::new(vec![vec![0; 3]; 3], Point::new(0, 0), Point::new(2, 2));
    let costs: CostMap<i32> = SearchEngine::dijkstra().search_grid(&grid).unwrap();
    assert_eq!(costs.get(&grid.goal()), Some(4));
    let path = PathReconstructor::default()
        .reconstruct(&grid, &costs, grid.start(), grid.goal())
        .unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path.points()[0], grid.start());
    assert_eq!(path.points()[4], grid.goal());
    assert!(path.is_contiguous());
}

#[test]
fn empty_grid_costs_are_manhattan_distances() {
    let grid = open_grid(4, 5);
    let cells = grid.open_cells().collect::<Vec<_>>();
    for engine in [SearchEngine::dijkstra(), SearchEngine::astar()] {
        for &start in &cells {
            for &goal in &cells {
                let costs: CostMap<i64> = engine.search(&grid, start, goal).unwrap();
                assert_eq!(
                    costs.get(&goal),
                    Some(start.manhattan_distance(&goal) as i64)
                );
            }
        }
    }
}

#[test]
fn start_equals_goal_yields_single_point() {
    let grid = open_grid(3, 3);
    let p = Point::new(1, 1);
    let costs: CostMap<i32> = SearchEngine::astar().search(&grid, p, p).unwrap();
    assert_eq!(costs.expanded(), 0);
    assert_eq!(costs.len(), 1);
    let path: Path<i32> = SearchEngine::astar().route(&grid, p, p).unwrap();
    assert_eq!(path.points(), &[p]);
    assert_eq!(path.cost(), 0);
}

#[test]
fn searches_are_deterministic() {
    let grid = Grid::new(AREA, Point::new(0, 0), Point::new(13, 8));
    for engine in [
        SearchEngine::dijkstra(),
        SearchEngine::astar(),
        SearchEngine::weighted_astar(1.5),
    ] {
        let first: CostMap<i32> = engine.search_grid(&grid).unwrap();
        let second: CostMap<i32> = engine.search_grid(&grid).unwrap();
        assert_eq!(
            first.iter().collect::<Vec<_>>(),
            second.iter().collect::<Vec<_>>()
        );
        let first: Path<i32> = engine.find_path(&grid).unwrap();
        let second: Path<i32> = engine.find_path(&grid).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn area_route_is_optimal_for_every_strategy() {
    let grid = Grid::new(AREA, Point::new(0, 0), Point::new(13, 8));
    let costs: CostMap<i32> = SearchEngine::dijkstra().search_grid(&grid).unwrap();
    let astar: CostMap<i32> = SearchEngine::astar().search_grid(&grid).unwrap();
    let optimal = costs.get(&grid.goal()).unwrap();
    assert_eq!(optimal, 33);
    assert_eq!(astar.get(&grid.goal()), Some(optimal));
    assert!(astar.expanded() <= costs.expanded());
    for strategy in [
        Reconstruction::Predecessors,
        Reconstruction::CostDescent,
        Reconstruction::GreedyMinimum,
    ] {
        let path = PathReconstructor::new(strategy)
            .reconstruct(&grid, &costs, grid.start(), grid.goal())
            .unwrap();
        assert!(path.is_contiguous());
        assert_eq!(path.len() as i32 - 1, optimal);
        assert!(path.iter().all(|p| grid.is_open(p) == Ok(true)));
    }
}

#[test]
fn area_corners_are_disconnected() {
    // The right-hand columns are walled off from the top-left corner.
    let grid = Grid::new(AREA, Point::new(0, 0), Point::new(0, 13));
    assert!(!grid.connected(&grid.start(), &grid.goal()));
    let err = SearchEngine::dijkstra().find_path::<i32>(&grid).unwrap_err();
    assert!(err.is_unreachable());
}

#[test]
fn walled_off_goal_is_unreachable() {
    let grid = Grid::new(
        [[0, 0, 1, 0], [0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0]],
        Point::new(0, 0),
        Point::new(3, 3),
    );
    let err = SearchEngine::astar().find_path::<i32>(&grid).unwrap_err();
    assert!(err.is_unreachable());
}

#[test]
fn jagged_rows_route_around_missing_columns() {
    // Row 1 only has one column, so the route has to use column 0.
    let grid = Grid::new(
        [vec![0, 0, 0, 0], vec![0], vec![0, 0, 0, 0]],
        Point::new(0, 3),
        Point::new(2, 3),
    );
    let path: Path<u32> = SearchEngine::new(Manhattan, UnitStep)
        .find_path(&grid)
        .unwrap();
    assert_eq!(path.cost(), 8);
    assert!(path.contains(&Point::new(1, 0)));
}

#[test]
fn float_costs_match_integer_costs_on_unit_grids() {
    let grid = Grid::new(AREA, Point::new(13, 0), Point::new(0, 5));
    let int_path: Path<i32> = SearchEngine::astar().find_path(&grid).unwrap();
    let float_path: Path<f64> = SearchEngine::astar().find_path(&grid).unwrap();
    assert_eq!(int_path.cost() as f64, float_path.cost());
    assert_eq!(int_path.points(), float_path.points());
}
