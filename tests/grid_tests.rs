use solo_battleship::{Cell, GameError, Grid};

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new(9);
    assert_eq!(grid.size(), 9);
    assert_eq!(grid.count(Cell::Empty), 81);
    for r in 0..9 {
        assert_eq!(grid.row_ship_count(r).unwrap(), 0);
        assert_eq!(grid.col_ship_count(r).unwrap(), 0);
    }
}

#[test]
fn test_set_state_and_occupancy() -> Result<(), GameError> {
    let mut grid = Grid::new(5);
    grid.set_state(1, 2, Cell::Ship)?;
    assert!(grid.is_occupied(1, 2)?);
    assert!(!grid.is_occupied(2, 1)?);

    grid.set_state(1, 2, Cell::Hit)?;
    assert!(!grid.is_occupied(1, 2)?);
    assert_eq!(grid.get(1, 2)?, Cell::Hit);
    Ok(())
}

#[test]
fn test_out_of_bounds_fails_fast() {
    let mut grid = Grid::new(9);
    let err = GameError::OutOfBounds { row: 9, col: 0, size: 9 };
    assert_eq!(grid.set_state(9, 0, Cell::Ship).unwrap_err(), err);
    assert_eq!(grid.is_occupied(9, 0).unwrap_err(), err);
    assert_eq!(
        grid.get(0, 12).unwrap_err(),
        GameError::OutOfBounds { row: 0, col: 12, size: 9 }
    );
    assert!(grid.row_ship_count(9).is_err());
    assert!(grid.col_ship_count(9).is_err());
    // nothing was clamped into the grid
    assert_eq!(grid.count(Cell::Empty), 81);
}

#[test]
fn test_row_and_col_counts_only_count_intact_ships() -> Result<(), GameError> {
    let mut grid = Grid::new(6);
    for c in 1..4 {
        grid.set_state(2, c, Cell::Ship)?;
    }
    grid.set_state(4, 2, Cell::Ship)?;
    grid.set_state(2, 3, Cell::Hit)?;
    grid.set_state(0, 2, Cell::MissRing)?;

    assert_eq!(grid.row_ship_count(2)?, 2);
    assert_eq!(grid.row_ship_count(4)?, 1);
    assert_eq!(grid.col_ship_count(2)?, 2);
    assert_eq!(grid.col_ship_count(3)?, 0);
    Ok(())
}

#[test]
fn test_neighbours_are_bounds_checked() {
    let grid = Grid::new(9);
    assert_eq!(grid.neighbours(0, 0).count(), 3);
    assert_eq!(grid.neighbours(0, 4).count(), 5);
    assert_eq!(grid.neighbours(8, 8).count(), 3);
    let mut around: Vec<_> = grid.neighbours(4, 4).collect();
    around.sort();
    assert_eq!(
        around,
        vec![(3, 3), (3, 4), (3, 5), (4, 3), (4, 5), (5, 3), (5, 4), (5, 5)]
    );
}

#[test]
fn test_resolved_cells() {
    assert!(!Cell::Empty.is_resolved());
    assert!(!Cell::Ship.is_resolved());
    assert!(Cell::Hit.is_resolved());
    assert!(Cell::Miss.is_resolved());
    assert!(Cell::MissRing.is_resolved());
}
