//! Square occupancy grid holding one [`Cell`] per coordinate.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{Cell, GameError};

/// N×N matrix of cell states, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `size`×`size` grid with every cell [`Cell::Empty`].
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if row >= self.size || col >= self.size {
            Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        } else {
            Ok(row * self.size + col)
        }
    }

    /// Returns `true` if (row, col) lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// State of the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        let idx = self.check_bounds(row, col)?;
        Ok(self.cells[idx])
    }

    /// Returns `true` if an intact ship segment sits at (row, col).
    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.get(row, col)? == Cell::Ship)
    }

    /// Overwrite the state at (row, col).
    pub fn set_state(&mut self, row: usize, col: usize, state: Cell) -> Result<(), GameError> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Number of intact ship cells in `row`.
    pub fn row_ship_count(&self, row: usize) -> Result<usize, GameError> {
        self.check_bounds(row, 0)?;
        let start = row * self.size;
        Ok(self.cells[start..start + self.size]
            .iter()
            .filter(|&&c| c == Cell::Ship)
            .count())
    }

    /// Number of intact ship cells in `col`.
    pub fn col_ship_count(&self, col: usize) -> Result<usize, GameError> {
        self.check_bounds(0, col)?;
        Ok(self
            .cells
            .iter()
            .skip(col)
            .step_by(self.size)
            .filter(|&&c| c == Cell::Ship)
            .count())
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// In-bounds 8-neighbourhood of (row, col), excluding the cell itself.
    pub fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.contains(r, c).then_some((r, c))
            })
    }

    /// Iterator over every coordinate with its state, row by row.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i / self.size, i % self.size), cell))
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", self.size)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                let ch = match self.cells[r * self.size + c] {
                    Cell::Empty => '.',
                    Cell::Ship => '■',
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                    Cell::MissRing => '~',
                };
                write!(f, "{} ", ch)?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
