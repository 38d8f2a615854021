use crate::command::Position;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("position {position} is outside the {height}x{width} grid")]
    OutOfRange {
        position: Position,
        height: usize,
        width: usize,
    },
}

/// Fixed rectangular table of cell descriptions.
///
/// Immutable for the process lifetime; every cell carries a description
/// string. Bounds checks are the grid's only behaviour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<String>>,
    width: usize,
}

impl Grid {
    /// Builds a grid from rows of descriptions, validating that the table is
    /// non-empty and rectangular.
    pub fn new(cells: Vec<Vec<String>>) -> Result<Self, GridError> {
        let width = cells.first().map(Vec::len).unwrap_or(0);
        if cells.is_empty() || width == 0 {
            return Err(GridError::Empty);
        }
        for (row, row_cells) in cells.iter().enumerate() {
            if row_cells.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: row_cells.len(),
                });
            }
        }
        Ok(Self { cells, width })
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as usize) < self.height()
            && (position.col as usize) < self.width
    }

    /// Description of the cell at `position`.
    ///
    /// The walker's clamping keeps every observable position in bounds, so
    /// `OutOfRange` here signals a walker invariant violation rather than bad
    /// user input.
    pub fn describe(&self, position: Position) -> Result<&str, GridError> {
        if !self.contains(position) {
            return Err(GridError::OutOfRange {
                position,
                height: self.height(),
                width: self.width,
            });
        }
        Ok(&self.cells[position.row as usize][position.col as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(Grid::new(Vec::new()), Err(GridError::Empty));
        assert_eq!(Grid::new(vec![Vec::new()]), Err(GridError::Empty));
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = Grid::new(rows(&[&["a", "b"], &["c"]]));
        assert_eq!(
            result,
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn describes_cells_in_bounds() {
        let grid = Grid::new(rows(&[&["a", "b"], &["c", "d"]])).unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.describe(Position::new(1, 0)), Ok("c"));
    }

    #[test]
    fn describe_out_of_range_is_an_error() {
        let grid = Grid::new(rows(&[&["a", "b"], &["c", "d"]])).unwrap();
        for position in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(2, 0),
            Position::new(0, 2),
        ] {
            assert!(!grid.contains(position));
            assert!(matches!(
                grid.describe(position),
                Err(GridError::OutOfRange { .. })
            ));
        }
    }
}
