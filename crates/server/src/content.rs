//! Fixed survey map content.
use nav_core::{Grid, GridError};

/// The 4x4 survey map, origin at the top-left "punkt startowy" cell.
pub fn survey_grid() -> Result<Grid, GridError> {
    let rows = [
        ["punkt startowy", "trawa", "drzewo", "dom"],
        ["trawa", "wiatrak", "trawa", "trawa"],
        ["trawa", "trawa", "skały", "dwa drzewa"],
        ["góry", "góry", "samochód", "jaskinia"],
    ];
    Grid::new(
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_core::Position;

    #[test]
    fn map_is_four_by_four() {
        let grid = survey_grid().unwrap();
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.describe(Position::ORIGIN), Ok("punkt startowy"));
        assert_eq!(grid.describe(Position::new(3, 3)), Ok("jaskinia"));
    }
}
