use crate::command::{Command, Direction, Position, Quantity};
use crate::grid::Grid;

/// Executes a command sequence against a grid, one unit step at a time.
///
/// The walk clamps at the boundary: a step whose candidate position falls
/// outside the grid is dropped together with the rest of that command, and
/// execution continues with the next command. The walker never fails; the
/// returned position is always inside the grid whenever the start was.
pub struct Walker<'a> {
    grid: &'a Grid,
}

impl<'a> Walker<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Walks from the grid origin.
    pub fn walk(&self, commands: &[Command]) -> Position {
        self.walk_from(Position::ORIGIN, commands)
    }

    pub fn walk_from(&self, start: Position, commands: &[Command]) -> Position {
        let mut position = start;
        for command in commands {
            let steps = match command.quantity {
                Quantity::Steps(n) => n,
                // Measured from the position the command executes at, not
                // from the origin.
                Quantity::ToEdge => self.distance_to_edge(position, command.direction),
            };
            let (row_delta, col_delta) = command.direction.delta();
            for _ in 0..steps {
                let candidate = Position::new(position.row + row_delta, position.col + col_delta);
                if !self.grid.contains(candidate) {
                    break;
                }
                position = candidate;
            }
        }
        position
    }

    /// Unit steps remaining to the boundary in the given direction.
    fn distance_to_edge(&self, position: Position, direction: Direction) -> u32 {
        let remaining = match direction {
            Direction::Up => position.row,
            Direction::Down => self.grid.height() as i32 - 1 - position.row,
            Direction::Left => position.col,
            Direction::Right => self.grid.width() as i32 - 1 - position.col,
        };
        remaining.max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn grid(height: usize, width: usize) -> Grid {
        let cells = (0..height)
            .map(|row| (0..width).map(|col| format!("cell {row},{col}")).collect())
            .collect();
        Grid::new(cells).unwrap()
    }

    #[test]
    fn empty_sequence_stays_at_origin() {
        let grid = grid(4, 4);
        assert_eq!(Walker::new(&grid).walk(&[]), Position::ORIGIN);
    }

    #[test]
    fn steps_move_unit_by_unit() {
        let grid = grid(4, 4);
        let commands = [
            Command::new(Direction::Right, Quantity::Steps(2)),
            Command::new(Direction::Down, Quantity::Steps(1)),
        ];
        assert_eq!(Walker::new(&grid).walk(&commands), Position::new(1, 2));
    }

    #[test]
    fn overshoot_truncates_at_the_edge() {
        let grid = grid(4, 4);
        let commands = [Command::new(Direction::Right, Quantity::Steps(99))];
        assert_eq!(Walker::new(&grid).walk(&commands), Position::new(0, 3));
    }

    #[test]
    fn sequence_continues_after_a_clamped_command() {
        let grid = grid(4, 4);
        let commands = [
            Command::new(Direction::Up, Quantity::Steps(5)),
            Command::new(Direction::Right, Quantity::Steps(1)),
        ];
        assert_eq!(Walker::new(&grid).walk(&commands), Position::new(0, 1));
    }

    #[test]
    fn to_edge_lands_on_the_far_column() {
        let grid = grid(4, 4);
        let commands = [Command::new(Direction::Right, Quantity::ToEdge)];
        assert_eq!(Walker::new(&grid).walk(&commands), Position::new(0, 3));
    }

    #[test]
    fn to_edge_at_the_boundary_is_a_no_op() {
        let grid = grid(4, 4);
        let to_edge = Command::new(Direction::Right, Quantity::ToEdge);
        let walker = Walker::new(&grid);
        let once = walker.walk(&[to_edge]);
        let twice = walker.walk(&[to_edge, to_edge]);
        assert_eq!(once, twice);
    }

    #[test]
    fn to_edge_measures_from_the_current_position() {
        let grid = grid(4, 4);
        let commands = [
            Command::new(Direction::Down, Quantity::Steps(2)),
            Command::new(Direction::Down, Quantity::ToEdge),
        ];
        assert_eq!(Walker::new(&grid).walk(&commands), Position::new(3, 0));
    }

    #[test]
    fn final_position_is_always_in_bounds() {
        let grid = grid(3, 5);
        let walker = Walker::new(&grid);
        for direction in Direction::iter() {
            for quantity in [Quantity::Steps(0), Quantity::Steps(7), Quantity::ToEdge] {
                let command = Command::new(direction, quantity);
                for start in [Position::ORIGIN, Position::new(2, 4), Position::new(1, 2)] {
                    let end = walker.walk_from(start, &[command]);
                    assert!(grid.contains(end), "{direction:?} {quantity:?} from {start}");
                }
            }
        }
    }

    #[test]
    fn synonymous_commands_land_on_the_same_cell() {
        let grid = grid(4, 4);
        let walker = Walker::new(&grid);
        let a = walker.walk(&[Command::new(Direction::Right, Quantity::Steps(2))]);
        let b = walker.walk(&[
            Command::new(Direction::Right, Quantity::Steps(1)),
            Command::new(Direction::Right, Quantity::Steps(1)),
        ]);
        assert_eq!(a, b);
    }
}
