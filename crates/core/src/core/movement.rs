use crate::grid::{Grid, Pos};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// Unit vector; `y` grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn from_action_str(action: &str) -> Option<Self> {
        match action {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// One discrete step. Returns the target cell if it is open, otherwise `pos`
/// unchanged; bumping into a wall is not an error.
pub fn resolve_move(pos: Pos, direction: Direction, grid: &Grid) -> Pos {
    let (dx, dy) = direction.delta();
    match pos.offset(dx, dy) {
        Some(target) if grid.is_open(target) => target,
        _ => pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate, SeededRandom};

    fn corridor() -> Grid {
        Grid::from_rows(&["#####", "#...#", "###.#", "#####"]).unwrap()
    }

    #[test]
    fn open_target_is_accepted() {
        let g = corridor();
        assert_eq!(resolve_move(Pos::new(1, 1), Direction::Right, &g), Pos::new(2, 1));
        assert_eq!(resolve_move(Pos::new(3, 1), Direction::Down, &g), Pos::new(3, 2));
        assert_eq!(resolve_move(Pos::new(3, 2), Direction::Up, &g), Pos::new(3, 1));
    }

    #[test]
    fn walls_and_border_leave_position_unchanged() {
        let g = corridor();
        let start = Pos::new(1, 1);
        assert_eq!(resolve_move(start, Direction::Left, &g), start);
        assert_eq!(resolve_move(start, Direction::Up, &g), start);
        assert_eq!(resolve_move(start, Direction::Down, &g), start);
    }

    #[test]
    fn stale_positions_outside_the_grid_do_not_panic() {
        let g = corridor();
        let p = Pos::new(0, 0);
        assert_eq!(resolve_move(p, Direction::Left, &g), p);
        let far = Pos::new(40, 40);
        assert_eq!(resolve_move(far, Direction::Right, &g), far);
    }

    #[test]
    fn rejected_moves_are_exactly_the_walled_targets() {
        let g = generate(11, 9, &mut SeededRandom::new(99));
        for p in g.open_cells() {
            for d in Direction::all() {
                let (dx, dy) = d.delta();
                let target = p.offset(dx, dy).unwrap();
                let moved = resolve_move(p, d, &g);
                if g.is_open(target) {
                    assert_eq!(moved, target);
                } else {
                    assert_eq!(moved, p);
                }
            }
        }
    }

    #[test]
    fn action_names_round_trip() {
        for d in Direction::all() {
            assert_eq!(Direction::from_action_str(d.as_str()), Some(d));
        }
        assert_eq!(Direction::from_action_str("jump"), None);
    }
}
