//! Wall/passage grid shared by the generator, the movement resolver and renderers.
//!
//! Coordinates follow the two-step lattice the generator carves on:
//! - interior cells live at `1..=width` × `1..=height`
//! - the ring at `x = 0`, `x = width + 1`, `y = 0`, `y = height + 1` is always wall
//! - odd/odd coordinates are maze rooms, coordinates with an even component are
//!   removable walls between rooms
//!
//! The entry is `(1, 1)` and the exit is `(width, height)`.

use hashbrown::HashSet;
use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    Wall,
    Open,
}

impl Cell {
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }

    fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => '.',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pos {
    pub x: u32,
    pub y: u32,
}

impl Pos {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Shifted position, or `None` when a component would go negative.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Pos> {
        Some(Pos {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Chebyshev distance (square neighbourhood).
    pub fn chebyshev(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-wall grid for an interior of `width` × `height`.
    pub fn walled(width: u32, height: u32) -> Self {
        let cells = vec![Cell::Wall; (width as usize + 2) * (height as usize + 2)];
        Self {
            width,
            height,
            cells,
        }
    }

    /// Parse a grid drawn with `#` (wall) and `.` (open), border included.
    ///
    /// Returns `None` if the rows are ragged, smaller than 3×3, or contain
    /// another glyph.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let total_h = rows.len();
        let total_w = rows.first()?.chars().count();
        if total_h < 3 || total_w < 3 {
            return None;
        }

        let mut cells = Vec::with_capacity(total_w * total_h);
        for row in rows {
            if row.chars().count() != total_w {
                return None;
            }
            for ch in row.chars() {
                cells.push(match ch {
                    '#' => Cell::Wall,
                    '.' => Cell::Open,
                    _ => return None,
                });
            }
        }

        Some(Self {
            width: (total_w - 2) as u32,
            height: (total_h - 2) as u32,
            cells,
        })
    }

    /// Inverse of [`Grid::from_rows`].
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.total_width() as usize)
            .map(|row| row.iter().map(|c| c.glyph()).collect())
            .collect()
    }

    /// Interior width (border excluded).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Interior height (border excluded).
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn total_width(&self) -> u32 {
        self.width + 2
    }

    pub fn total_height(&self) -> u32 {
        self.height + 2
    }

    pub fn entry(&self) -> Pos {
        Pos::new(1, 1)
    }

    pub fn exit(&self) -> Pos {
        Pos::new(self.width, self.height)
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.total_width() && pos.y < self.total_height()
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x == self.width + 1 || pos.y == self.height + 1
    }

    /// Cell at `pos`; `None` outside the allocated grid.
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[self.idx(pos)])
    }

    /// Out-of-bounds positions read as walls.
    pub fn is_open(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(Cell::is_open)
    }

    pub(crate) fn open(&mut self, pos: Pos) {
        if self.in_bounds(pos) {
            let i = self.idx(pos);
            self.cells[i] = Cell::Open;
        }
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let w = self.total_width();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_open())
            .map(move |(i, _)| Pos::new(i as u32 % w, i as u32 / w))
    }

    /// Open cells reachable from `start` by cardinal steps over open cells.
    pub fn reachable_from(&self, start: Pos) -> HashSet<Pos> {
        let mut seen = HashSet::new();
        if !self.is_open(start) {
            return seen;
        }

        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);
        while let Some(p) = queue.pop_front() {
            for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let Some(n) = p.offset(dx, dy) else {
                    continue;
                };
                if self.is_open(n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen
    }

    fn idx(&self, pos: Pos) -> usize {
        (pos.y as usize) * (self.total_width() as usize) + (pos.x as usize)
    }
}
