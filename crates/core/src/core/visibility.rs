//! Fog-of-war: which cells have ever been within the reveal radius.

use crate::grid::{Grid, Pos};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    total_w: u32,
    total_h: u32,
    seen: Vec<bool>,
}

impl Visibility {
    /// All-unseen grid matching `grid`'s dimensions (border included).
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.total_width(), grid.total_height())
    }

    pub fn new(total_w: u32, total_h: u32) -> Self {
        Self {
            total_w,
            total_h,
            seen: vec![false; (total_w as usize) * (total_h as usize)],
        }
    }

    pub fn is_seen(&self, pos: Pos) -> bool {
        if pos.x >= self.total_w || pos.y >= self.total_h {
            return false;
        }
        self.seen[self.idx(pos)]
    }

    pub fn seen_count(&self) -> usize {
        self.seen.iter().filter(|&&s| s).count()
    }

    /// Mark every cell within Chebyshev `radius` of `center` as seen.
    ///
    /// Offsets that fall outside the grid are skipped. Cells are only ever
    /// added, so repeated reveals are idempotent.
    pub fn reveal(&mut self, center: Pos, radius: u32) {
        let r = radius as i64;
        let (cx, cy) = (center.x as i64, center.y as i64);
        let (w, h) = (self.total_w as i64, self.total_h as i64);

        let y0 = (cy - r).max(0);
        let y1 = (cy + r).min(h - 1);
        let x0 = (cx - r).max(0);
        let x1 = (cx + r).min(w - 1);
        if y0 > y1 || x0 > x1 {
            return;
        }

        let stride = self.total_w as usize;
        for y in y0..=y1 {
            let row = (y as usize) * stride;
            self.seen[row + x0 as usize..=row + x1 as usize].fill(true);
        }
    }

    fn idx(&self, pos: Pos) -> usize {
        (pos.y as usize) * (self.total_w as usize) + (pos.x as usize)
    }
}
