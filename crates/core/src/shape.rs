//! Shape module - rectangular cell matrices and the 90° rotation transform
//!
//! A shape is a `rows x cols` boolean matrix (at most 4x4) stored in a fixed
//! array, so shapes are `Copy` and never allocate. Rotation is a plain matrix
//! transform within the shape's own bounding box: there are no SRS states and no
//! pivot offsets, a `1x4` bar simply becomes a `4x1` bar.

use arrayvec::ArrayVec;

/// Largest supported bounding box edge.
pub const MAX_SHAPE_EDGE: usize = 4;

/// Offset of a single occupied cell relative to the shape's top-left corner, as (dx, dy)
pub type CellOffset = (i8, i8);

/// Occupied cells of a shape, row-major.
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SHAPE_EDGE * MAX_SHAPE_EDGE }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    /// Indexed `[row][col]`; everything outside `rows x cols` is always `false`.
    grid: [[bool; MAX_SHAPE_EDGE]; MAX_SHAPE_EDGE],
}

impl Shape {
    /// Build a shape from a 0/1 grid. Entries outside `rows x cols` are ignored.
    ///
    /// `const` so the tetromino catalog can live in static data.
    pub const fn from_grid(
        rows: u8,
        cols: u8,
        bits: [[u8; MAX_SHAPE_EDGE]; MAX_SHAPE_EDGE],
    ) -> Self {
        let mut grid = [[false; MAX_SHAPE_EDGE]; MAX_SHAPE_EDGE];
        let mut r = 0;
        while r < rows as usize && r < MAX_SHAPE_EDGE {
            let mut c = 0;
            while c < cols as usize && c < MAX_SHAPE_EDGE {
                grid[r][c] = bits[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: if rows as usize > MAX_SHAPE_EDGE { MAX_SHAPE_EDGE as u8 } else { rows },
            cols: if cols as usize > MAX_SHAPE_EDGE { MAX_SHAPE_EDGE as u8 } else { cols },
            grid,
        }
    }

    /// Build a shape from rows of booleans.
    ///
    /// Returns `None` when the rows are ragged or the matrix exceeds 4x4.
    pub fn from_rows(rows: &[&[bool]]) -> Option<Self> {
        if rows.len() > MAX_SHAPE_EDGE {
            return None;
        }
        let cols = rows.first().map_or(0, |r| r.len());
        if cols > MAX_SHAPE_EDGE || rows.iter().any(|r| r.len() != cols) {
            return None;
        }

        let mut grid = [[false; MAX_SHAPE_EDGE]; MAX_SHAPE_EDGE];
        for (r, row) in rows.iter().enumerate() {
            grid[r][..cols].copy_from_slice(row);
        }
        Some(Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            grid,
        })
    }

    /// Number of rows in the bounding box
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns in the bounding box
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (`row`, `col`) is occupied. Out-of-box is `false`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.grid[row][col]
    }

    /// Occupied cells as (dx, dy) offsets from the top-left corner
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for row in 0..self.rows as usize {
            for col in 0..self.cols as usize {
                if self.grid[row][col] {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&c| c).count()
    }

    /// True when no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Rotate 90° clockwise within the bounding box.
    ///
    /// An `R x C` shape becomes `C x R` with `new[r][c] = old[R - 1 - c][r]`.
    /// Four rotations give back the original shape.
    pub fn rotated_cw(&self) -> Self {
        let old_rows = self.rows as usize;
        let mut grid = [[false; MAX_SHAPE_EDGE]; MAX_SHAPE_EDGE];
        for (r, row) in grid.iter_mut().enumerate().take(self.cols as usize) {
            for (c, cell) in row.iter_mut().enumerate().take(old_rows) {
                *cell = self.grid[old_rows - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            grid,
        }
    }
}
