use std::fmt;

use super::cell::CellType;
use crate::error::ValidationError;

/// Rectangular world enclosed by an unbroken ring of walls.
///
/// Cells live in a flat row-major buffer (`y * width + x`). The grid is fixed
/// at construction; the only way to read it is through [`WorldModel::cell`] and
/// friends, and anything outside the rectangle reads as [`CellType::Wall`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldModel {
    width: usize,
    height: usize,
    grid: Vec<CellType>,
}

impl WorldModel {
    pub const MIN_SIZE: usize = 3;

    /// Build a walled `width` x `height` world.
    ///
    /// `interior`, when given, must be exactly `(height - 2)` rows of
    /// `(width - 2)` cell codes and is written inside the perimeter. Without it
    /// the interior is all [`CellType::Empty`]. A wall code inside the interior
    /// is allowed; the perimeter is always wall regardless.
    pub fn enclosed(
        width: usize,
        height: usize,
        interior: Option<&[Vec<u8>]>,
    ) -> Result<Self, ValidationError> {
        if width < Self::MIN_SIZE || height < Self::MIN_SIZE {
            return Err(ValidationError::TooSmall { width, height });
        }

        let mut grid = vec![CellType::Empty; width * height];
        for x in 0..width {
            grid[x] = CellType::Wall;
            grid[(height - 1) * width + x] = CellType::Wall;
        }
        for y in 0..height {
            grid[y * width] = CellType::Wall;
            grid[y * width + width - 1] = CellType::Wall;
        }

        if let Some(rows) = interior {
            if rows.len() != height - 2 {
                return Err(ValidationError::InteriorRowCount {
                    expected: height - 2,
                    actual: rows.len(),
                });
            }
            for (row_idx, row) in rows.iter().enumerate() {
                if row.len() != width - 2 {
                    return Err(ValidationError::InteriorRowLength {
                        row: row_idx,
                        expected: width - 2,
                        actual: row.len(),
                    });
                }
                let y = row_idx + 1;
                for (col_idx, &code) in row.iter().enumerate() {
                    let x = col_idx + 1;
                    let cell = CellType::from_code(code)
                        .ok_or(ValidationError::UnknownCellCode { x, y, code })?;
                    grid[y * width + x] = cell;
                }
            }
        }

        Ok(Self {
            width,
            height,
            grid,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Cell type at `(x, y)`. Out-of-bounds coordinates are walls.
    pub fn cell(&self, x: i32, y: i32) -> CellType {
        match self.index(x, y) {
            Some(i) => self.grid[i],
            None => CellType::Wall,
        }
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_walkable()
    }

    /// Number of cells of the given type, perimeter included.
    pub fn count(&self, cell: CellType) -> usize {
        self.grid.iter().filter(|c| **c == cell).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((i32, i32), CellType)> + '_ {
        let width = self.width;
        self.grid
            .iter()
            .enumerate()
            .map(move |(i, c)| (((i % width) as i32, (i / width) as i32), *c))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

impl fmt::Display for WorldModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.chunks(self.width) {
            let line: String = row.iter().map(|c| c.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perimeter(width: usize, height: usize) -> Vec<(i32, i32)> {
        let (w, h) = (width as i32, height as i32);
        let mut out = Vec::new();
        for x in 0..w {
            out.push((x, 0));
            out.push((x, h - 1));
        }
        for y in 0..h {
            out.push((0, y));
            out.push((w - 1, y));
        }
        out
    }

    #[test]
    fn five_by_five_corner_blocked_center_open() {
        let world = WorldModel::enclosed(5, 5, None).unwrap();
        assert!(!world.is_walkable(0, 0));
        assert!(world.is_walkable(2, 2));
    }

    #[test]
    fn perimeter_is_wall() {
        let world = WorldModel::enclosed(7, 4, None).unwrap();
        for (x, y) in perimeter(7, 4) {
            assert_eq!(world.cell(x, y), CellType::Wall, "({x}, {y})");
            assert!(!world.is_walkable(x, y));
        }
    }

    #[test]
    fn minimum_world_has_single_open_cell() {
        let world = WorldModel::enclosed(3, 3, None).unwrap();
        assert_eq!(world.count(CellType::Empty), 1);
        assert_eq!(world.count(CellType::Wall), 8);
        assert!(world.is_walkable(1, 1));
    }

    #[test]
    fn too_small_rejected() {
        assert_eq!(
            WorldModel::enclosed(2, 5, None),
            Err(ValidationError::TooSmall {
                width: 2,
                height: 5
            })
        );
        assert!(WorldModel::enclosed(5, 0, None).is_err());
    }

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let world = WorldModel::enclosed(4, 4, None).unwrap();
        for (x, y) in [(-1, 1), (1, -1), (4, 1), (1, 4), (i32::MIN, i32::MAX)] {
            assert!(!world.in_bounds(x, y));
            assert_eq!(world.cell(x, y), CellType::Wall);
            assert!(!world.is_walkable(x, y));
        }
    }

    #[test]
    fn interior_overlay_placed_inside_perimeter() {
        let interior = vec![vec![0, 2, 0], vec![3, 1, 0]];
        let world = WorldModel::enclosed(5, 4, Some(&interior)).unwrap();
        assert_eq!(world.cell(2, 1), CellType::Resource);
        assert_eq!(world.cell(1, 2), CellType::Hazard);
        assert_eq!(world.cell(2, 2), CellType::Wall);
        assert_eq!(world.cell(3, 2), CellType::Empty);
        assert_eq!(world.count(CellType::Resource), 1);
    }

    #[test]
    fn interior_row_count_mismatch() {
        let interior = vec![vec![0, 0, 0]];
        assert_eq!(
            WorldModel::enclosed(5, 5, Some(&interior)),
            Err(ValidationError::InteriorRowCount {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn interior_row_length_mismatch() {
        let interior = vec![vec![0, 0, 0], vec![0, 0], vec![0, 0, 0]];
        assert_eq!(
            WorldModel::enclosed(5, 5, Some(&interior)),
            Err(ValidationError::InteriorRowLength {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn interior_unknown_code() {
        let interior = vec![vec![0, 9, 0]];
        assert_eq!(
            WorldModel::enclosed(5, 3, Some(&interior)),
            Err(ValidationError::UnknownCellCode { x: 2, y: 1, code: 9 })
        );
    }

    #[test]
    fn walkability_follows_cell_type() {
        let interior = vec![vec![0, 1, 2, 3]];
        let world = WorldModel::enclosed(6, 3, Some(&interior)).unwrap();
        for ((x, y), cell) in world.cells() {
            assert_eq!(world.is_walkable(x, y), cell.is_walkable(), "({x}, {y})");
        }
        assert!(!world.is_walkable(2, 1));
        assert!(world.is_walkable(4, 1));
    }

    #[test]
    fn cells_iterates_row_major() {
        let world = WorldModel::enclosed(3, 3, None).unwrap();
        let coords: Vec<(i32, i32)> = world.cells().map(|(p, _)| p).take(4).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
    }

    #[test]
    fn display_renders_glyphs() {
        let interior = vec![vec![2, 3]];
        let world = WorldModel::enclosed(4, 3, Some(&interior)).unwrap();
        assert_eq!(world.to_string(), "####\n#$!#\n####\n");
    }
}
