use crate::game_2048::prelude::*;

/// Board coordinate in (x, y) order; (0, 0) is the bottom-left slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    /// Constructs a new coord.
    pub fn new(col: usize, row: usize) -> Coord {
        Coord { col, row }
    }

    /// Determines whether or not the coord is in bounds on a board with the given side length.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.col < size && self.row < size
    }

    /// The linear offset of the coord in a bottom-up, row-major grid.
    pub fn offset(&self, size: usize) -> usize {
        self.row * size + self.col
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

// Simple offset pair that can be used to calculate neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetCoord {
    pub cols: isize,
    pub rows: isize,
}

/// Offsets that turn a coordinate into one of its orthogonal neighbours.
pub static ORTHOGONAL_OFFSETS: [OffsetCoord; 4] = [
    OffsetCoord { cols: 0, rows: 1 },
    OffsetCoord { cols: 1, rows: 0 },
    OffsetCoord { cols: 0, rows: -1 },
    OffsetCoord { cols: -1, rows: 0 },
];

impl OffsetCoord {
    /// Coerces the offset into a coordinate unchecked.
    pub fn coerce(&self) -> Coord {
        Coord {
            col: self.cols as usize,
            row: self.rows as usize,
        }
    }

    /// Determines whether or not the offset lands on a board with the given side length.
    pub fn in_bounds_signed(&self, size: usize) -> bool {
        let size = size as isize;
        0 <= self.cols && self.cols < size && 0 <= self.rows && self.rows < size
    }
}

impl From<&Coord> for OffsetCoord {
    fn from(value: &Coord) -> Self {
        OffsetCoord {
            cols: value.col as isize,
            rows: value.row as isize,
        }
    }
}

impl Add<&OffsetCoord> for &Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        let base = OffsetCoord::from(self);
        OffsetCoord {
            cols: base.cols + rhs.cols,
            rows: base.rows + rhs.rows,
        }
    }
}

impl Side {
    /// Maps a coordinate seen from this side (where the side is "up") onto the physical board.
    ///
    /// North is the identity; the other sides are quarter or half turns of the board.
    pub fn physical(&self, logical: &Coord, size: usize) -> Coord {
        let Coord { col: c, row: r } = *logical;
        let far = size - 1;
        match self {
            Side::North => Coord::new(c, r),
            Side::East  => Coord::new(r, far - c),
            Side::South => Coord::new(far - c, far - r),
            Side::West  => Coord::new(far - r, c),
        }
    }

    /// Maps a physical coordinate back into the frame seen from this side.
    pub fn logical(&self, physical: &Coord, size: usize) -> Coord {
        self.inverse().physical(physical, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perspectives_invert() {
        let size = 5;
        for side in Side::all() {
            for col in 0..size {
                for row in 0..size {
                    let c = Coord::new(col, row);
                    let p = side.physical(&c, size);
                    assert!(p.in_bounds(size));
                    assert_eq!(side.logical(&p, size), c, "{side} did not invert at {c}");
                }
            }
        }
    }

    #[test]
    fn up_points_toward_side() {
        // One step "up" in the logical frame is one step toward the side on the physical board.
        let size = 4;
        let expected = [
            (Side::North, OffsetCoord { cols: 0, rows: 1 }),
            (Side::East, OffsetCoord { cols: 1, rows: 0 }),
            (Side::South, OffsetCoord { cols: 0, rows: -1 }),
            (Side::West, OffsetCoord { cols: -1, rows: 0 }),
        ];
        for (side, step) in expected {
            let lo = OffsetCoord::from(&side.physical(&Coord::new(1, 1), size));
            let hi = OffsetCoord::from(&side.physical(&Coord::new(1, 2), size));
            assert_eq!(OffsetCoord { cols: hi.cols - lo.cols, rows: hi.rows - lo.rows }, step);
        }
    }

    #[test]
    fn neighbours_respect_edges() {
        let corner = Coord::new(0, 0);
        let on_board = ORTHOGONAL_OFFSETS
            .iter()
            .filter(|o| (&corner + *o).in_bounds_signed(4))
            .count();
        assert_eq!(on_board, 2);
    }
}
