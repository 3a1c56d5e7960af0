use crate::game_2048::prelude::*;

/// A numbered tile sitting in one slot of the board.
///
/// The position is always the physical slot holding the tile; the value only changes through merges,
/// which replace both merged tiles with a fresh one of twice the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    value: u32,
    col: usize,
    row: usize,
    merged: bool,
}

impl Tile {
    /// Creates a tile, provided the value is a power of two.
    pub fn new(value: u32, col: usize, row: usize) -> Result<Tile> {
        ensure!(value.is_power_of_two(), "tile value {value} is not a power of two");
        Ok(Tile { value, col, row, merged: false })
    }

    /// Creates a tile at the given coordinate.
    pub fn at(value: u32, coord: &Coord) -> Result<Tile> {
        Tile::new(value, coord.col, coord.row)
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.col, self.row)
    }

    /// Whether this tile was produced by a merge during the tilt in progress.
    pub fn merged(&self) -> bool {
        self.merged
    }

    /// The same tile, relocated.
    pub(crate) fn moved_to(&self, coord: &Coord) -> Tile {
        Tile { col: coord.col, row: coord.row, ..*self }
    }

    /// The tile that replaces this one and an equal partner merging into its slot.
    ///
    /// Fails if twice the value no longer fits in a tile.
    pub(crate) fn doubled(&self) -> Result<Tile> {
        let Some(value) = self.value.checked_mul(2) else {
            bail!("merging two {} tiles overflows", self.value);
        };
        Ok(Tile { value, merged: false, ..*self })
    }

    pub(crate) fn with_merged(&self, merged: bool) -> Tile {
        Tile { merged, ..*self }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.value, self.coord())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_powers_of_two() {
        assert!(Tile::new(0, 0, 0).is_err());
        assert!(Tile::new(6, 0, 0).is_err());
        assert!(Tile::new(2048, 3, 3).is_ok());
    }

    #[test]
    fn doubling_keeps_slot_and_clears_mark() {
        let t = Tile::new(8, 1, 2).unwrap().with_merged(true);
        let d = t.doubled().unwrap();
        assert_eq!(d.value(), 16);
        assert_eq!(d.coord(), Coord::new(1, 2));
        assert!(!d.merged());
    }

    #[test]
    fn doubling_the_largest_value_fails() {
        let t = Tile::new(1 << 31, 0, 0).unwrap();
        assert!(t.doubled().is_err());
        assert_eq!(Tile::new(1 << 30, 0, 0).unwrap().doubled().unwrap().value(), 1 << 31);
    }

    #[test]
    fn moving_updates_position_only() {
        let t = Tile::new(4, 0, 0).unwrap().moved_to(&Coord::new(3, 1));
        assert_eq!((t.value(), t.col(), t.row()), (4, 3, 1));
        assert_eq!(format!("{t}"), "4@(3, 1)");
    }
}
