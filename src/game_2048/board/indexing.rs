use super::Board;
use crate::game_2048::prelude::*;

impl Board {
    /// Gets the tile at a given coordinate, failing if the coordinate is off the board.
    pub(super) fn get(&self, coord: &Coord) -> Result<Option<&Tile>> {
        if coord.in_bounds(self.size) {
            Ok(self.get_unchecked(coord))
        } else {
            Err(anyhow!(
                "invalid coordinate {coord} on a board of size {}",
                self.size
            ))
        }
    }

    /// Mutable access to the slot at a given coordinate, failing if the coordinate is off the board.
    pub(super) fn get_mut(&mut self, coord: &Coord) -> Result<&mut Option<Tile>> {
        if coord.in_bounds(self.size) {
            Ok(&mut self.cells[coord.offset(self.size)])
        } else {
            Err(anyhow!(
                "invalid coordinate {coord} on a board of size {}",
                self.size
            ))
        }
    }
}

impl Board {
    /// Unchecked accessor into the grid; engine use only.
    pub(super) fn get_unchecked(&self, coord: &Coord) -> Option<&Tile> {
        self.cells[coord.offset(self.size)].as_ref()
    }

    /// Writes a tile into the slot named by its own coordinate; engine use only.
    pub(super) fn put(&mut self, tile: Tile) {
        let offset = tile.coord().offset(self.size);
        self.cells[offset] = Some(tile);
    }

    /// Removes and returns the tile at a coordinate; engine use only.
    pub(super) fn take(&mut self, coord: &Coord) -> Option<Tile> {
        self.cells[coord.offset(self.size)].take()
    }
}
