use super::Board;
use crate::game_2048::prelude::*;

/// The board as seen from one side: logical row numbers grow toward that side.
///
/// Every coordinate passed to a perspective is logical and is mapped onto the physical board on the way in,
/// so tiles always keep their physical positions and nothing needs restoring once the view is dropped.
pub struct Perspective<'b> {
    board: &'b mut Board,
    side: Side,
}

impl Board {
    /// Views the board from the given side.
    pub fn perspective(&mut self, side: Side) -> Perspective<'_> {
        Perspective { board: self, side }
    }
}

impl<'b> Perspective<'b> {
    /// The physical coordinate behind a logical one.
    pub fn physical(&self, logical: &Coord) -> Result<Coord> {
        ensure!(
            logical.in_bounds(self.board.size),
            "invalid coordinate {logical} on a board of size {}",
            self.board.size
        );
        Ok(self.side.physical(logical, self.board.size))
    }

    /// The tile at a logical coordinate, if any.
    pub fn tile(&self, logical: &Coord) -> Result<Option<Tile>> {
        let coord = self.physical(logical)?;
        Ok(self.board.get(&coord)?.copied())
    }

    /// Moves the tile at logical `source` to logical `dest`, returning whether it merged on arrival.
    pub fn move_tile(&mut self, dest: &Coord, source: &Coord) -> Result<bool> {
        let [dest, source] = [self.physical(dest)?, self.physical(source)?];
        self.board.move_tile(&dest, &source)
    }

    /// Flags the tile at a logical coordinate as produced by a merge during this tilt.
    pub fn mark_merged(&mut self, logical: &Coord) -> Result<()> {
        let coord = self.physical(logical)?;
        match self.board.get_mut(&coord)? {
            Some(tile) => {
                *tile = tile.with_merged(true);
                Ok(())
            }
            None => Err(anyhow!("no tile to mark at {coord}")),
        }
    }

    /// Whether every slot strictly between two logical rows of a column is empty.
    pub fn path_clear(&self, col: usize, from_row: usize, to_row: usize) -> Result<bool> {
        for row in from_row + 1..to_row {
            if self.tile(&Coord::new(col, row))?.is_some() {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
