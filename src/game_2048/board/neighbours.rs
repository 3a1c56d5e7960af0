use super::Board;
use crate::game_2048::prelude::*;

impl Board {
    /// Whether any slot on the board is empty.
    pub fn empty_space_exists(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Whether any tile has reached the given winning value.
    pub fn max_tile_exists(&self, max_piece: u32) -> bool {
        self.tiles().any(|t| t.value() == max_piece)
    }

    /// Whether some tilt could still change the board: a slot is empty, or two orthogonal neighbours are equal.
    ///
    /// Neighbours stop at the edges of the board; nothing wraps around.
    pub fn at_least_one_move_exists(&self) -> bool {
        self.empty_space_exists() || self.tiles().any(|t| self.has_equal_neighbour(t))
    }

    fn has_equal_neighbour(&self, tile: &Tile) -> bool {
        let coord = tile.coord();
        ORTHOGONAL_OFFSETS.iter().any(|offset| {
            let candidate = &coord + offset;
            candidate.in_bounds_signed(self.size)
                && self
                    .get_unchecked(&candidate.coerce())
                    .is_some_and(|n| n.value() == tile.value())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u32]]) -> Board {
        Board::from_grid(&Grid(rows.iter().rev().map(|r| r.to_vec()).collect()), 0).unwrap()
    }

    #[test]
    fn empty_space() {
        assert!(Board::new(4).empty_space_exists());
        assert!(!board(&[&[2, 4], &[4, 2]]).empty_space_exists());
        assert!(board(&[&[2, 0], &[4, 2]]).empty_space_exists());
    }

    #[test]
    fn max_tile() {
        assert!(board(&[&[2048, 0], &[0, 0]]).max_tile_exists(MAX_PIECE));
        assert!(!board(&[&[1024, 1024], &[0, 0]]).max_tile_exists(MAX_PIECE));
        assert!(board(&[&[64, 0], &[0, 0]]).max_tile_exists(64));
    }

    #[test]
    fn checkerboard_is_stuck() {
        let b = board(&[
            &[2, 4, 2, 4],
            &[4, 2, 4, 2],
            &[2, 4, 2, 4],
            &[4, 2, 4, 2],
        ]);
        assert!(!b.at_least_one_move_exists());
    }

    #[test]
    fn equal_neighbours_anywhere_allow_moves() {
        // Each pair sits on an otherwise stuck board.
        let corner = board(&[&[2, 2, 8, 16], &[4, 8, 16, 32], &[8, 16, 32, 64], &[16, 32, 64, 128]]);
        let edge = board(&[&[2, 4, 8, 16], &[4, 8, 16, 32], &[8, 16, 32, 64], &[16, 32, 128, 128]]);
        let interior = board(&[&[2, 4, 8, 16], &[4, 8, 8, 32], &[8, 16, 32, 64], &[16, 32, 64, 128]]);
        let vertical = board(&[&[2, 4, 8, 16], &[4, 8, 16, 32], &[8, 16, 32, 64], &[16, 32, 2, 64]]);
        for b in [corner, edge, interior, vertical] {
            assert!(b.at_least_one_move_exists());
        }
    }

    #[test]
    fn no_wraparound() {
        let b = board(&[&[2, 4, 8, 2], &[4, 8, 16, 32], &[8, 16, 32, 64], &[2, 32, 64, 128]]);
        assert!(!b.at_least_one_move_exists());
    }

    #[test]
    fn single_slot_board() {
        assert!(!board(&[&[2]]).at_least_one_move_exists());
        assert!(Board::new(1).at_least_one_move_exists());
    }
}
