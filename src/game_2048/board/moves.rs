use super::Board;
use crate::game_2048::prelude::*;

impl Board {
    /// Moves the tile at physical `source` to physical `dest`. Returns true if it merged into the tile already there.
    ///
    /// An empty destination just relocates the tile. An occupied destination must hold a different tile of the
    /// same value: both are replaced by one tile of twice the value, and the new value is added to the score.
    /// Anything else is refused before the board is touched.
    pub fn move_tile(&mut self, dest: &Coord, source: &Coord) -> Result<bool> {
        ensure!(dest != source, "cannot move the tile at {source} onto itself");
        let Some(tile) = self.get(source)?.copied() else {
            bail!("no tile to move at {source}");
        };

        match self.get(dest)?.copied() {
            None => {
                self.take(source);
                self.put(tile.moved_to(dest));
                Ok(false)
            }
            Some(occupant) if occupant.value() == tile.value() => {
                let merged = occupant.doubled()?;
                self.take(source);
                self.score += merged.value() as u64;
                self.put(merged);
                Ok(true)
            }
            Some(occupant) => Err(anyhow!("cannot merge {tile} into {occupant}")),
        }
    }

    /// Tilts the board toward a side, returning whether any tile moved or merged.
    ///
    /// Seen from the side, every column is walked from the second row from the top downward. Each tile goes to
    /// the highest slot that is either empty, or holds an equal tile with nothing in between that has not
    /// already merged during this tilt. Of three equal tiles in a line, only the leading two merge: the trailing
    /// one finds the merged tile marked and stops in the slot just behind it.
    pub fn tilt(&mut self, side: Side) -> Result<bool> {
        self.clear_merge_marks();
        let size = self.size;
        let mut changed = false;

        let mut view = self.perspective(side);
        for col in 0..size {
            for row in (0..size.saturating_sub(1)).rev() {
                let source = Coord::new(col, row);
                let Some(tile) = view.tile(&source)? else {
                    continue;
                };

                for dest_row in (row + 1..size).rev() {
                    let dest = Coord::new(col, dest_row);
                    match view.tile(&dest)? {
                        None => {
                            view.move_tile(&dest, &source)?;
                            changed = true;
                            break;
                        }
                        Some(occupant)
                            if !occupant.merged()
                                && occupant.value() == tile.value()
                                && view.path_clear(col, row, dest_row)? =>
                        {
                            view.move_tile(&dest, &source)?;
                            view.mark_merged(&dest)?;
                            changed = true;
                            break;
                        }
                        Some(_) => continue,
                    }
                }
            }
        }

        self.clear_merge_marks();
        log::trace!("tilted {side}: changed = {changed}, score = {}", self.score);
        Ok(changed)
    }

    /// Forgets which tiles were produced by merges.
    pub(crate) fn clear_merge_marks(&mut self) {
        self.cells.iter_mut().flatten().for_each(|tile| *tile = tile.with_merged(false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a board from rows listed top row first, the way the grid is notated.
    fn board(rows: &[&[u32]]) -> Board {
        let grid = Grid(rows.iter().rev().map(|r| r.to_vec()).collect());
        Board::from_grid(&grid, 0).unwrap()
    }

    fn rows(board: &Board) -> Vec<Vec<u32>> {
        board.grid().0.into_iter().rev().collect()
    }

    #[test]
    fn move_into_empty_slot() {
        let mut b = board(&[&[0, 0], &[2, 0]]);
        assert!(!b.move_tile(&Coord::new(1, 1), &Coord::new(0, 0)).unwrap());
        let moved = b.tile(&Coord::new(1, 1)).unwrap().copied().unwrap();
        assert_eq!(moved.coord(), Coord::new(1, 1));
        assert!(b.tile(&Coord::new(0, 0)).unwrap().is_none());
        assert_eq!(b.score(), 0);
    }

    #[test]
    fn move_onto_equal_tile_merges() {
        let mut b = board(&[&[4, 0], &[4, 0]]);
        assert!(b.move_tile(&Coord::new(0, 1), &Coord::new(0, 0)).unwrap());
        assert_eq!(rows(&b), vec![vec![8, 0], vec![0, 0]]);
        assert_eq!(b.score(), 8);
    }

    #[test]
    fn illegal_moves_leave_board_alone() {
        let mut b = board(&[&[4, 0], &[2, 0]]);
        let before = b.clone();
        assert!(b.move_tile(&Coord::new(0, 1), &Coord::new(0, 0)).is_err());
        assert!(b.move_tile(&Coord::new(0, 0), &Coord::new(0, 0)).is_err());
        assert!(b.move_tile(&Coord::new(1, 0), &Coord::new(1, 1)).is_err());
        assert!(b.move_tile(&Coord::new(2, 0), &Coord::new(0, 0)).is_err());
        assert_eq!(b, before);
    }

    #[test]
    fn overflowing_merge_is_refused() {
        let mut b = board(&[&[0, 0], &[2147483648, 2147483648]]);
        let before = b.clone();
        assert!(b.move_tile(&Coord::new(1, 0), &Coord::new(0, 0)).is_err());
        assert_eq!(b, before);
        assert!(b.tilt(Side::East).is_err());
    }

    #[test]
    fn tilt_east_merges_pair() {
        let mut b = board(&[&[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[2, 2, 0, 0]]);
        assert!(b.tilt(Side::East).unwrap());
        assert_eq!(rows(&b)[3], vec![0, 0, 0, 4]);
        assert_eq!(b.score(), 4);
        assert_eq!(b.tiles().count(), 1);
    }

    #[test]
    fn tilt_empty_board_changes_nothing() {
        for side in Side::all() {
            let mut b = Board::new(4);
            assert!(!b.tilt(side).unwrap());
            assert_eq!(b, Board::new(4));
        }
    }

    #[test]
    fn triple_merges_leading_pair() {
        let mut b = board(&[&[0, 0, 0, 0], &[2, 0, 0, 0], &[2, 0, 0, 0], &[2, 0, 0, 0]]);
        assert!(b.tilt(Side::North).unwrap());
        assert_eq!(rows(&b).iter().map(|r| r[0]).collect::<Vec<_>>(), vec![4, 2, 0, 0]);
        assert_eq!(b.score(), 4);
    }

    #[test]
    fn four_equal_tiles_make_two_pairs() {
        let mut b = board(&[&[2, 2, 2, 2], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]);
        assert!(b.tilt(Side::West).unwrap());
        assert_eq!(rows(&b)[0], vec![4, 4, 0, 0]);
        assert_eq!(b.score(), 8);
    }

    #[test]
    fn merged_tiles_do_not_merge_again() {
        // 2 2 4 tilted east would give 8 if the fresh 4 merged a second time.
        let mut b = board(&[&[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[2, 2, 4, 0]]);
        assert!(b.tilt(Side::East).unwrap());
        assert_eq!(rows(&b)[3], vec![0, 0, 4, 4]);
        assert_eq!(b.score(), 4);
    }

    #[test]
    fn blocked_tiles_do_not_merge_through_others() {
        let mut b = board(&[&[4, 0, 0, 0], &[0, 0, 0, 0], &[2, 0, 0, 0], &[4, 0, 0, 0]]);
        assert!(b.tilt(Side::North).unwrap());
        assert_eq!(rows(&b).iter().map(|r| r[0]).collect::<Vec<_>>(), vec![4, 2, 4, 0]);
        assert_eq!(b.score(), 0);
    }

    #[test]
    fn noop_tilt_is_idempotent() {
        let mut b = board(&[&[2, 4, 8, 16], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]);
        let before = b.clone();
        assert!(!b.tilt(Side::North).unwrap());
        assert_eq!(b, before);
        assert!(b.tiles().all(|t| !t.merged()));
    }

    #[test]
    fn tile_positions_follow_their_slots() {
        let mut b = board(&[&[0, 2, 0, 0], &[0, 0, 4, 0], &[8, 0, 0, 8], &[0, 2, 0, 2]]);
        for side in Side::all() {
            b.tilt(side).unwrap();
            for coord in b.coords() {
                if let Some(t) = b.tile(&coord).unwrap() {
                    assert_eq!(t.coord(), coord);
                }
            }
        }
    }
}
