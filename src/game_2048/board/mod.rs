pub(crate) mod indexing;
pub(crate) mod moves;
pub(crate) mod neighbours;
pub(crate) mod perspective;
pub(crate) mod pretty;

use itertools::Itertools;

use super::prelude::*;

pub use perspective::Perspective;

/// A raw matrix of tile values, indexed as `[row][col]` with row 0 at the bottom; 0 marks an empty slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid(pub Vec<Vec<u32>>);

impl Grid {
    /// An all-empty grid of the given side length.
    pub fn empty(size: usize) -> Grid {
        Grid(vec![vec![0; size]; size])
    }

    /// The side length of the grid (its number of rows).
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Notates the grid from the top row down, rows separated by slashes.
    pub fn notate(&self) -> String {
        self.0.iter().rev().map(|row| row.iter().join(" ")).join("/")
    }

    /// Sums all tile values on the grid.
    pub fn total(&self) -> u64 {
        self.0.iter().flatten().map(|&v| v as u64).sum()
    }
}

/// A square board of optional tiles plus the score accumulated by merges on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// The side length of the board; fixed at construction.
    size: usize,

    /// The slots of the board in bottom-up, row-major order (see `Coord::offset`).
    ///
    /// A tile's own coordinate always names the slot holding it.
    cells: Vec<Option<Tile>>,

    /// The sum of the values of every tile created by a merge since the board was last cleared.
    score: u64,
}

impl Board {
    /// Returns a new, empty board.
    pub fn new(size: usize) -> Board {
        Board { size, cells: vec![None; size * size], score: 0 }
    }

    /// Returns a board holding the values of a raw grid, with the given starting score.
    pub fn from_grid(grid: &Grid, score: u64) -> Result<Board> {
        let size = grid.size();
        ensure!(size > 0, "a board needs at least one slot");

        let mut board = Board::new(size);
        for (row, values) in grid.0.iter().enumerate() {
            ensure!(values.len() == size, "row {row} has {} slots, expected {size}", values.len());
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    board.add_tile(Tile::new(value, col, row)?)?;
                }
            }
        }
        board.score = score;
        Ok(board)
    }

    /// Places a tile at its own coordinate, which must name an empty slot.
    pub fn add_tile(&mut self, tile: Tile) -> Result<()> {
        let coord = tile.coord();
        if let Some(occupant) = self.get(&coord)? {
            bail!("cannot add {tile}: slot is occupied by {occupant}");
        }
        self.put(tile);
        Ok(())
    }

    /// Empties every slot and resets the score.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|slot| *slot = None);
        self.score = 0;
    }

    /// Coordinates of every empty slot, bottom row first.
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.coords().filter(|c| self.get_unchecked(c).is_none()).collect()
    }

    /// The raw value matrix of the board.
    pub fn grid(&self) -> Grid {
        Grid(
            (0..self.size)
                .map(|row| (0..self.size).map(|col| {
                    self.get_unchecked(&Coord::new(col, row)).map_or(0, |t| t.value())
                }).collect::<Vec<u32>>())
                .collect(),
        )
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The tile at a given physical coordinate, if any.
    pub fn tile(&self, coord: &Coord) -> Result<Option<&Tile>> {
        self.get(coord)
    }

    /// Iterates over every tile on the board, bottom row first.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    /// Iterates over every physical coordinate on the board, bottom row first.
    pub(crate) fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size;
        (0..size).cartesian_product(0..size).map(|(row, col)| Coord::new(col, row))
    }
}
