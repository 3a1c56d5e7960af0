use super::Board;
use crate::game_2048::prelude::*;

impl Board {
    /// Pretty-prints the board, top row first, each value right-justified in four columns.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        for row in (0..self.size).rev() {
            for col in 0..self.size {
                match self.get_unchecked(&Coord::new(col, row)) {
                    Some(tile) => out.push_str(&format!("|{:>4}", tile.value())),
                    None       => out.push_str("|    "),
                }
            }
            out.push_str("|\n");
        }
        out
    }
}
