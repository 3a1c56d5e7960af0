use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::game_2048::prelude::*;

/// Drops new tiles onto empty slots: a 2 most of the time, otherwise a 4.
#[derive(Clone, Debug)]
pub struct Spawner {
    rng: StdRng,
    four_chance: f64,
}

impl Spawner {
    /// Creates a spawner; a seed makes the sequence of tiles reproducible.
    pub fn new(seed: Option<u64>, four_chance: f64) -> Result<Spawner> {
        ensure!((0.0..=1.0).contains(&four_chance), "four chance {four_chance} is not a probability");
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Ok(Spawner { rng, four_chance })
    }

    /// Adds one tile to a random empty slot, returning it, or None if the board is full.
    pub fn spawn(&mut self, model: &mut Model) -> Result<Option<Tile>> {
        let empty = model.board().empty_coords();
        let Some(coord) = empty.choose(&mut self.rng) else {
            return Ok(None);
        };

        let value = if self.rng.gen_bool(self.four_chance) { 4 } else { 2 };
        let tile = Tile::at(value, coord)?;
        model.add_tile(tile)?;
        log::trace!("spawned {tile}");
        Ok(Some(tile))
    }
}
