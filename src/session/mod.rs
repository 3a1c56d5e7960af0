mod spawner;

use crate::game_2048::prelude::*;

pub use spawner::Spawner;

/// A playing session: one game at a time, new tiles after every tilt, and a linear history to step through.
pub struct Session {
    model: Model,
    spawner: Option<Spawner>,
    start_tiles: usize,
    past: Vec<Model>,
    future: Vec<Model>,
}

impl Session {
    /// Starts a new game. With a gamestring the board is restored from it, otherwise the board is cleared
    /// and seeded with the configured number of starting tiles.
    ///
    /// The best score carries over between games unless the gamestring names a higher one.
    pub fn new_game(&mut self, setup: Option<GameString>) -> Result<()> {
        match setup {
            Some(GameString { setup, score, max_score }) => {
                let max_score = max_score.max(self.model.max_score());
                self.model = Model::restore(&setup.grid, score, max_score, self.model.max_piece())?;
            }
            None => {
                self.model.clear();
                for _ in 0..self.start_tiles {
                    self.spawn()?;
                }
            }
        };
        [self.past, self.future] = [vec![], vec![]];
        log::info!("new {0}x{0} game", self.model.size());
        Ok(())
    }

    /// Tilts toward a side; if anything changed, a new tile is spawned and the step becomes undoable.
    pub fn tilt(&mut self, side: Side) -> Result<bool> {
        if self.model.game_over() {
            return Err(anyhow!("the game is over; start a new game or clear the board"));
        }

        let before = self.model.clone();
        let changed = self.model.tilt(side)?;
        if changed {
            self.spawn()?;
            self.past.push(before);
            self.future.clear();
        }
        log::debug!("tilt {side}: changed = {changed}, score = {}", self.model.score());
        Ok(changed)
    }

    /// Places a tile by hand.
    pub fn add_tile(&mut self, tile: Tile) -> Result<()> {
        let before = self.model.clone();
        self.model.add_tile(tile)?;
        self.past.push(before);
        self.future.clear();
        Ok(())
    }

    /// Spawns a random tile, if spawning is enabled and the board has room.
    pub fn spawn(&mut self) -> Result<Option<Tile>> {
        match self.spawner.as_mut() {
            Some(spawner) => spawner.spawn(&mut self.model),
            None          => Ok(None),
        }
    }

    /// Empties the board and resets the score; undoable.
    pub fn clear(&mut self) {
        self.past.push(self.model.clone());
        self.future.clear();
        self.model.clear();
    }

    /// Steps back to the position before the last change.
    pub fn undo(&mut self) -> Result<()> {
        let Some(prev) = self.past.pop() else {
            return Err(anyhow!("nothing to undo"));
        };
        let current = std::mem::replace(&mut self.model, prev);
        self.model.keep_max_score(current.max_score());
        self.future.push(current);
        Ok(())
    }

    /// Steps forward again after an undo.
    pub fn redo(&mut self) -> Result<()> {
        let Some(next) = self.future.pop() else {
            return Err(anyhow!("nothing to redo"));
        };
        let current = std::mem::replace(&mut self.model, next);
        self.model.keep_max_score(current.max_score());
        self.past.push(current);
        Ok(())
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}

/// Everything needed to start a session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub rules: RulesConfig,
    pub seed: Option<u64>,
    pub four_chance: f64,
    pub start_tiles: usize,
    pub spawn: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            rules: RulesConfig::default(),
            seed: None,
            four_chance: 0.1,
            start_tiles: 2,
            spawn: true,
        }
    }
}

impl SessionConfig {
    /// Gets the default configuration: the classic 4x4 game to 2048.
    pub fn new() -> SessionConfig {
        SessionConfig::default()
    }

    pub fn with_rules(self, rules: RulesConfig) -> SessionConfig {
        SessionConfig { rules, ..self }
    }

    pub fn with_seed(self, seed: u64) -> SessionConfig {
        SessionConfig { seed: Some(seed), ..self }
    }

    pub fn with_four_chance(self, four_chance: f64) -> SessionConfig {
        SessionConfig { four_chance, ..self }
    }

    pub fn with_start_tiles(self, start_tiles: usize) -> SessionConfig {
        SessionConfig { start_tiles, ..self }
    }

    pub fn without_spawning(self) -> SessionConfig {
        SessionConfig { spawn: false, ..self }
    }

    /// Produces a session with an empty board; call `Session::new_game` to set it up.
    pub fn get_session(&self) -> Result<Session> {
        let spawner = match self.spawn {
            true => Some(Spawner::new(self.seed, self.four_chance)?),
            _    => None,
        };
        Ok(Session {
            model: Model::new(self.rules)?,
            spawner,
            start_tiles: self.start_tiles,
            past: vec![],
            future: vec![],
        })
    }
}
