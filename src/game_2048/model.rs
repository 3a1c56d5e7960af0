use super::prelude::*;

/// The fixed rules of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulesConfig {
    /// The side length of the board.
    pub size: usize,

    /// The tile value that ends the game.
    pub max_piece: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig { size: DEFAULT_SIZE, max_piece: MAX_PIECE }
    }
}

impl RulesConfig {
    pub fn new() -> RulesConfig {
        RulesConfig::default()
    }

    pub fn with_size(self, size: usize) -> RulesConfig {
        RulesConfig { size, ..self }
    }

    pub fn with_max_piece(self, max_piece: u32) -> RulesConfig {
        RulesConfig { max_piece, ..self }
    }

    /// Ensures the rules describe a playable game.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.size > 0, "board size must be positive");
        ensure!(
            self.max_piece.is_power_of_two() && self.max_piece >= 4,
            "max piece {} must be a power of two no smaller than 4",
            self.max_piece
        );
        Ok(())
    }
}

/// The state of one game of 2048: the board, the best score so far, and whether the game has ended.
///
/// A game is over once a tile reaches the winning value or no tilt can change the board. Only `clear` starts
/// a fresh game from there. The high-water mark is raised when the game is found to be over, never on a query.
#[derive(Clone, Debug)]
pub struct Model {
    board: Board,
    rules: RulesConfig,
    max_score: u64,
    game_over: bool,
}

impl Model {
    /// A new game on an empty board, with score 0.
    pub fn new(rules: RulesConfig) -> Result<Model> {
        rules.validate()?;
        Ok(Model {
            board: Board::new(rules.size),
            rules,
            max_score: 0,
            game_over: false,
        })
    }

    /// Restores a game from raw values (row 0 at the bottom, 0 for an empty slot).
    ///
    /// The game-over flag is taken as given; it is recomputed by the next mutation.
    pub fn from_raw(grid: &Grid, score: u64, max_score: u64, game_over: bool, max_piece: u32) -> Result<Model> {
        let board = Board::from_grid(grid, score)?;
        let rules = RulesConfig::new().with_size(board.size()).with_max_piece(max_piece);
        rules.validate()?;
        Ok(Model { board, rules, max_score, game_over })
    }

    /// Restores a game from raw values, working out from the tiles whether it is already over.
    pub fn restore(grid: &Grid, score: u64, max_score: u64, max_piece: u32) -> Result<Model> {
        let mut model = Model::from_raw(grid, score, max_score, false, max_piece)?;
        model.refresh_game_over();
        Ok(model)
    }

    /// Whether the game on the given board is over under the given winning value.
    pub fn check_game_over(board: &Board, max_piece: u32) -> bool {
        board.max_tile_exists(max_piece) || !board.at_least_one_move_exists()
    }

    /// Adds a tile to the board. There must be no tile at the same position.
    pub fn add_tile(&mut self, tile: Tile) -> Result<()> {
        self.board.add_tile(tile)?;
        self.refresh_game_over();
        Ok(())
    }

    /// Clears the board to empty and resets the score; the best score survives.
    pub fn clear(&mut self) {
        self.board.clear();
        self.game_over = false;
        log::debug!("cleared the board");
    }

    /// Tilts the board toward a side. Returns true if any tile moved or merged.
    ///
    /// A tilt that fails part way leaves the board as it was.
    pub fn tilt(&mut self, side: Side) -> Result<bool> {
        let mut board = self.board.clone();
        let changed = board.tilt(side)?;
        self.board = board;
        self.refresh_game_over();
        Ok(changed)
    }

    /// Recomputes the game-over flag, raising the best score while the game is over.
    fn refresh_game_over(&mut self) {
        let over = Model::check_game_over(&self.board, self.rules.max_piece);
        if over {
            if !self.game_over {
                log::debug!("game over with score {}", self.score());
            }
            self.max_score = self.max_score.max(self.score());
        }
        self.game_over = over;
    }

    // accessors

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the game is over: no tilt can change the board, or a tile holds the winning value.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The raw value matrix of the board.
    pub fn grid(&self) -> Grid {
        self.board.grid()
    }

    /// The best score of any finished game in this session.
    pub fn max_score(&self) -> u64 {
        self.max_score
    }

    /// Raises the best score to at least the given value; never lowers it.
    pub(crate) fn keep_max_score(&mut self, max_score: u64) {
        self.max_score = self.max_score.max(max_score);
    }

    pub fn max_piece(&self) -> u32 {
        self.rules.max_piece
    }

    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    pub fn score(&self) -> u64 {
        self.board.score()
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// The tile at a given coordinate, if any.
    pub fn tile(&self, coord: &Coord) -> Result<Option<&Tile>> {
        self.board.tile(coord)
    }
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.grid() == other.grid()
            && self.score() == other.score()
            && self.max_score == other.max_score
            && self.game_over == other.game_over
    }
}

impl Eq for Model {}

impl Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let over = if self.game_over { "over" } else { "not over" };
        write!(f, "\n[\n{}] {} (max: {}) (game is {}) \n", self.board.pretty(), self.score(), self.max_score, over)
    }
}
