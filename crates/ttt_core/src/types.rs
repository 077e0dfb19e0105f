//! Core domain types for tic-tac-toe.

use crate::error::{GameError, GameErrorKind};
use crate::rules;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Index of the center cell.
pub const CENTER: usize = 4;

/// Indices of the four corner cells.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Content of a cell, or a side in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// First player.
    X,
    /// Second player.
    O,
    /// No mark.
    #[default]
    Empty,
}

impl Mark {
    /// Returns the opposing side; `Empty` maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// True for `X` and `O`.
    pub fn is_side(self) -> bool {
        self != Mark::Empty
    }

    /// Single-character glyph used in the compact board encoding.
    pub fn glyph(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }

    /// Parses a glyph produced by [`Mark::glyph`].
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '.' | ' ' | '_' => Some(Mark::Empty),
            _ => None,
        }
    }

    /// Side name, or the empty string for `Empty`.
    pub fn side_tag(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A cell index in 0-8, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Move(u8);

impl Move {
    /// The center cell.
    pub const CENTER: Move = Move(CENTER as u8);

    /// Creates a move, rejecting indices outside 0-8.
    #[track_caller]
    pub fn new(index: usize) -> Result<Self, GameError> {
        if index >= CELL_COUNT {
            return Err(GameError::invalid_argument(format!(
                "move index {} must be between 0 and 8",
                index
            )));
        }
        Ok(Self(index as u8))
    }

    /// Returns the cell index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for Move {
    type Error = GameError;

    #[track_caller]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Move> for usize {
    fn from(mv: Move) -> Self {
        mv.index()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable 3x3 board plus the side to move.
///
/// Every transition returns a new value; equality and hashing cover both
/// the cells and `to_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; CELL_COUNT],
    /// Side to move; never `Empty`.
    to_move: Mark,
}

impl Board {
    /// Creates an empty board with X to move.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
            to_move: Mark::X,
        }
    }

    /// Creates an empty board with `starting` to move.
    #[track_caller]
    pub fn initial(starting: Mark) -> Result<Self, GameError> {
        Self::from_cells(&[Mark::Empty; CELL_COUNT], starting)
    }

    /// Builds an arbitrary position.
    #[track_caller]
    pub fn from_cells(cells: &[Mark], to_move: Mark) -> Result<Self, GameError> {
        if !to_move.is_side() {
            return Err(GameError::invalid_argument("to_move must be X or O"));
        }
        let cells: [Mark; CELL_COUNT] = cells.try_into().map_err(|_| {
            GameError::invalid_argument(format!(
                "board must have 9 cells, got {}",
                cells.len()
            ))
        })?;
        Ok(Self { cells, to_move })
    }

    /// Parses the 9-glyph encoding produced by [`Board::encode`].
    #[track_caller]
    pub fn parse(encoded: &str, to_move: Mark) -> Result<Self, GameError> {
        let cells = encoded
            .chars()
            .map(|c| {
                Mark::from_glyph(c)
                    .ok_or_else(|| GameError::invalid_argument(format!("unknown glyph {:?}", c)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(&cells, to_move)
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Returns the mark at `index`.
    #[track_caller]
    pub fn cell(&self, index: usize) -> Result<Mark, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or_else(|| GameError::new(GameErrorKind::OutOfRange(index)))
    }

    /// Empty cell indices in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..CELL_COUNT)
            .filter(|&i| self.cells[i] == Mark::Empty)
            .collect()
    }

    /// True iff `index` is on the board and its cell is empty.
    pub fn is_legal(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Mark::Empty))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|m| m.is_side()).count()
    }

    /// Returns the board after the side to move plays `index`.
    ///
    /// # Errors
    ///
    /// `IllegalMove` when the cell is occupied or off the board (checked
    /// first), `IllegalState` when the game is already over.
    #[track_caller]
    pub fn apply(&self, index: usize) -> Result<Board, GameError> {
        if !self.is_legal(index) {
            return Err(GameError::new(GameErrorKind::IllegalMove(index)));
        }
        if rules::is_terminal(self) {
            return Err(GameError::illegal_state("game is already terminal"));
        }
        Ok(self.with_move(index))
    }

    /// Same as [`Board::apply`] for a validated [`Move`].
    #[track_caller]
    pub fn apply_move(&self, mv: Move) -> Result<Board, GameError> {
        self.apply(mv.index())
    }

    /// Places the mark without checking; the caller has established legality.
    pub(crate) fn with_move(&self, index: usize) -> Board {
        self.with_mark(index, self.to_move)
    }

    /// Places `mark` at `index` and hands the turn to its opponent, whoever
    /// was to move before. Unchecked, like [`Board::with_move`].
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut cells = self.cells;
        cells[index] = mark;
        Board {
            cells,
            to_move: mark.opponent(),
        }
    }

    /// Encodes the cells as 9 glyphs, e.g. `XO..O.X..`.
    pub fn encode(&self) -> String {
        self.cells.iter().map(|m| m.glyph()).collect()
    }

    /// Formats the board as a human-readable grid with free cells numbered.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Mark::Empty => result.push_str(&pos.to_string()),
                    mark => result.push(mark.glyph()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, mark) in self.cells.iter().enumerate() {
            write!(f, "{}", mark.glyph())?;
            if i % 3 == 2 && i < CELL_COUNT - 1 {
                write!(f, "/")?;
            }
        }
        write!(f, " turn={}", self.to_move)
    }
}

/// Outcome of a position, always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// X owns a full line.
    FirstWins,
    /// O owns a full line.
    SecondWins,
    /// Board full with no line.
    Draw,
}

impl GameOutcome {
    /// True for every outcome except `InProgress`.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Winning side, or `Empty`.
    pub fn winner_mark(self) -> Mark {
        match self {
            GameOutcome::FirstWins => Mark::X,
            GameOutcome::SecondWins => Mark::O,
            GameOutcome::InProgress | GameOutcome::Draw => Mark::Empty,
        }
    }

    /// Status tag used in the external projection.
    pub fn tag(self) -> &'static str {
        match self {
            GameOutcome::InProgress => "IN_PROGRESS",
            GameOutcome::FirstWins => "X_WIN",
            GameOutcome::SecondWins => "O_WIN",
            GameOutcome::Draw => "DRAW",
        }
    }
}

/// A board paired with its derived outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct GameState {
    /// The position.
    board: Board,
    /// Its outcome.
    outcome: GameOutcome,
}

impl GameState {
    /// Projects a board into a game state.
    pub fn of(board: Board) -> Self {
        Self {
            outcome: rules::result(&board),
            board,
        }
    }

    /// New game, X to move.
    pub fn new_game_x_starts() -> Self {
        Self::of(Board::new())
    }

    /// New game, O to move.
    pub fn new_game_o_starts() -> Self {
        Self::of(Board {
            cells: [Mark::Empty; CELL_COUNT],
            to_move: Mark::O,
        })
    }

    /// True once the game has concluded.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }
}
