//! TicTacToe game implementation for the MCTS engine
//!
//! This crate provides a complete reference implementation of TicTacToe
//! demonstrating how to implement the `GameState` trait for the search engine.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::GameState;
//! use games_tictactoe::{Action, State};
//!
//! // X to move, two in a row on the left column
//! let state: State = "X O O / X . . / . . .".parse().unwrap();
//! let after = state.apply(&Action::Place(6));
//! assert!(after.is_terminal());
//! ```

use std::fmt;
use std::str::FromStr;

use engine_core::{GameState, Winner};
use thiserror::Error;

/// Cell value for an empty square
pub const EMPTY: u8 = 0;
/// Cell value (and player id) for X
pub const X: u8 = 1;
/// Cell value (and player id) for O
pub const O: u8 = 2;
/// Winner value for a full board without a line
pub const DRAW: u8 = 3;

/// Winning positions (rows, columns, diagonals)
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Errors produced when parsing a board from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("Expected 9 cells, found {0}")]
    WrongCellCount(usize),

    #[error("Invalid cell character: {0:?}")]
    InvalidCell(char),

    #[error("Piece counts X={x} O={o} cannot occur in a legal game")]
    ImpossibleCounts { x: usize, o: usize },
}

/// TicTacToe game state
///
/// Represents the complete state of a TicTacToe game including the board,
/// the player to move, and winner information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    /// Board representation: 0=empty, 1=X, 2=O
    board: [u8; 9],
    /// Player to move: 1=X, 2=O (keeps alternating after the game ends)
    current_player: u8,
    /// Winner: 0=none/ongoing, 1=X, 2=O, 3=draw
    winner: u8,
}

impl State {
    /// Create a new initial game state
    pub fn new() -> Self {
        Self {
            board: [EMPTY; 9],
            current_player: X, // X goes first
            winner: 0,
        }
    }

    /// Build a state from a raw board, inferring the player to move.
    ///
    /// X always moves first, so X is to move when both sides have the same
    /// number of pieces and O is to move when X has one more.
    pub fn from_board(board: [u8; 9]) -> Result<Self, ParseBoardError> {
        let x = board.iter().filter(|&&c| c == X).count();
        let o = board.iter().filter(|&&c| c == O).count();

        let current_player = if x == o {
            X
        } else if x == o + 1 {
            O
        } else {
            return Err(ParseBoardError::ImpossibleCounts { x, o });
        };

        Ok(Self {
            board,
            current_player,
            winner: Self::check_winner(&board),
        })
    }

    /// Play a sequence of positions from the empty board.
    pub fn from_moves(moves: &[u8]) -> Self {
        moves
            .iter()
            .fold(Self::new(), |state, &pos| state.make_move(pos))
    }

    /// Raw board cells
    pub fn board(&self) -> &[u8; 9] {
        &self.board
    }

    /// Player to move (1=X, 2=O)
    pub fn current_player(&self) -> u8 {
        self.current_player
    }

    /// Absolute winner: 0=ongoing, 1=X, 2=O, 3=draw
    pub fn winner_id(&self) -> u8 {
        self.winner
    }

    /// Check if the game is over
    pub fn is_done(&self) -> bool {
        self.winner != 0
    }

    /// Get legal moves (empty positions)
    pub fn legal_moves(&self) -> Vec<u8> {
        if self.is_done() {
            return Vec::new();
        }

        (0..9u8)
            .filter(|&pos| self.board[pos as usize] == EMPTY)
            .collect()
    }

    /// Make a move and return the new state
    pub fn make_move(&self, position: u8) -> State {
        if self.is_done() || position >= 9 || self.board[position as usize] != EMPTY {
            return *self; // Invalid move, return unchanged state
        }

        let mut new_state = *self;
        new_state.board[position as usize] = self.current_player;
        new_state.winner = Self::check_winner(&new_state.board);
        new_state.current_player = opponent(self.current_player);

        new_state
    }

    /// Check for winner on the board
    fn check_winner(board: &[u8; 9]) -> u8 {
        for line in &LINES {
            let [a, b, c] = *line;
            if board[a] != EMPTY && board[a] == board[b] && board[b] == board[c] {
                return board[a]; // Return the winning player
            }
        }

        // Check for draw (board full but no winner)
        if board.iter().all(|&cell| cell != EMPTY) {
            return DRAW;
        }

        0 // Game ongoing
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

fn opponent(player: u8) -> u8 {
    if player == X {
        O
    } else {
        X
    }
}

impl GameState for State {
    type Action = Action;

    fn legal_actions(&self) -> Vec<Action> {
        self.legal_moves().into_iter().map(Action::Place).collect()
    }

    fn apply(&self, action: &Action) -> Self {
        self.make_move(action.position())
    }

    fn is_full(&self) -> bool {
        self.board.iter().all(|&cell| cell != EMPTY)
    }

    fn winner(&self) -> Winner {
        match self.winner {
            X | O if self.winner == self.current_player => Winner::PlayerToMove,
            X | O => Winner::JustMoved,
            _ => Winner::None,
        }
    }
}

impl FromStr for State {
    type Err = ParseBoardError;

    /// Parse 9 cells (`X`, `O`, `.` or `_`), row-major. Whitespace, `/`
    /// and `|` are ignored so boards can be written row by row.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            match ch {
                'X' | 'x' => cells.push(X),
                'O' | 'o' => cells.push(O),
                '.' | '_' | '-' => cells.push(EMPTY),
                c if c.is_whitespace() || c == '/' || c == '|' => {}
                c => return Err(ParseBoardError::InvalidCell(c)),
            }
        }

        let board: [u8; 9] = cells
            .as_slice()
            .try_into()
            .map_err(|_| ParseBoardError::WrongCellCount(cells.len()))?;

        Self::from_board(board)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.board.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<&str> = cells
                .iter()
                .map(|&cell| match cell {
                    X => "X",
                    O => "O",
                    _ => ".",
                })
                .collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

/// TicTacToe action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place a piece at the given position (0-8, row-major)
    Place(u8),
}

impl Action {
    /// Action for a (row, column) pair, both 0-2.
    pub fn from_row_col(row: u8, col: u8) -> Self {
        Action::Place(row * 3 + col)
    }

    /// Get the position for this action
    pub fn position(&self) -> u8 {
        match self {
            Action::Place(pos) => *pos,
        }
    }

    /// (row, column) of this action
    pub fn row_col(&self) -> (u8, u8) {
        (self.position() / 3, self.position() % 3)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.row_col();
        write!(f, "{} (row {}, col {})", self.position(), row, col)
    }
}
