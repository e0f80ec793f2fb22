//! Move suggestion and self-play driven by the search engine.

use std::fmt;

use anyhow::{bail, Context, Result};
use engine_core::GameState;
use games_tictactoe::{Action, State, O, X};
use mcts::{MctsConfig, MctsSearch, RandomRollout, SearchResult, UniformPolicy};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

pub type Engine = MctsSearch<RandomRollout, UniformPolicy>;

/// Build the engine used by the actor.
pub fn build_engine(config: &MctsConfig) -> Engine {
    MctsSearch::from_config(RandomRollout::new(), UniformPolicy::new(), config)
}

/// Parse `board` and search it for the side to move.
pub fn suggest(
    engine: &Engine,
    config: &MctsConfig,
    board: &str,
    rng: &mut ChaCha20Rng,
) -> Result<(State, SearchResult<Action>)> {
    let state: State = board
        .parse()
        .with_context(|| format!("invalid board '{board}'"))?;

    if state.is_terminal() {
        bail!("the game on this board is already over");
    }

    let result = engine.search(state, config.budget(), rng)?;
    info!(
        action = %result.action,
        iterations = result.iterations,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "Suggested move"
    );

    Ok((state, result))
}

/// A finished self-play game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<Action>,
    pub final_state: State,
}

impl GameRecord {
    /// Player id of the winner, None for a draw.
    pub fn winner(&self) -> Option<u8> {
        match self.final_state.winner_id() {
            id @ (X | O) => Some(id),
            _ => None,
        }
    }
}

/// Play one game with the engine choosing every move for both sides.
pub fn play_game(engine: &Engine, config: &MctsConfig, rng: &mut ChaCha20Rng) -> Result<GameRecord> {
    let mut state = State::new();
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let result = engine.search(state, config.budget(), rng)?;
        debug!(
            ply = moves.len(),
            action = %result.action,
            iterations = result.iterations,
            "Engine moved"
        );

        state = state.apply(&result.action);
        moves.push(result.action);
    }

    Ok(GameRecord {
        moves,
        final_state: state,
    })
}

/// Outcome counts over a series of games.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Tally {
    pub fn record(&mut self, game: &GameRecord) {
        match game.winner() {
            Some(X) => self.x_wins += 1,
            Some(O) => self.o_wins += 1,
            _ => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Play `games` self-play games, calling `on_game` after each one.
pub fn play_games(
    engine: &Engine,
    config: &MctsConfig,
    games: u32,
    rng: &mut ChaCha20Rng,
    mut on_game: impl FnMut(u32, &GameRecord),
) -> Result<Tally> {
    let mut tally = Tally::default();

    for game_num in 1..=games {
        let game = play_game(engine, config, rng)?;
        tally.record(&game);

        info!(
            game = game_num,
            moves = game.moves.len(),
            winner = match game.winner() {
                Some(X) => "X",
                Some(_) => "O",
                None => "draw",
            },
            "Game finished"
        );
        on_game(game_num, &game);
    }

    Ok(tally)
}
