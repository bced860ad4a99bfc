//! Boundary to the external solving collaborator.

use cubetutor_notation::{InvalidMoveToken, Move, MoveFamily, Suffix, parse_moves};
use smallvec::{SmallVec, smallvec};
use thiserror::Error;

/// Longest solver response accepted for playback. A success longer than
/// this is rejected in favor of the demonstration sequence; a two-phase
/// solver stays far below it.
pub const MAX_SOLUTION_MOVES: usize = 40;

/// Move sequence ready for playback.
pub type Solution = SmallVec<[Move; 8]>;

/// External solving collaborator: takes the 54-character facelet string,
/// returns a whitespace-separated move-token sequence or a failure signal.
pub trait Solver {
    /// Solves the given facelet string.
    fn solve(&self, facelets: &str) -> Result<String, SolverFailure>;
}

/// Failure signal from the external solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("solver failure: {0}")]
pub struct SolverFailure(
    /// Solver-specific error text.
    pub String,
);

/// Reason a solver response was rejected for playback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolutionRejected {
    /// The solver declined or errored.
    #[error(transparent)]
    Solver(#[from] SolverFailure),
    /// The response contained a token that does not parse.
    #[error(transparent)]
    Token(#[from] InvalidMoveToken),
    /// The response parsed but exceeds the playback bound.
    #[error("solution has {0} moves, limit is {MAX_SOLUTION_MOVES}")]
    TooLong(usize),
}

/// The fixed, known-solvable demonstration sequence substituted whenever
/// scanning or solving fails: `F R U R'`.
pub fn fallback_moves() -> Solution {
    smallvec![
        Move::new(MoveFamily::F, Suffix::Quarter),
        Move::new(MoveFamily::R, Suffix::Quarter),
        Move::new(MoveFamily::U, Suffix::Quarter),
        Move::new(MoveFamily::R, Suffix::Prime),
    ]
}

/// Asks the solver for a solution and validates every token of the
/// response. Any response that cannot be played verbatim is an error;
/// callers substitute [`fallback_moves()`].
pub fn request_solution(
    solver: &dyn Solver,
    facelets: &str,
) -> Result<Solution, SolutionRejected> {
    let response = solver.solve(facelets)?;
    let moves: Solution = parse_moves(&response).collect::<Result<_, _>>()?;
    if moves.len() > MAX_SOLUTION_MOVES {
        return Err(SolutionRejected::TooLong(moves.len()));
    }
    Ok(moves)
}
