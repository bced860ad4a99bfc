//! Move playback for the cube tutorial: single-flight FIFO scheduling of
//! turn animations over the logical cube state, plus the boundary to the
//! external solving collaborator.

mod animations;
mod prefs;
mod simulation;
mod solver;

pub use prefs::{AnimationPreferences, InterpolateFn};
pub use simulation::CubeSimulation;
pub use solver::{
    MAX_SOLUTION_MOVES, Solution, SolutionRejected, Solver, SolverFailure, fallback_moves,
    request_solution,
};
