use std::collections::VecDeque;

use cubetutor_core::{CubeState, scan::ScanResult};
use cubetutor_notation::{InvalidMoveToken, Move, MoveFamily, Suffix};
use rand::Rng;
use web_time::{Duration, Instant};

use crate::AnimationPreferences;
use crate::animations::TurnAnimationState;
use crate::solver::{Solution, Solver, fallback_moves, request_solution};

const ASSUMED_FPS: f32 = 120.0;

/// Move playback engine: owns the logical cube state and a FIFO of pending
/// moves, and drives the strictly single-flight turn animation.
///
/// A move's logical mutation happens at the instant it is dequeued, not
/// when its animation finishes, so the facelet encoding read right after
/// [`Self::push_move()`] may be ahead of what is on screen. The next queued
/// move is dequeued only when the in-flight animation completes; moves are
/// therefore applied in exactly enqueue order, one at a time.
#[derive(Debug, Clone)]
pub struct CubeSimulation {
    /// Latest logical state, ahead of or equal to the visuals.
    latest_state: CubeState,
    /// Moves waiting behind the in-flight turn.
    queue: VecDeque<Move>,
    /// In-flight turn animation.
    twist_anim: TurnAnimationState,
    /// Time of last frame, or `None` if we are not in the middle of an
    /// animation.
    last_frame_time: Option<Instant>,
}

impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeSimulation {
    /// Constructs a simulation in the solved state with an empty queue.
    pub fn new() -> Self {
        Self {
            latest_state: CubeState::solved(),
            queue: VecDeque::new(),
            twist_anim: TurnAnimationState::default(),
            last_frame_time: None,
        }
    }

    /// Returns the latest logical state, after all dequeued moves.
    pub fn state(&self) -> &CubeState {
        &self.latest_state
    }
    /// Encodes the latest logical state as a facelet string.
    pub fn facelet_string(&self) -> String {
        self.latest_state.facelet_string()
    }
    /// Returns whether the latest logical state is solved.
    pub fn is_solved(&self) -> bool {
        self.latest_state.is_solved()
    }

    /// Appends a move to the queue. Returns immediately; if the scheduler
    /// is idle the move is dequeued (and applied logically) on the spot and
    /// its animation starts.
    pub fn push_move(&mut self, mv: Move) {
        self.queue.push_back(mv);
        if self.twist_anim.is_idle() {
            self.start_next_turn();
        }
    }
    /// Appends a batch of moves in order.
    pub fn push_moves(&mut self, moves: impl IntoIterator<Item = Move>) {
        for mv in moves {
            self.push_move(mv);
        }
    }
    /// Parses and appends a single token, as received from user
    /// interaction. A bad token leaves the queue and state untouched.
    pub fn push_token(&mut self, token: &str) -> Result<(), InvalidMoveToken> {
        self.push_move(token.parse()?);
        Ok(())
    }

    fn start_next_turn(&mut self) {
        if let Some(mv) = self.queue.pop_front() {
            self.latest_state.apply(mv);
            self.twist_anim.start(mv);
        }
    }

    /// Advances the animation to the next frame, using the time elapsed
    /// since the previous call. Call from the display-refresh callback.
    /// Returns whether the puzzle must be redrawn.
    pub fn step(&mut self, prefs: &AnimationPreferences) -> bool {
        let now = Instant::now();
        let delta = match self.last_frame_time {
            Some(then) => now - then,
            None => Duration::from_secs_f32(1.0 / ASSUMED_FPS),
        };
        let needs_redraw = self.proceed(delta, prefs);
        self.last_frame_time = needs_redraw.then_some(now);
        needs_redraw
    }

    /// Advances the animation by an explicit time delta, chaining into the
    /// next queued move when the in-flight turn completes. Returns whether
    /// the puzzle must be redrawn.
    pub fn proceed(&mut self, delta: Duration, prefs: &AnimationPreferences) -> bool {
        let was_animating = self.twist_anim.proceed(delta, prefs);
        if self.twist_anim.is_idle() {
            self.start_next_turn();
        }
        was_animating || !self.twist_anim.is_idle()
    }

    /// Returns the animating move and its eased progress, or `None` if the
    /// scheduler is idle.
    pub fn current_turn(&self, prefs: &AnimationPreferences) -> Option<(Move, f32)> {
        let (mv, t) = self.twist_anim.current()?;
        Some((mv, prefs.twist_interpolation.interpolate(t)))
    }

    /// Returns whether no move is in flight (the queue is then necessarily
    /// empty).
    pub fn is_idle(&self) -> bool {
        self.twist_anim.is_idle()
    }
    /// Returns the moves still waiting behind the in-flight turn.
    pub fn queued_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.queue.iter().copied()
    }

    /// Discards queued and in-flight moves unconditionally and
    /// reinitializes the state to solved. Immediate, never queued; valid
    /// whether or not a move is animating.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.twist_anim.clear();
        self.last_frame_time = None;
        self.latest_state = CubeState::solved();
    }

    /// Applies every queued move immediately and drops the in-flight
    /// animation, so the visuals can jump straight to the latest state.
    pub fn catch_up(&mut self) {
        self.twist_anim.clear();
        self.last_frame_time = None;
        while let Some(mv) = self.queue.pop_front() {
            self.latest_state.apply(mv);
        }
    }

    /// Enqueues `n` uniformly random outer-layer moves.
    pub fn scramble(&mut self, n: u32) {
        let mut rng = rand::rng();
        for _ in 0..n {
            let family = MoveFamily::FACES[rng.random_range(0..MoveFamily::FACES.len())];
            const SUFFIXES: [Suffix; 3] = [Suffix::Quarter, Suffix::Prime, Suffix::Double];
            let suffix = SUFFIXES[rng.random_range(0..SUFFIXES.len())];
            self.push_move(Move::new(family, suffix));
        }
    }

    /// Starts a tutorial from a completed scan: loads the scanned state,
    /// asks the solver for a solution, and queues it for playback. Returns
    /// the queued sequence.
    ///
    /// Every failure along the way — malformed scan, solver failure,
    /// unparseable response, over-long solution — is recovered locally by
    /// resetting to solved and queueing the demonstration sequence instead,
    /// with the cause logged.
    pub fn start_tutorial(&mut self, scan: &ScanResult, solver: &dyn Solver) -> Solution {
        match CubeState::from_facelet_string(&scan.facelet_string()) {
            Ok(state) => {
                self.queue.clear();
                self.twist_anim.clear();
                self.latest_state = state;
                match request_solution(solver, &self.facelet_string()) {
                    Ok(solution) => {
                        self.push_moves(solution.iter().copied());
                        return solution;
                    }
                    Err(err) => log::warn!("substituting demonstration sequence: {err}"),
                }
            }
            Err(err) => log::warn!("scan rejected ({err}); demonstrating from solved"),
        }
        self.reset();
        let demo = fallback_moves();
        self.push_moves(demo.iter().copied());
        demo
    }
}
