use std::time::Duration;

use crate::prelude::*;

mod alphabeta;
mod minimax;
mod random;

pub use alphabeta::AlphaBetaSearch;
pub use minimax::MinimaxSearch;
pub use random::RandomSearch;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Configuration shared by the searchers.
pub struct SearchOptions
{
    /// The number of plies a fixed-depth search looks ahead.
    pub search_depth: Depth,

    /// The search is abandoned once fewer than this many milliseconds remain.
    pub timeout: f64,

    /// A hard depth limit. This overrides `search_depth` and caps iterative deepening, which is otherwise unbounded.
    pub max_depth: Option<Depth>,
}

impl Default for SearchOptions
{
    fn default() -> Self
    {
        SearchOptions {
            search_depth: 3,
            timeout:      10.0,
            max_depth:    None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Node counts for a single call to a searcher.
pub struct SearchStats
{
    /// Nodes that were expanded.
    pub stems:  u64,
    /// Nodes that were scored by the heuristic.
    pub leaves: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// The outcome of a top-level search.
pub struct SearchReport
{
    pub mv:      Move,
    pub score:   f64,
    /// The deepest search that ran to completion.
    pub depth:   Depth,
    pub stats:   SearchStats,
    pub elapsed: Duration,
}

impl SearchReport
{
    /// An empty report which falls back to `mv`.
    pub(super) fn fallback(mv: Move) -> SearchReport
    {
        SearchReport {
            mv,
            score: f64::NAN,
            depth: 0,
            stats: SearchStats::default(),
            elapsed: Duration::ZERO,
        }
    }

    /// Writes the report to the debug log.
    pub(super) fn log(&self, searcher: &str)
    {
        let secs = self.elapsed.as_secs_f64().max(f64::EPSILON);
        log::debug!("{} found {: ^8}: scored {: >6}", searcher, self.mv, self.score);
        log::debug!("took {: >6.1}ms and completed depth {}", secs * 1e3, self.depth);
        log::debug!("visited {:09}  stems ({: >8} N/s)", self.stats.stems, (self.stats.stems as f64 / secs).floor() as u64);
        log::debug!("visited {:09} leaves ({: >8} N/s)", self.stats.leaves, (self.stats.leaves as f64 / secs).floor() as u64);
    }
}

/// Everything a recursive search step needs besides the position itself.
pub(super) struct Context<'a, H>
{
    pub heuristic: &'a H,
    pub governor:  Governor<'a>,
    /// The player the search is run for. Leaves are always scored from its point of view.
    pub owner:     Player,
    pub stats:     SearchStats,
}

impl<'a, H> Context<'a, H>
{
    pub fn new(heuristic: &'a H, governor: Governor<'a>, owner: Player) -> Self
    {
        Context {
            heuristic,
            governor,
            owner,
            stats: SearchStats::default(),
        }
    }

    /// Checks the clock. Every recursive step calls this before touching the board.
    pub fn check(&self) -> Search<()>
    {
        self.governor.check()
    }

    /// Scores a leaf for the owner.
    pub fn evaluate<S>(&mut self, state: &S) -> f64
    where
        S: GameState,
        H: Scorer<S>,
    {
        self.stats.leaves += 1;
        self.heuristic.score(state, self.owner)
    }

    pub fn opponent<S: GameState>(&self, state: &S) -> Player
    {
        state.opponent(self.owner)
    }
}
