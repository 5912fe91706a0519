use crate::prelude::*;

pub mod clock;
pub mod heuristics;
pub mod scalars;
pub mod searchargs;
pub mod searchers;

pub use clock::*;
pub use heuristics::*;
pub use scalars::*;
pub use searchargs::*;
pub use searchers::*;

/// A policy by which an agent picks its move in a position.
pub trait Searcher<S: GameState>
{
    /// Returns the move to play for the player to move in `state`, or the null move if there is none.
    fn choose_move(&mut self, state: &S, clock: &dyn Clock) -> Move;
}

impl<S: GameState, H: Scorer<S>> Searcher<S> for MinimaxSearch<H>
{
    fn choose_move(&mut self, state: &S, clock: &dyn Clock) -> Move
    {
        MinimaxSearch::choose_move(self, state, clock)
    }
}

impl<S: GameState, H: Scorer<S>> Searcher<S> for AlphaBetaSearch<H>
{
    fn choose_move(&mut self, state: &S, clock: &dyn Clock) -> Move
    {
        AlphaBetaSearch::choose_move(self, state, clock)
    }
}

impl<S: GameState> Searcher<S> for RandomSearch
{
    fn choose_move(&mut self, state: &S, _clock: &dyn Clock) -> Move
    {
        RandomSearch::choose_move(self, state)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// The kinds of searcher a server can run.
pub enum StrategyKind
{
    Minimax,
    #[default]
    AlphaBeta,
    Random,
}

impl std::fmt::Display for StrategyKind
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::Minimax => "minimax",
            | Self::AlphaBeta => "alphabeta",
            | Self::Random => "random",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for StrategyKind
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "minimax" => Ok(Self::Minimax),
            | "alphabeta" => Ok(Self::AlphaBeta),
            | "random" => Ok(Self::Random),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

#[derive(Clone, Debug)]
/// A searcher chosen at runtime.
pub enum Strategy
{
    Minimax(MinimaxSearch),
    AlphaBeta(AlphaBetaSearch),
    Random(RandomSearch),
}

impl Strategy
{
    pub fn new(kind: StrategyKind, heuristic: Heuristic, options: SearchOptions) -> Self
    {
        match kind
        {
            | StrategyKind::Minimax => Self::Minimax(MinimaxSearch::new(heuristic, options)),
            | StrategyKind::AlphaBeta => Self::AlphaBeta(AlphaBetaSearch::new(heuristic, options)),
            | StrategyKind::Random => Self::Random(RandomSearch::default()),
        }
    }

    pub fn kind(&self) -> StrategyKind
    {
        match self
        {
            | Self::Minimax(_) => StrategyKind::Minimax,
            | Self::AlphaBeta(_) => StrategyKind::AlphaBeta,
            | Self::Random(_) => StrategyKind::Random,
        }
    }

    /// Sets (or clears) the hard depth limit for the next searches.
    pub fn set_max_depth(&mut self, depth: Option<Depth>)
    {
        match self
        {
            | Self::Minimax(search) => search.set_max_depth(depth),
            | Self::AlphaBeta(search) => search.set_max_depth(depth),
            | Self::Random(_) =>
            {}
        }
    }
}

impl<S: GameState> Searcher<S> for Strategy
{
    fn choose_move(&mut self, state: &S, clock: &dyn Clock) -> Move
    {
        match self
        {
            | Self::Minimax(search) => Searcher::choose_move(search, state, clock),
            | Self::AlphaBeta(search) => Searcher::choose_move(search, state, clock),
            | Self::Random(search) => Searcher::<S>::choose_move(search, state, clock),
        }
    }
}
