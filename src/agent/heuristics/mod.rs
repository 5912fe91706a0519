use crate::prelude::*;

mod geometry;
mod mobility;

pub use mobility::open_move_count;

/// Scores a position from one player's point of view. Higher is better for that player.
pub trait Scorer<S: GameState>
{
    fn score(&self, state: &S, player: Player) -> f64;
}

impl<S, F> Scorer<S> for F
where
    S: GameState,
    F: Fn(&S, Player) -> f64,
{
    fn score(&self, state: &S, player: Player) -> f64
    {
        self(state, player)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// The built-in position heuristics.
///
/// Every heuristic scores a decided game as a win or a loss before looking at the board.
pub enum Heuristic
{
    /// Squared distance to the opponent.
    Distance,

    /// Squared distance to the opponent, less the squared distance to the centre of the board.
    CenteredDistance,

    /// Negated sum of squared distances to every blank cell.
    BlankProximity,

    /// Onward knight moves summed over every legal move.
    Mobility,

    /// Own mobility less the opponent's mobility.
    MobilityDifference,

    /// Mobility difference, counting only the moves the other player cannot also reach.
    #[default]
    ExclusiveMobilityDifference,
}

impl Heuristic
{
    /// Every heuristic, in declaration order.
    pub fn all() -> [Heuristic; 6]
    {
        [
            Self::Distance,
            Self::CenteredDistance,
            Self::BlankProximity,
            Self::Mobility,
            Self::MobilityDifference,
            Self::ExclusiveMobilityDifference,
        ]
    }

    pub fn name(&self) -> &'static str
    {
        match self
        {
            | Self::Distance => "distance",
            | Self::CenteredDistance => "centered-distance",
            | Self::BlankProximity => "blank-proximity",
            | Self::Mobility => "mobility",
            | Self::MobilityDifference => "mobility-difference",
            | Self::ExclusiveMobilityDifference => "exclusive-mobility-difference",
        }
    }
}

impl<S: GameState> Scorer<S> for Heuristic
{
    fn score(&self, state: &S, player: Player) -> f64
    {
        if state.is_loser(player)
        {
            return LOSS;
        }

        if state.is_winner(player)
        {
            return WIN;
        }

        match self
        {
            | Self::Distance => geometry::distance(state, player),
            | Self::CenteredDistance => geometry::centered_distance(state, player),
            | Self::BlankProximity => geometry::blank_proximity(state, player),
            | Self::Mobility => mobility::mobility(state, player),
            | Self::MobilityDifference => mobility::mobility_difference(state, player),
            | Self::ExclusiveMobilityDifference => mobility::exclusive_mobility_difference(state, player),
        }
    }
}

impl std::fmt::Display for Heuristic
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Heuristic
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        Heuristic::all()
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| Error::for_parse::<Self>(s.into()))
    }
}
