use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use super::*;

#[derive(Clone, Debug)]
/// A baseline that plays a uniformly random legal move.
pub struct RandomSearch
{
    rng: StdRng,
}

impl Default for RandomSearch
{
    fn default() -> Self
    {
        RandomSearch {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSearch
{
    /// A reproducible random searcher.
    pub fn seeded(seed: u64) -> Self
    {
        RandomSearch {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks a move for the player to move in `state`, or the null move if there is none.
    pub fn choose_move<S: GameState>(&mut self, state: &S) -> Move
    {
        let moves = state.legal_moves(state.active_player());
        let mv = moves.choose(&mut self.rng).copied().unwrap_or(Move::NULL);
        log::debug!("random found {: ^8} among {} moves", mv, moves.len());
        mv
    }
}
