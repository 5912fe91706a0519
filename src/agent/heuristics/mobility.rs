use std::collections::HashSet;

use crate::prelude::*;

/// Counts the knight jumps from `location` that land on a blank cell.
///
/// This is purely about geometry and occupancy; it does not matter who could actually make the jumps.
pub fn open_move_count<S: GameState>(state: &S, location: Location) -> usize
{
    KNIGHT_OFFSETS
        .iter()
        .filter(|delta| state.move_is_legal(location.offset(**delta)))
        .count()
}

/// Sums the onward mobility of each of the given destinations.
fn onward<'a, S: GameState>(state: &S, moves: impl IntoIterator<Item = &'a Move>) -> f64
{
    moves.into_iter().map(|mv| open_move_count(state, *mv)).sum::<usize>() as f64
}

pub(super) fn mobility<S: GameState>(state: &S, player: Player) -> f64
{
    onward(state, &state.legal_moves(player))
}

pub(super) fn mobility_difference<S: GameState>(state: &S, player: Player) -> f64
{
    mobility(state, player) - mobility(state, state.opponent(player))
}

pub(super) fn exclusive_mobility_difference<S: GameState>(state: &S, player: Player) -> f64
{
    let own = state.legal_moves(player);
    let other = state.legal_moves(state.opponent(player));

    // Cells both players can jump to next are worth nothing to either side.
    let other_set: HashSet<Move> = other.iter().copied().collect();
    let contested: HashSet<Move> = own.iter().copied().filter(|mv| other_set.contains(mv)).collect();

    let own_score = onward(state, own.iter().filter(|mv| !contested.contains(mv)));
    let other_score = onward(state, other.iter().filter(|mv| !contested.contains(mv)));
    own_score - other_score
}
