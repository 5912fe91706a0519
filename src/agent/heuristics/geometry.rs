use crate::prelude::*;

// An unplaced player has no geometry, so the terms that need its location contribute nothing.

pub(super) fn distance<S: GameState>(state: &S, player: Player) -> f64
{
    match (state.location(player), state.location(state.opponent(player)))
    {
        | (Some(own), Some(other)) => own.distance_squared(&other) as f64,
        | _ => 0.0,
    }
}

pub(super) fn centered_distance<S: GameState>(state: &S, player: Player) -> f64
{
    let separation = distance(state, player);
    let Some(own) = state.location(player)
    else
    {
        return separation;
    };

    let (centre_row, centre_col) = (state.height() as f64 / 2.0, state.width() as f64 / 2.0);
    let off_centre = (centre_row - own.row as f64).powi(2) + (centre_col - own.col as f64).powi(2);
    separation - off_centre
}

pub(super) fn blank_proximity<S: GameState>(state: &S, player: Player) -> f64
{
    let Some(own) = state.location(player)
    else
    {
        return 0.0;
    };

    let total: i64 = state.blank_spaces().iter().map(|blank| own.distance_squared(blank)).sum();
    -(total as f64)
}
