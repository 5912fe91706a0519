use crate::prelude::*;

/// The queries a searcher may make against a position.
///
/// Positions are values: a searcher never mutates one, it asks for the successor instead. Any board that
/// implements this trait can be searched.
pub trait GameState: Clone
{
    /// The player whose turn it is.
    fn active_player(&self) -> Player;

    /// The moves available to `player` from its current location, in a stable order.
    ///
    /// This is computed from the player's location regardless of whose turn it is.
    fn legal_moves(&self, player: Player) -> Vec<Move>;

    /// The position after the active player plays `mv`. The turn passes to the opponent.
    fn forecast(&self, mv: Move) -> Self;

    /// Whether `player` has won; that is, its opponent is to move and cannot.
    fn is_winner(&self, player: Player) -> bool;

    /// Whether `player` has lost; that is, it is to move and cannot.
    fn is_loser(&self, player: Player) -> bool;

    fn opponent(&self, player: Player) -> Player
    {
        player.flip()
    }

    /// The cell `player` stands on, or None before its first move.
    fn location(&self, player: Player) -> Option<Location>;

    /// Every cell that has never been occupied.
    fn blank_spaces(&self) -> Vec<Location>;

    /// Whether `location` is on the board and blank. This ignores whose turn it is.
    fn move_is_legal(&self, location: Location) -> bool;

    fn width(&self) -> usize;

    fn height(&self) -> usize;
}
