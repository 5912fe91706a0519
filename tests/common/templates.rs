use std::cell::Cell;

use isolation::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Player one at the top edge and player two at the bottom edge of a 5x5 board.
///
/// Player one's moves, in order, are (1,0) (1,4) (2,1) (2,3), and the first two are equally far from player two.
pub const MIRRORED: &str = "1;..1../...../...../...../..2..";

/// Player one is to move and boxed in, so player two has already won.
pub const BOXED_IN: &str = "1;1../..#/.2.";

/// Parses a board, panicking with the parser's message if it is invalid.
pub fn board(raw_string: &str) -> Board
{
    let possibly_board: Result<Board> = raw_string.parse::<Board>();
    assert!(possibly_board.is_ok(), "\tdue to {}", possibly_board.unwrap_err());
    possibly_board.unwrap()
}

/// Plays `plies` random moves from an empty board, stopping early if the game ends.
pub fn random_position(seed: u64, width: usize, height: usize, plies: usize) -> Board
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(width, height).unwrap();

    for _ in 0..plies
    {
        let moves = board.legal_moves(board.to_move());
        let Some(mv) = moves.choose(&mut rng)
        else
        {
            break;
        };
        board.play(*mv).unwrap();
    }

    board
}

/// Positions from short random games which are still undecided.
pub fn undecided_positions(count: usize, width: usize, height: usize) -> Vec<Board>
{
    (0..)
        .map(|seed| random_position(seed, width, height, 2 + seed as usize % 6))
        .filter(|board| !board.status().is_over())
        .take(count)
        .collect()
}

/// A clock that never runs out and counts how often it was read.
pub struct CountingClock
{
    pub reads: Cell<usize>,
}

impl CountingClock
{
    pub fn new() -> Self
    {
        CountingClock { reads: Cell::new(0) }
    }
}

impl Clock for CountingClock
{
    fn time_left(&self) -> f64
    {
        self.reads.set(self.reads.get() + 1);
        1000.0
    }
}

/// A clock that has plenty of time for exactly `reads` reads, and none after that.
pub struct ExpiringClock
{
    pub remaining: Cell<usize>,
}

impl ExpiringClock
{
    pub fn after(reads: usize) -> Self
    {
        ExpiringClock {
            remaining: Cell::new(reads),
        }
    }
}

impl Clock for ExpiringClock
{
    fn time_left(&self) -> f64
    {
        match self.remaining.get()
        {
            | 0 => 0.0,
            | n =>
            {
                self.remaining.set(n - 1);
                1000.0
            }
        }
    }
}
