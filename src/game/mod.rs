pub(crate) mod board;
pub(crate) mod moves;
pub mod player;
pub(crate) mod state;

pub use board::{consts as board_consts, Board, Status};
pub use moves::{Location, Move, KNIGHT_OFFSETS};
pub use player::Player;
pub use state::GameState;
