use arrayvec::ArrayVec;
use itertools::iproduct;

use crate::prelude::*;

mod notation;
mod printers;

pub mod consts
{
    /// The standard board is seven by seven.
    pub const DEFAULT_SIZE: usize = 7;

    /// Boards larger than this in either direction are rejected.
    pub const MAX_SIZE: usize = 64;
}

use consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents the current state of the game.
pub enum Status
{
    NotStarted,
    InProgress,
    OneWins,
    TwoWins,
}

impl std::fmt::Display for Status
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::NotStarted => "NotStarted",
            | Self::InProgress => "InProgress",
            | Self::OneWins => "OneWins",
            | Self::TwoWins => "TwoWins",
        };
        write!(f, "{repr}")
    }
}

#[derive(Clone, PartialEq, Eq)]
/// An isolation board, where both players move like knights and every visited cell is burnt.
pub struct Board
{
    width:  usize,
    height: usize,

    /// Row-major occupancy. A cell is blocked once any player has stood on it.
    blocked: Vec<bool>,

    /// The current location of each player, or None before its first move.
    locations: [Option<Location>; 2],

    /// The player to move.
    to_move: Player,

    /// The number of plies played so far.
    turn: usize,
}

impl Default for Board
{
    fn default() -> Self
    {
        Board::empty(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl Board
{
    /// Creates an empty board of the given dimensions.
    pub fn new(width: usize, height: usize) -> Result<Board>
    {
        if !(1..=MAX_SIZE).contains(&width) || !(1..=MAX_SIZE).contains(&height)
        {
            let err_msg = format!("Board dimensions must be between 1 and {} (got {}x{}).", MAX_SIZE, width, height);
            return Err(Error::new(Kind::InvalidBoard, err_msg));
        }
        Ok(Board::empty(width, height))
    }

    /// Creates an empty board without checking its dimensions.
    fn empty(width: usize, height: usize) -> Board
    {
        Board {
            width,
            height,
            blocked: vec![false; width * height],
            locations: [None, None],
            to_move: Player::One,
            turn: 0,
        }
    }

    /// Whether the given cell is blocked. Off-board cells count as blocked.
    pub fn blocked(&self, location: Location) -> bool
    {
        self.index(location).map_or(true, |i| self.blocked[i])
    }

    /// Maps a location to its row-major index, if it is on the board.
    fn index(&self, location: Location) -> Option<usize>
    {
        let on_board = (0..self.height as i32).contains(&location.row) && (0..self.width as i32).contains(&location.col);
        on_board.then(|| location.row as usize * self.width + location.col as usize)
    }

    /// The knight jumps from `from` that land on blank cells.
    pub fn knight_moves(&self, from: Location) -> ArrayVec<Move, 8>
    {
        KNIGHT_OFFSETS
            .iter()
            .map(|delta| from.offset(*delta))
            .filter(|to| self.move_is_legal(*to))
            .collect()
    }

    /// Checks and plays a move for the player to move.
    pub fn play(&mut self, mv: Move) -> Result<()>
    {
        if self.status().is_over()
        {
            return Err(Error::new(Kind::GameOver, format!("The game has ended ({}).", self.status())));
        }

        if !self.legal_moves(self.to_move).contains(&mv)
        {
            let err_msg = format!("Player {} cannot move to {}.", self.to_move, mv);
            return Err(Error::new(Kind::IllegalMove, err_msg));
        }

        self.play_unchecked(mv);
        Ok(())
    }

    /// Plays a move for the player to move without validating it.
    pub fn play_unchecked(&mut self, mv: Move)
    {
        if let Some(i) = self.index(mv)
        {
            self.blocked[i] = true;
        }
        self.locations[self.to_move.index()] = Some(mv);
        self.to_move = self.to_move.flip();
        self.turn += 1;
    }

    /// Gets the current state of the game.
    pub fn status(&self) -> Status
    {
        if self.is_loser(self.to_move)
        {
            return match self.to_move
            {
                | Player::One => Status::TwoWins,
                | Player::Two => Status::OneWins,
            };
        }

        match self.turn
        {
            | 0 => Status::NotStarted,
            | _ => Status::InProgress,
        }
    }

    /// The player to move.
    pub fn to_move(&self) -> Player
    {
        self.to_move
    }

    /// The number of plies played so far.
    pub fn turn(&self) -> usize
    {
        self.turn
    }
}

impl Status
{
    /// Whether the game has been decided.
    pub fn is_over(&self) -> bool
    {
        matches!(self, Self::OneWins | Self::TwoWins)
    }
}

impl GameState for Board
{
    fn active_player(&self) -> Player
    {
        self.to_move
    }

    fn legal_moves(&self, player: Player) -> Vec<Move>
    {
        match self.locations[player.index()]
        {
            | Some(from) => self.knight_moves(from).into_iter().collect(),
            | None => self.blank_spaces(),
        }
    }

    fn forecast(&self, mv: Move) -> Self
    {
        let mut next = self.clone();
        next.play_unchecked(mv);
        next
    }

    fn is_winner(&self, player: Player) -> bool
    {
        self.to_move != player && self.legal_moves(self.to_move).is_empty()
    }

    fn is_loser(&self, player: Player) -> bool
    {
        self.to_move == player && self.legal_moves(player).is_empty()
    }

    fn location(&self, player: Player) -> Option<Location>
    {
        self.locations[player.index()]
    }

    fn blank_spaces(&self) -> Vec<Location>
    {
        iproduct!(0..self.height as i32, 0..self.width as i32)
            .map(|(row, col)| Move::new(row, col))
            .filter(|location| !self.blocked(*location))
            .collect()
    }

    fn move_is_legal(&self, location: Location) -> bool
    {
        !self.blocked(location)
    }

    fn width(&self) -> usize
    {
        self.width
    }

    fn height(&self) -> usize
    {
        self.height
    }
}
