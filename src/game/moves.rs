use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

/// The eight knight jumps, in the order legal moves are enumerated.
///
/// Searchers break ties in favour of the earliest move, so this order is observable.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

lazy_static! {
    static ref MOVE_RE: Regex = Regex::new(r"^\(?\s*(?<row>-?[0-9]+)\s*,\s*(?<col>-?[0-9]+)\s*\)?$").unwrap();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A destination cell on the board, given as a row and a column.
pub struct Move
{
    pub row: i32,
    pub col: i32,
}

/// A board coordinate. Player locations and blank cells share the representation of moves.
pub type Location = Move;

impl Move
{
    /// The move played when no legal move exists.
    pub const NULL: Move = Move { row: -1, col: -1 };

    /// Creates a new move to the given cell.
    pub const fn new(row: i32, col: i32) -> Move
    {
        Move { row, col }
    }

    /// Whether this is the null move.
    pub fn is_null(&self) -> bool
    {
        *self == Self::NULL
    }

    /// Offsets this location by a (row, column) delta.
    pub fn offset(&self, (dr, dc): (i32, i32)) -> Location
    {
        Move::new(self.row + dr, self.col + dc)
    }

    /// The squared euclidean distance between two locations.
    pub fn distance_squared(&self, other: &Location) -> i64
    {
        let dr = (self.row - other.row) as i64;
        let dc = (self.col - other.col) as i64;
        dr * dr + dc * dc
    }
}

impl Default for Move
{
    fn default() -> Self
    {
        Move::NULL
    }
}

impl From<(i32, i32)> for Move
{
    fn from((row, col): (i32, i32)) -> Self
    {
        Move::new(row, col)
    }
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if self.is_null()
        {
            write!(f, "pass")
        }
        else
        {
            write!(f, "{},{}", self.row, self.col)
        }
    }
}

impl FromStr for Move
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let s = s.trim();
        if s == "pass"
        {
            return Ok(Move::NULL);
        }

        let Some(caps) = MOVE_RE.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let row = caps["row"].parse::<i32>().map_err(|_| Error::for_parse::<Self>(s.into()))?;
        let col = caps["col"].parse::<i32>().map_err(|_| Error::for_parse::<Self>(s.into()))?;
        Ok(Move::new(row, col))
    }
}
