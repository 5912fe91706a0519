use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The players in a game of isolation. Player one always moves first.
pub enum Player
{
    One = 0,
    Two = 1,
}

impl Player
{
    /// Gets the other player.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::One => Self::Two,
            | Self::Two => Self::One,
        }
    }

    /// The index of this player in per-player arrays.
    pub fn index(&self) -> usize
    {
        *self as usize
    }

    // Returns the marker for this player, as used in board notation.
    pub fn marker(&self) -> char
    {
        match self
        {
            | Self::One => '1',
            | Self::Two => '2',
        }
    }
}

impl std::fmt::Display for Player
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.marker())
    }
}

impl FromStr for Player
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "1" | "One" | "one" => Ok(Self::One),
            | "2" | "Two" | "two" => Ok(Self::Two),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
