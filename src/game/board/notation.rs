use lazy_static::lazy_static;
use regex::Regex;

use super::*;

lazy_static! {
    static ref ROW_RE: Regex = Regex::new(r"^[.#12]+$").unwrap();
    static ref DIMENSIONS_RE: Regex = Regex::new(r"^(?<w>[0-9]{1,3})x(?<h>[0-9]{1,3})$").unwrap();
}

impl Board
{
    /// Creates an empty board from a `<width>x<height>` string.
    pub fn from_dimensions(s: &str) -> Result<Board>
    {
        let base = Error::for_parse::<Self>(s.into());

        let Some(caps) = DIMENSIONS_RE.captures(s.trim())
        else
        {
            let err = Error::new(Kind::InvalidBoard, "Expected dimensions in the form of <width>x<height>.".into());
            return Err(err.chain(base));
        };

        // Both groups are at most three digits, so these cannot overflow.
        let width = caps["w"].parse::<usize>().unwrap_or(0);
        let height = caps["h"].parse::<usize>().unwrap_or(0);
        Board::new(width, height).map_err(|err| err.chain(base))
    }
}

/// Board notation is `<to move>;<row>/<row>/...`, where each cell is `.` (blank), `#` (burnt), or a player marker.
impl FromStr for Board
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let base = Error::for_parse::<Self>(s.into());

        let Some((to_move_str, rows_str)) = s.trim().split_once(';')
        else
        {
            let err = Error::new(Kind::ParseError, "Board notation requires a player to move and a layout.".into());
            return Err(err.chain(base));
        };

        let to_move = to_move_str.parse::<Player>().map_err(|err| err.chain(base.clone()))?;

        let rows: Vec<&str> = rows_str.split('/').collect();
        if let Some(bad) = rows.iter().find(|row| !ROW_RE.is_match(row))
        {
            let err = Error::new(Kind::InvalidBoard, format!("Row '{}' contains unknown cells.", bad));
            return Err(err.chain(base));
        }

        let width = rows[0].len();
        if rows.iter().any(|row| row.len() != width)
        {
            let err = Error::new(Kind::InvalidBoard, "All rows must have the same width.".into());
            return Err(err.chain(base));
        }

        let mut board = Board::new(width, rows.len()).map_err(|err| err.chain(base.clone()))?;
        board.to_move = to_move;

        for (row, line) in rows.iter().enumerate()
        {
            for (col, cell) in line.chars().enumerate()
            {
                let location = Move::new(row as i32, col as i32);
                let player = match cell
                {
                    | '.' => continue,
                    | '#' => None,
                    | '1' => Some(Player::One),
                    | _ => Some(Player::Two),
                };

                if let Some(player) = player
                {
                    if board.locations[player.index()].is_some()
                    {
                        let err = Error::new(Kind::InvalidBoard, format!("Player {} appears more than once.", player));
                        return Err(err.chain(base));
                    }
                    board.locations[player.index()] = Some(location);
                }

                if let Some(i) = board.index(location)
                {
                    board.blocked[i] = true;
                }
                board.turn += 1;
            }
        }

        Ok(board)
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{};", self.to_move)?;
        for row in 0..self.height
        {
            if row > 0
            {
                write!(f, "/")?;
            }
            for col in 0..self.width
            {
                write!(f, "{}", self.cell(Move::new(row as i32, col as i32)))?;
            }
        }
        Ok(())
    }
}

impl Board
{
    /// The notation character for a single cell.
    pub(super) fn cell(&self, location: Location) -> char
    {
        if let Some(player) = [Player::One, Player::Two].into_iter().find(|p| self.locations[p.index()] == Some(location))
        {
            player.marker()
        }
        else if self.blocked(location)
        {
            '#'
        }
        else
        {
            '.'
        }
    }
}
