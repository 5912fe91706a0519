use super::*;

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.pretty(f)
        }
        else
        {
            self.debug(f)
        }
    }
}

impl Board
{
    /// Standard debug.
    fn debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "Board {{ {}x{}, {:?}, {:?}, turn {} }}",
            self.width, self.height, self.locations, self.to_move, self.turn
        )
    }

    /// Pretty print, as a grid with row and column labels.
    fn pretty(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "   ")?;
        for col in 0..self.width
        {
            write!(f, "{: ^3}", col)?;
        }
        writeln!(f)?;

        for row in 0..self.height
        {
            write!(f, "{: >2} ", row)?;
            for col in 0..self.width
            {
                let cell = match self.cell(Move::new(row as i32, col as i32))
                {
                    | '.' => ' ',
                    | '#' => '-',
                    | c => c,
                };
                write!(f, "|{}|", cell)?;
            }
            writeln!(f)?;
        }

        write!(f, "{} to move ({})", self.to_move, self.status())
    }
}
