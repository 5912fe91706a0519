use std::io::Write;

use clap::Parser;
use itertools::Itertools;

use crate::prelude::*;

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ServerOptions
{
    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long, default_value_t = StrategyKind::default())]
    /// searcher to run on bestmove (minimax, alphabeta or random)
    pub strategy: StrategyKind,

    #[arg(long, default_value_t = Heuristic::default())]
    /// position heuristic for the minimax and alphabeta searchers
    pub heuristic: Heuristic,

    #[arg(short, long, default_value_t = 3)]
    /// fixed search depth for the minimax searcher
    pub depth: Depth,

    #[arg(short, long, default_value_t = 10.0)]
    /// milliseconds left on the clock at which a search gives up
    pub timeout: f64,
}

impl Default for ServerOptions
{
    fn default() -> Self
    {
        ServerOptions {
            log_level: "info".into(),
            strategy:  StrategyKind::default(),
            heuristic: Heuristic::default(),
            depth:     SearchOptions::default().search_depth,
            timeout:   SearchOptions::default().timeout,
        }
    }
}

impl ServerOptions
{
    fn search_options(&self) -> SearchOptions
    {
        SearchOptions {
            search_depth: self.depth,
            timeout: self.timeout,
            ..Default::default()
        }
    }
}

/// A line-based game server. Every response ends with `ok`; failures print `err` and a message first.
pub struct Server
{
    options:  ServerOptions,
    board:    Option<Board>,
    history:  Vec<Board>,
    strategy: Strategy,
}

impl Server
{
    /// Creates a new server with the given capabilities.
    pub fn new(options: ServerOptions) -> Self
    {
        let strategy = Strategy::new(options.strategy, options.heuristic, options.search_options());
        Server {
            options,
            board: None,
            history: Vec::new(),
            strategy,
        }
    }

    /// Reads commands from stdin until it closes.
    pub fn run(&mut self) -> Result<()>
    {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        loop
        {
            let mut cmdstr: String = String::new();
            if stdin.read_line(&mut cmdstr)? == 0
            {
                log::info!("input closed, shutting down");
                return Ok(());
            }

            let response = self.respond(&cmdstr);
            match response
            {
                | Ok(text) =>
                {
                    write!(stdout, "{}", text)?;
                    stdout.flush()?;
                }
                | Err(err) =>
                {
                    writeln!(stdout, "err\n{}", err)?;
                    stdout.flush()?;
                    return Err(err);
                }
            }
        }
    }

    /// Runs a single command line and returns the full response, including its terminator.
    ///
    /// Only fatal errors are returned as errors; anything recoverable is reported in the response.
    pub fn respond(&mut self, cmdstr: &str) -> Result<String>
    {
        let args: Vec<&str> = cmdstr.split_whitespace().collect();
        let cmd = *args.first().unwrap_or(&"");
        let rest = args.get(1..).unwrap_or(&[]);

        match self.apply(cmd, rest)
        {
            | Ok(body) =>
            {
                log::debug!("Command completed successfully: {cmd} {}", rest.join(" "));
                Ok(format!("{}ok\n", body))
            }
            | Err(err) => match err.fatal()
            {
                | true => Err(err),
                | false =>
                {
                    log::warn!("encountered recoverable error:\n{err}");
                    Ok(format!("err\n{}\nok\n", err))
                }
            },
        }
    }
}

impl Server
{
    /// Matches the command to the server's functionality.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<String>
    {
        match cmd
        {
            | "" => Ok(String::new()),
            | "bestmove" => self.best_move(args),
            | "info" => self.info(),
            | "newgame" => self.new_game(args),
            | "options" => self.options(args),
            | "pass" => self.play_move(&["pass"]),
            | "play" => self.play_move(args),
            | "undo" => self.undo(args),
            | "validmoves" => self.valid_moves(),
            | _ => Err(Error::new(Kind::UnrecognizedCommand, cmd.into())),
        }
    }

    /// Returns the best move available in this position (for the player to move).
    fn best_move(&mut self, args: &[&str]) -> Result<String>
    {
        let search_args = SearchArgs::parse(args)?;
        let clock: Box<dyn Clock> = match search_args
        {
            | SearchArgs::Depth(_) => Box::new(Unlimited),
            | SearchArgs::Time(dur) => Box::new(Deadline::new(dur)),
        };
        self.strategy.set_max_depth(search_args.depth());

        let board = self.ensure_started()?.clone();
        if board.status().is_over()
        {
            return Err(Error::new(Kind::GameOver, format!("The game has ended ({}).", board.status())));
        }

        let mv = self.strategy.choose_move(&board, clock.as_ref());
        Ok(format!("{}\n", mv))
    }

    /// Ensures there is a board loaded on this server.
    fn ensure_started(&self) -> Result<&Board>
    {
        match self.board.as_ref()
        {
            | Some(b) => Ok(b),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Ensures there is a board loaded on this server.
    fn ensure_started_mut(&mut self) -> Result<&mut Board>
    {
        match self.board.as_mut()
        {
            | Some(b) => Ok(b),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Prints the server's ID.
    fn info(&self) -> Result<String>
    {
        Ok(format!("id {} v{}\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))
    }

    /// Creates a new game from board notation, from `<width>x<height>`, or on the standard board.
    fn new_game(&mut self, args: &[&str]) -> Result<String>
    {
        let board = match args
        {
            | [] => Board::default(),
            | [dims] if dims.contains('x') => Board::from_dimensions(dims)?,
            | _ => args.join(" ").parse::<Board>()?,
        };

        log::debug!("new game:\n{:#?}", board);
        self.board = Some(board);
        self.history.clear();

        Ok(format!("{}\n", self.ensure_started()?))
    }

    /// Shows or changes the search settings.
    fn options(&mut self, args: &[&str]) -> Result<String>
    {
        match args
        {
            | [] => Ok(format!(
                "strategy;{}\nheuristic;{}\ndepth;{}\ntimeout;{}\n",
                self.options.strategy, self.options.heuristic, self.options.depth, self.options.timeout
            )),
            | ["get", key] => Ok(format!("{};{}\n", key, self.option(key)?)),
            | ["set", key, value] =>
            {
                self.set_option(key, value)?;
                Ok(format!("{};{}\n", key, self.option(key)?))
            }
            | _ => Err(Error::new(Kind::InvalidOption, "Expected 'options', 'options get <key>' or 'options set <key> <value>'.".into())),
        }
    }

    fn option(&self, key: &str) -> Result<String>
    {
        match key
        {
            | "strategy" => Ok(self.options.strategy.to_string()),
            | "heuristic" => Ok(self.options.heuristic.to_string()),
            | "depth" => Ok(self.options.depth.to_string()),
            | "timeout" => Ok(self.options.timeout.to_string()),
            | _ => Err(Error::new(Kind::InvalidOption, format!("Unknown option '{}'.", key))),
        }
    }

    fn set_option(&mut self, key: &str, value: &str) -> Result<()>
    {
        let invalid = |err: Error| err.chain(Error::new(Kind::InvalidOption, format!("Cannot set {} to '{}'.", key, value)));

        match key
        {
            | "strategy" => self.options.strategy = value.parse().map_err(invalid)?,
            | "heuristic" => self.options.heuristic = value.parse().map_err(invalid)?,
            | "depth" =>
            {
                let depth = value.parse::<Depth>().map_err(|_| invalid(Error::for_parse::<Depth>(value.into())))?;
                if depth == 0
                {
                    return Err(invalid(Error::new(Kind::InvalidOption, "Search depth must be at least one ply.".into())));
                }
                self.options.depth = depth;
            }
            | "timeout" =>
            {
                let timeout = value.parse::<f64>().map_err(|_| invalid(Error::for_parse::<f64>(value.into())))?;
                if !timeout.is_finite() || timeout < 0.0
                {
                    return Err(invalid(Error::new(Kind::InvalidOption, "Timeout must be a non-negative number.".into())));
                }
                self.options.timeout = timeout;
            }
            | _ => return Err(Error::new(Kind::InvalidOption, format!("Unknown option '{}'.", key))),
        };

        self.strategy = Strategy::new(self.options.strategy, self.options.heuristic, self.options.search_options());
        Ok(())
    }

    /// Plays the given move on the current board, if one exists.
    fn play_move(&mut self, args: &[&str]) -> Result<String>
    {
        if args.is_empty()
        {
            return Err(Error::new(Kind::ParseError, "You must provide a move.".into()));
        }

        let mv = args.join(" ").parse::<Move>()?;
        let board = self.ensure_started_mut()?;
        let before = board.clone();
        board.play(mv)?;

        let notation = format!("{}\n", board);
        self.history.push(before);
        Ok(notation)
    }

    /// Undoes the given number of moves on the current board.
    fn undo(&mut self, args: &[&str]) -> Result<String>
    {
        let n: usize = match args.first()
        {
            | None => 1,
            | Some(arg) => arg.parse::<usize>().map_err(|_| Error::for_parse::<usize>((*arg).into()))?,
        };

        self.ensure_started()?;
        if n > self.history.len()
        {
            let err_msg = format!("Cannot undo {} moves, only {} have been played.", n, self.history.len());
            return Err(Error::new(Kind::IllegalMove, err_msg));
        }

        let keep = self.history.len() - n;
        if let Some(board) = self.history.drain(keep..).next()
        {
            self.board = Some(board);
        }

        Ok(format!("{}\n", self.ensure_started()?))
    }

    /// Gets all of the valid moves in this position.
    fn valid_moves(&self) -> Result<String>
    {
        let board = self.ensure_started()?;
        let moves = board.legal_moves(board.to_move());

        let movelist = if board.status().is_over() || moves.is_empty()
        {
            "pass".to_owned()
        }
        else
        {
            moves.iter().join(";")
        };

        Ok(format!("{}\n", movelist))
    }
}
