use std::time::Instant;

use super::*;

#[derive(Clone, Debug, Default)]
/// Plain depth-limited minimax, searched to a single fixed depth.
///
/// There is no fallback if the clock runs out: a search that does not finish returns the null move.
pub struct MinimaxSearch<H = Heuristic>
{
    heuristic: H,
    options:   SearchOptions,
}

impl<H> MinimaxSearch<H>
{
    pub fn new(heuristic: H, options: SearchOptions) -> Self
    {
        MinimaxSearch { heuristic, options }
    }

    /// The depth this searcher looks ahead. Never less than one ply, since the root must pick a move.
    pub fn depth(&self) -> Depth
    {
        self.options.max_depth.unwrap_or(self.options.search_depth).max(1)
    }

    pub fn options(&self) -> &SearchOptions
    {
        &self.options
    }

    pub fn set_max_depth(&mut self, depth: Option<Depth>)
    {
        self.options.max_depth = depth;
    }

    /// Picks a move for the player to move in `state`.
    pub fn choose_move<S>(&self, state: &S, clock: &dyn Clock) -> Move
    where
        S: GameState,
        H: Scorer<S>,
    {
        let start = Instant::now();
        let governor = Governor::new(clock, self.options.timeout);
        let mut context = Context::new(&self.heuristic, governor, state.active_player());

        let report = match Self::root(&mut context, state, self.depth())
        {
            | Ok((score, mv)) => SearchReport {
                mv,
                score,
                depth: self.depth(),
                stats: context.stats,
                elapsed: start.elapsed(),
            },
            | Err(SearchTimeout) => SearchReport {
                stats: context.stats,
                elapsed: start.elapsed(),
                ..SearchReport::fallback(Move::NULL)
            },
        };

        report.log("minimax");
        report.mv
    }

    /// Runs a minimax search to `depth` plies and returns the root's value and best move.
    pub fn minimax<S>(&self, state: &S, depth: Depth, clock: &dyn Clock) -> Search<(f64, Move)>
    where
        S: GameState,
        H: Scorer<S>,
    {
        let governor = Governor::new(clock, self.options.timeout);
        let mut context = Context::new(&self.heuristic, governor, state.active_player());
        Self::root(&mut context, state, depth.max(1))
    }

    /// The top max layer, which also remembers which move reached the best value.
    fn root<S>(context: &mut Context<H>, state: &S, depth: Depth) -> Search<(f64, Move)>
    where
        S: GameState,
        H: Scorer<S>,
    {
        context.check()?;
        context.stats.stems += 1;

        let (mut best_score, mut best_move) = (LOSS, Move::NULL);
        for mv in state.legal_moves(context.owner)
        {
            let score = Self::min_value(context, &state.forecast(mv), depth - 1)?;

            // The first move is always kept, so that a lost position still yields a legal move.
            if best_move.is_null() || score > best_score
            {
                best_score = score;
                best_move = mv;
            }
        }

        Ok((best_score, best_move))
    }

    fn max_value<S>(context: &mut Context<H>, state: &S, depth: Depth) -> Search<f64>
    where
        S: GameState,
        H: Scorer<S>,
    {
        context.check()?;

        if depth == 0
        {
            return Ok(context.evaluate(state));
        }

        context.stats.stems += 1;

        let mut best = LOSS;
        for mv in state.legal_moves(context.owner)
        {
            let score = Self::min_value(context, &state.forecast(mv), depth - 1)?;
            if score > best
            {
                best = score;
            }
        }

        Ok(best)
    }

    fn min_value<S>(context: &mut Context<H>, state: &S, depth: Depth) -> Search<f64>
    where
        S: GameState,
        H: Scorer<S>,
    {
        context.check()?;

        if depth == 0
        {
            return Ok(context.evaluate(state));
        }

        context.stats.stems += 1;

        let mut best = WIN;
        for mv in state.legal_moves(context.opponent(state))
        {
            let score = Self::max_value(context, &state.forecast(mv), depth - 1)?;
            if score < best
            {
                best = score;
            }
        }

        Ok(best)
    }
}
