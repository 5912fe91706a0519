use std::time::Instant;

use super::*;

#[derive(Clone, Debug, Default)]
/// Minimax with alpha-beta pruning, deepened one ply at a time until the clock runs out.
///
/// Only rounds that finish are trusted. When the clock runs out mid-round, the move from the last finished round
/// is played.
pub struct AlphaBetaSearch<H = Heuristic>
{
    heuristic: H,
    options:   SearchOptions,
}

impl<H> AlphaBetaSearch<H>
{
    pub fn new(heuristic: H, options: SearchOptions) -> Self
    {
        AlphaBetaSearch { heuristic, options }
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
        let report = self.iterative_deepening(state, clock);
        report.log("alphabeta");
        report.mv
    }

    /// Runs a single alpha-beta search to `depth` plies within the given window.
    ///
    /// The root is always expanded, so a depth of zero searches a single ply and still yields a move.
    pub fn alphabeta<S>(&self, state: &S, depth: Depth, alpha: f64, beta: f64, clock: &dyn Clock) -> Search<(f64, Move)>
    where
        S: GameState,
        H: Scorer<S>,
    {
        let governor = Governor::new(clock, self.options.timeout);
        let mut context = Context::new(&self.heuristic, governor, state.active_player());
        Self::max_value(&mut context, state, depth.max(1), alpha, beta)
    }

    /// Searches one ply deeper each round, with a full window each time, until the clock runs out.
    pub fn iterative_deepening<S>(&self, state: &S, clock: &dyn Clock) -> SearchReport
    where
        S: GameState,
        H: Scorer<S>,
    {
        let start = Instant::now();
        let owner = state.active_player();
        let governor = Governor::new(clock, self.options.timeout);
        let mut context = Context::new(&self.heuristic, governor, owner);

        // If not even the first round completes, any legal move beats forfeiting.
        let fallback = state.legal_moves(owner).first().copied().unwrap_or(Move::NULL);
        let mut report = SearchReport::fallback(fallback);

        // Every ply burns a blank cell. Past this depth, every line ends in a decided game and deeper rounds
        // would only repeat the last one.
        let horizon = state.blank_spaces().len() as Depth;
        let limit = self.options.max_depth.unwrap_or(Depth::MAX).max(1);

        for depth in 1..=limit
        {
            match Self::max_value(&mut context, state, depth, LOSS, WIN)
            {
                | Ok((score, mv)) =>
                {
                    log::trace!("depth {: >2}: {: ^8} scored {: >6} after {:?}", depth, mv, score, start.elapsed());
                    report.mv = mv;
                    report.score = score;
                    report.depth = depth;
                }
                | Err(SearchTimeout) => break,
            }

            if depth > horizon
            {
                break;
            }
        }

        report.stats = context.stats;
        report.elapsed = start.elapsed();
        report
    }

    fn max_value<S>(context: &mut Context<H>, state: &S, depth: Depth, mut alpha: f64, beta: f64) -> Search<(f64, Move)>
    where
        S: GameState,
        H: Scorer<S>,
    {
        context.check()?;

        if depth == 0 || state.is_winner(context.owner) || state.is_loser(context.owner)
        {
            return Ok((context.evaluate(state), Move::NULL));
        }

        context.stats.stems += 1;

        let (mut best_score, mut best_move) = (LOSS, Move::NULL);
        for mv in state.legal_moves(context.owner)
        {
            let (score, _) = Self::min_value(context, &state.forecast(mv), depth - 1, alpha, beta)?;

            // The first move is always kept, so that a lost position still yields a legal move.
            if best_move.is_null() || score > best_score
            {
                best_score = score;
                best_move = mv;
            }

            // Fail high (beta cutoff).
            if best_score >= beta
            {
                return Ok((best_score, best_move));
            }

            alpha = alpha.max(best_score);
        }

        Ok((best_score, best_move))
    }

    fn min_value<S>(context: &mut Context<H>, state: &S, depth: Depth, alpha: f64, mut beta: f64) -> Search<(f64, Move)>
    where
        S: GameState,
        H: Scorer<S>,
    {
        context.check()?;

        if depth == 0 || state.is_winner(context.owner) || state.is_loser(context.owner)
        {
            return Ok((context.evaluate(state), Move::NULL));
        }

        context.stats.stems += 1;

        let (mut best_score, mut best_move) = (WIN, Move::NULL);
        for mv in state.legal_moves(context.opponent(state))
        {
            let (score, _) = Self::max_value(context, &state.forecast(mv), depth - 1, alpha, beta)?;

            if best_move.is_null() || score < best_score
            {
                best_score = score;
                best_move = mv;
            }

            // Fail low (alpha cutoff).
            if best_score <= alpha
            {
                return Ok((best_score, best_move));
            }

            beta = beta.min(best_score);
        }

        Ok((best_score, best_move))
    }
}
