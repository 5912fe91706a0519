mod common;
use common::*;

#[cfg(test)]
mod alphabeta
{
    use std::time::{Duration, Instant};

    use super::*;
    use isolation::prelude::*;

    /// Player one in the middle of a 7x7 board, player two in a corner.
    const CENTRE_AND_CORNER: &str = "1;2....../......./......./...1.../......./......./.......";

    fn searcher(heuristic: Heuristic) -> AlphaBetaSearch
    {
        AlphaBetaSearch::new(heuristic, SearchOptions::default())
    }

    #[test]
    fn agrees_with_minimax()
    {
        let _setup = setup::setup();
        for board in templates::undecided_positions(6, 5, 5)
        {
            for heuristic in Heuristic::all()
            {
                let minimax = MinimaxSearch::new(heuristic, SearchOptions::default());
                let alphabeta = searcher(heuristic);
                for depth in 1..=3
                {
                    let expected = minimax.minimax(&board, depth, &Unlimited).unwrap();
                    let actual = alphabeta.alphabeta(&board, depth, LOSS, WIN, &Unlimited).unwrap();
                    assert_eq!(actual, expected, "{} at depth {} on {}", heuristic, depth, board);
                }
            }
        }
    }

    #[test]
    fn agrees_with_brute_force()
    {
        let _setup = setup::setup();
        let board = templates::board(CENTRE_AND_CORNER);
        let heuristic = Heuristic::MobilityDifference;

        // Player one picks the move whose worst reply is best for it.
        let mut best: Option<(f64, Move)> = None;
        for mv in board.legal_moves(Player::One)
        {
            let after = board.forecast(mv);
            let worst = after
                .legal_moves(Player::Two)
                .into_iter()
                .map(|reply| heuristic.score(&after.forecast(reply), Player::One))
                .fold(WIN, f64::min);

            if best.map_or(true, |(best_score, _)| worst > best_score)
            {
                best = Some((worst, mv));
            }
        }

        let (score, mv) = searcher(heuristic).alphabeta(&board, 2, LOSS, WIN, &Unlimited).unwrap();
        assert_eq!(Some((score, mv)), best);
    }

    #[test]
    fn zero_depth_still_searches_one_ply()
    {
        let _setup = setup::setup();
        let board = templates::board(templates::MIRRORED);
        let search = searcher(Heuristic::Distance);
        assert_eq!(
            search.alphabeta(&board, 0, LOSS, WIN, &Unlimited).unwrap(),
            search.alphabeta(&board, 1, LOSS, WIN, &Unlimited).unwrap()
        );
        assert_eq!(search.alphabeta(&board, 0, LOSS, WIN, &Unlimited).unwrap(), (13.0, Move::new(1, 0)));
    }

    #[test]
    fn deepening_keeps_the_last_finished_round()
    {
        let _setup = setup::setup();
        let board = templates::board(CENTRE_AND_CORNER);
        let search = searcher(Heuristic::default());

        for rounds in 1..=3
        {
            // Give the search exactly enough clock reads to finish `rounds` rounds.
            let counting = templates::CountingClock::new();
            for depth in 1..=rounds
            {
                search.alphabeta(&board, depth, LOSS, WIN, &counting).unwrap();
            }
            let clock = templates::ExpiringClock::after(counting.reads.get());

            let report = search.iterative_deepening(&board, &clock);
            let (score, mv) = search.alphabeta(&board, rounds, LOSS, WIN, &Unlimited).unwrap();
            assert_eq!(report.depth, rounds);
            assert_eq!(report.mv, mv);
            assert_eq!(report.score, score);
        }
    }

    #[test]
    fn first_round_timeout_falls_back_to_a_legal_move()
    {
        let _setup = setup::setup();
        let board = templates::board(templates::MIRRORED);
        let expired = || 0.0;

        let search = searcher(Heuristic::default());
        let report = search.iterative_deepening(&board, &expired);
        assert_eq!(report.depth, 0);
        assert_eq!(report.mv, Move::new(1, 0));
        assert!(report.score.is_nan());
        assert_eq!(search.choose_move(&board, &expired), Move::new(1, 0));

        assert_eq!(search.alphabeta(&board, 1, LOSS, WIN, &expired), Err(SearchTimeout));
    }

    #[test]
    fn decided_positions_have_no_move()
    {
        let _setup = setup::setup();
        let board = templates::board(templates::BOXED_IN);
        let search = searcher(Heuristic::default());
        assert_eq!(search.choose_move(&board, &Unlimited), Move::NULL);
        assert_eq!(search.alphabeta(&board, 3, LOSS, WIN, &Unlimited).unwrap(), (LOSS, Move::NULL));
    }

    #[test]
    fn lost_positions_still_move()
    {
        let _setup = setup::setup();
        let board = templates::board("1;1.../..../##../2#.#");
        let search = searcher(Heuristic::Distance);
        assert_eq!(search.alphabeta(&board, 3, LOSS, WIN, &Unlimited).unwrap(), (LOSS, Move::new(1, 2)));
        assert_eq!(search.choose_move(&board, &Unlimited), Move::new(1, 2));
    }

    #[test]
    fn max_depth_caps_deepening()
    {
        let _setup = setup::setup();
        let board = templates::board(CENTRE_AND_CORNER);
        let mut search = searcher(Heuristic::default());
        search.set_max_depth(Some(2));

        let report = search.iterative_deepening(&board, &Unlimited);
        let (score, mv) = search.alphabeta(&board, 2, LOSS, WIN, &Unlimited).unwrap();
        assert_eq!(report.depth, 2);
        assert_eq!((report.score, report.mv), (score, mv));
        assert!(report.stats.leaves > 0);
    }

    #[test]
    fn unlimited_deepening_ends_with_the_board()
    {
        let _setup = setup::setup();
        let board = templates::board("1;1../.../..2");
        let report = searcher(Heuristic::default()).iterative_deepening(&board, &Unlimited);
        assert!(board.legal_moves(Player::One).contains(&report.mv));
        assert!(report.depth as usize <= board.blank_spaces().len() + 1);
    }

    #[test]
    fn respects_a_real_deadline()
    {
        let _setup = setup::setup();
        let board = Board::default();
        let search = searcher(Heuristic::default());

        let start = Instant::now();
        let mv = search.choose_move(&board, &Deadline::from_millis(100.0));
        assert!(start.elapsed() < Duration::from_secs(2));
        assert!(board.move_is_legal(mv));
    }
}
