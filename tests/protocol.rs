mod common;
use common::*;

#[cfg(test)]
mod protocol
{
    use super::*;
    use isolation::prelude::*;

    fn server() -> Server
    {
        Server::new(ServerOptions::default())
    }

    fn respond(server: &mut Server, cmd: &str) -> String
    {
        let response = server.respond(cmd);
        assert!(response.is_ok(), "{} failed fatally", cmd);
        response.unwrap()
    }

    fn assert_err(server: &mut Server, cmd: &str)
    {
        let response = respond(server, cmd);
        assert!(response.starts_with("err\n"), "{} responded with {}", cmd, response);
        assert!(response.ends_with("ok\n"));
    }

    #[test]
    fn info()
    {
        let _setup = setup::setup();
        let mut server = server();
        assert_eq!(respond(&mut server, "info\n"), format!("id isolation v{}\nok\n", env!("CARGO_PKG_VERSION")));
        assert_eq!(respond(&mut server, "\n"), "ok\n");
    }

    #[test]
    fn game_not_started()
    {
        let _setup = setup::setup();
        let mut server = server();
        assert_err(&mut server, "validmoves");
        assert_err(&mut server, "play 0,0");
        assert_err(&mut server, "bestmove depth 1");
        assert_err(&mut server, "undo");
    }

    #[test]
    fn new_game()
    {
        let _setup = setup::setup();
        let mut server = server();
        assert_eq!(respond(&mut server, "newgame 5x5"), "1;...../...../...../...../.....\nok\n");
        assert_eq!(respond(&mut server, "newgame 2;#..1/..../..2."), "2;#..1/..../..2.\nok\n");
        assert_eq!(respond(&mut server, "newgame").lines().count(), 2);
        assert_err(&mut server, "newgame 0x5");
        assert_err(&mut server, "newgame 1;12/...");
    }

    #[test]
    fn play_and_undo()
    {
        let _setup = setup::setup();
        let mut server = server();
        respond(&mut server, "newgame 5x5");
        assert_eq!(respond(&mut server, "play 0,0"), "2;1..../...../...../...../.....\nok\n");
        assert_eq!(respond(&mut server, "play 4,4"), "1;1..../...../...../...../....2\nok\n");
        assert_eq!(respond(&mut server, "validmoves"), "1,2;2,1\nok\n");

        // Neither a knight jump nor a pass is legal here.
        assert_err(&mut server, "play 3,3");
        assert_err(&mut server, "pass");
        assert_err(&mut server, "play north");

        assert_eq!(respond(&mut server, "undo 2"), "1;...../...../...../...../.....\nok\n");
        assert_err(&mut server, "undo");
        assert_eq!(respond(&mut server, "play 2,2"), "2;...../...../..1../...../.....\nok\n");
        assert_eq!(respond(&mut server, "undo"), "1;...../...../...../...../.....\nok\n");
    }

    #[test]
    fn valid_moves_on_a_fresh_board()
    {
        let _setup = setup::setup();
        let mut server = server();
        respond(&mut server, "newgame 2x2");
        assert_eq!(respond(&mut server, "validmoves"), "0,0;0,1;1,0;1,1\nok\n");
    }

    #[test]
    fn finished_games()
    {
        let _setup = setup::setup();
        let mut server = server();
        respond(&mut server, &format!("newgame {}", templates::BOXED_IN));
        assert_eq!(respond(&mut server, "validmoves"), "pass\nok\n");
        assert_err(&mut server, "bestmove depth 2");
        assert_err(&mut server, "play 0,1");
    }

    #[test]
    fn best_move()
    {
        let _setup = setup::setup();
        for strategy in ["minimax", "alphabeta", "random"]
        {
            let mut server = server();
            respond(&mut server, &format!("newgame {}", templates::MIRRORED));
            respond(&mut server, &format!("options set strategy {}", strategy));

            for args in ["depth 2", "time 200"]
            {
                let response = respond(&mut server, &format!("bestmove {}", args));
                let mut lines = response.lines();
                let mv = lines.next().unwrap().parse::<Move>().unwrap();
                assert_eq!(lines.next(), Some("ok"));

                let board = templates::board(templates::MIRRORED);
                assert!(board.legal_moves(Player::One).contains(&mv), "{} played {}", strategy, mv);
            }

            assert_err(&mut server, "bestmove");
            assert_err(&mut server, "bestmove depth 0");
        }
    }

    #[test]
    fn options()
    {
        let _setup = setup::setup();
        let mut server = server();
        assert_eq!(
            respond(&mut server, "options"),
            "strategy;alphabeta\nheuristic;exclusive-mobility-difference\ndepth;3\ntimeout;10\nok\n"
        );
        assert_eq!(respond(&mut server, "options set strategy minimax"), "strategy;minimax\nok\n");
        assert_eq!(respond(&mut server, "options get strategy"), "strategy;minimax\nok\n");
        assert_eq!(respond(&mut server, "options set heuristic distance"), "heuristic;distance\nok\n");
        assert_eq!(respond(&mut server, "options set depth 5"), "depth;5\nok\n");
        assert_eq!(respond(&mut server, "options set timeout 2.5"), "timeout;2.5\nok\n");

        assert_err(&mut server, "options set depth 0");
        assert_err(&mut server, "options set timeout -1");
        assert_err(&mut server, "options set strategy greedy");
        assert_err(&mut server, "options get colour");
        assert_err(&mut server, "options set depth");
        assert_eq!(respond(&mut server, "options get depth"), "depth;5\nok\n");
    }

    #[test]
    fn unknown_commands()
    {
        let _setup = setup::setup();
        let mut server = server();
        assert_err(&mut server, "fly");
        let response = respond(&mut server, "fly away");
        assert!(response.contains("UnrecognizedCommand"));
    }
}
