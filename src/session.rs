//! Interactive console session.
//!
//! Drives a [`TurnEngine`] from line-based input, redrawing the board after
//! every turn. Player 2 can be handed to the robot advisor.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::board::Side;
use crate::config::GameConfig;
use crate::engine::TurnEngine;
use crate::protocol::display::{render_board, Layout};
use crate::protocol::parser::{parse_command, Command};
use crate::resolve::{GameResult, SowKind};

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game was played to the end.
    Finished(GameResult),
    /// A player quit or the input ran out.
    Quit,
}

/// A console game bound to an input and an output stream.
pub struct Session<R, W> {
    engine: TurnEngine,
    layout: Layout,
    robot: bool,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(engine: TurnEngine, config: &GameConfig, input: R, out: W) -> Self {
        Session {
            engine,
            layout: config.layout,
            robot: config.robot,
            input,
            out,
        }
    }

    fn render(&mut self) -> io::Result<()> {
        render_board(self.engine.board(), self.layout, &mut self.out)
    }

    /// Plays until the game ends or a player quits.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        self.render()?;
        loop {
            let mover = self.engine.to_move();
            if self.robot && mover == Side::B {
                match self.engine.play_advised() {
                    Ok((advice, _)) => {
                        writeln!(
                            self.out,
                            "Player {} (Robot) chooses house #{} because {}",
                            mover, advice.house, advice.reason
                        )?;
                    }
                    Err(e) => {
                        warn!(error = %e, "robot could not move");
                        return Ok(SessionEnd::Quit);
                    }
                }
            } else {
                match self.read_command(mover)? {
                    Command::Quit => {
                        writeln!(self.out, "Game over")?;
                        self.render()?;
                        self.out.flush()?;
                        return Ok(SessionEnd::Quit);
                    }
                    Command::Sow(house) => match self.engine.play(house) {
                        Ok(report) if report.sow.kind == SowKind::Rejected => {
                            writeln!(self.out, "House is empty. Move again.")?;
                        }
                        Ok(_) => {}
                        Err(e) => {
                            warn!(error = %e, "move refused");
                            return Ok(SessionEnd::Quit);
                        }
                    },
                }
            }
            self.render()?;

            if let Some(result) = self.engine.result() {
                self.game_over(&result)?;
                return Ok(SessionEnd::Finished(result));
            }
        }
    }

    /// Prompts until a valid command is read. End of input counts as quitting.
    fn read_command(&mut self, mover: Side) -> io::Result<Command> {
        loop {
            write!(
                self.out,
                "Player {}'s turn - Specify house number or 'q' to quit: ",
                mover
            )?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                writeln!(self.out)?;
                return Ok(Command::Quit);
            }
            match parse_command(&line) {
                Ok(cmd) => return Ok(cmd),
                Err(e) => {
                    debug!(error = %e, "invalid input");
                    writeln!(self.out, "Invalid input: {}", e)?;
                }
            }
        }
    }

    fn game_over(&mut self, result: &GameResult) -> io::Result<()> {
        writeln!(self.out, "Game over")?;
        self.render()?;
        writeln!(self.out, "\tplayer 1:{}", result.score_a)?;
        writeln!(self.out, "\tplayer 2:{}", result.score_b)?;
        writeln!(self.out, "{}", result.outcome)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Outcome;

    fn run(engine: TurnEngine, config: &GameConfig, input: &str) -> (SessionEnd, String) {
        let mut out = Vec::new();
        let end = Session::new(engine, config, input.as_bytes(), &mut out)
            .run()
            .unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    #[test]
    fn quit_prints_game_over_and_board() {
        let (end, text) = run(TurnEngine::new(), &GameConfig::default(), "q\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(text.contains("Player P1's turn - Specify house number or 'q' to quit: "));
        assert!(text.contains("Game over"));
        assert_eq!(text.matches("| P2 |").count(), 2);
    }

    #[test]
    fn robot_announces_its_choice() {
        let (_, text) = run(TurnEngine::new(), &GameConfig::default(), "1\nq\n");
        assert!(text.contains("Player P2 (Robot) chooses house #3 because it leads to an extra move"));
    }

    #[test]
    fn empty_house_is_reported() {
        let config = GameConfig {
            robot: false,
            ..GameConfig::default()
        };
        let (_, text) = run(TurnEngine::new(), &config, "1\n1\n1\nq\n");
        assert!(text.contains("House is empty. Move again."));
        assert!(text.contains("Player P2's turn"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let (_, text) = run(TurnEngine::new(), &GameConfig::default(), "9\nabc\nq\n");
        assert!(text.contains("Invalid input: house 9 is out of range, expected 1 to 6"));
        assert!(text.contains("Invalid input: 'abc' is not a number"));
        assert_eq!(text.matches("Player P1's turn").count(), 3);
    }

    #[test]
    fn end_of_input_quits() {
        let (end, _) = run(TurnEngine::new(), &GameConfig::default(), "");
        assert_eq!(end, SessionEnd::Quit);
    }

    #[test]
    fn finished_game_prints_scores() {
        let engine = TurnEngine::from_kfen("a/0,0,0,0,0,1/30/1,0,0,0,0,0/16").unwrap();
        let (end, text) = run(engine, &GameConfig::default(), "6\n");
        match end {
            SessionEnd::Finished(result) => {
                assert_eq!(result.score_a, 31);
                assert_eq!(result.score_b, 17);
                assert_eq!(result.outcome, Outcome::Win);
            }
            other => panic!("unexpected end: {:?}", other),
        }
        assert!(text.contains("\tplayer 1:31\n"));
        assert!(text.contains("\tplayer 2:17\n"));
        assert!(text.ends_with("Player 1 wins!\n"));
    }

    #[test]
    fn vertical_layout_is_used() {
        let config = GameConfig {
            layout: Layout::Vertical,
            ..GameConfig::default()
        };
        let (_, text) = run(TurnEngine::new(), &config, "q\n");
        assert!(text.contains("|       | P2  0 |"));
    }
}
