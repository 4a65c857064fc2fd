//! Game events and observers
//!
//! The scheduler reports what happens to any number of observers. Observers
//! can't influence the game: their errors are logged and dropped.

use super::GameOutcome;
use crate::core::{Board, GuessRecord, Letter, Outcome};
use log::{info, warn};

/// Something that happened during a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent<'a> {
    GameStart {
        category: &'a str,
        game_type: Option<&'a str>,
        board: &'a Board,
    },
    TurnStart {
        player: usize,
        kind: &'static str,
        winnings: &'a [u32],
    },
    WheelResult {
        outcome: Outcome,
        player: usize,
        winnings: &'a [u32],
    },
    GuessResult {
        letter: Letter,
        count: usize,
        reward: u32,
        player: usize,
        winnings: &'a [u32],
    },
    VowelPurchase {
        letter: Letter,
        player: usize,
        winnings: &'a [u32],
    },
    SolveAttempt {
        text: &'a str,
        correct: bool,
        phrase: &'a str,
        player: usize,
        winnings: &'a [u32],
    },
    PuzzleProgress {
        board: &'a Board,
        guessed: &'a GuessRecord,
    },
    RoundComplete {
        player: usize,
    },
    GameOver {
        outcome: GameOutcome,
        winnings: &'a [u32],
    },
}

/// Receives game events
pub trait GameObserver {
    /// Handle one event
    ///
    /// # Errors
    /// Any error is logged by the caller and otherwise ignored.
    fn on_event(&mut self, event: &GameEvent<'_>) -> anyhow::Result<()>;
}

/// Deliver an event to every observer, swallowing failures
pub(crate) fn notify(observers: &mut [Box<dyn GameObserver + '_>], event: &GameEvent<'_>) {
    for observer in observers.iter_mut() {
        if let Err(e) = observer.on_event(event) {
            warn!("Observer failed on {event:?}: {e:#}");
        }
    }
}

/// Forwards every event to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn on_event(&mut self, event: &GameEvent<'_>) -> anyhow::Result<()> {
        match event {
            GameEvent::GameStart {
                category,
                game_type,
                board,
            } => {
                info!(
                    "game start: category={category} type={} board={board}",
                    game_type.unwrap_or("-")
                );
            }
            GameEvent::TurnStart {
                player,
                kind,
                winnings,
            } => info!("turn: player={player} kind={kind} winnings={winnings:?}"),
            GameEvent::WheelResult {
                outcome, player, ..
            } => info!("spin: player={player} outcome={outcome}"),
            GameEvent::GuessResult {
                letter,
                count,
                reward,
                player,
                ..
            } => info!("guess: player={player} letter={letter} count={count} reward={reward}"),
            GameEvent::VowelPurchase { letter, player, .. } => {
                info!("vowel: player={player} letter={letter}");
            }
            GameEvent::SolveAttempt {
                text,
                correct,
                player,
                ..
            } => info!("solve: player={player} attempt={text:?} correct={correct}"),
            GameEvent::PuzzleProgress { board, .. } => info!("board: {board}"),
            GameEvent::RoundComplete { player } => info!("round complete: player={player}"),
            GameEvent::GameOver { outcome, winnings } => {
                info!("game over: {outcome:?} winnings={winnings:?}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    struct Failing;

    impl GameObserver for Failing {
        fn on_event(&mut self, _event: &GameEvent<'_>) -> anyhow::Result<()> {
            bail!("sink offline")
        }
    }

    #[derive(Default)]
    struct Counting {
        seen: std::rc::Rc<std::cell::Cell<usize>>,
    }

    impl GameObserver for Counting {
        fn on_event(&mut self, _event: &GameEvent<'_>) -> anyhow::Result<()> {
            self.seen.set(self.seen.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn failing_observer_does_not_stop_delivery() {
        let counting = Counting::default();
        let seen = counting.seen.clone();
        let mut observers: Vec<Box<dyn GameObserver>> = vec![Box::new(Failing), Box::new(counting)];

        notify(&mut observers, &GameEvent::RoundComplete { player: 1 });
        notify(&mut observers, &GameEvent::RoundComplete { player: 2 });
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn log_observer_accepts_every_event() {
        let board = Board::from_mask("C_T").unwrap();
        let mut observer = LogObserver;
        assert!(
            observer
                .on_event(&GameEvent::GameStart {
                    category: "ANIMAL",
                    game_type: Some("LIVING THING"),
                    board: &board,
                })
                .is_ok()
        );
    }
}
