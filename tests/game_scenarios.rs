//! End-to-end game scenarios through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wheel_of_fortune::core::{Letter, Outcome, Wheel};
use wheel_of_fortune::game::{
    GameConfig, GameEvent, GameObserver, GameOutcome, Phase, PlayerKind, ScriptedInput,
    TurnScheduler,
};
use wheel_of_fortune::puzzles::{Puzzle, PuzzleBook};
use wheel_of_fortune::strategy::{FixedOrderStrategy, StrategyType};

fn letter(b: u8) -> Letter {
    Letter::new(b).unwrap()
}

fn single_slot(outcome: Outcome) -> Wheel {
    Wheel::new(vec![outcome]).unwrap()
}

fn human_vs_computers() -> Vec<PlayerKind> {
    vec![
        PlayerKind::Human,
        PlayerKind::from_name("smart"),
        PlayerKind::from_name("conservative"),
    ]
}

/// Event log shared with the test body
#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl GameObserver for Recorder {
    fn on_event(&mut self, event: &GameEvent<'_>) -> anyhow::Result<()> {
        let line = match event {
            GameEvent::GameStart { category, .. } => format!("start {category}"),
            GameEvent::TurnStart { player, kind, .. } => format!("turn {player} {kind}"),
            GameEvent::WheelResult { outcome, .. } => format!("wheel {outcome}"),
            GameEvent::GuessResult {
                letter,
                count,
                reward,
                winnings,
                player,
            } => format!("guess {letter} x{count} @{reward} -> {}", winnings[*player]),
            GameEvent::VowelPurchase {
                letter,
                player,
                winnings,
            } => format!("vowel {letter} -> {}", winnings[*player]),
            GameEvent::SolveAttempt { text, correct, .. } => format!("solve {text} {correct}"),
            GameEvent::PuzzleProgress { board, .. } => format!("board {board}"),
            GameEvent::RoundComplete { player } => format!("complete {player}"),
            GameEvent::GameOver { outcome, .. } => format!("over {outcome:?}"),
        };
        self.0.borrow_mut().push(line);
        Ok(())
    }
}

#[test]
fn cat_scenario_event_trace() {
    let puzzle = Puzzle::new("CAT", "ANIMAL").unwrap();
    let cat_order = || {
        PlayerKind::Computer(StrategyType::FixedOrder(FixedOrderStrategy::new(
            "cat", b"CAT", 250,
        )))
    };
    let recorder = Recorder::default();
    let log = Rc::clone(&recorder.0);

    let mut game = TurnScheduler::new(
        &puzzle,
        vec![cat_order(), cat_order(), cat_order()],
        single_slot(Outcome::Cash(500)),
        StdRng::seed_from_u64(0),
        GameConfig::default(),
    )
    .unwrap()
    .with_observer(recorder);

    let summary = game.play().unwrap();

    let expected = [
        "start ANIMAL",
        "turn 0 cat",
        "wheel $500",
        "guess C x1 @500 -> 500",
        "board C__",
        "turn 0 cat",
        "vowel A -> 250",
        "guess A x1 @0 -> 250",
        "board CA_",
        "turn 0 cat",
        "wheel $500",
        "guess T x1 @500 -> 750",
        "board CAT",
        "complete 0",
        "solve CAT true",
        "over Won { player: 0, winnings: 750 }",
    ];
    assert_eq!(*log.borrow(), expected);
    assert_eq!(summary.outcome.winner(), Some(0));
}

#[test]
fn bankrupt_passes_turn_without_letter_prompt() {
    let puzzle = Puzzle::new("NEW YORK CITY", "PLACE").unwrap();
    let recorder = Recorder::default();
    let log = Rc::clone(&recorder.0);
    let mut input = ScriptedInput::new(["1", "1"]);
    {
        let mut game = TurnScheduler::new(
            &puzzle,
            human_vs_computers(),
            single_slot(Outcome::Bankrupt),
            StdRng::seed_from_u64(0),
            GameConfig::default(),
        )
        .unwrap()
        .with_input(&mut input)
        .with_observer(recorder);

        // A full rotation and the human's second spin: action, spin, advance
        for _ in 0..11 {
            game.step().unwrap();
        }
        assert_eq!(game.phase(), Phase::TurnAdvance(0));
        assert_eq!(game.ledger().balances(), &[0, 0, 0]);
        assert!(game.guessed().is_empty());
        assert_eq!(game.turns(), 4);
    }

    assert_eq!(input.prompts().len(), 2);
    let log = log.borrow();
    assert_eq!(log.iter().filter(|l| *l == "wheel BANKRUPT").count(), 4);
    assert!(!log.iter().any(|l| l.starts_with("guess")));
}

#[test]
fn miss_credits_nothing_and_records_letter() {
    let puzzle = Puzzle::new("PIZZA AND SODA", "FOOD AND DRINK").unwrap();
    let mut input = ScriptedInput::new(["1", "q"]);
    let mut game = TurnScheduler::new(
        &puzzle,
        human_vs_computers(),
        single_slot(Outcome::Cash(900)),
        StdRng::seed_from_u64(0),
        GameConfig::default(),
    )
    .unwrap()
    .with_input(&mut input);

    for _ in 0..4 {
        game.step().unwrap();
    }
    assert_eq!(game.phase(), Phase::TurnAdvance(0));
    assert_eq!(game.ledger().balances(), &[0, 0, 0]);
    assert_eq!(game.guessed().letters(), &[letter(b'Q')]);
    assert_eq!(game.step().unwrap(), Phase::AwaitingAction(1));
}

#[test]
fn repeated_letter_is_rejected_by_scheduler() {
    let puzzle = Puzzle::new("HAPPY BIRTHDAY", "PHRASE").unwrap();
    // P, then P again (rejected), then H
    let mut input = ScriptedInput::new(["1", "p", "1", "p", "h"]);
    {
        let mut game = TurnScheduler::new(
            &puzzle,
            human_vs_computers(),
            single_slot(Outcome::Cash(500)),
            StdRng::seed_from_u64(0),
            GameConfig::default(),
        )
        .unwrap()
        .with_input(&mut input);

        for _ in 0..8 {
            game.step().unwrap();
        }
        assert_eq!(game.board().to_string(), "H_PP_ ____H___");
        assert_eq!(game.ledger().balance(0), 500 * 2 + 500 * 2);
        assert_eq!(game.guessed().len(), 2);
    }
    assert_eq!(input.rejections().len(), 1);
}

#[test]
fn computer_tournament_over_embedded_puzzles() {
    let book = PuzzleBook::embedded();
    let players = || {
        ["trigram", "oxford", "conservative"]
            .into_iter()
            .map(PlayerKind::from_name)
            .collect::<Vec<_>>()
    };

    for seed in 0..15 {
        let mut rng = StdRng::seed_from_u64(seed);
        let puzzle = book.random(&mut rng).clone();
        let mut game = TurnScheduler::new(
            &puzzle,
            players(),
            Wheel::standard(),
            rng,
            GameConfig::default(),
        )
        .unwrap();

        let summary = game.play().unwrap();
        assert_ne!(summary.outcome, GameOutcome::Unsolved, "seed {seed}");
        if let GameOutcome::Won { player, winnings } = summary.outcome {
            assert_eq!(summary.winnings[player], winnings);
            assert!(game.board().is_complete());
        }
    }
}
