//! Turn scheduler
//!
//! Drives one game as an explicit state machine. Each call to
//! [`TurnScheduler::step`] performs one transition; [`TurnScheduler::play`]
//! steps until a terminal phase is reached.
//!
//! Every action is validated before anything is mutated, so an action is
//! either fully applied to the board, ledger and guess record or not applied
//! at all.

use super::config::{GameConfig, PLAYER_COUNT};
use super::events::{GameEvent, GameObserver, notify};
use super::input::{self, HumanInput, TurnChoice};
use super::player::PlayerKind;
use crate::core::{
    Board, GameError, GuessRecord, Ledger, Letter, Outcome, Phrase, VOWELS, Wheel, apply_guess,
};
use crate::puzzles::Puzzle;
use crate::strategy::{Action, Strategy, TurnView};
use log::{debug, info, warn};
use rand::Rng;

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The player picks spin, buy vowel or solve
    AwaitingAction(usize),
    /// The wheel is about to be spun; computers have already named their consonant
    ResolvingSpin {
        player: usize,
        consonant: Option<Letter>,
    },
    /// The wheel landed on cash and a human still has to call a consonant
    AwaitingConsonant { player: usize, reward: u32 },
    /// A letter is about to be applied to the board
    ResolvingGuess {
        player: usize,
        letter: Letter,
        reward: u32,
    },
    /// The turn passes on from this player
    TurnAdvance(usize),
    /// Every letter is showing; this player solves first
    RoundComplete(usize),
    /// Solve-only round
    SolvePhase { player: usize, attempts: usize },
    GameWon(usize),
    /// Every solve attempt failed
    Unsolved,
    /// The guessing round hit its turn limit
    Stalled,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::GameWon(_) | Self::Unsolved | Self::Stalled)
    }

    /// Player the phase belongs to, if any
    #[must_use]
    pub const fn player(self) -> Option<usize> {
        match self {
            Self::AwaitingAction(p)
            | Self::ResolvingSpin { player: p, .. }
            | Self::AwaitingConsonant { player: p, .. }
            | Self::ResolvingGuess { player: p, .. }
            | Self::TurnAdvance(p)
            | Self::RoundComplete(p)
            | Self::SolvePhase { player: p, .. }
            | Self::GameWon(p) => Some(p),
            Self::Unsolved | Self::Stalled => None,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { player: usize, winnings: u32 },
    Unsolved,
    Stalled,
}

impl GameOutcome {
    #[must_use]
    pub const fn winner(self) -> Option<usize> {
        match self {
            Self::Won { player, .. } => Some(player),
            Self::Unsolved | Self::Stalled => None,
        }
    }
}

/// Final state of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub outcome: GameOutcome,
    pub phrase: String,
    pub category: String,
    pub winnings: Vec<u32>,
    pub guessed: Vec<Letter>,
    /// Actions taken during the guessing round
    pub turns: usize,
}

/// State machine for a single game
pub struct TurnScheduler<'a, R> {
    phrase: Phrase,
    category: String,
    game_type: Option<String>,
    board: Board,
    guessed: GuessRecord,
    ledger: Ledger,
    players: Vec<PlayerKind>,
    wheel: Wheel,
    rng: R,
    config: GameConfig,
    input: Option<&'a mut dyn HumanInput>,
    observers: Vec<Box<dyn GameObserver + 'a>>,
    phase: Phase,
    turns: usize,
    started: bool,
    /// `TurnStart` went out for the current `AwaitingAction` phase
    turn_announced: bool,
}

impl<'a, R: Rng> TurnScheduler<'a, R> {
    /// Set up a game; player 0 acts first
    ///
    /// Every wheel spin draws from `rng`. `config.seed` is not consulted here.
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` unless exactly three players are given.
    pub fn new(
        puzzle: &Puzzle,
        players: Vec<PlayerKind>,
        wheel: Wheel,
        rng: R,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        if players.len() != PLAYER_COUNT {
            return Err(GameError::InvalidInput(format!(
                "A game needs {PLAYER_COUNT} players, got {}",
                players.len()
            )));
        }

        Ok(Self {
            phrase: puzzle.phrase().clone(),
            category: puzzle.category().to_string(),
            game_type: puzzle.game_type().map(str::to_string),
            board: Board::new(puzzle.phrase()),
            guessed: GuessRecord::new(),
            ledger: Ledger::new(PLAYER_COUNT),
            players,
            wheel,
            rng,
            config,
            input: None,
            observers: Vec::new(),
            phase: Phase::AwaitingAction(0),
            turns: 0,
            started: false,
            turn_announced: false,
        })
    }

    /// Where human players' answers come from
    #[must_use]
    pub fn with_input(mut self, input: &'a mut dyn HumanInput) -> Self {
        self.input = Some(input);
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: impl GameObserver + 'a) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[must_use]
    pub const fn guessed(&self) -> &GuessRecord {
        &self.guessed
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerKind] {
        &self.players
    }

    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// The outcome once a terminal phase is reached
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::GameWon(player) => Some(GameOutcome::Won {
                player,
                winnings: self.ledger.balance(player),
            }),
            Phase::Unsolved => Some(GameOutcome::Unsolved),
            Phase::Stalled => Some(GameOutcome::Stalled),
            _ => None,
        }
    }

    /// Play until the game ends
    ///
    /// # Errors
    /// Returns `GameError::InputClosed` if a human's input runs out, or
    /// `GameError::InvalidInput` if a human seat has no input source.
    pub fn play(&mut self) -> Result<GameSummary, GameError> {
        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(self.summary(outcome));
            }
            self.step()?;
        }
    }

    /// Perform one transition and return the new phase
    ///
    /// Stepping a finished game is a no-op.
    ///
    /// # Errors
    /// Same as [`TurnScheduler::play`]. Input is only read in phases that have
    /// not changed the game yet, so after an error the phase is unchanged and
    /// stepping again asks the same question without spinning or counting a
    /// new turn.
    pub fn step(&mut self) -> Result<Phase, GameError> {
        if !self.started {
            self.started = true;
            info!(
                "Starting game: category {}, {} letters",
                self.category,
                self.board.hidden_count()
            );
            notify(
                &mut self.observers,
                &GameEvent::GameStart {
                    category: &self.category,
                    game_type: self.game_type.as_deref(),
                    board: &self.board,
                },
            );
        }

        let current = self.phase;
        let next = match current {
            Phase::AwaitingAction(player) => self.await_action(player)?,
            Phase::ResolvingSpin { player, consonant } => self.resolve_spin(player, consonant),
            Phase::AwaitingConsonant { player, reward } => self.await_consonant(player, reward)?,
            Phase::ResolvingGuess {
                player,
                letter,
                reward,
            } => self.resolve_guess(player, letter, reward),
            Phase::TurnAdvance(player) => self.advance(player),
            Phase::RoundComplete(player) => {
                notify(&mut self.observers, &GameEvent::RoundComplete { player });
                Phase::SolvePhase {
                    player,
                    attempts: 0,
                }
            }
            Phase::SolvePhase { player, attempts } => self.solve_round(player, attempts)?,
            terminal => return Ok(terminal),
        };

        debug!("{current:?} -> {next:?}");
        self.phase = next;

        if let Some(outcome) = self.outcome() {
            info!("Game over: {outcome:?}, phrase {}", self.phrase);
            notify(
                &mut self.observers,
                &GameEvent::GameOver {
                    outcome,
                    winnings: self.ledger.balances(),
                },
            );
        }
        Ok(next)
    }

    fn summary(&self, outcome: GameOutcome) -> GameSummary {
        GameSummary {
            outcome,
            phrase: self.phrase.text().to_string(),
            category: self.category.clone(),
            winnings: self.ledger.balances().to_vec(),
            guessed: self.guessed.letters().to_vec(),
            turns: self.turns,
        }
    }

    fn await_action(&mut self, player: usize) -> Result<Phase, GameError> {
        if !self.turn_announced {
            if self.turns >= self.config.max_turns {
                warn!("No solve after {} turns, stopping", self.turns);
                return Ok(Phase::Stalled);
            }
            self.turns += 1;
            self.turn_announced = true;

            notify(
                &mut self.observers,
                &GameEvent::TurnStart {
                    player,
                    kind: self.players[player].name(),
                    winnings: self.ledger.balances(),
                },
            );
        }

        let planned = match &self.players[player] {
            PlayerKind::Computer(strategy) => Some(strategy.choose_action(&TurnView {
                board: &self.board,
                ledger: &self.ledger,
                guessed: &self.guessed,
                player,
            })),
            PlayerKind::Human => None,
        };

        let next = match planned {
            Some(action) => self.computer_action(player, action),
            None => self.human_action(player)?,
        };
        self.turn_announced = false;
        Ok(next)
    }

    fn human_action(&mut self, player: usize) -> Result<Phase, GameError> {
        let balance = self.ledger.balance(player);
        let vowels_left = VOWELS
            .iter()
            .any(|&v| !self.guessed.contains(Letter::from_upper(v)));
        let consonants_left = (b'A'..=b'Z')
            .map(Letter::from_upper)
            .any(|l| l.is_consonant() && !self.guessed.contains(l));
        let can_buy = vowels_left && self.ledger.can_buy_vowel(player);

        let guessed = &self.guessed;
        let source = human_input(&mut self.input)?;
        let choice = input::ask(source, input::choice_prompt(can_buy), |line| {
            match input::parse_choice(line, balance, vowels_left)? {
                TurnChoice::Spin if !consonants_left => Err(GameError::InvalidInput(
                    "Every consonant has been called".to_string(),
                )),
                choice => Ok(choice),
            }
        })?;

        match choice {
            TurnChoice::Spin => Ok(Phase::ResolvingSpin {
                player,
                consonant: None,
            }),
            TurnChoice::BuyVowel => {
                let vowel = input::ask(source, "Buy which vowel (A, E, I, O, U)", |line| {
                    input::parse_vowel(line, guessed)
                })?;
                Ok(self.buy_vowel(player, vowel))
            }
            TurnChoice::Solve => {
                let attempt = input::ask(source, "Your guess to solve", input::parse_solve)?;
                Ok(self.resolve_solve(player, &attempt, Phase::TurnAdvance(player)))
            }
        }
    }

    fn computer_action(&mut self, player: usize, action: Action) -> Phase {
        debug!("Player {player} plans {action:?}");
        match action {
            Action::Spin(letter) => {
                if letter.is_vowel() {
                    return self.reject(
                        player,
                        &GameError::InvalidInput(format!("'{letter}' is a vowel")),
                    );
                }
                if self.guessed.contains(letter) {
                    return self.reject(player, &GameError::DuplicateGuess(letter));
                }
                Phase::ResolvingSpin {
                    player,
                    consonant: Some(letter),
                }
            }
            Action::BuyVowel(letter) => {
                if letter.is_consonant() {
                    return self.reject(
                        player,
                        &GameError::InvalidInput(format!("'{letter}' is not a vowel")),
                    );
                }
                if self.guessed.contains(letter) {
                    return self.reject(player, &GameError::DuplicateGuess(letter));
                }
                self.buy_vowel(player, letter)
            }
            Action::Solve(attempt) => {
                self.resolve_solve(player, &attempt, Phase::TurnAdvance(player))
            }
        }
    }

    fn reject(&self, player: usize, reason: &GameError) -> Phase {
        warn!(
            "Rejected action from player {player} ({}): {reason}",
            self.players[player].name()
        );
        Phase::TurnAdvance(player)
    }

    fn buy_vowel(&mut self, player: usize, vowel: Letter) -> Phase {
        if let Err(e) = self.ledger.buy_vowel(player) {
            return self.reject(player, &e);
        }
        notify(
            &mut self.observers,
            &GameEvent::VowelPurchase {
                letter: vowel,
                player,
                winnings: self.ledger.balances(),
            },
        );
        Phase::ResolvingGuess {
            player,
            letter: vowel,
            reward: 0,
        }
    }

    fn resolve_spin(&mut self, player: usize, consonant: Option<Letter>) -> Phase {
        let outcome = self.wheel.spin(&mut self.rng);
        if outcome == Outcome::Bankrupt {
            self.ledger.bankrupt(player);
        }
        notify(
            &mut self.observers,
            &GameEvent::WheelResult {
                outcome,
                player,
                winnings: self.ledger.balances(),
            },
        );

        match (outcome, consonant) {
            (Outcome::Cash(reward), Some(letter)) => Phase::ResolvingGuess {
                player,
                letter,
                reward,
            },
            (Outcome::Cash(reward), None) => Phase::AwaitingConsonant { player, reward },
            _ => Phase::TurnAdvance(player),
        }
    }

    fn await_consonant(&mut self, player: usize, reward: u32) -> Result<Phase, GameError> {
        let guessed = &self.guessed;
        let source = human_input(&mut self.input)?;
        let letter = input::ask(source, "Guess a consonant", |line| {
            input::parse_consonant(line, guessed)
        })?;
        Ok(Phase::ResolvingGuess {
            player,
            letter,
            reward,
        })
    }

    fn resolve_guess(&mut self, player: usize, letter: Letter, reward: u32) -> Phase {
        if let Err(e) = self.guessed.record(letter) {
            return self.reject(player, &e);
        }

        let (board, positions) = apply_guess(&self.board, &self.phrase, letter);
        let count = positions.len();
        if count > 0 {
            let count_u32 = u32::try_from(count).unwrap_or(u32::MAX);
            self.ledger.credit(player, reward.saturating_mul(count_u32));
            self.board = board;
        }

        notify(
            &mut self.observers,
            &GameEvent::GuessResult {
                letter,
                count,
                reward,
                player,
                winnings: self.ledger.balances(),
            },
        );
        notify(
            &mut self.observers,
            &GameEvent::PuzzleProgress {
                board: &self.board,
                guessed: &self.guessed,
            },
        );

        if count == 0 {
            Phase::TurnAdvance(player)
        } else if self.board.reveals(&self.phrase) {
            Phase::RoundComplete(player)
        } else {
            Phase::AwaitingAction(player)
        }
    }

    fn advance(&self, player: usize) -> Phase {
        let next = (player + 1) % self.players.len();
        if self.board.reveals(&self.phrase) {
            Phase::RoundComplete(next)
        } else {
            Phase::AwaitingAction(next)
        }
    }

    fn solve_round(&mut self, player: usize, attempts: usize) -> Result<Phase, GameError> {
        if attempts >= self.config.max_solve_rotations * self.players.len() {
            warn!("Nobody solved after {attempts} attempts, stopping");
            return Ok(Phase::Unsolved);
        }

        let attempt = if self.players[player].is_human() {
            let source = human_input(&mut self.input)?;
            input::ask(source, "Your guess to solve", input::parse_solve)?
        } else {
            self.board.to_string()
        };

        let on_miss = Phase::SolvePhase {
            player: (player + 1) % self.players.len(),
            attempts: attempts + 1,
        };
        Ok(self.resolve_solve(player, &attempt, on_miss))
    }

    fn resolve_solve(&mut self, player: usize, attempt: &str, on_miss: Phase) -> Phase {
        let correct = self.phrase.matches(attempt);
        notify(
            &mut self.observers,
            &GameEvent::SolveAttempt {
                text: attempt,
                correct,
                phrase: self.phrase.text(),
                player,
                winnings: self.ledger.balances(),
            },
        );
        if correct { Phase::GameWon(player) } else { on_miss }
    }
}

fn human_input<'s>(
    input: &'s mut Option<&mut dyn HumanInput>,
) -> Result<&'s mut dyn HumanInput, GameError> {
    match input {
        Some(input) => Ok(&mut **input),
        None => Err(GameError::InvalidInput(
            "A human player needs an input source".to_string(),
        )),
    }
}
