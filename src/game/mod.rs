//! One game of three contestants
//!
//! [`TurnScheduler`] owns the board, ledger and guess record for a single
//! puzzle, asks each seat for an action in turn and reports what happens to
//! its [`GameObserver`]s.

mod config;
mod events;
mod input;
mod player;
mod scheduler;

pub use config::{GameConfig, PLAYER_COUNT};
pub use events::{GameEvent, GameObserver, LogObserver};
pub use input::{
    HumanInput, ScriptedInput, TurnChoice, choice_prompt, parse_choice, parse_consonant,
    parse_solve, parse_vowel,
};
pub use player::PlayerKind;
pub use scheduler::{GameOutcome, GameSummary, Phase, TurnScheduler};
