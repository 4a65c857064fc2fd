//! Contestant kinds

use crate::strategy::{LetterOrder, StrategyType};
use log::warn;

/// Who plays a seat
#[derive(Debug, Clone)]
pub enum PlayerKind {
    /// Answers come from a [`HumanInput`](super::HumanInput)
    Human,
    Computer(StrategyType),
}

impl PlayerKind {
    /// Resolve a player tag such as `human`, `smart` or `trigram`
    ///
    /// Unknown tags fall back to the `smart` strategy.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("human") {
            return Self::Human;
        }
        StrategyType::from_name(name).map_or_else(
            || {
                warn!("Unknown player type '{name}', using smart");
                Self::Computer(StrategyType::FixedOrder(LetterOrder::Smart.into()))
            },
            Self::Computer,
        )
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Computer(strategy) => strategy.name(),
        }
    }

    #[must_use]
    pub const fn is_human(&self) -> bool {
        matches!(self, Self::Human)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_human_and_computers() {
        assert!(PlayerKind::from_name("Human").is_human());
        assert_eq!(PlayerKind::from_name("trigram").name(), "trigram");
        assert_eq!(PlayerKind::from_name("conservative").name(), "conservative");
    }

    #[test]
    fn unknown_tag_falls_back_to_smart() {
        let player = PlayerKind::from_name("clairvoyant");
        assert!(!player.is_human());
        assert_eq!(player.name(), "smart");
    }
}
