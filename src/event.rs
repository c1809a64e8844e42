use std::fmt::{Debug, Formatter};
use serde::{Deserialize, Serialize};
use crate::Card;

/// One step of the reveal cycle. Each player gets an adjacent pair:
/// an announce ("pass the device to this player") followed by a reveal
/// (their card, shown only to them).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum RevealEvent {
    Announce(String),
    Reveal(String, Card),
}

impl RevealEvent {
    pub fn player(&self) -> &str {
        match self {
            RevealEvent::Announce(player) => player,
            RevealEvent::Reveal(player, _) => player,
        }
    }
}

impl Debug for RevealEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RevealEvent::Announce(player) => {
                f.write_fmt(format_args!("Next player is:    {player}"))
            }
            RevealEvent::Reveal(player, card) => {
                f.write_fmt(format_args!("For {player}, the card is........... {card}"))
            }
        }
    }
}
