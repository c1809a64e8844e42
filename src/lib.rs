//! A game aid for 'fake artist goes to new-york'.
//!
//! Everyone playing gets the same drawable word, except one secretly chosen
//! fake artist who gets a blank card. Normally one person has to pick the
//! word and deal the cards, so that person can't play. With this, everyone
//! can play: deal, then pass the device around and advance the cycle once
//! per look.
//!
//! ```no_run
//! use rand::thread_rng;
//! use fake_artist_rs::FakeArtist;
//! use fake_artist_rs::words::CsvVocabulary;
//!
//! let vocabulary = CsvVocabulary::from_path("data/words.csv").unwrap();
//! let players = vec!["Alice".to_string(), "Bob".to_string(), "Charlie".to_string()];
//! let mut game = FakeArtist::new(players, vocabulary).unwrap();
//!
//! let mut rng = thread_rng();
//! game.deal_new_cards(&mut rng).unwrap();
//! // then in a loop (one full pass is 2 * n_players calls)
//! println!("{:?}", game.next_cycle_item().unwrap());
//! // This will either tell you who the next player is, or show that
//! // player's card.
//! ```

pub mod event;
pub mod words;

pub use event::RevealEvent;
pub use words::{CsvVocabulary, Vocabulary, WordSelector};

use std::fmt::{Display, Formatter};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fewer than two players means no genuine artist or no fake one.
pub const MIN_PLAYERS: usize = 2;

pub const DEFAULT_MAX_RANK: usize = 1000;

/// What a player is dealt: the round's word, or the fake artist's blank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Card {
    Word(String),
    Blank,
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Word(word) => f.write_str(word),
            Card::Blank => f.write_str("X"),
        }
    }
}

/// Player configuration: a bare count (labels are synthesized as "0".."n-1")
/// or an explicit ordered list of names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Players {
    Count(usize),
    Named(Vec<String>),
}

impl Players {
    fn into_labels(self) -> Vec<String> {
        match self {
            Players::Count(count) => (0..count).map(|idx| idx.to_string()).collect(),
            Players::Named(names) => names,
        }
    }
}

impl From<usize> for Players {
    fn from(count: usize) -> Self {
        Players::Count(count)
    }
}

impl From<Vec<String>> for Players {
    fn from(names: Vec<String>) -> Self {
        Players::Named(names)
    }
}

impl From<&[&str]> for Players {
    fn from(names: &[&str]) -> Self {
        Players::Named(names.iter().map(|name| name.to_string()).collect())
    }
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no drawable singular words available within rank {max_rank}")]
    NoEligibleWords { max_rank: usize },

    #[error("you need to deal some cards first (using `deal_new_cards`)")]
    NotDealt,

    #[error("a game needs at least 2 players, got {0}")]
    InvalidConfiguration(usize),

    #[error("failed to read word list: {0}")]
    WordList(#[from] csv::Error),
}

/// A game of 'fake artist goes to new-york'.
///
/// Owns the player list, the current card assignment and the reveal cycle.
/// `deal_new_cards` is the only operation that replaces the assignment;
/// `next_cycle_item` only advances the cycle position.
pub struct FakeArtist<V: Vocabulary> {
    players: Vec<String>,
    max_rank: usize,
    selector: WordSelector<V>,

    cards: Option<Vec<Card>>,
    cycle: Option<Vec<RevealEvent>>,
    cycle_idx: usize,
}

impl<V: Vocabulary> FakeArtist<V> {
    pub fn new(players: impl Into<Players>, vocabulary: V) -> Result<Self, GameError> {
        Self::with_max_rank(players, DEFAULT_MAX_RANK, vocabulary)
    }

    pub fn with_max_rank(
        players: impl Into<Players>,
        max_rank: usize,
        vocabulary: V,
    ) -> Result<Self, GameError> {
        let players = players.into().into_labels();
        if players.len() < MIN_PLAYERS {
            return Err(GameError::InvalidConfiguration(players.len()));
        }

        Ok(Self {
            players,
            max_rank,
            selector: WordSelector::new(vocabulary),
            cards: None,
            cycle: None,
            cycle_idx: 0,
        })
    }

    /// Replace the player list. The current round (if any) is discarded,
    /// since its assignment is aligned to the old list.
    pub fn configure(&mut self, players: impl Into<Players>) -> Result<(), GameError> {
        let players = players.into().into_labels();
        if players.len() < MIN_PLAYERS {
            return Err(GameError::InvalidConfiguration(players.len()));
        }

        self.players = players;
        self.cards = None;
        self.cycle = None;
        self.cycle_idx = 0;
        Ok(())
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn cards(&self) -> Option<&[Card]> {
        self.cards.as_deref()
    }

    /// Deal a fresh round: one word for everyone, a blank for one uniformly
    /// random fake artist, and the reveal cycle rebuilt from the start.
    ///
    /// Word selection happens before any state is touched, so a failed deal
    /// leaves the previous round intact.
    pub fn deal_new_cards<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let word = self.selector.select(self.max_rank, rng)?;

        let mut cards = vec![Card::Word(word); self.players.len()];
        let fake_artist_idx = rng.gen_range(0..cards.len());
        cards[fake_artist_idx] = Card::Blank;

        self.cycle = Some(Self::build_cycle(&self.players, &cards));
        self.cards = Some(cards);
        self.cycle_idx = 0;
        Ok(())
    }

    /// The next event of the reveal cycle. The cycle is circular and
    /// infinite; after the last player's reveal it wraps back to the first
    /// player's announce. The caller decides when to stop (one full pass is
    /// `2 * n_players` calls).
    pub fn next_cycle_item(&mut self) -> Result<RevealEvent, GameError> {
        let cycle = self.cycle.as_ref().ok_or(GameError::NotDealt)?;

        let event = cycle[self.cycle_idx].clone();
        self.cycle_idx = (self.cycle_idx + 1) % cycle.len();
        Ok(event)
    }

    fn build_cycle(players: &[String], cards: &[Card]) -> Vec<RevealEvent> {
        let mut events = Vec::with_capacity(cards.len() * 2);
        for (player_idx, card) in cards.iter().enumerate() {
            events.push(RevealEvent::Announce(players[player_idx].clone()));
            events.push(RevealEvent::Reveal(players[player_idx].clone(), card.clone()));
        }
        events
    }
}
