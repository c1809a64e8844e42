use std::path::Path;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use crate::GameError;

/// The vocabulary collaborator: word classification and frequency ranking
/// live behind this seam, not in the engine.
pub trait Vocabulary {
    fn is_drawable(&self, word: &str) -> bool;

    /// Canonical non-plural form. A word is only dealt if its singular
    /// form equals itself.
    fn singular_form(&self, word: &str) -> String;

    /// (word, frequency) pairs of drawable words, most frequent first.
    fn ranked_drawable_words(&self) -> Vec<(String, u64)>;
}

/// Samples a word uniformly from the top of the frequency ranking.
///
/// The filtered ranking is computed once per selector and kept for the
/// lifetime of the instance; the underlying vocabulary is static during a
/// session, so the cache never needs invalidation.
pub struct WordSelector<V: Vocabulary> {
    vocabulary: V,
    eligible: Option<Vec<String>>,
}

impl<V: Vocabulary> WordSelector<V> {
    pub fn new(vocabulary: V) -> Self {
        Self {
            vocabulary,
            eligible: None,
        }
    }

    /// Pick one word uniformly at random from the `max_rank` most frequent
    /// drawable singular words. If fewer eligible words exist, the pool is
    /// just however many there are.
    pub fn select<R: Rng>(&mut self, max_rank: usize, rng: &mut R) -> Result<String, GameError> {
        let eligible = self.eligible_words();
        let pool = &eligible[..max_rank.min(eligible.len())];

        match pool.choose(rng) {
            Some(word) => Ok(word.clone()),
            None => Err(GameError::NoEligibleWords { max_rank }),
        }
    }

    fn eligible_words(&mut self) -> &[String] {
        if self.eligible.is_none() {
            let words: Vec<String> = self
                .vocabulary
                .ranked_drawable_words()
                .into_iter()
                .map(|(word, _)| word)
                .filter(|word| {
                    self.vocabulary.is_drawable(word)
                        && self.vocabulary.singular_form(word) == *word
                })
                .collect();
            self.eligible = Some(words);
        }

        self.eligible.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Debug, Deserialize)]
struct WordRecord {
    word: String,
    frequency: u64,
    drawable: bool,
    singular: String,
}

/// Word list backed by a csv file (`word,frequency,drawable,singular`),
/// the concrete vocabulary used by the demo binary and the bench.
#[derive(Clone, Debug)]
pub struct CsvVocabulary {
    records: Vec<WordRecord>,
}

impl CsvVocabulary {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let mut reader = csv::Reader::from_path(path)?;

        let mut records: Vec<WordRecord> = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }

        records.sort_by(|a, b| b.frequency.cmp(&a.frequency));

        Ok(Self { records })
    }

    fn find(&self, word: &str) -> Option<&WordRecord> {
        self.records.iter().find(|record| record.word == word)
    }
}

impl Vocabulary for CsvVocabulary {
    fn is_drawable(&self, word: &str) -> bool {
        self.find(word).map_or(false, |record| record.drawable)
    }

    fn singular_form(&self, word: &str) -> String {
        self.find(word)
            .map_or_else(|| word.to_string(), |record| record.singular.clone())
    }

    fn ranked_drawable_words(&self) -> Vec<(String, u64)> {
        self.records
            .iter()
            .filter(|record| record.drawable)
            .map(|record| (record.word.clone(), record.frequency))
            .collect()
    }
}
