use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use log::trace;

use crate::format::format_number;

/// Read access to a word and how often it occurs.
pub trait WordFrequency {
    fn word(&self) -> &str;
    fn frequency(&self) -> usize;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordCount {
    pub word: String,
    pub frequency: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, frequency: usize) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

impl WordFrequency for WordCount {
    fn word(&self) -> &str {
        &self.word
    }

    fn frequency(&self) -> usize {
        self.frequency
    }
}

/// Renders as `word: frequency`, the frequency grouped by thousands.
impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, format_number(self.frequency))
    }
}

/// Higher frequency first, then alphabetical.
fn rank_order(a: &WordCount, b: &WordCount) -> Ordering {
    b.frequency
        .cmp(&a.frequency)
        .then_with(|| a.word.cmp(&b.word))
}

/// Word to frequency mapping built from a token sequence.
#[derive(Debug, Clone, Default)]
pub struct FrequencyIndex {
    counts: HashMap<String, usize>,
}

impl FrequencyIndex {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
        }
        trace!("built frequency index with {} distinct words", counts.len());
        Self { counts }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Highest frequency in the index, 0 when empty.
    pub fn max_frequency(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// All entries, most frequent first, ties broken by ascending word.
    pub fn ranked(&self) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, &frequency)| WordCount::new(word.as_str(), frequency))
            .collect();
        entries.sort_by(rank_order);
        entries
    }
}
