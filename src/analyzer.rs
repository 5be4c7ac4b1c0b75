use log::debug;

use crate::error::AnalyzerError;
use crate::index::{FrequencyIndex, WordCount};
use crate::tokenizer::{is_valid_word, tokenize};

/// Word frequency queries over a text.
///
/// Words are maximal runs of ASCII letters, compared case-insensitively.
/// Every other character separates words.
pub trait WordFrequencyAnalyzer {
    /// Highest frequency of any word in `text`, or 0 if it has no words.
    fn highest_frequency(&self, text: &str) -> usize;

    /// Number of times `word` occurs in `text`.
    ///
    /// `word` is matched exactly against the lower-cased words of the text,
    /// so only a lower-case `word` can produce a non-zero count.
    fn frequency_for_word(&self, text: &str, word: &str) -> Result<usize, AnalyzerError>;

    /// The `n` most frequent words in `text`, by descending frequency and then
    /// ascending word. `n` must be between 1 and the number of distinct words.
    fn most_frequent_n_words(&self, text: &str, n: i64) -> Result<Vec<WordCount>, AnalyzerError>;
}

/// Stateless analyzer. Every call tokenizes and counts from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAnalyzer;

impl TextAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl WordFrequencyAnalyzer for TextAnalyzer {
    fn highest_frequency(&self, text: &str) -> usize {
        let index = FrequencyIndex::from_tokens(tokenize(text));
        let highest = index.max_frequency();
        debug!("highest frequency {} over {} distinct words", highest, index.len());
        highest
    }

    fn frequency_for_word(&self, text: &str, word: &str) -> Result<usize, AnalyzerError> {
        if !is_valid_word(word) {
            return Err(AnalyzerError::InvalidWord(word.to_string()));
        }

        let frequency = tokenize(text).iter().filter(|token| *token == word).count();
        debug!("word '{}' occurs {} times", word, frequency);
        Ok(frequency)
    }

    fn most_frequent_n_words(&self, text: &str, n: i64) -> Result<Vec<WordCount>, AnalyzerError> {
        if n < 1 {
            return Err(AnalyzerError::NonPositiveCount(n));
        }

        let index = FrequencyIndex::from_tokens(tokenize(text));
        let unique = index.len();
        let take = match usize::try_from(n) {
            Ok(take) if take <= unique => take,
            _ => return Err(AnalyzerError::CountTooHigh { requested: n, unique }),
        };

        let mut ranked = index.ranked();
        ranked.truncate(take);
        debug!("top {} of {} distinct words", take, unique);
        Ok(ranked)
    }
}

pub fn highest_frequency(text: &str) -> usize {
    TextAnalyzer.highest_frequency(text)
}

pub fn frequency_for_word(text: &str, word: &str) -> Result<usize, AnalyzerError> {
    TextAnalyzer.frequency_for_word(text, word)
}

pub fn most_frequent_n_words(text: &str, n: i64) -> Result<Vec<WordCount>, AnalyzerError> {
    TextAnalyzer.most_frequent_n_words(text, n)
}
