pub mod analyzer;
pub mod error;
pub mod format;
pub mod index;
pub mod tokenizer;

pub use analyzer::{
    frequency_for_word,
    highest_frequency,
    most_frequent_n_words,
    TextAnalyzer,
    WordFrequencyAnalyzer,
};
pub use error::{AnalyzerError, ErrorKind};
pub use format::format_number;
pub use index::{FrequencyIndex, WordCount, WordFrequency};
pub use tokenizer::{is_valid_word, tokenize};
