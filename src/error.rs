use thiserror::Error;

/// The two kinds of caller-input failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidWord,
    InvalidCount,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerError {
    #[error("Input word '{0}' is invalid. Can only contain alphabetical characters a-z, A-Z.")]
    InvalidWord(String),

    #[error("Input integer should be positive.")]
    NonPositiveCount(i64),

    #[error(
        "Input integer {requested} is too high. Input text contains {unique} unique {}.",
        word_noun(.unique)
    )]
    CountTooHigh { requested: i64, unique: usize },
}

impl AnalyzerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalyzerError::InvalidWord(_) => ErrorKind::InvalidWord,
            AnalyzerError::NonPositiveCount(_) | AnalyzerError::CountTooHigh { .. } => {
                ErrorKind::InvalidCount
            }
        }
    }
}

fn word_noun(count: &usize) -> &'static str {
    if *count > 1 {
        "words"
    } else {
        "word"
    }
}
