/// Splits text into lower-case words made only of ASCII letters.
///
/// Every character outside `a-z`/`A-Z` is a separator. Runs of separators,
/// and separators at either end of the text, never produce empty words.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            current.push(ch.to_ascii_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Returns true when `word` contains only `a-z` and `A-Z`. The empty word is valid.
pub fn is_valid_word(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_alphabetic())
}
