//! Error types for the prefix dictionary.
//!
//! Every failure here is expected and recoverable; callers decide whether it
//! is worth showing to anyone.

/// Errors that can occur when adding words to a [`super::PrefixDictionary`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    /// The word was empty or consisted only of whitespace.
    #[error("Invalid word")]
    InvalidWord,

    /// The word is already stored.
    #[error("The word '{0}' already exists")]
    DuplicateWord(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DictionaryError::InvalidWord;
        assert_eq!(err.to_string(), "Invalid word");

        let err = DictionaryError::DuplicateWord("слово".to_string());
        assert_eq!(err.to_string(), "The word 'слово' already exists");
    }
}
