//! Prefix Dictionary Implementation
//!
//! This module provides a case-sensitive word dictionary backed by a prefix
//! tree. It supports insertion, deletion with eager pruning of dead branches,
//! exact lookup, single trailing wildcard search and a collated listing of
//! every stored word.
//!
//! All walks are iterative, so word length never translates into stack depth.

mod collation;
mod error;
mod node;

use tracing::{debug, trace};

pub use collation::Collation;
pub use error::DictionaryError;
use node::TrieNode;

/// Result type for prefix dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// The only wildcard understood by [`PrefixDictionary::query`], valid as the last character.
pub const WILDCARD: char = '*';

/// Trims surrounding whitespace and rejects words that end up empty.
///
/// # Returns
///
/// * `Some(word)` - The trimmed word.
/// * `None` - If the input is empty or whitespace only.
pub fn normalize(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// A word dictionary stored as a prefix tree.
///
/// Key features:
/// * Case-sensitive storage, `Word` and `word` are distinct entries
/// * O(m) insertion, deletion and lookup for a word of m characters
/// * O(1) word count
/// * Dead branches are pruned as soon as a deletion leaves them empty
///
/// The dictionary is a plain owned value. Mutation needs `&mut self`, so
/// concurrent readers are allowed and writers are exclusive.
#[derive(Debug, Clone, Default)]
pub struct PrefixDictionary {
    /// The root node; it never becomes terminal since empty words are rejected
    root: TrieNode,

    /// Number of terminal nodes reachable from the root
    word_count: usize,

    /// Ordering used by [`PrefixDictionary::all_words_sorted`]
    collation: Collation,
}

impl PrefixDictionary {
    /// Creates a new empty dictionary with the default collation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty dictionary that sorts its listing with `collation`.
    pub fn with_collation(collation: Collation) -> Self {
        Self {
            collation,
            ..Self::default()
        }
    }

    /// Returns the collation used for sorted listings.
    pub fn collation(&self) -> Collation {
        self.collation
    }

    /// Adds a word to the dictionary.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to add; surrounding whitespace is trimmed.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the word was new and is now stored.
    /// * `Err(DictionaryError::InvalidWord)` - If the word is empty after trimming.
    /// * `Err(DictionaryError::DuplicateWord)` - If the word was already stored.
    pub fn add(&mut self, word: &str) -> DictionaryResult<()> {
        let word = normalize(word).ok_or(DictionaryError::InvalidWord)?;

        let node = self.root.descend_or_create(word);
        if node.is_terminal {
            trace!(word, "word already stored");
            return Err(DictionaryError::DuplicateWord(word.to_string()));
        }

        node.is_terminal = true;
        self.word_count += 1;
        debug!(word, count = self.word_count, "word added");
        Ok(())
    }

    /// Removes a word from the dictionary and prunes the branch it leaves behind.
    ///
    /// # Returns
    ///
    /// * `Some(word)` - The trimmed word that was removed.
    /// * `None` - If the word is invalid or not stored; nothing changes.
    pub fn delete(&mut self, word: &str) -> Option<String> {
        let word = normalize(word)?;

        let node = self.root.descend_mut(word)?;
        if !node.is_terminal {
            return None;
        }

        node.is_terminal = false;
        self.word_count -= 1;
        self.prune(word);
        debug!(word, count = self.word_count, "word deleted");
        Some(word.to_string())
    }

    /// Detaches the dead tail of the path spelled by `word`.
    ///
    /// The cut is made below the deepest node on the path that is terminal or
    /// branches elsewhere; everything under that edge is dropped at once.
    fn prune(&mut self, word: &str) {
        let mut node = &self.root;
        let mut cut = None;

        for (offset, c) in word.char_indices() {
            if cut.is_none() || node.is_terminal || node.children.len() > 1 {
                cut = Some((offset, c));
            }
            match node.child(c) {
                Some(next) => node = next,
                None => return,
            }
        }

        if !node.is_dead() {
            return;
        }

        if let Some((offset, c)) = cut {
            if let Some(anchor) = self.root.descend_mut(&word[..offset]) {
                anchor.children.remove(&c);
                trace!(prefix = &word[..offset], edge = %c, "pruned dead branch");
            }
        }
    }

    /// Checks whether a word is stored.
    pub fn contains(&self, word: &str) -> bool {
        normalize(word)
            .and_then(|word| self.root.descend(word))
            .map_or(false, |node| node.is_terminal)
    }

    /// Looks up words matching `pattern`.
    ///
    /// * `*` alone returns every stored word.
    /// * `prefix*` returns every stored word starting with `prefix`, the prefix itself included.
    /// * Anything else is an exact lookup; a `*` that is not the last character is literal.
    ///
    /// Results come in traversal order, not sorted.
    pub fn query(&self, pattern: &str) -> Vec<String> {
        let Some(pattern) = normalize(pattern) else {
            return Vec::new();
        };

        match pattern.strip_suffix(WILDCARD) {
            Some(prefix) => self.words_with_prefix(prefix),
            None if self.contains(pattern) => vec![pattern.to_string()],
            None => Vec::new(),
        }
    }

    /// Returns every stored word starting with `prefix`, unsorted.
    ///
    /// The prefix is taken verbatim; an empty prefix yields all words.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        match self.root.descend(prefix) {
            Some(node) => Words::from_node(node, prefix.to_string()).collect(),
            None => Vec::new(),
        }
    }

    /// Returns the number of stored words in O(1).
    pub fn count_words(&self) -> usize {
        self.word_count
    }

    /// Alias of [`PrefixDictionary::count_words`].
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns every stored word, sorted with the dictionary's collation.
    pub fn all_words_sorted(&self) -> Vec<String> {
        let mut words: Vec<String> = self.iter().collect();
        self.collation.sort(&mut words);
        words
    }

    /// Iterates over all stored words in unspecified order.
    pub fn iter(&self) -> Words<'_> {
        Words::from_node(&self.root, String::new())
    }

    /// Number of nodes currently in the tree, the root included.
    ///
    /// An empty dictionary always reports 1.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.word_count = 0;
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixDictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            // Invalid and duplicate words are simply skipped.
            let _ = self.add(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<'a> IntoIterator for &'a PrefixDictionary {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first iterator over the words stored under a node.
#[derive(Debug)]
pub struct Words<'a> {
    stack: Vec<(String, &'a TrieNode)>,
}

impl<'a> Words<'a> {
    fn from_node(node: &'a TrieNode, spelled: String) -> Self {
        Self {
            stack: vec![(spelled, node)],
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((spelled, node)) = self.stack.pop() {
            for (&c, child) in &node.children {
                let mut word = String::with_capacity(spelled.len() + c.len_utf8());
                word.push_str(&spelled);
                word.push(c);
                self.stack.push((word, child));
            }
            if node.is_terminal {
                return Some(spelled);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn set(words: Vec<String>) -> HashSet<String> {
        words.into_iter().collect()
    }

    fn strings(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = PrefixDictionary::new();

        // Test initial state
        assert!(dict.is_empty());
        assert_eq!(dict.node_count(), 1);

        // Test insertion
        assert_eq!(dict.add("hello"), Ok(()));
        assert_eq!(dict.count_words(), 1);
        assert!(!dict.is_empty());

        // Test lookup
        assert!(dict.contains("hello"));
        assert!(!dict.contains("hell"));
        assert!(!dict.contains("helloo"));

        // Test duplicate
        assert_eq!(
            dict.add("hello"),
            Err(DictionaryError::DuplicateWord("hello".to_string()))
        );
        assert_eq!(dict.count_words(), 1);

        // Test removal
        assert_eq!(dict.delete("hello"), Some("hello".to_string()));
        assert!(dict.is_empty());
        assert_eq!(dict.node_count(), 1);
        assert_eq!(dict.delete("hello"), None);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  word\t"), Some("word"));
        assert_eq!(normalize(""), None);
        assert_eq!(normalize(" \n\t "), None);
        assert_eq!(normalize("two words"), Some("two words"));
    }

    #[test]
    fn test_invalid_input_is_a_no_op() {
        let mut dict = PrefixDictionary::new();
        assert_eq!(dict.add(""), Err(DictionaryError::InvalidWord));
        assert_eq!(dict.add("   "), Err(DictionaryError::InvalidWord));
        assert_eq!(dict.delete(" "), None);
        assert!(!dict.contains(""));
        assert!(dict.query("  ").is_empty());
        assert_eq!(dict.count_words(), 0);
        assert_eq!(dict.node_count(), 1);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut dict = PrefixDictionary::new();
        dict.add("  кіт ").unwrap();
        assert!(dict.contains("кіт"));
        assert!(dict.contains("\tкіт"));
        assert_eq!(dict.delete(" кіт  "), Some("кіт".to_string()));
    }

    #[test]
    fn test_case_sensitivity() {
        let mut dict = PrefixDictionary::new();
        dict.add("Word").unwrap();
        dict.add("word").unwrap();
        assert_eq!(dict.count_words(), 2);
        assert!(dict.contains("Word"));
        assert!(!dict.contains("WORD"));
    }

    #[test]
    fn test_concrete_scenario() {
        let dict_words = ["cat", "car", "cart", "dog"];
        let mut dict: PrefixDictionary = dict_words.iter().collect();

        assert_eq!(set(dict.query("ca*")), strings(&["cat", "car", "cart"]));
        assert!(dict.contains("car"));
        assert_eq!(dict.delete("car"), Some("car".to_string()));
        assert_eq!(set(dict.query("ca*")), strings(&["cat", "cart"]));
        assert_eq!(dict.count_words(), 3);
        assert_eq!(dict.all_words_sorted(), vec!["cart", "cat", "dog"]);
    }

    #[test]
    fn test_query_forms() {
        let dict: PrefixDictionary = ["app", "apple", "apply", "banana", "a*b"].iter().collect();

        // Exact lookup
        assert_eq!(dict.query("apple"), vec!["apple".to_string()]);
        assert!(dict.query("appl").is_empty());

        // Full listing
        assert_eq!(set(dict.query("*")), set(dict.all_words_sorted()));

        // Prefix that is itself a word
        assert_eq!(set(dict.query("app*")), strings(&["app", "apple", "apply"]));

        // Prefix that leads nowhere
        assert!(dict.query("cherry*").is_empty());

        // Embedded wildcard is literal
        assert_eq!(dict.query("a*b"), vec!["a*b".to_string()]);
        assert!(dict.query("a*e").is_empty());

        // Only the final star is a wildcard
        assert_eq!(set(dict.query("a**")), strings(&["a*b"]));

        // Surrounding whitespace is ignored
        assert_eq!(set(dict.query("  ban* ")), strings(&["banana"]));
    }

    #[test]
    fn test_pruning_keeps_shared_branches() {
        let mut dict = PrefixDictionary::new();
        dict.add("car").unwrap();
        assert_eq!(dict.node_count(), 4);

        dict.add("cart").unwrap();
        dict.add("cab").unwrap();
        assert_eq!(dict.node_count(), 6);

        // Deleting a word that prefixes another removes no nodes
        dict.delete("car").unwrap();
        assert_eq!(dict.node_count(), 6);
        assert!(dict.contains("cart"));

        // "cart" goes, and with it the now-dead 'r' and 't' nodes
        dict.delete("cart").unwrap();
        assert_eq!(dict.node_count(), 4);
        assert!(dict.contains("cab"));
        assert!(dict.query("car*").is_empty());

        // Pruning stops at a terminal ancestor
        dict.add("cabin").unwrap();
        dict.delete("cabin").unwrap();
        assert_eq!(dict.node_count(), 4);
        assert!(dict.contains("cab"));

        dict.delete("cab").unwrap();
        assert_eq!(dict.node_count(), 1);
    }

    #[test]
    fn test_delete_missing_words() {
        let mut dict: PrefixDictionary = ["слово", "словник"].iter().collect();
        let nodes = dict.node_count();

        assert_eq!(dict.delete("слов"), None);
        assert_eq!(dict.delete("словникові"), None);
        assert_eq!(dict.delete("жаба"), None);
        assert_eq!(dict.count_words(), 2);
        assert_eq!(dict.node_count(), nodes);
    }

    #[test]
    fn test_full_deletion_restores_fresh_state() {
        let words = ["a", "ab", "abc", "abd", "b", "Ґанок", "ґанок", "ґава"];
        let mut dict: PrefixDictionary = words.iter().collect();
        assert_eq!(dict.count_words(), words.len());

        for word in words.iter().rev() {
            assert_eq!(dict.delete(word), Some(word.to_string()));
        }
        assert!(dict.is_empty());
        assert_eq!(dict.node_count(), 1);
        assert!(dict.all_words_sorted().is_empty());

        // Re-insertion behaves like a fresh dictionary
        let fresh: PrefixDictionary = words.iter().collect();
        dict.extend(words.iter());
        assert_eq!(dict.all_words_sorted(), fresh.all_words_sorted());
        assert_eq!(dict.node_count(), fresh.node_count());
    }

    #[test]
    fn test_all_words_sorted_uses_collation() {
        let words = ["ґудзик", "гора", "Zoo", "apple"];
        let ukrainian: PrefixDictionary = words.iter().collect();
        assert_eq!(
            ukrainian.all_words_sorted(),
            vec!["apple", "Zoo", "гора", "ґудзик"]
        );

        let mut codepoint = PrefixDictionary::with_collation(Collation::Codepoint);
        codepoint.extend(words.iter());
        assert_eq!(
            codepoint.all_words_sorted(),
            vec!["Zoo", "apple", "гора", "ґудзик"]
        );
    }

    #[test]
    fn test_clear() {
        let mut dict: PrefixDictionary = ["one", "two"].iter().collect();
        dict.clear();
        assert!(dict.is_empty());
        assert_eq!(dict.node_count(), 1);
        assert!(dict.query("*").is_empty());
    }

    #[test]
    fn test_iter_yields_each_word_once() {
        let dict: PrefixDictionary = ["a", "ab", "abc", "b"].iter().collect();
        let mut words: Vec<String> = (&dict).into_iter().collect();
        words.sort();
        assert_eq!(words, vec!["a", "ab", "abc", "b"]);
    }

    /// Readers only need `&PrefixDictionary`, so they can share one instance across threads.
    #[test]
    fn test_concurrent_readers() {
        const THREAD_COUNT: usize = 8;
        const WORDS: usize = 200;

        let dict: PrefixDictionary = (0..WORDS).map(|i| format!("key_{i}")).collect();
        let dict = Arc::new(dict);

        let handles: Vec<_> = (0..THREAD_COUNT)
            .map(|thread_id| {
                let dict = Arc::clone(&dict);
                thread::spawn(move || {
                    for i in (thread_id..WORDS).step_by(THREAD_COUNT) {
                        assert!(dict.contains(&format!("key_{i}")));
                    }
                    dict.query("key_1*").len()
                })
            })
            .collect();

        for handle in handles {
            // key_1, key_10..key_19, key_100..key_199
            assert_eq!(handle.join().unwrap(), 111);
        }
        assert_eq!(dict.count_words(), WORDS);
    }
}
