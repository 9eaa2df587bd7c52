use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::Result;

/// The sorted list of valid words. Ordering is established once at
/// construction; the binary-search membership and prefix tests below
/// depend on it.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<String>,
}

impl Lexicon {
    /// Normalizes each entry (trim, lowercase), drops anything shorter than
    /// two characters, and sorts. Duplicates are allowed; equal runs do not
    /// disturb the binary search.
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| w.chars().count() >= 2)
            .collect();
        words.sort_unstable();
        Self { words }
    }

    /// Reads a line-oriented word list, one word per line.
    pub fn from_reader(reader: impl BufRead) -> std::io::Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            words.push(line?);
        }
        Ok(Self::new(words))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::from_reader(BufReader::new(file))?)
    }

    /// Index of the first entry lexicographically >= `word`.
    fn insertion_point(&self, word: &str) -> usize {
        self.words.partition_point(|w| w.as_str() < word)
    }

    /// Exact membership test, O(log n) in lexicon size.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .get(self.insertion_point(word))
            .map_or(false, |w| w == word)
    }

    /// True if at least one entry starts with `word`. The solver uses this
    /// to cut off branches that can no longer reach any word.
    pub fn is_prefix(&self, word: &str) -> bool {
        self.words
            .get(self.insertion_point(word))
            .map_or(false, |w| w.starts_with(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::new(words.iter().map(|w| w.to_string()))
    }

    #[test]
    fn test_normalizes_and_sorts() {
        let lex = lexicon(&["  Mop \n", "CAPE", "a", "ape"]);
        assert_eq!(lex.words(), &["ape", "cape", "mop"]);
    }

    #[test]
    fn test_drops_short_entries() {
        let lex = lexicon(&["a", "i", "at"]);
        assert_eq!(lex.len(), 1);
        assert!(!lex.contains("a"));
    }

    #[test]
    fn test_contains() {
        let lex = lexicon(&["ape", "cape", "mop", "opp", "pea"]);
        assert!(lex.contains("cape"));
        assert!(lex.contains("pea"));
        assert!(!lex.contains("cap"));
        assert!(!lex.contains("zebra"));
    }

    #[test]
    fn test_is_prefix() {
        let lex = lexicon(&["ape", "cape", "mop", "opp", "pea"]);
        assert!(lex.is_prefix("ca"));
        assert!(lex.is_prefix("cape"));
        assert!(lex.is_prefix("op"));
        assert!(!lex.is_prefix("cb"));
    }

    #[test]
    fn test_probe_past_the_end() {
        // Insertion point lands one past the last entry; both tests must
        // report a miss rather than index out of range.
        let lex = lexicon(&["ape", "cape"]);
        assert!(!lex.contains("zz"));
        assert!(!lex.is_prefix("zz"));
    }

    #[test]
    fn test_from_reader() {
        let input = Cursor::new("Cape\nape\nx\n  mop  \n");
        let lex = Lexicon::from_reader(input).unwrap();
        assert_eq!(lex.words(), &["ape", "cape", "mop"]);
    }

    #[test]
    fn test_duplicates_are_harmless() {
        let lex = lexicon(&["ape", "ape", "cape"]);
        assert!(lex.contains("ape"));
        assert!(lex.is_prefix("ap"));
    }
}
