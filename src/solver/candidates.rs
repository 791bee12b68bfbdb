//! The live set of words still consistent with the evidence

use crate::core::Word;

/// Words of one length that every piece of evidence so far agrees with
///
/// Members keep the order of the source list, so the most common words come
/// first. The store only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateStore {
    length: usize,
    words: Vec<Word>,
}

impl CandidateStore {
    /// Build a store from a word source, keeping only words of `length`
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    /// use hangman_solver::solver::CandidateStore;
    ///
    /// let source = vec![
    ///     Word::new("the", 1).unwrap(),
    ///     Word::new("of", 2).unwrap(),
    ///     Word::new("and", 3).unwrap(),
    /// ];
    /// let store = CandidateStore::new(source, 3);
    /// assert_eq!(store.len(), 2);
    /// ```
    pub fn new(source: impl IntoIterator<Item = Word>, length: usize) -> Self {
        let words = source
            .into_iter()
            .filter(|word| word.len() == length)
            .collect();

        Self { length, words }
    }

    /// Word length shared by every member
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Remove every word for which `predicate` holds
    ///
    /// Returns the number of words removed.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Word) -> bool,
    {
        let before = self.words.len();
        self.words.retain(|word| !predicate(word));
        before - self.words.len()
    }

    /// The first `limit` members, or all of them when `limit` is `None`
    #[must_use]
    pub fn snapshot(&self, limit: Option<usize>) -> &[Word] {
        let end = limit.map_or(self.words.len(), |n| n.min(self.words.len()));
        &self.words[..end]
    }
}

impl<'a> IntoIterator for &'a CandidateStore {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn store() -> CandidateStore {
        CandidateStore::new(
            words_from_slice(&["cat", "a", "car", "tiger", "can", "ox"]),
            3,
        )
    }

    #[test]
    fn new_filters_by_length_and_keeps_order() {
        let store = store();
        let texts: Vec<&str> = store.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "car", "can"]);
        assert_eq!(store.word_length(), 3);
    }

    #[test]
    fn new_keeps_source_ranks() {
        let ranks: Vec<u32> = store().iter().map(Word::rank).collect();
        assert_eq!(ranks, vec![1, 3, 5]);
    }

    #[test]
    fn remove_where_counts_removed() {
        let mut store = store();
        let removed = store.remove_where(|w| w.has_letter(b'r'));
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 2);

        let removed = store.remove_where(|w| w.has_letter(b'z'));
        assert_eq!(removed, 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_everything_leaves_empty_store() {
        let mut store = store();
        store.remove_where(|_| true);
        assert!(store.is_empty());
        assert!(store.snapshot(None).is_empty());
    }

    #[test]
    fn snapshot_is_bounded() {
        let store = store();
        assert_eq!(store.snapshot(Some(2)).len(), 2);
        assert_eq!(store.snapshot(Some(10)).len(), 3);
        assert_eq!(store.snapshot(None).len(), 3);
        assert_eq!(store.snapshot(Some(0)).len(), 0);
    }
}
