//! Lexicographic ordering.

/// Sort `words` ascending by code point.
///
/// Runs before the filter: sorting makes equal words adjacent, which is
/// what makes adjacency-based duplicate detection equivalent to global
/// deduplication.
pub fn sort_words(words: &mut [String]) {
    words.sort_unstable();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_by_code_point() {
        let mut words = vec![
            "cherry".to_string(),
            "apple".to_string(),
            "Banana".to_string(),
        ];
        sort_words(&mut words);
        // Uppercase code points sort before lowercase.
        assert_eq!(words, vec!["Banana", "apple", "cherry"]);
    }

    #[test]
    fn test_duplicates_become_adjacent() {
        let mut words = vec![
            "apple".to_string(),
            "cat".to_string(),
            "apple".to_string(),
        ];
        sort_words(&mut words);
        assert_eq!(words, vec!["apple", "apple", "cat"]);
    }
}
