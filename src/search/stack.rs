//! Depth-first traversal via an explicit stack
//!
//! Same visitation order as the recursive strategy, without native recursion.
//! Extensions are pushed in reverse alphabet order so that popping yields
//! forward alphabet order; getting this reversal wrong would silently change
//! which candidate wins when several collide on the target digest.

use crate::oracle::{digests_equal, DigestOracle};
use crate::types::{SearchConfig, SearchOutcome};

pub(crate) fn search(
    target: &[u8],
    config: &SearchConfig,
    oracle: &dyn DigestOracle,
) -> SearchOutcome {
    let mut tested = 0u64;
    // Pending candidates paired with their length in characters
    let mut stack: Vec<(String, usize)> = vec![(String::new(), 0)];

    while let Some((candidate, depth)) = stack.pop() {
        tested += 1;
        if digests_equal(&oracle.digest(&candidate), target) {
            return SearchOutcome::found(candidate, tested);
        }
        if depth < config.max_len {
            for &c in config.alphabet.chars().iter().rev() {
                let mut extended = candidate.clone();
                extended.push(c);
                stack.push((extended, depth + 1));
            }
        }
    }

    SearchOutcome::exhausted(tested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::testing::{LengthOracle, RecordingOracle};
    use crate::types::Alphabet;

    #[test]
    fn test_visits_in_lexicographic_order() {
        let config = SearchConfig::new(Alphabet::new("ab".chars()).unwrap(), 2);
        let oracle = RecordingOracle::new();
        let outcome = search(b"@absent@", &config, &oracle);
        assert!(!outcome.is_found());
        assert_eq!(
            oracle.seen.into_inner(),
            vec!["", "a", "aa", "ab", "b", "ba", "bb"]
        );
    }

    #[test]
    fn test_push_order_yields_lexicographically_first_match() {
        // All two-character strings collide under the length oracle; the
        // reversal at push time is what makes "aa" the winner.
        let config = SearchConfig::default();
        let outcome = search(&[2], &config, &LengthOracle);
        assert_eq!(outcome.candidate.as_deref(), Some("aa"));
    }

    #[test]
    fn test_empty_string_is_tested_first() {
        let config = SearchConfig::default();
        let outcome = search(&[0], &config, &LengthOracle);
        assert_eq!(outcome.candidate.as_deref(), Some(""));
        assert_eq!(outcome.digests_computed, 1);
    }
}
