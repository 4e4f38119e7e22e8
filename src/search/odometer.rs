//! Fixed-buffer odometer traversal
//!
//! Enumerates the space like a mechanical counter: a character buffer of
//! exactly `max_len` slots and a parallel next-index array, both allocated
//! once per call and owned exclusively by that call. Writing a character
//! extends the candidate; a position whose counter has run through the whole
//! alphabet resets and carries into the position before it. The cursor
//! retreating past position 0 means the space is exhausted.
//!
//! Visits the same candidates in the same order as the recursive and stack
//! strategies, with one deliberate divergence: the zero-length candidate is
//! never tested, because every test here follows a character write. A target
//! equal to the digest of the empty string is therefore reported as exhausted
//! by this strategy while the other two return the empty string.

use crate::oracle::{digests_equal, DigestOracle};
use crate::types::{SearchConfig, SearchOutcome};

pub(crate) fn search(
    target: &[u8],
    config: &SearchConfig,
    oracle: &dyn DigestOracle,
) -> SearchOutcome {
    let chars = config.alphabet.chars();
    let max_len = config.max_len;

    let mut buf: Vec<char> = vec!['\0'; max_len];
    let mut next: Vec<usize> = vec![0; max_len];
    let mut tested = 0u64;

    let mut pos: isize = 0;
    while pos >= 0 {
        let p = pos as usize;
        if p == max_len {
            pos -= 1;
            continue;
        }
        if next[p] == chars.len() {
            // Carry: this position has run through the whole alphabet
            next[p] = 0;
            pos -= 1;
            continue;
        }
        buf[p] = chars[next[p]];
        next[p] += 1;
        pos += 1;

        tested += 1;
        let candidate: String = buf[..p + 1].iter().collect();
        if digests_equal(&oracle.digest(&candidate), target) {
            return SearchOutcome::found(candidate, tested);
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
    fn test_visits_in_lexicographic_order_without_empty() {
        let config = SearchConfig::new(Alphabet::new("ab".chars()).unwrap(), 2);
        let oracle = RecordingOracle::new();
        let outcome = search(b"@absent@", &config, &oracle);
        assert!(!outcome.is_found());
        assert_eq!(
            oracle.seen.into_inner(),
            vec!["a", "aa", "ab", "b", "ba", "bb"]
        );
    }

    #[test]
    fn test_last_alphabet_character_is_enumerated() {
        // The carry condition fires only after the final character has been
        // written, so candidates using it are not skipped.
        let config = SearchConfig::new(Alphabet::demo(), 2);
        let oracle = RecordingOracle::new();
        let outcome = search(b"gg", &config, &oracle);
        assert_eq!(outcome.candidate.as_deref(), Some("gg"));
    }

    #[test]
    fn test_never_tests_empty_candidate() {
        let config = SearchConfig::default();
        let outcome = search(&[0], &config, &LengthOracle);
        assert!(!outcome.is_found());
    }

    #[test]
    fn test_zero_max_len_exhausts_immediately() {
        let config = SearchConfig::new(Alphabet::demo(), 0);
        let outcome = search(&[0], &config, &LengthOracle);
        assert_eq!(outcome, SearchOutcome::exhausted(0));
    }

    #[test]
    fn test_collision_returns_lexicographically_first() {
        let config = SearchConfig::default();
        let outcome = search(&[3], &config, &LengthOracle);
        assert_eq!(outcome.candidate.as_deref(), Some("aaa"));
    }
}
