//! Depth-first traversal via native recursion
//!
//! The current partial candidate lives in a scratch `String` threaded through
//! the recursion; backtracking is a push before the recursive call and a pop
//! after it. The empty string is tested before any extension. Worst-case
//! native stack depth equals `max_len`.

use crate::oracle::{digests_equal, DigestOracle};
use crate::types::{SearchConfig, SearchOutcome};

pub(crate) fn search(
    target: &[u8],
    config: &SearchConfig,
    oracle: &dyn DigestOracle,
) -> SearchOutcome {
    let mut scratch = String::new();
    let mut tested = 0u64;
    match descend(target, config, oracle, &mut scratch, 0, &mut tested) {
        Some(candidate) => SearchOutcome::found(candidate, tested),
        None => SearchOutcome::exhausted(tested),
    }
}

fn descend(
    target: &[u8],
    config: &SearchConfig,
    oracle: &dyn DigestOracle,
    scratch: &mut String,
    depth: usize,
    tested: &mut u64,
) -> Option<String> {
    *tested += 1;
    if digests_equal(&oracle.digest(scratch), target) {
        return Some(scratch.clone());
    }
    if depth == config.max_len {
        return None;
    }
    for &c in config.alphabet.chars() {
        scratch.push(c);
        let hit = descend(target, config, oracle, scratch, depth + 1, tested);
        scratch.pop();
        if hit.is_some() {
            return hit;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::testing::RecordingOracle;
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
    fn test_empty_string_is_tested_first() {
        let config = SearchConfig::new(Alphabet::demo(), 3);
        let oracle = RecordingOracle::new();
        let outcome = search(b"", &config, &oracle);
        assert_eq!(outcome.candidate.as_deref(), Some(""));
        assert_eq!(outcome.digests_computed, 1);
    }

    #[test]
    fn test_stops_at_first_match() {
        let config = SearchConfig::new(Alphabet::new("ab".chars()).unwrap(), 3);
        let oracle = RecordingOracle::new();
        let outcome = search(b"ab", &config, &oracle);
        assert_eq!(outcome.candidate.as_deref(), Some("ab"));
        // "", a, aa, aaa, aab, ab
        assert_eq!(outcome.digests_computed, 6);
    }
}
