//! Exhaustive search over bounded string spaces
//!
//! Three interchangeable traversals of the same space: every string over the
//! configured alphabet of length 0..=max_len, visited at most once, in
//! lexicographic order by depth-first extension. The first candidate whose
//! digest equals the target wins; running out of candidates is a valid
//! terminal state, not an error.
//!
//! The strategies differ only in machinery, kept as selectable variants for
//! benchmarking and teaching value:
//! - [`Strategy::Recursive`] suspends on the native call stack
//! - [`Strategy::Stack`] replaces recursion with an explicit stack of pending
//!   candidates
//! - [`Strategy::Odometer`] reuses a fixed scratch buffer, allocating nothing
//!   per candidate (and, unlike the other two, never tests the zero-length
//!   candidate - see the module docs of [`odometer`])

mod odometer;
mod recursive;
mod stack;

use crate::oracle::DigestOracle;
use crate::types::{SearchConfig, SearchOutcome};
use std::str::FromStr;

/// Traversal strategy for the exhaustive search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Depth-first via native recursion
    Recursive,
    /// Depth-first via an explicit stack of pending candidates
    Stack,
    /// Fixed-buffer odometer with carry propagation
    Odometer,
}

impl Strategy {
    /// All strategies, for conformance loops
    pub const ALL: [Strategy; 3] = [Strategy::Recursive, Strategy::Stack, Strategy::Odometer];

    /// Search the space for the first candidate whose digest equals `target`
    pub fn search(
        &self,
        target: &[u8],
        config: &SearchConfig,
        oracle: &dyn DigestOracle,
    ) -> SearchOutcome {
        tracing::debug!(
            strategy = %self,
            digest = oracle.name(),
            space = config.space_size(),
            "starting exhaustive search"
        );

        let outcome = match self {
            Strategy::Recursive => recursive::search(target, config, oracle),
            Strategy::Stack => stack::search(target, config, oracle),
            Strategy::Odometer => odometer::search(target, config, oracle),
        };

        match &outcome.candidate {
            Some(candidate) => tracing::debug!(
                strategy = %self,
                candidate = %candidate,
                digests = outcome.digests_computed,
                "match found"
            ),
            None => tracing::debug!(
                strategy = %self,
                digests = outcome.digests_computed,
                "space exhausted without a match"
            ),
        }

        outcome
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Recursive => write!(f, "recursive"),
            Strategy::Stack => write!(f, "stack"),
            Strategy::Odometer => write!(f, "odometer"),
        }
    }
}

impl FromStr for Strategy {
    type Err = crate::error::BruteForgeError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s {
            "recursive" => Ok(Strategy::Recursive),
            "stack" => Ok(Strategy::Stack),
            "odometer" => Ok(Strategy::Odometer),
            other => Err(crate::error::BruteForgeError::config(format!(
                "unknown strategy '{}' (expected recursive, stack or odometer)",
                other
            ))),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_round_trip_names() {
        for strategy in Strategy::ALL {
            let parsed: Strategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
    }

    #[test]
    fn test_unknown_strategy_name() {
        assert!("bfs".parse::<Strategy>().is_err());
    }
}
