//! Best-path selection over parsed route candidates.
//!
//! Many candidates can advertise the same address block with different
//! paths. Selection keeps exactly one per block: the candidate with the
//! strictly smallest path length, ties going to whichever arrived first.
//!
//! Grouping is a real group-by on the block rather than a fold over
//! adjacent lines, so candidates for one block may sit anywhere in the
//! input. Block order and within-block order both follow first appearance,
//! which keeps installs and logs aligned with the data set.

use std::collections::HashMap;

use tracing::debug;

use super::types::{RouteCandidate, RoutePrefix};

/// Group candidates by block, preserving first-seen block order.
#[must_use]
pub fn group_by_block(candidates: Vec<RouteCandidate>) -> Vec<Vec<RouteCandidate>> {
    let mut groups: Vec<Vec<RouteCandidate>> = Vec::new();
    let mut index: HashMap<RoutePrefix, usize> = HashMap::new();

    for candidate in candidates {
        match index.get(&candidate.prefix) {
            Some(&slot) => groups[slot].push(candidate),
            None => {
                index.insert(candidate.prefix, groups.len());
                groups.push(vec![candidate]);
            }
        }
    }
    groups
}

/// Pick the winner of one block's candidates.
///
/// A strictly smaller path length replaces the incumbent; an equal one
/// does not, so the earliest of tied candidates survives. Returns `None`
/// only for an empty group.
#[must_use]
pub fn reduce_group(group: Vec<RouteCandidate>) -> Option<RouteCandidate> {
    let mut candidates = group.into_iter();
    let mut winner = candidates.next()?;

    for candidate in candidates {
        if candidate.path_len < winner.path_len {
            winner = candidate;
        }
    }
    Some(winner)
}

/// Reduce candidates to one winner per block, in first-seen block order.
#[must_use]
pub fn select_best_routes(candidates: Vec<RouteCandidate>) -> Vec<RouteCandidate> {
    let groups = group_by_block(candidates);
    let mut winners = Vec::with_capacity(groups.len());

    for group in groups {
        let contenders = group.len();
        if let Some(winner) = reduce_group(group) {
            if contenders > 1 {
                debug!(
                    block = %winner.prefix,
                    contenders,
                    path_len = winner.path_len,
                    next_hop = %winner.next_hop,
                    "Selected best path for block"
                );
            }
            winners.push(winner);
        }
    }
    winners
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use std::sync::Arc;

    fn candidate(prefix: &str, sigbits: u8, path_len: usize, next_hop: &str) -> RouteCandidate {
        RouteCandidate {
            prefix: RoutePrefix::new(prefix.parse::<Ipv4Addr>().unwrap(), sigbits),
            path_len,
            next_hop: Arc::from(next_hop),
        }
    }

    fn hops(winners: &[RouteCandidate]) -> Vec<&str> {
        winners.iter().map(|w| w.next_hop.as_ref()).collect()
    }

    #[test]
    fn test_smallest_path_length_wins() {
        let winners = select_best_routes(vec![
            candidate("192.168.0.0", 16, 3, "A"),
            candidate("192.168.0.0", 16, 1, "B"),
            candidate("192.168.0.0", 16, 2, "C"),
        ]);

        assert_eq!(hops(&winners), vec!["B"]);
        assert_eq!(winners[0].path_len, 1);
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        let winners = select_best_routes(vec![
            candidate("10.0.0.0", 8, 2, "first"),
            candidate("10.0.0.0", 8, 2, "second"),
        ]);

        assert_eq!(hops(&winners), vec!["first"]);
    }

    #[test]
    fn test_single_candidate_survives() {
        let winners = select_best_routes(vec![candidate("10.0.0.0", 8, 5, "only")]);
        assert_eq!(hops(&winners), vec!["only"]);
    }

    #[test]
    fn test_empty_input_yields_no_winners() {
        assert!(select_best_routes(Vec::new()).is_empty());
    }

    #[test]
    fn test_non_contiguous_candidates_still_compete() {
        // The better route for 10/8 arrives after an unrelated block.
        let winners = select_best_routes(vec![
            candidate("10.0.0.0", 8, 3, "A"),
            candidate("11.0.0.0", 8, 1, "X"),
            candidate("10.0.0.0", 8, 1, "B"),
        ]);

        assert_eq!(hops(&winners), vec!["B", "X"]);
    }

    #[test]
    fn test_same_address_different_bit_counts_are_distinct_blocks() {
        let winners = select_best_routes(vec![
            candidate("10.0.0.0", 8, 9, "coarse"),
            candidate("10.0.0.0", 16, 1, "fine"),
        ]);

        assert_eq!(hops(&winners), vec!["coarse", "fine"]);
    }

    #[test]
    fn test_block_order_follows_first_appearance() {
        let winners = select_best_routes(vec![
            candidate("30.0.0.0", 8, 1, "C"),
            candidate("10.0.0.0", 8, 1, "A"),
            candidate("20.0.0.0", 8, 1, "B"),
        ]);

        assert_eq!(hops(&winners), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_group_by_block_preserves_orders() {
        let groups = group_by_block(vec![
            candidate("10.0.0.0", 8, 1, "a1"),
            candidate("20.0.0.0", 8, 1, "b1"),
            candidate("10.0.0.0", 8, 2, "a2"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(hops(&groups[0]), vec!["a1", "a2"]);
        assert_eq!(hops(&groups[1]), vec!["b1"]);
    }

    #[test]
    fn test_reduce_group_empty_is_none() {
        assert_eq!(reduce_group(Vec::new()), None);
    }

    #[test]
    fn test_zero_length_path_beats_everything() {
        let winners = select_best_routes(vec![
            candidate("10.0.0.0", 8, 1, "short"),
            candidate("10.0.0.0", 8, 0, "local"),
        ]);

        assert_eq!(hops(&winners), vec!["local"]);
    }
}
