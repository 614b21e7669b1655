//! Stride-2 trie for IPv4 longest-prefix matching
//!
//! This module provides a fixed-stride multi-bit trie that consumes two
//! address bits per level. Compared to a unibit trie it halves the worst-case
//! descent depth (16 levels instead of 32) at the cost of four child slots
//! per node instead of two.
//!
//! ## Key Benefits
//!
//! - **O(W/2) Lookup**: Resolution cost is bounded by address width, not table size
//! - **Allocation on Demand**: Child nodes exist only along inserted prefixes
//! - **Shared Next Hops**: Hop tokens are `Arc<str>`, cloned by reference count
//!
//! ## Implementation Details
//!
//! Each level consumes one 2-bit branch value, most significant bits first.
//! A prefix whose significant-bit count is even terminates exactly on a node
//! and stores its next hop there. A prefix with an odd count cannot land on
//! a node boundary: its last real bit is padded with one filler bit, and the
//! next hop is written into both children that agree on the real bit and
//! differ only in the filler. Lookups never know the difference: whichever
//! filler bit the queried address carries, it reaches a node holding the hop.
//!
//! Matching is best-effort along the descent: every node visited (the root
//! included, which carries the zero-length prefix) may update the current
//! best next hop, and the deepest one seen wins. Running off the tree simply
//! returns the best match accumulated so far.
//!
//! There is no path compression, level skipping, or leaf pushing; every
//! inserted prefix materializes its full descent. That keeps the structure
//! small enough to verify by hand and is adequate for snapshot-sized tables.

use std::sync::Arc;

/// Address bits consumed per trie level.
const STRIDE: u32 = 2;
/// Child slots per node, one per 2-bit branch value.
const FANOUT: usize = 1 << STRIDE;
/// Levels needed to consume a full 32-bit address.
const MAX_DEPTH: u32 = 32 / STRIDE;

/// 2-bit branch value for `level`; level 0 holds the two most significant bits.
#[inline]
fn branch_index(bits: u32, level: u32) -> usize {
    ((bits >> (30 - STRIDE * level)) & 0b11) as usize
}

/// Node in the stride-2 trie
///
/// Four owned child slots, one per branch value, plus an optional next hop.
/// A node with a next hop marks the end of an inserted prefix; interior
/// nodes on the way there carry `None`.
#[derive(Default)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; FANOUT],
    next_hop: Option<Arc<str>>,
}

/// Fixed-stride trie mapping IPv4 prefixes to next-hop tokens
///
/// Insertion walks one 2-bit branch per level, creating nodes lazily.
/// Lookup walks the same branches for the queried address and returns the
/// deepest next hop encountered, which is exactly the longest prefix that
/// covers the address.
pub struct StrideTrie {
    root: TrieNode,
}

impl Default for StrideTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl StrideTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
        }
    }

    /// Install `next_hop` for the block `prefix`/`sigbits`.
    ///
    /// Only the top `sigbits` bits of `prefix` are consumed; anything below
    /// the boundary is ignored. Inserting the same block twice overwrites
    /// the stored hop. `sigbits == 0` installs the default route on the
    /// root itself.
    pub fn insert(&mut self, prefix: u32, sigbits: u8, next_hop: Arc<str>) {
        debug_assert!(sigbits <= 32, "significant-bit count out of range: {sigbits}");

        let mut node = &mut self.root;
        for level in 0..u32::from(sigbits) / STRIDE {
            let index = branch_index(prefix, level);
            node = node.children[index].get_or_insert_with(Default::default);
        }

        if sigbits % 2 == 1 {
            // One real bit is left over past the last full level. A 2-bit
            // branch cannot express a 1-bit boundary, so the hop goes into
            // both children that share the real bit and differ only in the
            // synthesized filler bit below it.
            let index = ((prefix >> (31 - u32::from(sigbits))) & 0b11) as usize;
            for slot in [index, index ^ 1] {
                let child = node.children[slot].get_or_insert_with(Default::default);
                child.next_hop = Some(Arc::clone(&next_hop));
            }
        } else {
            node.next_hop = Some(next_hop);
        }
    }

    /// Resolve `addr` to the next hop of the longest matching prefix.
    ///
    /// Returns `None` only when no inserted block covers the address at all.
    #[must_use]
    pub fn lookup(&self, addr: u32) -> Option<&str> {
        let mut node = &self.root;
        let mut best = node.next_hop.as_deref();

        for level in 0..MAX_DEPTH {
            let index = branch_index(addr, level);
            match node.children[index].as_deref() {
                Some(child) => {
                    node = child;
                    if let Some(hop) = node.next_hop.as_deref() {
                        best = Some(hop);
                    }
                }
                None => return best,
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn ip(text: &str) -> u32 {
        text.parse::<Ipv4Addr>().map(u32::from).unwrap()
    }

    fn hop(text: &str) -> Arc<str> {
        Arc::from(text)
    }

    #[test]
    fn test_even_prefix_matches_its_block() {
        let mut trie = StrideTrie::new();
        trie.insert(ip("10.1.0.0"), 16, hop("9.9.9.9"));

        assert_eq!(trie.lookup(ip("10.1.0.0")), Some("9.9.9.9"));
        assert_eq!(trie.lookup(ip("10.1.200.13")), Some("9.9.9.9"));
        assert_eq!(trie.lookup(ip("10.1.255.255")), Some("9.9.9.9"));
        assert_eq!(trie.lookup(ip("10.2.0.0")), None);
    }

    #[test]
    fn test_odd_prefix_covers_both_filler_bits() {
        let mut trie = StrideTrie::new();
        trie.insert(ip("192.168.2.0"), 23, hop("172.16.0.1"));

        // The /23 block spans 192.168.2.0 through 192.168.3.255; the bit
        // just past the boundary must not matter.
        assert_eq!(trie.lookup(ip("192.168.2.1")), Some("172.16.0.1"));
        assert_eq!(trie.lookup(ip("192.168.3.7")), Some("172.16.0.1"));
        assert_eq!(trie.lookup(ip("192.168.4.1")), None);
        assert_eq!(trie.lookup(ip("192.168.1.255")), None);
    }

    #[test]
    fn test_deeper_prefix_wins_over_shallower() {
        let mut trie = StrideTrie::new();
        trie.insert(ip("10.0.0.0"), 8, hop("1.1.1.1"));
        trie.insert(ip("10.1.2.0"), 24, hop("2.2.2.2"));

        assert_eq!(trie.lookup(ip("10.1.2.3")), Some("2.2.2.2"));
        assert_eq!(trie.lookup(ip("10.9.9.9")), Some("1.1.1.1"));
        assert_eq!(trie.lookup(ip("11.0.0.1")), None);
    }

    #[test]
    fn test_zero_sigbits_is_default_route() {
        let mut trie = StrideTrie::new();
        trie.insert(0, 0, hop("3.3.3.3"));

        assert_eq!(trie.lookup(ip("0.0.0.0")), Some("3.3.3.3"));
        assert_eq!(trie.lookup(ip("255.255.255.255")), Some("3.3.3.3"));
        assert_eq!(trie.lookup(ip("8.8.8.8")), Some("3.3.3.3"));
    }

    #[test]
    fn test_default_route_loses_to_any_real_match() {
        let mut trie = StrideTrie::new();
        trie.insert(0, 0, hop("3.3.3.3"));
        trie.insert(ip("8.0.0.0"), 5, hop("4.4.4.4"));

        assert_eq!(trie.lookup(ip("8.8.8.8")), Some("4.4.4.4"));
        assert_eq!(trie.lookup(ip("200.0.0.1")), Some("3.3.3.3"));
    }

    #[test]
    fn test_full_length_prefix_matches_single_address() {
        let mut trie = StrideTrie::new();
        trie.insert(ip("203.0.113.77"), 32, hop("5.5.5.5"));

        assert_eq!(trie.lookup(ip("203.0.113.77")), Some("5.5.5.5"));
        assert_eq!(trie.lookup(ip("203.0.113.76")), None);
        assert_eq!(trie.lookup(ip("203.0.113.78")), None);
    }

    #[test]
    fn test_reinsert_overwrites_previous_hop() {
        let mut trie = StrideTrie::new();
        trie.insert(ip("172.16.0.0"), 12, hop("6.6.6.6"));
        trie.insert(ip("172.16.0.0"), 12, hop("7.7.7.7"));

        assert_eq!(trie.lookup(ip("172.20.1.1")), Some("7.7.7.7"));
    }

    #[test]
    fn test_repeated_insert_is_idempotent() {
        let mut trie = StrideTrie::new();
        trie.insert(ip("192.0.2.0"), 25, hop("8.8.8.8"));
        trie.insert(ip("192.0.2.0"), 25, hop("8.8.8.8"));

        assert_eq!(trie.lookup(ip("192.0.2.5")), Some("8.8.8.8"));
        assert_eq!(trie.lookup(ip("192.0.2.130")), None);
    }

    #[test]
    fn test_empty_trie_matches_nothing() {
        let trie = StrideTrie::new();
        assert_eq!(trie.lookup(ip("1.2.3.4")), None);
        assert_eq!(trie.lookup(0), None);
        assert_eq!(trie.lookup(u32::MAX), None);
    }

    #[test]
    fn test_every_sigbits_covers_exactly_its_block() {
        // For each possible significant-bit count, the whole block must
        // resolve to the hop and the adjacent block must not.
        let prefix = ip("192.168.171.204");
        for sigbits in 0u8..=32 {
            let mut trie = StrideTrie::new();
            trie.insert(prefix, sigbits, hop("10.0.0.1"));

            let mask = if sigbits == 0 {
                0
            } else {
                u32::MAX << (32 - u32::from(sigbits))
            };
            let low = prefix & mask;
            let high = low | !mask;
            let mid = low | (0x5555_5555 & !mask);

            assert_eq!(trie.lookup(low), Some("10.0.0.1"), "low edge, /{sigbits}");
            assert_eq!(trie.lookup(high), Some("10.0.0.1"), "high edge, /{sigbits}");
            assert_eq!(trie.lookup(mid), Some("10.0.0.1"), "interior, /{sigbits}");

            if sigbits > 0 {
                let outside = low ^ (1 << (32 - u32::from(sigbits)));
                assert_eq!(trie.lookup(outside), None, "sibling block, /{sigbits}");
            }
        }
    }

    #[test]
    fn test_low_bits_of_inserted_prefix_are_ignored() {
        let mut trie = StrideTrie::new();
        // Same /16 block written with noisy host bits.
        trie.insert(ip("10.5.200.77"), 16, hop("9.9.9.9"));

        assert_eq!(trie.lookup(ip("10.5.0.1")), Some("9.9.9.9"));
        assert_eq!(trie.lookup(ip("10.5.255.254")), Some("9.9.9.9"));
        assert_eq!(trie.lookup(ip("10.6.0.1")), None);
    }
}
