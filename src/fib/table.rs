//! Forwarding table - hot path for destination resolution.

use std::net::Ipv4Addr;
use tracing::{debug, info, trace};

use super::trie::StrideTrie;
use crate::rib::RouteCandidate;

/// Forwarding table mapping destination addresses to next hops
///
/// Thin wrapper over the stride-2 trie that owns the installed routes for
/// the lifetime of a run. The table is built once from already-selected
/// routes and never mutated afterwards; resolution needs only `&self`, so
/// sharing it across threads is a matter of `Arc<ForwardingTable>` if a
/// caller ever wants that.
///
/// # Performance
///
/// - Installation: O(sigbits / 2) node visits per route
/// - Lookup: at most 16 node visits per address, independent of table size
pub struct ForwardingTable {
    /// Stride-2 trie holding every installed prefix
    trie: StrideTrie,
    /// Number of routes installed at build time
    route_count: usize,
}

impl ForwardingTable {
    /// Build the table from selected routes
    ///
    /// Callers are expected to run candidates through best-path selection
    /// first; this constructor installs whatever it is given, in order, so
    /// a later duplicate block overwrites an earlier one.
    #[must_use]
    pub fn new(routes: Vec<RouteCandidate>) -> Self {
        let route_count = routes.len();
        let mut trie = StrideTrie::new();

        for route in routes {
            debug!(
                block = %route.prefix,
                next_hop = %route.next_hop,
                "Installing route"
            );
            trie.insert(route.prefix.addr, route.prefix.sigbits, route.next_hop);
        }

        info!(route_count, "Forwarding table loaded");

        Self { trie, route_count }
    }

    /// Resolve a destination address to the next hop of its longest
    /// matching prefix
    ///
    /// Returns `None` when no installed block covers the address. That is
    /// an ordinary outcome for the caller to render, not an error.
    #[must_use]
    pub fn lookup(&self, addr: Ipv4Addr) -> Option<&str> {
        let hop = self.trie.lookup(u32::from(addr));
        trace!(addr = %addr, matched = hop.is_some(), "Lookup");
        hop
    }

    /// Number of routes installed at build time.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    /// True when nothing was installed; every lookup will miss.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.route_count == 0
    }
}
