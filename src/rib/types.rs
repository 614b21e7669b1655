//! Core route types shared across parsing, selection, and the table.

use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// An IPv4 address block: address bits plus a significant-bit count
///
/// Two prefixes are the same block only when both fields agree; the same
/// address with different bit counts names different blocks. Bits below the
/// boundary are carried as parsed but ignored by the forwarding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoutePrefix {
    /// Address value in host byte order
    pub addr: u32,
    /// Leading bits that define the block, 0 through 32
    pub sigbits: u8,
}

impl RoutePrefix {
    /// Build a prefix from a parsed address and bit count.
    #[must_use]
    pub fn new(addr: Ipv4Addr, sigbits: u8) -> Self {
        debug_assert!(sigbits <= 32, "significant-bit count out of range: {sigbits}");
        Self {
            addr: u32::from(addr),
            sigbits,
        }
    }
}

impl fmt::Display for RoutePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", Ipv4Addr::from(self.addr), self.sigbits)
    }
}

/// One route record as parsed from the data set
///
/// Candidates for the same block compete on `path_len` during selection;
/// everything else rides along untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCandidate {
    /// The address block this route covers
    pub prefix: RoutePrefix,
    /// Hop count of the advertised path, the only selection metric
    pub path_len: usize,
    /// Opaque next-hop token, echoed verbatim into results
    pub next_hop: Arc<str>,
}

impl fmt::Display for RouteCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} (path length {})",
            self.prefix, self.next_hop, self.path_len
        )
    }
}
