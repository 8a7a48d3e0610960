//! Strongly-typed identifiers and the [`Coord`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Monotonically increasing tick counter.
///
/// Incremented each time the automaton commits one synchronous update
/// of the whole landscape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick before any update has been committed.
    pub const ZERO: TickId = TickId(0);

    /// The tick following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies one independent Monte Carlo replication.
///
/// Replications are numbered `0..n` within an estimation run. The ID
/// participates in RNG stream derivation, so the same replication
/// always sees the same random sequence regardless of which worker
/// executes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReplicationId(pub u64);

impl fmt::Display for ReplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ReplicationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A cell coordinate on the landscape lattice.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for lattices up
/// to 4 dimensions, which covers every supported topology (the usual
/// case is 2D). Higher-dimensional lattices spill to the heap
/// transparently.
pub type Coord = SmallVec<[i32; 4]>;

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn tick_id_next_increments() {
        assert_eq!(TickId::ZERO.next(), TickId(1));
        assert_eq!(TickId(41).next(), TickId(42));
    }

    #[test]
    fn tick_id_display_is_bare_number() {
        assert_eq!(TickId(7).to_string(), "7");
        assert_eq!(ReplicationId(12).to_string(), "12");
    }

    #[test]
    fn coord_stays_inline_up_to_four_dims() {
        let c: Coord = smallvec![1, -2, 3, 4];
        assert!(!c.spilled());
        let d: Coord = smallvec![1, -2, 3, 4, 5];
        assert!(d.spilled());
    }
}
