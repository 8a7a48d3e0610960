//! Boundary rules for neighborhood resolution.

/// How a neighborhood treats the landscape boundary.
///
/// This controls the *topology* at the edge of the grid (which cells a
/// boundary-adjacent query returns), not what any field value does
/// there.
///
/// # Examples
///
/// ```
/// use ignis_space::{EdgeRule, Neighborhood};
/// use smallvec::smallvec;
///
/// let dims = [4u32, 4];
///
/// // IgnoreMissing: the corner keeps its 3 in-bounds Moore neighbors.
/// let nh = Neighborhood::moore(1, 2, EdgeRule::IgnoreMissing).unwrap();
/// assert_eq!(nh.neighbors(&smallvec![0, 0], &dims).unwrap().len(), 3);
///
/// // DropEdge: any boundary cell has no neighbors at all.
/// let nh = Neighborhood::moore(1, 2, EdgeRule::DropEdge).unwrap();
/// assert!(nh.neighbors(&smallvec![0, 0], &dims).unwrap().is_empty());
///
/// // Wrap: every cell has the full 8 neighbors (torus).
/// let nh = Neighborhood::moore(1, 2, EdgeRule::Wrap).unwrap();
/// assert_eq!(nh.neighbors(&smallvec![0, 0], &dims).unwrap().len(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeRule {
    /// A cell lying on any grid boundary has no neighbors at all.
    ///
    /// The rule keys off the *querying* cell: an interior cell keeps every
    /// in-bounds neighbor, including ones on the boundary. The resulting
    /// adjacency is deliberately asymmetric.
    DropEdge,
    /// Offsets that land outside the grid are silently skipped.
    IgnoreMissing,
    /// Coordinates wrap modulo the axis length (torus).
    Wrap,
}

/// Resolve a single axis value under the given edge rule.
///
/// Takes `i64` so that `cell + offset` cannot overflow even at extreme
/// radii. Returns `Some(resolved)` for an in-bounds or wrapped value,
/// `None` when the value falls outside and the rule discards it.
pub(crate) fn resolve_axis(val: i64, len: u32, rule: EdgeRule) -> Option<i32> {
    let n = i64::from(len);
    if val >= 0 && val < n {
        return Some(val as i32);
    }
    match rule {
        EdgeRule::DropEdge | EdgeRule::IgnoreMissing => None,
        EdgeRule::Wrap => Some((((val % n) + n) % n) as i32),
    }
}
