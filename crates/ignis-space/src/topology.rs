//! Topology shapes and offset-table generation.

use ignis_core::Coord;
use smallvec::smallvec;

/// Shape of a neighborhood: which relative offsets count as adjacent.
///
/// The shape fixes the offset table; the [`EdgeRule`](crate::EdgeRule)
/// decides what happens where the table meets the grid boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum Topology {
    /// Chebyshev ball: every cell within `radius` steps, diagonals
    /// included. Radius 1 in 2D is the classic 8-neighborhood.
    Moore {
        /// Ball radius in cells.
        radius: u32,
    },
    /// Manhattan ball: cells within `radius` orthogonal steps. Radius 1
    /// in 2D is the classic 4-neighborhood.
    VonNeumann {
        /// Ball radius in cells.
        radius: u32,
    },
    /// Euclidean ball of `radius + slack`.
    ///
    /// The slack widens the reach so that boundary offsets falling just
    /// outside the integer radius are captured consistently. At the
    /// default slack of 0.25, radius 1 excludes diagonals.
    Radial {
        /// Ball radius in cells.
        radius: u32,
        /// Additional reach beyond the integer radius.
        slack: f64,
    },
    /// Hex adjacency embedded in a rectangular 2D lattice.
    ///
    /// Offsets depend on the parity of the cell's second axis: even rows
    /// lean left, odd rows lean right. Radius 1 gives the classic
    /// 6-neighborhood.
    Hexagonal {
        /// Ring radius in cells.
        radius: u32,
    },
}

impl Topology {
    /// The radius the topology was built with.
    pub fn radius(&self) -> u32 {
        match self {
            Self::Moore { radius }
            | Self::VonNeumann { radius }
            | Self::Radial { radius, .. }
            | Self::Hexagonal { radius } => *radius,
        }
    }
}

/// Enumerate `[-radius, radius]^ndim` in colexicographic order (axis 0
/// varies fastest), keeping every non-zero offset that satisfies `keep`.
///
/// The enumeration order is a stable contract: offset positions reported
/// by [`Neighborhood::offset_index`](crate::Neighborhood::offset_index)
/// follow it.
pub(crate) fn predicate_offsets(
    radius: i32,
    ndim: usize,
    keep: impl Fn(&[i32]) -> bool,
) -> Vec<Coord> {
    let mut out = Vec::new();
    let mut cur: Coord = smallvec![-radius; ndim];
    loop {
        if cur.iter().any(|&v| v != 0) && keep(&cur) {
            out.push(cur.clone());
        }
        let mut axis = 0;
        loop {
            if axis == ndim {
                return out;
            }
            if cur[axis] < radius {
                cur[axis] += 1;
                break;
            }
            cur[axis] = -radius;
            axis += 1;
        }
    }
}

/// Build the even-row and odd-row hex offset tables for `radius`.
pub(crate) fn hex_offset_tables(radius: u32) -> (Vec<Coord>, Vec<Coord>) {
    (hex_table(radius, false), hex_table(radius, true))
}

/// Iterative ring growth for one row parity.
///
/// Each ring `k` unions the 4-adjacent growth of the previous members
/// with a parity-shifted `[0, k] x [-k, k]` band, dedups, sorts by
/// `(y, x)` and drops the origin. Radius 1 lands on the classic 6-cell
/// hex adjacency; larger radii fill the hexagonal disk.
fn hex_table(radius: u32, odd: bool) -> Vec<Coord> {
    let mut members: Vec<(i32, i32)> = vec![(0, 0)];
    for k in 1..=radius as i32 {
        let mut next = members.clone();
        for &(x, y) in &members {
            next.push((x, y - 1));
            next.push((x - 1, y));
            next.push((x + 1, y));
            next.push((x, y + 1));
        }
        let shift = if odd { k / 2 } else { (k + 1) / 2 };
        for x in 0..=k {
            for y in -k..=k {
                next.push((x - shift, y));
            }
        }
        next.sort_by_key(|&(x, y)| (y, x));
        next.dedup();
        next.retain(|&c| c != (0, 0));
        members = next;
    }
    members.into_iter().map(|(x, y)| smallvec![x, y]).collect()
}
