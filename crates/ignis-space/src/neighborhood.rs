//! Precomputed neighborhoods resolved against concrete grids.

use crate::edge::{resolve_axis, EdgeRule};
use crate::error::SpaceError;
use crate::topology::{hex_offset_tables, predicate_offsets, Topology};
use ignis_core::Coord;
use smallvec::SmallVec;

/// Offset storage: either one table for every cell, or a pair selected
/// by the parity of the cell's second axis (hexagonal lattices).
#[derive(Clone, Debug)]
enum OffsetTable {
    Uniform(Vec<Coord>),
    RowParity { even: Vec<Coord>, odd: Vec<Coord> },
}

/// A topology plus edge rule with its offset table precomputed.
///
/// Built once, queried many times: [`Neighborhood::neighbors`] resolves
/// the table against a concrete cell and grid extent, applying the edge
/// rule per axis.
///
/// # Examples
///
/// ```
/// use ignis_space::{EdgeRule, Neighborhood};
/// use smallvec::smallvec;
///
/// let nh = Neighborhood::von_neumann(1, 2, EdgeRule::IgnoreMissing).unwrap();
/// let dims = [3u32, 3];
///
/// // The center of a 3x3 grid keeps all 4 orthogonal neighbors.
/// assert_eq!(nh.neighbors(&smallvec![1, 1], &dims).unwrap().len(), 4);
///
/// // A corner keeps 2.
/// assert_eq!(nh.neighbors(&smallvec![0, 0], &dims).unwrap().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Neighborhood {
    topology: Topology,
    edge: EdgeRule,
    ndim: usize,
    table: OffsetTable,
}

impl Neighborhood {
    /// Maximum radius: offsets use `i32`, so the radius must fit.
    pub const MAX_RADIUS: u32 = i32::MAX as u32;

    /// Maximum grid axis length: coordinates use `i32`, so each axis
    /// must fit.
    pub const MAX_AXIS: u32 = i32::MAX as u32;

    /// Slack used by the stock radial topology.
    pub const DEFAULT_RADIAL_SLACK: f64 = 0.25;

    /// Moore neighborhood: Chebyshev ball of `radius` in `ndim` dimensions.
    pub fn moore(radius: u32, ndim: usize, edge: EdgeRule) -> Result<Self, SpaceError> {
        let r = checked_radius(radius)?;
        checked_rank(ndim)?;
        let offsets = predicate_offsets(r, ndim, |_| true);
        Ok(Self {
            topology: Topology::Moore { radius },
            edge,
            ndim,
            table: OffsetTable::Uniform(offsets),
        })
    }

    /// Von Neumann neighborhood: Manhattan ball of `radius` in `ndim`
    /// dimensions.
    pub fn von_neumann(radius: u32, ndim: usize, edge: EdgeRule) -> Result<Self, SpaceError> {
        let r = checked_radius(radius)?;
        checked_rank(ndim)?;
        let budget = u64::from(radius);
        let offsets = predicate_offsets(r, ndim, |c| {
            c.iter().map(|v| u64::from(v.unsigned_abs())).sum::<u64>() <= budget
        });
        Ok(Self {
            topology: Topology::VonNeumann { radius },
            edge,
            ndim,
            table: OffsetTable::Uniform(offsets),
        })
    }

    /// Radial neighborhood: Euclidean ball of `radius + slack` in `ndim`
    /// dimensions. See [`Self::DEFAULT_RADIAL_SLACK`] for the stock slack.
    pub fn radial(radius: u32, slack: f64, ndim: usize, edge: EdgeRule) -> Result<Self, SpaceError> {
        let r = checked_radius(radius)?;
        checked_rank(ndim)?;
        if !slack.is_finite() {
            return Err(SpaceError::NonFiniteSlack { value: slack });
        }
        let reach = f64::from(radius) + slack;
        let offsets = predicate_offsets(r, ndim, |c| {
            let sq: f64 = c.iter().map(|&v| f64::from(v) * f64::from(v)).sum();
            sq.sqrt() <= reach
        });
        Ok(Self {
            topology: Topology::Radial { radius, slack },
            edge,
            ndim,
            table: OffsetTable::Uniform(offsets),
        })
    }

    /// Hexagonal neighborhood of `radius`. Only defined for `ndim == 2`.
    pub fn hexagonal(radius: u32, ndim: usize, edge: EdgeRule) -> Result<Self, SpaceError> {
        checked_radius(radius)?;
        if ndim != 2 {
            return Err(SpaceError::HexRankUnsupported { ndim });
        }
        let (even, odd) = hex_offset_tables(radius);
        Ok(Self {
            topology: Topology::Hexagonal { radius },
            edge,
            ndim: 2,
            table: OffsetTable::RowParity { even, odd },
        })
    }

    /// The topology this neighborhood was built from.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The boundary rule applied during resolution.
    pub fn edge_rule(&self) -> EdgeRule {
        self.edge
    }

    /// Number of axes the neighborhood expects of cells and grids.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Number of offsets a fully interior cell sees.
    pub fn len_hint(&self) -> usize {
        match &self.table {
            OffsetTable::Uniform(offsets) => offsets.len(),
            OffsetTable::RowParity { even, odd } => even.len().max(odd.len()),
        }
    }

    /// The offset table, for topologies whose offsets are the same at
    /// every cell. Row-parity (hexagonal) tables have no single table
    /// and return [`SpaceError::OffsetLookupUnsupported`].
    pub fn offsets(&self) -> Result<&[Coord], SpaceError> {
        match &self.table {
            OffsetTable::Uniform(offsets) => Ok(offsets),
            OffsetTable::RowParity { .. } => Err(SpaceError::OffsetLookupUnsupported),
        }
    }

    /// Position of `offset` within the uniform table.
    ///
    /// Positions follow the colexicographic generation order and are
    /// stable for the lifetime of the neighborhood.
    pub fn offset_index(&self, offset: &Coord) -> Result<usize, SpaceError> {
        let offsets = self.offsets()?;
        offsets
            .iter()
            .position(|o| o == offset)
            .ok_or_else(|| SpaceError::OffsetNotFound {
                offset: offset.clone(),
            })
    }

    /// Absolute coordinates of `cell`'s neighbors on a grid of extent
    /// `dims`, after applying the edge rule.
    ///
    /// Validates the grid (no zero-length axis, axes within
    /// [`Self::MAX_AXIS`]), the cell rank, and the cell bounds.
    pub fn neighbors(
        &self,
        cell: &Coord,
        dims: &[u32],
    ) -> Result<SmallVec<[Coord; 8]>, SpaceError> {
        self.check_grid(dims)?;
        self.check_cell(cell, dims)?;
        let mut out = SmallVec::new();
        if self.edge == EdgeRule::DropEdge && on_boundary(cell, dims) {
            return Ok(out);
        }
        for offset in self.offsets_for(cell) {
            let mut resolved = Coord::with_capacity(self.ndim);
            let mut keep = true;
            for axis in 0..self.ndim {
                let raw = i64::from(cell[axis]) + i64::from(offset[axis]);
                match resolve_axis(raw, dims[axis], self.edge) {
                    Some(v) => resolved.push(v),
                    None => {
                        keep = false;
                        break;
                    }
                }
            }
            if keep {
                out.push(resolved);
            }
        }
        Ok(out)
    }

    /// The offset slice that applies at `cell`.
    ///
    /// Callers must have rank-checked `cell` already: row-parity tables
    /// index the second axis.
    fn offsets_for(&self, cell: &Coord) -> &[Coord] {
        match &self.table {
            OffsetTable::Uniform(offsets) => offsets,
            OffsetTable::RowParity { even, odd } => {
                if cell[1].rem_euclid(2) == 0 {
                    even
                } else {
                    odd
                }
            }
        }
    }

    fn check_grid(&self, dims: &[u32]) -> Result<(), SpaceError> {
        if dims.len() != self.ndim {
            return Err(SpaceError::RankMismatch {
                expected: self.ndim,
                got: dims.len(),
            });
        }
        for (axis, &len) in dims.iter().enumerate() {
            if len == 0 {
                return Err(SpaceError::EmptyAxis { axis });
            }
            if len > Self::MAX_AXIS {
                return Err(SpaceError::AxisTooLarge {
                    axis,
                    value: len,
                    max: Self::MAX_AXIS,
                });
            }
        }
        Ok(())
    }

    fn check_cell(&self, cell: &Coord, dims: &[u32]) -> Result<(), SpaceError> {
        if cell.len() != self.ndim {
            return Err(SpaceError::RankMismatch {
                expected: self.ndim,
                got: cell.len(),
            });
        }
        for (&c, &len) in cell.iter().zip(dims.iter()) {
            if c < 0 || c >= len as i32 {
                return Err(SpaceError::CoordOutOfBounds {
                    coord: cell.clone(),
                    bounds: bounds_string(dims),
                });
            }
        }
        Ok(())
    }
}

fn checked_radius(radius: u32) -> Result<i32, SpaceError> {
    if radius == 0 {
        return Err(SpaceError::ZeroRadius);
    }
    if radius > Neighborhood::MAX_RADIUS {
        return Err(SpaceError::RadiusTooLarge {
            value: radius,
            max: Neighborhood::MAX_RADIUS,
        });
    }
    Ok(radius as i32)
}

fn checked_rank(ndim: usize) -> Result<(), SpaceError> {
    if ndim == 0 {
        return Err(SpaceError::ZeroRank);
    }
    Ok(())
}

fn on_boundary(cell: &Coord, dims: &[u32]) -> bool {
    cell.iter()
        .zip(dims.iter())
        .any(|(&c, &len)| c == 0 || c == len as i32 - 1)
}

fn bounds_string(dims: &[u32]) -> String {
    dims.iter()
        .map(|d| format!("[0, {d})"))
        .collect::<Vec<_>>()
        .join(" x ")
}
