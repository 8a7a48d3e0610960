//! The landscape grid: cell states, terrain layers, wind.

use crate::error::FieldError;
use ignis_core::{CellState, Coord};
use smallvec::smallvec;
use std::mem;

/// Stock cell edge length in meters.
const DEFAULT_CELL_SIZE: f64 = 10.0;

/// An n-dimensional landscape with per-cell fire state and terrain.
///
/// Cell states are stored flat in row-major order (last axis fastest)
/// together with a staging buffer of the same shape: a transition rule
/// reads the committed states while writing the next tick into staging,
/// then [`commit_tick`](Field::commit_tick) swaps the two. A snapshot of
/// the build-time states backs [`reset`](Field::reset), which is how the
/// Monte Carlo estimator restores the landscape between replications.
///
/// Terrain layers (height, vegetation type and density factors), the
/// wind vector and the cell size are fixed after construction; only the
/// fire states evolve.
///
/// # Examples
///
/// ```
/// use ignis_core::CellState;
/// use ignis_field::FieldBuilder;
/// use smallvec::smallvec;
///
/// let mut field = FieldBuilder::new([3, 3]).build().unwrap();
/// assert_eq!(field.cell_count(), 9);
///
/// field.set_state(&smallvec![1, 1], CellState::Burning).unwrap();
/// assert_eq!(field.state(&smallvec![1, 1]).unwrap(), CellState::Burning);
///
/// field.reset();
/// assert_eq!(field.state(&smallvec![1, 1]).unwrap(), CellState::Fuel);
/// ```
#[derive(Clone, Debug)]
pub struct Field {
    dims: Vec<u32>,
    states: Vec<CellState>,
    staging: Vec<CellState>,
    initial: Vec<CellState>,
    height: Vec<f64>,
    veg_type: Vec<f64>,
    veg_density: Vec<f64>,
    wind_speed: f64,
    wind_direction: Vec<f64>,
    cell_size: f64,
}

impl Field {
    /// Maximum grid axis length: coordinates use `i32`, so each axis
    /// must fit.
    pub const MAX_AXIS: u32 = i32::MAX as u32;

    /// Per-axis cell counts.
    pub fn dims(&self) -> &[u32] {
        &self.dims
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.states.len()
    }

    /// Flat index of `coord` (row-major, last axis fastest).
    pub fn index_of(&self, coord: &Coord) -> Result<usize, FieldError> {
        self.check_coord(coord)?;
        let mut idx = 0usize;
        for (axis, &c) in coord.iter().enumerate() {
            idx = idx * self.dims[axis] as usize + c as usize;
        }
        Ok(idx)
    }

    /// Coordinate of a flat index, or `None` past the end of the grid.
    pub fn coord_of(&self, index: usize) -> Option<Coord> {
        if index >= self.cell_count() {
            return None;
        }
        Some(decompose(&self.dims, index))
    }

    /// Iterate every cell coordinate in flat-index order.
    pub fn coords(&self) -> Coords<'_> {
        Coords {
            dims: &self.dims,
            index: 0,
            count: self.cell_count(),
        }
    }

    /// Fire state at `coord`.
    pub fn state(&self, coord: &Coord) -> Result<CellState, FieldError> {
        Ok(self.states[self.index_of(coord)?])
    }

    /// Overwrite the fire state at `coord`.
    ///
    /// Point writes do not touch the build-time snapshot: a later
    /// [`reset`](Field::reset) restores the states the field was built
    /// with.
    pub fn set_state(&mut self, coord: &Coord, state: CellState) -> Result<(), FieldError> {
        let idx = self.index_of(coord)?;
        self.states[idx] = state;
        Ok(())
    }

    /// The committed fire states, flat.
    pub fn states(&self) -> &[CellState] {
        &self.states
    }

    /// Split borrow of everything a transition rule needs for one tick.
    ///
    /// The rule reads `current` and the terrain layers while writing
    /// every cell of `staging`, then calls
    /// [`commit_tick`](Field::commit_tick).
    pub fn tick_view(&mut self) -> TickView<'_> {
        TickView {
            dims: &self.dims,
            current: &self.states,
            staging: &mut self.staging,
            height: &self.height,
            veg_type: &self.veg_type,
            veg_density: &self.veg_density,
            wind_speed: self.wind_speed,
            wind_direction: &self.wind_direction,
        }
    }

    /// Swap staging into place as the committed states.
    ///
    /// After the swap the staging buffer holds the previous tick's
    /// states; a transition rule overwrites it fully each tick.
    pub fn commit_tick(&mut self) {
        mem::swap(&mut self.states, &mut self.staging);
    }

    /// Restore the build-time cell states. Terrain and wind are
    /// untouched.
    pub fn reset(&mut self) {
        self.states.copy_from_slice(&self.initial);
        self.staging.copy_from_slice(&self.initial);
    }

    /// Per-cell burn indicators: 1.0 where fire has reached the cell
    /// (burning or burned), 0.0 elsewhere.
    ///
    /// This is the sample a Monte Carlo replication contributes.
    pub fn burn_indicators(&self) -> Vec<f64> {
        self.states
            .iter()
            .map(|s| if s.has_burned() { 1.0 } else { 0.0 })
            .collect()
    }

    /// Cell heights, flat.
    pub fn heights(&self) -> &[f64] {
        &self.height
    }

    /// Vegetation type factors, flat.
    pub fn veg_type(&self) -> &[f64] {
        &self.veg_type
    }

    /// Vegetation density factors, flat.
    pub fn veg_density(&self) -> &[f64] {
        &self.veg_density
    }

    /// Wind speed in meters per second.
    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    /// Wind direction vector, one component per axis. The zero vector
    /// means no directional bias.
    pub fn wind_direction(&self) -> &[f64] {
        &self.wind_direction
    }

    /// Cell edge length in meters.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Replace the full state layer.
    ///
    /// Like [`set_state`](Field::set_state) this leaves the build-time
    /// snapshot alone.
    pub fn set_states(&mut self, states: Vec<CellState>) -> Result<(), FieldError> {
        if states.len() != self.cell_count() {
            return Err(FieldError::LayerLength {
                layer: "states",
                expected: self.cell_count(),
                got: states.len(),
            });
        }
        self.states = states;
        Ok(())
    }

    /// Replace the height layer.
    pub fn set_heights(&mut self, heights: Vec<f64>) -> Result<(), FieldError> {
        if heights.len() != self.cell_count() {
            return Err(FieldError::LayerLength {
                layer: "height",
                expected: self.cell_count(),
                got: heights.len(),
            });
        }
        if heights.iter().any(|v| !v.is_finite()) {
            return Err(FieldError::NonFinite { what: "height" });
        }
        self.height = heights;
        Ok(())
    }

    fn check_coord(&self, coord: &Coord) -> Result<(), FieldError> {
        if coord.len() != self.dims.len() {
            return Err(FieldError::RankMismatch {
                expected: self.dims.len(),
                got: coord.len(),
            });
        }
        for (&c, &len) in coord.iter().zip(self.dims.iter()) {
            if c < 0 || c >= len as i32 {
                return Err(FieldError::CoordOutOfBounds {
                    coord: coord.clone(),
                    bounds: bounds_string(&self.dims),
                });
            }
        }
        Ok(())
    }
}

/// Borrowed view of a field during one tick.
///
/// Bundles the committed (read) and staging (write) state buffers with
/// the immutable terrain and wind layers so a transition rule can hold
/// all of them at once.
pub struct TickView<'a> {
    /// Per-axis cell counts.
    pub dims: &'a [u32],
    /// Committed states from the previous tick. Read-only.
    pub current: &'a [CellState],
    /// Staging buffer for the next tick. Rules fill every cell.
    pub staging: &'a mut [CellState],
    /// Cell heights, flat.
    pub height: &'a [f64],
    /// Vegetation type factors, flat.
    pub veg_type: &'a [f64],
    /// Vegetation density factors, flat.
    pub veg_density: &'a [f64],
    /// Wind speed in meters per second.
    pub wind_speed: f64,
    /// Wind direction vector, one component per axis.
    pub wind_direction: &'a [f64],
}

/// Iterator over cell coordinates in flat-index order.
pub struct Coords<'a> {
    dims: &'a [u32],
    index: usize,
    count: usize,
}

impl Iterator for Coords<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.index == self.count {
            return None;
        }
        let coord = decompose(self.dims, self.index);
        self.index += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.count - self.index;
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for Coords<'_> {}

fn decompose(dims: &[u32], mut index: usize) -> Coord {
    let mut coord: Coord = smallvec![0; dims.len()];
    for axis in (0..dims.len()).rev() {
        let len = dims[axis] as usize;
        coord[axis] = (index % len) as i32;
        index /= len;
    }
    coord
}

fn bounds_string(dims: &[u32]) -> String {
    dims.iter()
        .map(|d| format!("[0, {d})"))
        .collect::<Vec<_>>()
        .join(" x ")
}

/// Validating builder for [`Field`].
///
/// Layers left unset take the stock defaults: all-fuel states, flat
/// terrain, neutral vegetation factors, no wind and a 10 m cell size.
#[derive(Clone, Debug)]
pub struct FieldBuilder {
    dims: Vec<u32>,
    states: Option<Vec<CellState>>,
    height: Option<Vec<f64>>,
    veg_type: Option<Vec<f64>>,
    veg_density: Option<Vec<f64>>,
    wind_speed: f64,
    wind_direction: Option<Vec<f64>>,
    cell_size: f64,
}

impl FieldBuilder {
    /// Start a builder for a grid of the given per-axis cell counts.
    pub fn new(dims: impl Into<Vec<u32>>) -> Self {
        Self {
            dims: dims.into(),
            states: None,
            height: None,
            veg_type: None,
            veg_density: None,
            wind_speed: 0.0,
            wind_direction: None,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }

    /// Initial fire states, flat in row-major order.
    pub fn states(mut self, states: Vec<CellState>) -> Self {
        self.states = Some(states);
        self
    }

    /// Cell heights, flat in row-major order.
    pub fn heights(mut self, height: Vec<f64>) -> Self {
        self.height = Some(height);
        self
    }

    /// Vegetation type factors, flat in row-major order.
    pub fn veg_type(mut self, veg_type: Vec<f64>) -> Self {
        self.veg_type = Some(veg_type);
        self
    }

    /// Vegetation density factors, flat in row-major order.
    pub fn veg_density(mut self, veg_density: Vec<f64>) -> Self {
        self.veg_density = Some(veg_density);
        self
    }

    /// Wind speed (m/s) and direction vector (one component per axis).
    pub fn wind(mut self, speed: f64, direction: Vec<f64>) -> Self {
        self.wind_speed = speed;
        self.wind_direction = Some(direction);
        self
    }

    /// Cell edge length in meters.
    pub fn cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Validate and assemble the field.
    pub fn build(self) -> Result<Field, FieldError> {
        if self.dims.is_empty() {
            return Err(FieldError::ZeroRank);
        }
        for (axis, &len) in self.dims.iter().enumerate() {
            if len == 0 {
                return Err(FieldError::EmptyAxis { axis });
            }
            if len > Field::MAX_AXIS {
                return Err(FieldError::AxisTooLarge {
                    axis,
                    value: len,
                    max: Field::MAX_AXIS,
                });
            }
        }
        let ndim = self.dims.len();
        let cells = self
            .dims
            .iter()
            .try_fold(1usize, |acc, &len| acc.checked_mul(len as usize))
            .ok_or(FieldError::CellCountOverflow)?;

        let states = self.states.unwrap_or_else(|| vec![CellState::Fuel; cells]);
        let height = self.height.unwrap_or_else(|| vec![0.0; cells]);
        let veg_type = self.veg_type.unwrap_or_else(|| vec![0.0; cells]);
        let veg_density = self.veg_density.unwrap_or_else(|| vec![0.0; cells]);
        let wind_direction = self.wind_direction.unwrap_or_else(|| vec![0.0; ndim]);

        check_layer_len("states", cells, states.len())?;
        check_layer_len("height", cells, height.len())?;
        check_layer_len("veg_type", cells, veg_type.len())?;
        check_layer_len("veg_density", cells, veg_density.len())?;
        if wind_direction.len() != ndim {
            return Err(FieldError::WindRank {
                expected: ndim,
                got: wind_direction.len(),
            });
        }

        check_layer_finite("height", &height)?;
        check_layer_finite("veg_type", &veg_type)?;
        check_layer_finite("veg_density", &veg_density)?;
        check_layer_finite("wind_direction", &wind_direction)?;
        if !self.wind_speed.is_finite() {
            return Err(FieldError::NonFinite {
                what: "wind_speed",
            });
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(FieldError::NonPositiveCellSize {
                value: self.cell_size,
            });
        }

        let staging = states.clone();
        let initial = states.clone();
        Ok(Field {
            dims: self.dims,
            states,
            staging,
            initial,
            height,
            veg_type,
            veg_density,
            wind_speed: self.wind_speed,
            wind_direction,
            cell_size: self.cell_size,
        })
    }
}

fn check_layer_len(layer: &'static str, expected: usize, got: usize) -> Result<(), FieldError> {
    if got != expected {
        return Err(FieldError::LayerLength {
            layer,
            expected,
            got,
        });
    }
    Ok(())
}

fn check_layer_finite(layer: &'static str, values: &[f64]) -> Result<(), FieldError> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(FieldError::NonFinite { what: layer });
    }
    Ok(())
}
