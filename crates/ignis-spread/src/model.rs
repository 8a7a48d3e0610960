//! The fire spread model: transition rule, ignition and run loop.

use crate::error::SpreadError;
use crate::observer::TickObserver;
use crate::params::FireParams;
use ignis_core::{CellState, Coord, TickId};
use ignis_field::{Field, TickView};
use ignis_space::Neighborhood;
use rand::Rng;
use smallvec::smallvec;

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// No cell was burning at the start of a tick.
    Exhausted,
    /// The tick budget ran out while fire was still burning.
    MaxTicks,
}

/// Summary of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Number of committed ticks.
    pub ticks: u64,
    /// Why the run stopped.
    pub termination: Termination,
    /// Fuel cells that caught fire during the run. Origins are not
    /// counted.
    pub ignitions: u64,
}

/// A stochastic fire spread model over a [`Field`].
///
/// Owns the neighborhood geometry, the calibrated coefficients, the
/// ignition origins and a tick budget. The model itself is immutable
/// during a run; all evolving state lives in the field and the caller's
/// RNG, so one model can drive any number of replications.
///
/// # Examples
///
/// ```
/// use ignis_field::FieldBuilder;
/// use ignis_space::{EdgeRule, Neighborhood};
/// use ignis_spread::{FireParams, FireSpread};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use smallvec::smallvec;
///
/// let hood = Neighborhood::moore(1, 2, EdgeRule::IgnoreMissing).unwrap();
/// let model = FireSpread::new(hood, FireParams::default())
///     .with_origins(vec![smallvec![5, 5]])
///     .with_max_ticks(50);
///
/// let mut field = FieldBuilder::new([11, 11]).build().unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let outcome = model.run(&mut field, &mut rng).unwrap();
/// assert!(outcome.ticks <= 50);
/// ```
#[derive(Clone, Debug)]
pub struct FireSpread {
    neighborhood: Neighborhood,
    params: FireParams,
    origins: Vec<Coord>,
    max_ticks: u64,
}

impl FireSpread {
    /// Stock tick budget for [`run`](FireSpread::run).
    pub const DEFAULT_MAX_TICKS: u64 = 1_000;

    /// Build a model with no origins and the stock tick budget.
    pub fn new(neighborhood: Neighborhood, params: FireParams) -> Self {
        Self {
            neighborhood,
            params,
            origins: Vec::new(),
            max_ticks: Self::DEFAULT_MAX_TICKS,
        }
    }

    /// Replace the ignition origins.
    ///
    /// Bounds are checked against the field at ignition time, not here.
    pub fn with_origins(mut self, origins: Vec<Coord>) -> Self {
        self.origins = origins;
        self
    }

    /// Replace the tick budget. Zero means a run ignites the origins
    /// and stops without evolving.
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// The neighborhood geometry.
    pub fn neighborhood(&self) -> &Neighborhood {
        &self.neighborhood
    }

    /// The spread coefficients.
    pub fn params(&self) -> &FireParams {
        &self.params
    }

    /// Replace the spread coefficients.
    pub fn set_params(&mut self, params: FireParams) {
        self.params = params;
    }

    /// The ignition origins.
    pub fn origins(&self) -> &[Coord] {
        &self.origins
    }

    /// The tick budget.
    pub fn max_ticks(&self) -> u64 {
        self.max_ticks
    }

    /// Mark every origin as burning.
    ///
    /// Origins overwrite whatever state the cell held; igniting a
    /// non-fuel cell is allowed and simply burns out on the next tick.
    ///
    /// # Errors
    ///
    /// `SpreadError::Field` if an origin lies outside the field.
    pub fn ignite(&self, field: &mut Field) -> Result<(), SpreadError> {
        for origin in &self.origins {
            field.set_state(origin, CellState::Burning)?;
        }
        Ok(())
    }

    /// Advance the field exactly one tick and commit.
    ///
    /// Every cell's next state is derived from the pre-tick snapshot:
    /// burning cells burn out, fuel cells with burning neighbors draw
    /// once against the accumulated ignition probability, everything
    /// else is carried over. Cells are visited in flat-index order and
    /// fuel cells without burning neighbors consume no randomness.
    ///
    /// Returns the number of cells that ignited this tick.
    pub fn step(&self, field: &mut Field, rng: &mut impl Rng) -> Result<u64, SpreadError> {
        self.check_rank(field)?;
        let mut ignitions = 0u64;

        let view = field.tick_view();
        let mut coord: Coord = smallvec![0; view.dims.len()];
        for idx in 0..view.current.len() {
            let next = match view.current[idx] {
                CellState::NonFuel => CellState::NonFuel,
                CellState::Burning | CellState::Burned => CellState::Burned,
                CellState::Fuel => {
                    let mut p_no_burn = 1.0;
                    let mut any_burning = false;
                    for neighbor in self.neighborhood.neighbors(&coord, view.dims)? {
                        let n_idx = flat_index(view.dims, &neighbor);
                        if view.current[n_idx] == CellState::Burning {
                            any_burning = true;
                            p_no_burn *= 1.0
                                - spread_probability(&self.params, &view, idx, &coord, n_idx, &neighbor);
                        }
                    }
                    if any_burning && rng.random::<f64>() > p_no_burn {
                        ignitions += 1;
                        CellState::Burning
                    } else {
                        CellState::Fuel
                    }
                }
            };
            view.staging[idx] = next;
            advance(&mut coord, view.dims);
        }
        field.commit_tick();
        Ok(ignitions)
    }

    /// Ignite the origins, then run until burn-out or the tick budget.
    ///
    /// A tick is only spent when at least one cell is burning, so a run
    /// with no origins (or a budget of zero) returns immediately.
    pub fn run(&self, field: &mut Field, rng: &mut impl Rng) -> Result<RunOutcome, SpreadError> {
        self.run_observed(field, rng, &mut |_: TickId, _: &Field| {})
    }

    /// Like [`run`](FireSpread::run), invoking `observer` after every
    /// committed tick. The first observed tick is `TickId(1)`; the
    /// pre-run state with only the origins ignited is not reported.
    pub fn run_observed<O: TickObserver>(
        &self,
        field: &mut Field,
        rng: &mut impl Rng,
        observer: &mut O,
    ) -> Result<RunOutcome, SpreadError> {
        self.check_rank(field)?;
        self.ignite(field)?;

        let mut tick = TickId::ZERO;
        let mut ignitions = 0u64;
        loop {
            if !any_burning(field) {
                return Ok(RunOutcome {
                    ticks: tick.0,
                    termination: Termination::Exhausted,
                    ignitions,
                });
            }
            if tick.0 == self.max_ticks {
                return Ok(RunOutcome {
                    ticks: tick.0,
                    termination: Termination::MaxTicks,
                    ignitions,
                });
            }
            ignitions += self.step(field, rng)?;
            tick = tick.next();
            observer.on_tick(tick, field);
        }
    }

    fn check_rank(&self, field: &Field) -> Result<(), SpreadError> {
        if self.neighborhood.ndim() != field.ndim() {
            return Err(SpreadError::RankMismatch {
                expected: self.neighborhood.ndim(),
                got: field.ndim(),
            });
        }
        Ok(())
    }
}

/// Probability that fire jumps from the burning `source` cell to the
/// fuel `target` cell this tick.
///
/// `p_h * (1 + veg_type) * (1 + veg_density) * p_wind * p_height`, with
/// the vegetation factors taken from the source cell. The wind term
/// reduces to `exp(c2 * V * clamp(dot, -1, 1)) * exp(c1 * V)` where
/// `dot` is the raw (unnormalized) dot product of the source-to-target
/// displacement with the wind vector.
fn spread_probability(
    params: &FireParams,
    view: &TickView<'_>,
    target: usize,
    target_coord: &Coord,
    source: usize,
    source_coord: &Coord,
) -> f64 {
    let veg = (1.0 + view.veg_type[source]) * (1.0 + view.veg_density[source]);

    let mut dot = 0.0;
    for axis in 0..target_coord.len() {
        dot += f64::from(target_coord[axis] - source_coord[axis]) * view.wind_direction[axis];
    }
    let alignment = dot.clamp(-1.0, 1.0);
    let wind = (params.c2() * view.wind_speed * alignment).exp()
        * (params.c1() * view.wind_speed).exp();

    let slope = (params.c3() * (view.height[target] - view.height[source])).exp();

    params.p_h() * veg * wind * slope
}

fn any_burning(field: &Field) -> bool {
    field.states().iter().any(|&s| s == CellState::Burning)
}

fn flat_index(dims: &[u32], coord: &Coord) -> usize {
    let mut idx = 0usize;
    for (axis, &c) in coord.iter().enumerate() {
        idx = idx * dims[axis] as usize + c as usize;
    }
    idx
}

/// Advance `coord` to the next cell in flat-index order, wrapping to
/// all-zeros past the end.
fn advance(coord: &mut Coord, dims: &[u32]) {
    for axis in (0..dims.len()).rev() {
        coord[axis] += 1;
        if coord[axis] < dims[axis] as i32 {
            return;
        }
        coord[axis] = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ignis_field::FieldBuilder;
    use ignis_space::EdgeRule;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn c(x: i32, y: i32) -> Coord {
        smallvec![x, y]
    }

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn moore(radius: u32) -> Neighborhood {
        Neighborhood::moore(radius, 2, EdgeRule::IgnoreMissing).unwrap()
    }

    fn params(p_h: f64) -> FireParams {
        FireParams::default().with_p_h(p_h).unwrap()
    }

    // ---------------------------------------------------------------
    // Configuration tests
    // ---------------------------------------------------------------

    #[test]
    fn model_carries_configuration() {
        let mut model = FireSpread::new(moore(1), FireParams::default())
            .with_origins(vec![c(1, 1)])
            .with_max_ticks(7);
        assert_eq!(model.origins(), &[c(1, 1)]);
        assert_eq!(model.max_ticks(), 7);
        assert_eq!(model.neighborhood().ndim(), 2);

        model.set_params(params(0.5));
        assert_eq!(model.params().p_h(), 0.5);
    }

    // ---------------------------------------------------------------
    // Ignition tests
    // ---------------------------------------------------------------

    #[test]
    fn ignite_marks_origins_burning() {
        let model =
            FireSpread::new(moore(1), FireParams::default()).with_origins(vec![c(0, 0), c(2, 2)]);
        let mut field = FieldBuilder::new([3, 3]).build().unwrap();
        model.ignite(&mut field).unwrap();
        assert_eq!(field.state(&c(0, 0)).unwrap(), CellState::Burning);
        assert_eq!(field.state(&c(2, 2)).unwrap(), CellState::Burning);
        assert_eq!(field.state(&c(1, 1)).unwrap(), CellState::Fuel);
    }

    #[test]
    fn ignite_rejects_out_of_bounds_origin() {
        let model = FireSpread::new(moore(1), FireParams::default()).with_origins(vec![c(5, 5)]);
        let mut field = FieldBuilder::new([3, 3]).build().unwrap();
        assert!(matches!(
            model.ignite(&mut field),
            Err(SpreadError::Field(_))
        ));
    }

    #[test]
    fn ignite_overwrites_non_fuel() {
        let model = FireSpread::new(moore(1), FireParams::default()).with_origins(vec![c(0, 0)]);
        let mut field = FieldBuilder::new([2, 2])
            .states(vec![CellState::NonFuel; 4])
            .build()
            .unwrap();
        model.ignite(&mut field).unwrap();
        assert_eq!(field.state(&c(0, 0)).unwrap(), CellState::Burning);
    }

    // ---------------------------------------------------------------
    // Step tests
    // ---------------------------------------------------------------

    #[test]
    fn burning_cells_burn_out_after_one_tick() {
        let model = FireSpread::new(moore(1), params(0.0));
        let mut field = FieldBuilder::new([3, 3]).build().unwrap();
        field.set_state(&c(1, 1), CellState::Burning).unwrap();

        let ignitions = model.step(&mut field, &mut rng(0)).unwrap();
        assert_eq!(ignitions, 0);
        assert_eq!(field.state(&c(1, 1)).unwrap(), CellState::Burned);
        assert_eq!(field.state(&c(0, 0)).unwrap(), CellState::Fuel);
    }

    #[test]
    fn certain_spread_ignites_all_neighbors() {
        let model = FireSpread::new(moore(1), params(1.0));
        let mut field = FieldBuilder::new([3, 3]).build().unwrap();
        field.set_state(&c(1, 1), CellState::Burning).unwrap();

        let ignitions = model.step(&mut field, &mut rng(42)).unwrap();
        assert_eq!(ignitions, 8);
        assert_eq!(field.state(&c(1, 1)).unwrap(), CellState::Burned);
        for coord in [c(0, 0), c(0, 1), c(0, 2), c(1, 0), c(1, 2), c(2, 0), c(2, 1), c(2, 2)] {
            assert_eq!(field.state(&coord).unwrap(), CellState::Burning, "{coord:?}");
        }
    }

    #[test]
    fn non_fuel_never_ignites() {
        let model = FireSpread::new(moore(1), params(1.0));
        let mut field = FieldBuilder::new([1, 3])
            .states(vec![CellState::NonFuel, CellState::Burning, CellState::Fuel])
            .build()
            .unwrap();

        model.step(&mut field, &mut rng(3)).unwrap();
        assert_eq!(field.state(&c(0, 0)).unwrap(), CellState::NonFuel);
        assert_eq!(field.state(&c(0, 2)).unwrap(), CellState::Burning);
    }

    #[test]
    fn quiet_fuel_consumes_no_randomness() {
        // 5x5 with a corner fire: only the three cells adjacent to the
        // corner draw, every other fuel cell short-circuits.
        let model = FireSpread::new(moore(1), params(1.0));
        let mut field = FieldBuilder::new([5, 5]).build().unwrap();
        field.set_state(&c(0, 0), CellState::Burning).unwrap();

        let mut used = rng(9);
        model.step(&mut field, &mut used).unwrap();

        let mut fresh = rng(9);
        for _ in 0..3 {
            fresh.random::<f64>();
        }
        assert_eq!(used.random::<f64>(), fresh.random::<f64>());
    }

    // ---------------------------------------------------------------
    // Probability formula tests
    // ---------------------------------------------------------------

    #[test]
    fn probability_matches_hand_computation() {
        let mut field = FieldBuilder::new([1, 3])
            .heights(vec![0.0, 2.0, 5.0])
            .veg_type(vec![0.0, 0.4, 0.0])
            .veg_density(vec![0.0, 0.3, 0.0])
            .wind(10.0, vec![0.0, 1.0])
            .build()
            .unwrap();
        let p = FireParams::default();
        let view = field.tick_view();

        // Downwind jump (0,1) -> (0,2): alignment +1, 3 m climb.
        let got = spread_probability(&p, &view, 2, &c(0, 2), 1, &c(0, 1));
        let expected = 0.36
            * 1.4
            * 1.3
            * (0.131_f64 * 10.0).exp()
            * (0.045_f64 * 10.0).exp()
            * (0.3_f64 * 3.0).exp();
        assert!((got - expected).abs() < 1e-12, "got {got}, expected {expected}");

        // Upwind jump (0,1) -> (0,0): alignment flips sign, descent.
        let got = spread_probability(&p, &view, 0, &c(0, 0), 1, &c(0, 1));
        let expected = 0.36
            * 1.4
            * 1.3
            * (-0.131_f64 * 10.0).exp()
            * (0.045_f64 * 10.0).exp()
            * (-0.3_f64 * 2.0).exp();
        assert!((got - expected).abs() < 1e-12, "got {got}, expected {expected}");
    }

    #[test]
    fn alignment_clamps_to_unit_range() {
        let p = FireParams::default();
        let mut strong = FieldBuilder::new([1, 3])
            .wind(5.0, vec![0.0, 4.0])
            .build()
            .unwrap();
        let mut unit = FieldBuilder::new([1, 3])
            .wind(5.0, vec![0.0, 1.0])
            .build()
            .unwrap();

        let sv = strong.tick_view();
        let uv = unit.tick_view();
        let a = spread_probability(&p, &sv, 2, &c(0, 2), 1, &c(0, 1));
        let b = spread_probability(&p, &uv, 2, &c(0, 2), 1, &c(0, 1));
        assert_eq!(a, b);
    }

    #[test]
    fn uphill_beats_downhill() {
        let p = FireParams::default();
        let mut field = FieldBuilder::new([1, 3])
            .heights(vec![0.0, 1.0, 2.0])
            .build()
            .unwrap();
        let view = field.tick_view();

        let uphill = spread_probability(&p, &view, 2, &c(0, 2), 1, &c(0, 1));
        let downhill = spread_probability(&p, &view, 0, &c(0, 0), 1, &c(0, 1));
        assert!(uphill > downhill);
    }

    #[test]
    fn zero_wind_vector_is_neutral() {
        let p = FireParams::default();
        let mut calm = FieldBuilder::new([1, 3]).build().unwrap();
        let mut windless_gale = FieldBuilder::new([1, 3])
            .wind(10.0, vec![0.0, 0.0])
            .build()
            .unwrap();

        let cv = calm.tick_view();
        let gv = windless_gale.tick_view();
        let a = spread_probability(&p, &cv, 2, &c(0, 2), 1, &c(0, 1));
        // Zero direction kills the alignment term but not exp(c1 * V).
        let b = spread_probability(&p, &gv, 2, &c(0, 2), 1, &c(0, 1));
        assert_eq!(a, 0.36);
        assert!((b - 0.36 * (0.045_f64 * 10.0).exp()).abs() < 1e-12);
    }

    // ---------------------------------------------------------------
    // Run loop tests
    // ---------------------------------------------------------------

    #[test]
    fn no_origins_exhausts_without_ticking() {
        let model = FireSpread::new(moore(1), FireParams::default());
        let mut field = FieldBuilder::new([4, 4]).build().unwrap();
        let outcome = model.run(&mut field, &mut rng(0)).unwrap();
        assert_eq!(
            outcome,
            RunOutcome {
                ticks: 0,
                termination: Termination::Exhausted,
                ignitions: 0
            }
        );
        assert!(field.states().iter().all(|&s| s == CellState::Fuel));
    }

    #[test]
    fn zero_tick_budget_returns_origins_only() {
        let model = FireSpread::new(moore(1), FireParams::default())
            .with_origins(vec![c(2, 2)])
            .with_max_ticks(0);
        let mut field = FieldBuilder::new([5, 5]).build().unwrap();
        let outcome = model.run(&mut field, &mut rng(0)).unwrap();
        assert_eq!(outcome.ticks, 0);
        assert_eq!(outcome.termination, Termination::MaxTicks);
        assert_eq!(field.state(&c(2, 2)).unwrap(), CellState::Burning);
        assert_eq!(
            field.states().iter().filter(|&&s| s == CellState::Fuel).count(),
            24
        );
    }

    #[test]
    fn zero_burn_probability_burns_out_origins() {
        let model = FireSpread::new(moore(1), params(0.0))
            .with_origins(vec![c(1, 1)])
            .with_max_ticks(10);
        let mut field = FieldBuilder::new([3, 3]).build().unwrap();
        let outcome = model.run(&mut field, &mut rng(0)).unwrap();
        assert_eq!(outcome.ticks, 1);
        assert_eq!(outcome.termination, Termination::Exhausted);
        assert_eq!(outcome.ignitions, 0);
        assert_eq!(field.state(&c(1, 1)).unwrap(), CellState::Burned);
    }

    #[test]
    fn certain_spread_consumes_whole_field() {
        let model = FireSpread::new(moore(1), params(1.0))
            .with_origins(vec![c(2, 2)])
            .with_max_ticks(50);
        let mut field = FieldBuilder::new([5, 5]).build().unwrap();
        let outcome = model.run(&mut field, &mut rng(11)).unwrap();

        // Front advances one ring per tick, then one tick to burn out.
        assert_eq!(outcome.ticks, 3);
        assert_eq!(outcome.termination, Termination::Exhausted);
        assert_eq!(outcome.ignitions, 24);
        assert!(field.states().iter().all(|&s| s == CellState::Burned));
    }

    #[test]
    fn budget_stops_a_live_fire() {
        let model = FireSpread::new(moore(1), params(1.0))
            .with_origins(vec![c(3, 3)])
            .with_max_ticks(1);
        let mut field = FieldBuilder::new([7, 7]).build().unwrap();
        let outcome = model.run(&mut field, &mut rng(5)).unwrap();
        assert_eq!(outcome.ticks, 1);
        assert_eq!(outcome.termination, Termination::MaxTicks);
        assert_eq!(field.state(&c(3, 3)).unwrap(), CellState::Burned);
        assert_eq!(field.state(&c(2, 3)).unwrap(), CellState::Burning);
        assert_eq!(field.state(&c(1, 3)).unwrap(), CellState::Fuel);
    }

    #[test]
    fn rank_mismatch_is_rejected() {
        let hood = Neighborhood::moore(1, 3, EdgeRule::IgnoreMissing).unwrap();
        let model = FireSpread::new(hood, FireParams::default());
        let mut field = FieldBuilder::new([4, 4]).build().unwrap();
        assert!(matches!(
            model.run(&mut field, &mut rng(0)),
            Err(SpreadError::RankMismatch {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn fixed_seed_reproduces_runs() {
        let model = FireSpread::new(moore(1), FireParams::default())
            .with_origins(vec![c(4, 4)])
            .with_max_ticks(100);

        let mut a = FieldBuilder::new([9, 9]).build().unwrap();
        let mut b = FieldBuilder::new([9, 9]).build().unwrap();
        let out_a = model.run(&mut a, &mut rng(1234)).unwrap();
        let out_b = model.run(&mut b, &mut rng(1234)).unwrap();

        assert_eq!(out_a, out_b);
        assert_eq!(a.states(), b.states());
    }

    #[test]
    fn observer_sees_every_committed_tick() {
        let model = FireSpread::new(moore(1), params(1.0))
            .with_origins(vec![c(1, 1)])
            .with_max_ticks(50);
        let mut field = FieldBuilder::new([3, 3]).build().unwrap();

        let mut seen = Vec::new();
        let mut observer = |tick: TickId, field: &Field| {
            let burning = field
                .states()
                .iter()
                .filter(|&&s| s == CellState::Burning)
                .count();
            seen.push((tick, burning));
        };
        let outcome = model
            .run_observed(&mut field, &mut rng(8), &mut observer)
            .unwrap();

        assert_eq!(seen.len() as u64, outcome.ticks);
        assert_eq!(seen[0], (TickId(1), 8));
        assert_eq!(seen[1], (TickId(2), 0));
    }

    #[test]
    fn run_matches_manual_stepping() {
        let model = FireSpread::new(moore(1), FireParams::default())
            .with_origins(vec![c(3, 3)])
            .with_max_ticks(100);

        let mut auto = FieldBuilder::new([7, 7]).build().unwrap();
        let outcome = model.run(&mut auto, &mut rng(77)).unwrap();

        let mut manual = FieldBuilder::new([7, 7]).build().unwrap();
        let mut manual_rng = rng(77);
        model.ignite(&mut manual).unwrap();
        let mut ticks = 0u64;
        while manual
            .states()
            .iter()
            .any(|&s| s == CellState::Burning)
        {
            model.step(&mut manual, &mut manual_rng).unwrap();
            ticks += 1;
        }

        assert_eq!(ticks, outcome.ticks);
        assert_eq!(manual.states(), auto.states());
    }

    // ---------------------------------------------------------------
    // Property tests
    // ---------------------------------------------------------------

    proptest! {
        #[test]
        fn runs_respect_budget_and_leave_no_fire_behind(
            w in 2u32..8,
            h in 2u32..8,
            p_h in 0.0..=1.0f64,
            max_ticks in 0u64..10,
            seed in any::<u64>(),
        ) {
            let model = FireSpread::new(moore(1), params(p_h))
                .with_origins(vec![c(0, 0)])
                .with_max_ticks(max_ticks);
            let mut field = FieldBuilder::new([w, h]).build().unwrap();
            let outcome = model.run(&mut field, &mut rng(seed)).unwrap();

            prop_assert!(outcome.ticks <= max_ticks);
            let burning = field
                .states()
                .iter()
                .filter(|&&s| s == CellState::Burning)
                .count();
            match outcome.termination {
                Termination::Exhausted => prop_assert_eq!(burning, 0),
                Termination::MaxTicks => prop_assert!(burning > 0),
            }
        }
    }
}
