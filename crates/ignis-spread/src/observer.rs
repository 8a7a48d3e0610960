//! Per-tick observation hook for observed runs.

use ignis_core::TickId;
use ignis_field::Field;

/// Callback invoked after every committed tick of an observed run.
///
/// The observer sees the field state after the commit; the pre-run
/// state with only the origins ignited is not reported. Any `FnMut`
/// closure with the matching signature works:
///
/// ```
/// use ignis_core::TickId;
/// use ignis_field::Field;
///
/// let mut burning_per_tick = Vec::new();
/// let mut observer = |_tick: TickId, field: &Field| {
///     burning_per_tick.push(field.burn_indicators().iter().sum::<f64>());
/// };
/// # let _ = &mut observer;
/// ```
pub trait TickObserver {
    /// Called once per committed tick with the post-commit field.
    fn on_tick(&mut self, tick: TickId, field: &Field);
}

impl<F: FnMut(TickId, &Field)> TickObserver for F {
    fn on_tick(&mut self, tick: TickId, field: &Field) {
        self(tick, field)
    }
}
