//! Calibrated coefficients for the spread probability.

use crate::error::SpreadError;

/// Coefficients of the ignition probability formula.
///
/// `p_h` is the base probability that fire jumps to an adjacent fuel
/// cell under neutral vegetation, no wind and flat terrain. `c1` and
/// `c2` shape the wind term `exp(c2 * V * cos(theta)) * exp(c1 * V)`
/// and `c3` the slope term `exp(c3 * dh)`.
///
/// The defaults are the Alexandridis et al. (2008) calibration against
/// the 1990 Spetses island fire.
///
/// # Examples
///
/// ```
/// use ignis_spread::FireParams;
///
/// let params = FireParams::default().with_p_h(0.5).unwrap();
/// assert_eq!(params.p_h(), 0.5);
/// assert!(FireParams::default().with_p_h(1.5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireParams {
    p_h: f64,
    c1: f64,
    c2: f64,
    c3: f64,
}

impl FireParams {
    /// Build a parameter set, validating every coefficient.
    ///
    /// # Errors
    ///
    /// `ProbabilityOutOfRange` if `p_h` is outside `[0, 1]`;
    /// `NonFiniteParam` if any coefficient is NaN or infinite.
    pub fn new(p_h: f64, c1: f64, c2: f64, c3: f64) -> Result<Self, SpreadError> {
        Self { p_h, c1, c2, c3 }.validate()
    }

    /// Replace the base burn probability.
    pub fn with_p_h(mut self, p_h: f64) -> Result<Self, SpreadError> {
        self.p_h = p_h;
        self.validate()
    }

    /// Replace the wind speed coefficient.
    pub fn with_c1(mut self, c1: f64) -> Result<Self, SpreadError> {
        self.c1 = c1;
        self.validate()
    }

    /// Replace the wind alignment coefficient.
    pub fn with_c2(mut self, c2: f64) -> Result<Self, SpreadError> {
        self.c2 = c2;
        self.validate()
    }

    /// Replace the slope coefficient.
    pub fn with_c3(mut self, c3: f64) -> Result<Self, SpreadError> {
        self.c3 = c3;
        self.validate()
    }

    /// Base burn probability.
    pub fn p_h(&self) -> f64 {
        self.p_h
    }

    /// Wind speed coefficient.
    pub fn c1(&self) -> f64 {
        self.c1
    }

    /// Wind alignment coefficient.
    pub fn c2(&self) -> f64 {
        self.c2
    }

    /// Slope coefficient.
    pub fn c3(&self) -> f64 {
        self.c3
    }

    fn validate(self) -> Result<Self, SpreadError> {
        for (name, value) in [
            ("p_h", self.p_h),
            ("c1", self.c1),
            ("c2", self.c2),
            ("c3", self.c3),
        ] {
            if !value.is_finite() {
                return Err(SpreadError::NonFiniteParam { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.p_h) {
            return Err(SpreadError::ProbabilityOutOfRange { value: self.p_h });
        }
        Ok(self)
    }
}

impl Default for FireParams {
    fn default() -> Self {
        Self {
            p_h: 0.36,
            c1: 0.045,
            c2: 0.131,
            c3: 0.3,
        }
    }
}
