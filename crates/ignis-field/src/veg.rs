//! Named vegetation classes and their spread factors.

use crate::error::FieldError;
use indexmap::IndexMap;

/// Lookup tables mapping vegetation class names to the factors the
/// ignition formula multiplies in as `(1 + factor)`.
///
/// Factors below zero slow the fire, factors above zero accelerate it.
/// The [stock tables](VegClasses::standard) carry the classes from the
/// Alexandridis calibration; both tables accept custom entries.
///
/// Iteration order is insertion order, so class listings come out the
/// way they were registered.
#[derive(Clone, Debug)]
pub struct VegClasses {
    types: IndexMap<String, f64>,
    densities: IndexMap<String, f64>,
}

impl VegClasses {
    /// Empty tables, for fully custom class sets.
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
            densities: IndexMap::new(),
        }
    }

    /// The stock tables: agricultural (-0.3), thickets (0.0) and
    /// aleppo-pine (0.4) types; sparse (-0.4), normal (0.0) and
    /// dense (0.3) densities.
    pub fn standard() -> Self {
        let mut classes = Self::new();
        classes.insert_type("agricultural", -0.3);
        classes.insert_type("thickets", 0.0);
        classes.insert_type("aleppo-pine", 0.4);
        classes.insert_density("sparse", -0.4);
        classes.insert_density("normal", 0.0);
        classes.insert_density("dense", 0.3);
        classes
    }

    /// Register (or overwrite) a vegetation type class.
    pub fn insert_type(&mut self, name: impl Into<String>, factor: f64) {
        self.types.insert(name.into(), factor);
    }

    /// Register (or overwrite) a vegetation density class.
    pub fn insert_density(&mut self, name: impl Into<String>, factor: f64) {
        self.densities.insert(name.into(), factor);
    }

    /// Spread factor for a named vegetation type.
    pub fn type_factor(&self, name: &str) -> Result<f64, FieldError> {
        self.types
            .get(name)
            .copied()
            .ok_or_else(|| FieldError::UnknownVegClass {
                name: name.to_string(),
            })
    }

    /// Spread factor for a named vegetation density.
    pub fn density_factor(&self, name: &str) -> Result<f64, FieldError> {
        self.densities
            .get(name)
            .copied()
            .ok_or_else(|| FieldError::UnknownVegClass {
                name: name.to_string(),
            })
    }

    /// Registered type class names, in insertion order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Registered density class names, in insertion order.
    pub fn density_names(&self) -> impl Iterator<Item = &str> {
        self.densities.keys().map(String::as_str)
    }
}

impl Default for VegClasses {
    fn default() -> Self {
        Self::standard()
    }
}
