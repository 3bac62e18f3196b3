//! # Unit Types
//!
//! Type-safe wrappers for the units crossing the engine boundary. These are
//! plain f64 newtypes: they serialize as bare numbers and cost nothing at runtime.
//!
//! ## Internal vs Display Units
//!
//! The solvers work in SI throughout:
//! - Length: meters (m)
//! - Force: newtons (N)
//! - Moment: newton-meters (N·m)
//! - Distributed load: newtons per meter (N/m)
//! - Stress / modulus: pascals (Pa)
//!
//! Requests arrive in engineering units (mm for section dimensions, kN, kN·m,
//! kN/m for loads) and results are usually presented in kN, mm and MPa. The
//! conversion happens once, in the calling layer, through the `From` impls below.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{Kilonewtons, Meters, Millimeters, Newtons};
//!
//! let depth: Meters = Millimeters(500.0).into();
//! assert_eq!(depth.0, 0.5);
//!
//! let load: Newtons = Kilonewtons(10.0).into();
//! assert_eq!(load.0, 10_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

/// Moment in newton-millimeters (paired with mm³ section moduli to give MPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

impl From<NewtonMeters> for KilonewtonMeters {
    fn from(nm: NewtonMeters) -> Self {
        KilonewtonMeters(nm.0 / 1000.0)
    }
}

impl From<KilonewtonMeters> for NewtonMeters {
    fn from(knm: KilonewtonMeters) -> Self {
        NewtonMeters(knm.0 * 1000.0)
    }
}

impl From<NewtonMeters> for NewtonMillimeters {
    fn from(nm: NewtonMeters) -> Self {
        NewtonMillimeters(nm.0 * 1000.0)
    }
}

// ============================================================================
// Distributed Load Units
// ============================================================================

/// Distributed load in newtons per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonsPerMeter(pub f64);

/// Distributed load in kilonewtons per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonsPerMeter(pub f64);

impl From<NewtonsPerMeter> for KilonewtonsPerMeter {
    fn from(npm: NewtonsPerMeter) -> Self {
        KilonewtonsPerMeter(npm.0 / 1000.0)
    }
}

impl From<KilonewtonsPerMeter> for NewtonsPerMeter {
    fn from(knpm: KilonewtonsPerMeter) -> Self {
        NewtonsPerMeter(knpm.0 * 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress or modulus in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1e6)
    }
}

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1e6)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Section modulus in m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

/// Section modulus in mm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMillimeters(pub f64);

impl From<CubicMeters> for CubicMillimeters {
    fn from(m3: CubicMeters) -> Self {
        CubicMillimeters(m3.0 * 1e9)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Newtons);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(NewtonMeters);
impl_arithmetic!(KilonewtonMeters);
impl_arithmetic!(NewtonMillimeters);
impl_arithmetic!(NewtonsPerMeter);
impl_arithmetic!(KilonewtonsPerMeter);
impl_arithmetic!(Pascals);
impl_arithmetic!(Megapascals);
impl_arithmetic!(CubicMeters);
impl_arithmetic!(CubicMillimeters);
