//! Limit-state load combinations
//!
//! Each limit state carries a fixed table of factored combinations of dead,
//! live, wind and earthquake load. The analysed load is booked under one
//! category (see [`LoadCategory::of`]) and every combination of the selected
//! limit state is evaluated against it.
//!
//! | Limit state     | Combinations |
//! |-----------------|--------------|
//! | Collapse        | DL+LL, 1.5(DL+LL), 1.2(DL+LL+WL), 1.5(DL+WL), 0.9DL+1.5WL, 0.9DL+1.5EQ |
//! | Serviceability  | DL, DL+LL, DL+WL, DL+EQ (unfactored) |
//! | Compressibility | DL, DL+0.3LL, DL+0.3WL, DL+0.3EQ (sustained fraction) |

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::load_types::LoadCategory;
use super::LoadCase;
use crate::errors::CalcError;

/// Design condition selecting the combination table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitState {
    /// Ultimate (collapse / strength) limit state
    #[default]
    #[serde(alias = "strength")]
    Collapse,
    /// Serviceability limit state - unfactored loads
    Serviceability,
    /// Long-term sustained loading (creep, stability)
    Compressibility,
}

impl LimitState {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            LimitState::Collapse => "Limit state of collapse",
            LimitState::Serviceability => "Limit state of serviceability",
            LimitState::Compressibility => "Long-term compressibility",
        }
    }
}

impl FromStr for LimitState {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "collapse" | "strength" => Ok(LimitState::Collapse),
            "serviceability" => Ok(LimitState::Serviceability),
            "compressibility" => Ok(LimitState::Compressibility),
            other => Err(CalcError::invalid_input(
                "limit_state",
                other,
                "Expected 'collapse', 'serviceability' or 'compressibility'",
            )),
        }
    }
}

/// Load magnitudes per category, in consistent units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadComponents {
    pub dead: f64,
    pub live: f64,
    pub wind: f64,
    pub seismic: f64,
}

impl LoadComponents {
    /// Book the magnitude of a single load case under its category
    pub fn from_load_case(case: &LoadCase) -> Self {
        let mut components = LoadComponents::default();
        components.set(LoadCategory::of(case), case.magnitude());
        components
    }

    /// Magnitude for a category
    pub fn get(&self, category: LoadCategory) -> f64 {
        match category {
            LoadCategory::Dead => self.dead,
            LoadCategory::Live => self.live,
            LoadCategory::Wind => self.wind,
            LoadCategory::Seismic => self.seismic,
        }
    }

    /// Set the magnitude for a category
    pub fn set(&mut self, category: LoadCategory, value: f64) {
        match category {
            LoadCategory::Dead => self.dead = value,
            LoadCategory::Live => self.live = value,
            LoadCategory::Wind => self.wind = value,
            LoadCategory::Seismic => self.seismic = value,
        }
    }
}

/// A load combination with factors for each load category
///
/// # Example
/// ```
/// use beam_core::loads::{LoadCategory, LoadCombination, LoadComponents};
///
/// let combo = LoadCombination::new("1.5DL + 1.5LL")
///     .with_factor(LoadCategory::Dead, 1.5)
///     .with_factor(LoadCategory::Live, 1.5);
///
/// let loads = LoadComponents { dead: 10.0, live: 4.0, ..Default::default() };
/// assert_eq!(combo.apply(&loads), 21.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination name, which doubles as its equation (e.g., "0.9DL + 1.5EQ")
    pub name: String,

    /// Load factors keyed by category
    pub factors: HashMap<LoadCategory, f64>,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(name: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            factors: HashMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, category: LoadCategory, factor: f64) -> Self {
        self.factors.insert(category, factor);
        self
    }

    /// Apply this combination, returning the total factored load.
    ///
    /// Categories are summed in a fixed order so results do not depend on
    /// hash-map iteration order.
    pub fn apply(&self, loads: &LoadComponents) -> f64 {
        LoadCategory::ALL
            .iter()
            .map(|&category| self.get_factor(category) * loads.get(category))
            .sum()
    }

    /// Get the factor for a category (0.0 if not in combination)
    pub fn get_factor(&self, category: LoadCategory) -> f64 {
        self.factors.get(&category).copied().unwrap_or(0.0)
    }
}

/// Combination table for a limit state
pub fn combinations_for(state: LimitState) -> Vec<LoadCombination> {
    use LoadCategory::*;

    match state {
        LimitState::Collapse => vec![
            LoadCombination::new("DL + LL")
                .with_factor(Dead, 1.0)
                .with_factor(Live, 1.0),
            LoadCombination::new("1.5DL + 1.5LL")
                .with_factor(Dead, 1.5)
                .with_factor(Live, 1.5),
            LoadCombination::new("1.2DL + 1.2LL + 1.2WL")
                .with_factor(Dead, 1.2)
                .with_factor(Live, 1.2)
                .with_factor(Wind, 1.2),
            LoadCombination::new("1.5DL + 1.5WL")
                .with_factor(Dead, 1.5)
                .with_factor(Wind, 1.5),
            LoadCombination::new("0.9DL + 1.5WL")
                .with_factor(Dead, 0.9)
                .with_factor(Wind, 1.5),
            LoadCombination::new("0.9DL + 1.5EQ")
                .with_factor(Dead, 0.9)
                .with_factor(Seismic, 1.5),
        ],
        LimitState::Serviceability => vec![
            LoadCombination::new("DL only").with_factor(Dead, 1.0),
            LoadCombination::new("DL + LL (unfactored)")
                .with_factor(Dead, 1.0)
                .with_factor(Live, 1.0),
            LoadCombination::new("DL + WL (unfactored)")
                .with_factor(Dead, 1.0)
                .with_factor(Wind, 1.0),
            LoadCombination::new("DL + EQ (unfactored)")
                .with_factor(Dead, 1.0)
                .with_factor(Seismic, 1.0),
        ],
        LimitState::Compressibility => vec![
            LoadCombination::new("DL only (creep check)").with_factor(Dead, 1.0),
            LoadCombination::new("DL + 0.3LL")
                .with_factor(Dead, 1.0)
                .with_factor(Live, 0.3),
            LoadCombination::new("DL + 0.3WL")
                .with_factor(Dead, 1.0)
                .with_factor(Wind, 0.3),
            LoadCombination::new("DL + 0.3EQ")
                .with_factor(Dead, 1.0)
                .with_factor(Seismic, 0.3),
        ],
    }
}

/// One evaluated combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoredLoad {
    /// Combination name (e.g., "1.5DL + 1.5LL")
    pub name: String,
    /// Factored magnitude in the unit of the analysed load case: N for point
    /// loads, N/m for distributed loads, N·m for an applied moment
    pub load: f64,
}

/// Evaluate every combination of a limit state, in table order
pub fn factored_loads(loads: &LoadComponents, state: LimitState) -> Vec<FactoredLoad> {
    combinations_for(state)
        .into_iter()
        .map(|combo| FactoredLoad {
            load: combo.apply(loads),
            name: combo.name,
        })
        .collect()
}

/// Largest factored load of a limit state. Ties keep the earlier combination.
pub fn governing(loads: &LoadComponents, state: LimitState) -> FactoredLoad {
    factored_loads(loads, state)
        .into_iter()
        .reduce(|best, next| if next.load > best.load { next } else { best })
        .unwrap_or(FactoredLoad {
            name: String::new(),
            load: 0.0,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loads() -> LoadComponents {
        LoadComponents {
            dead: 10.0,
            live: 5.0,
            wind: 2.0,
            seismic: 4.0,
        }
    }

    #[test]
    fn test_collapse_table() {
        let results = factored_loads(&loads(), LimitState::Collapse);
        let values: Vec<f64> = results.iter().map(|r| r.load).collect();
        assert_eq!(results.len(), 6);
        assert_eq!(results[0].name, "DL + LL");
        assert!((values[0] - 15.0).abs() < 1e-12);
        assert!((values[1] - 22.5).abs() < 1e-12);
        assert!((values[2] - 20.4).abs() < 1e-12);
        assert!((values[3] - 18.0).abs() < 1e-12);
        assert!((values[4] - 12.0).abs() < 1e-12);
        assert!((values[5] - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_serviceability_table() {
        let results = factored_loads(&loads(), LimitState::Serviceability);
        let values: Vec<f64> = results.iter().map(|r| r.load).collect();
        assert_eq!(values, vec![10.0, 15.0, 12.0, 14.0]);
    }

    #[test]
    fn test_compressibility_table() {
        let results = factored_loads(&loads(), LimitState::Compressibility);
        assert_eq!(results.len(), 4);
        assert!((results[1].load - 11.5).abs() < 1e-12);
        assert!((results[3].load - 11.2).abs() < 1e-12);
    }

    #[test]
    fn test_governing() {
        let g = governing(&loads(), LimitState::Collapse);
        assert_eq!(g.name, "1.5DL + 1.5LL");
        assert!((g.load - 22.5).abs() < 1e-12);
    }

    #[test]
    fn test_governing_tie_keeps_first() {
        let g = governing(&LoadComponents::default(), LimitState::Serviceability);
        assert_eq!(g.name, "DL only");
        assert_eq!(g.load, 0.0);
    }

    #[test]
    fn test_components_from_point_load() {
        let c = LoadComponents::from_load_case(&LoadCase::PointCenter { p_n: 12_000.0 });
        assert_eq!(c.live, 12_000.0);
        assert_eq!(c.dead, 0.0);
        let g = governing(&c, LimitState::Collapse);
        assert_eq!(g.name, "1.5DL + 1.5LL");
        assert_eq!(g.load, 18_000.0);
    }

    #[test]
    fn test_limit_state_parsing() {
        assert_eq!("strength".parse::<LimitState>().unwrap(), LimitState::Collapse);
        assert_eq!("Serviceability".parse::<LimitState>().unwrap(), LimitState::Serviceability);
        assert!("fatigue".parse::<LimitState>().is_err());

        let state: LimitState = serde_json::from_str("\"strength\"").unwrap();
        assert_eq!(state, LimitState::Collapse);
        assert_eq!(serde_json::to_string(&LimitState::Serviceability).unwrap(), "\"serviceability\"");
    }
}
