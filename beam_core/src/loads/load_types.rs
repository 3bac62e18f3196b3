//! Load categories used by the load-combination tables.

use serde::{Deserialize, Serialize};

use super::LoadCase;

/// Load category (IS 875 / IS 456 terminology)
///
/// # Example
/// ```
/// use beam_core::loads::LoadCategory;
///
/// assert_eq!(LoadCategory::Seismic.code(), "EQ");
/// assert_eq!(LoadCategory::Dead.description(), "Dead load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadCategory {
    /// DL - Dead load (self-weight and permanent finishes)
    Dead,
    /// LL - Live (imposed) load
    Live,
    /// WL - Wind load
    Wind,
    /// EQ - Earthquake load
    Seismic,
}

impl LoadCategory {
    /// All categories in standard order
    pub const ALL: [LoadCategory; 4] = [
        LoadCategory::Dead,
        LoadCategory::Live,
        LoadCategory::Wind,
        LoadCategory::Seismic,
    ];

    /// Standard abbreviation used in combination names
    pub fn code(&self) -> &'static str {
        match self {
            LoadCategory::Dead => "DL",
            LoadCategory::Live => "LL",
            LoadCategory::Wind => "WL",
            LoadCategory::Seismic => "EQ",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadCategory::Dead => "Dead load",
            LoadCategory::Live => "Live load",
            LoadCategory::Wind => "Wind load",
            LoadCategory::Seismic => "Earthquake load",
        }
    }

    /// Category a single analysed load is booked under.
    ///
    /// UDL counts as dead load, point loads as live load, the triangular load
    /// as wind and the applied moment as seismic.
    pub fn of(case: &LoadCase) -> Self {
        match case {
            LoadCase::UniformDistributed { .. } => LoadCategory::Dead,
            LoadCase::PointCenter { .. } | LoadCase::PointAnywhere { .. } => LoadCategory::Live,
            LoadCase::LinearlyVaryingDistributed { .. } => LoadCategory::Wind,
            LoadCase::AppliedMoment { .. } => LoadCategory::Seismic,
        }
    }
}

impl std::fmt::Display for LoadCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of_load_case() {
        assert_eq!(LoadCategory::of(&LoadCase::UniformDistributed { w_n_per_m: 1.0 }), LoadCategory::Dead);
        assert_eq!(LoadCategory::of(&LoadCase::PointAnywhere { p_n: 1.0, a_m: 0.5 }), LoadCategory::Live);
        assert_eq!(
            LoadCategory::of(&LoadCase::LinearlyVaryingDistributed { w_max_n_per_m: 1.0 }),
            LoadCategory::Wind
        );
        assert_eq!(LoadCategory::of(&LoadCase::AppliedMoment { m_nm: 1.0 }), LoadCategory::Seismic);
    }

    #[test]
    fn test_codes_unique() {
        let mut codes: Vec<_> = LoadCategory::ALL.iter().map(|c| c.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), LoadCategory::ALL.len());
    }
}
