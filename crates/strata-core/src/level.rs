use crate::color::Rgb;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse levels RON: {0}")]
    ParseError(String),

    #[error("Level at position {position} has id {id}; ids must equal their position")]
    IdMismatch { position: usize, id: u8 },
}

/// A single tier definition loaded from RON data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSpec {
    /// Stable tier id. Doubles as array position and paint order.
    pub id: u8,
    /// Front-face fill.
    pub color: Rgb,
    /// Side/top-face fill.
    pub dark_color: Rgb,
    /// Human-readable tier name for the legend and metrics panel.
    pub label: String,
    /// Rate metric.
    pub d1: f32,
    /// Acceleration metric.
    pub d2: f32,
    /// Stability metric.
    pub d3: f32,
}

/// Immutable collection of tier definitions, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct LevelTable {
    levels: Vec<LevelSpec>,
}

impl LevelTable {
    /// Build a table from raw specs, enforcing id == position.
    pub fn new(levels: Vec<LevelSpec>) -> Result<Self, LoadError> {
        for (position, spec) in levels.iter().enumerate() {
            if spec.id as usize != position {
                return Err(LoadError::IdMismatch {
                    position,
                    id: spec.id,
                });
            }
        }
        Ok(Self { levels })
    }

    /// Look up a tier by id. Returns None if out of range.
    pub fn get(&self, id: u8) -> Option<&LevelSpec> {
        self.levels.get(id as usize)
    }

    /// Tiers in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &LevelSpec> {
        self.levels.iter()
    }

    /// Number of tiers.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Descriptive (not enforced) property of the reference data: each
    /// metric is non-decreasing across increasing id. Returns a warning
    /// string per violation for diagnostics.
    pub fn monotonicity_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for pair in self.levels.windows(2) {
            let (lo, hi) = (&pair[0], &pair[1]);
            for (name, a, b) in [
                ("d1", lo.d1, hi.d1),
                ("d2", lo.d2, hi.d2),
                ("d3", lo.d3, hi.d3),
            ] {
                if b < a {
                    warnings.push(format!(
                        "{name} decreases from level {} ({a}) to level {} ({b})",
                        lo.id, hi.id
                    ));
                }
            }
        }
        warnings
    }

    /// The built-in eleven-tier reference table. Parsed once from the
    /// embedded RON data, then shared read-only.
    pub fn builtin() -> &'static LevelTable {
        static TABLE: OnceLock<LevelTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            load_levels_from_str(include_str!("../../../data/levels.ron"))
                .expect("embedded levels.ron is valid")
        })
    }
}

/// Parse a levels RON string into a LevelTable.
pub fn load_levels_from_str(ron_str: &str) -> Result<LevelTable, LoadError> {
    let options = ron::Options::default();
    let levels: Vec<LevelSpec> = options
        .from_str(ron_str)
        .map_err(|e| LoadError::ParseError(e.to_string()))?;
    LevelTable::new(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOTAL_LEVELS;

    #[test]
    fn test_builtin_has_eleven_levels() {
        let table = LevelTable::builtin();
        assert_eq!(table.len(), TOTAL_LEVELS as usize);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_builtin_ids_equal_positions() {
        for (position, spec) in LevelTable::builtin().iter().enumerate() {
            assert_eq!(spec.id as usize, position);
        }
    }

    #[test]
    fn test_builtin_reference_values() {
        let table = LevelTable::builtin();
        let base = table.get(0).unwrap();
        assert_eq!(base.label, "Base doodle");
        assert_eq!(base.color, Rgb(0x80, 0x80, 0x00));
        assert_eq!((base.d1, base.d2, base.d3), (0.0, 0.0, 0.0));

        let apex = table.get(10).unwrap();
        assert_eq!(apex.label, "Systemic");
        assert_eq!(apex.dark_color, Rgb(0x00, 0x00, 0x66));
        assert_eq!((apex.d1, apex.d2, apex.d3), (5.0, 2.0, 1.0));

        assert!(table.get(11).is_none());
    }

    #[test]
    fn test_builtin_metrics_monotone() {
        assert!(LevelTable::builtin().monotonicity_warnings().is_empty());
    }

    #[test]
    fn test_monotonicity_warning_reported() {
        let table = load_levels_from_str(
            r##"[
                (id: 0, color: "#808000", dark_color: "#6B6B00", label: "a", d1: 1.0, d2: 0.0, d3: 0.0),
                (id: 1, color: "#8B7D00", dark_color: "#736700", label: "b", d1: 0.5, d2: 0.0, d3: 0.0),
            ]"##,
        )
        .unwrap();
        let warnings = table.monotonicity_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("d1"));
    }

    #[test]
    fn test_id_mismatch_rejected() {
        let err = load_levels_from_str(
            r##"[(id: 3, color: "#808000", dark_color: "#6B6B00", label: "a", d1: 0.0, d2: 0.0, d3: 0.0)]"##,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::IdMismatch { position: 0, id: 3 }));
    }

    #[test]
    fn test_parse_error_surfaces() {
        assert!(matches!(
            load_levels_from_str("not ron"),
            Err(LoadError::ParseError(_))
        ));
    }
}
