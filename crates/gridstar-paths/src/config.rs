use crate::heuristic::HeuristicKind;
use crate::movement::Movement;

/// Serializable generator settings.
///
/// Obstacles are not part of the configuration; they are added to the
/// [`Generator`](crate::Generator) directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// World width in cells.
    /// Default: 25
    pub width: i32,
    /// World height in cells.
    /// Default: 25
    pub height: i32,
    /// Allow 8-way movement.
    /// Default: false
    pub diagonal: bool,
    /// Default: manhattan
    pub heuristic: HeuristicKind,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            diagonal: false,
            heuristic: HeuristicKind::Manhattan,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the world size.
    pub fn with_world_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder-style setter for diagonal movement.
    pub fn with_diagonal(mut self, enable: bool) -> Self {
        self.diagonal = enable;
        self
    }

    /// Builder-style setter for the heuristic.
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[inline]
    pub fn movement(&self) -> Movement {
        Movement::from_diagonal(self.diagonal)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: GeneratorConfig =
            serde_json::from_str(r#"{ "diagonal": true, "heuristic": "euclidean" }"#).unwrap();
        assert_eq!(cfg.width, 25);
        assert!(cfg.diagonal);
        assert_eq!(cfg.heuristic, HeuristicKind::Euclidean);
    }

    #[test]
    fn round_trip() {
        let cfg = GeneratorConfig::new().with_world_size(40, 12);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
