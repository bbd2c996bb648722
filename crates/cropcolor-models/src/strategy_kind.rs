//! Strategy identifiers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three extraction strategies, selected once per batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Cluster raw RGB pixels, pick the largest cluster.
    Plain,
    /// Drop near-black/near-white pixels, weight cluster size by saturation.
    Filtered,
    /// Cluster in a hue-circular HSV feature space.
    #[default]
    HsvCircular,
}

impl StrategyKind {
    /// Get string representation of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Plain => "plain",
            StrategyKind::Filtered => "filtered",
            StrategyKind::HsvCircular => "hsv",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}', expected one of: plain, filtered, hsv")]
pub struct ParseStrategyError(pub String);

impl std::str::FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(StrategyKind::Plain),
            "filtered" => Ok(StrategyKind::Filtered),
            "hsv" | "hsv-circular" | "hsv_circular" => Ok(StrategyKind::HsvCircular),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("plain".parse::<StrategyKind>(), Ok(StrategyKind::Plain));
        assert_eq!("filtered".parse::<StrategyKind>(), Ok(StrategyKind::Filtered));
        assert_eq!("hsv".parse::<StrategyKind>(), Ok(StrategyKind::HsvCircular));
        assert_eq!("HSV-Circular".parse::<StrategyKind>(), Ok(StrategyKind::HsvCircular));
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "lab".parse::<StrategyKind>().unwrap_err();
        assert_eq!(err, ParseStrategyError("lab".to_string()));
    }

    #[test]
    fn test_display_roundtrip() {
        for kind in [StrategyKind::Plain, StrategyKind::Filtered, StrategyKind::HsvCircular] {
            assert_eq!(kind.to_string().parse::<StrategyKind>(), Ok(kind));
        }
    }
}
