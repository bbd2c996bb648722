//! Per-URL extraction outcomes.
//!
//! Every distinct input URL produces exactly one outcome. Failures are
//! data, not errors: they never abort a batch run and are rendered as an
//! empty `dominant_color` field in the output.

use crate::color::HexColor;

/// Why extraction failed for one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Fetch failed: timeout, connection failure, or non-2xx status.
    Network(String),
    /// The downloaded bytes are not a decodable raster image.
    Decode(String),
    /// No cluster could be formed from the pixel sample.
    Degenerate(String),
}

impl FailureReason {
    /// Short machine-friendly label for the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            FailureReason::Network(_) => "network",
            FailureReason::Decode(_) => "decode",
            FailureReason::Degenerate(_) => "degenerate",
        }
    }

    /// Human-readable detail attached to the failure.
    pub fn detail(&self) -> &str {
        match self {
            FailureReason::Network(detail)
            | FailureReason::Decode(detail)
            | FailureReason::Degenerate(detail) => detail,
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.detail())
    }
}

/// Terminal result of processing one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// A dominant color was extracted.
    Resolved(HexColor),
    /// Extraction failed; the batch continues.
    Failed(FailureReason),
}

impl ExtractionOutcome {
    /// The extracted color, if any.
    pub fn hex_color(&self) -> Option<HexColor> {
        match self {
            ExtractionOutcome::Resolved(color) => Some(*color),
            ExtractionOutcome::Failed(_) => None,
        }
    }

    /// The failure reason, if any.
    pub fn failure(&self) -> Option<&FailureReason> {
        match self {
            ExtractionOutcome::Resolved(_) => None,
            ExtractionOutcome::Failed(reason) => Some(reason),
        }
    }

    /// Whether a color was extracted.
    pub fn is_resolved(&self) -> bool {
        matches!(self, ExtractionOutcome::Resolved(_))
    }
}
