//! Dataset row schemas.
//!
//! The input schema is `crop_name,image_url` with a required header row;
//! the output schema appends a `dominant_color` column. Blank URL fields
//! deserialize to `None` so rows without an image survive the run with an
//! empty color.

use serde::{Deserialize, Deserializer, Serialize};

use crate::color::HexColor;

/// One input row of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRecord {
    /// Record name, carried through verbatim.
    pub crop_name: String,
    /// Source image URL; blank or missing fields become `None`.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image_url: Option<String>,
}

/// One output row: the input columns plus the extracted color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    pub crop_name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image_url: Option<String>,
    /// Lowercase `#rrggbb`, or `None` (empty field) when extraction
    /// failed or the row had no URL.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub dominant_color: Option<String>,
}

impl AnnotatedRecord {
    /// Annotate an input row with an optional extracted color.
    pub fn from_record(record: CropRecord, color: Option<HexColor>) -> Self {
        Self {
            crop_name: record.crop_name,
            image_url: record.image_url,
            dominant_color: color.map(|c| c.to_string()),
        }
    }
}

/// Treat empty and whitespace-only fields as absent.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
