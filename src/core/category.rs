use serde::{Deserialize, Serialize};

use crate::core::types::HexColor;

/// Reserved name of the aggregate category rendered with a multi-row tooltip.
pub const OTHER_LABEL: &str = "Other";

/// One slice of the breakdown, as the hosting product supplies it.
///
/// No invariants are enforced here: shares are not required to sum to 100,
/// names are not required to be unique, and negative shares pass through.
/// The tables are trusted display data, and projection is a pure transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    /// Share of the total, in percent.
    pub share: f64,
    pub color: HexColor,
    /// Number of open loans backed by this collection.
    pub loans: u32,
    /// Collection thumbnail URL; slices without one render a color swatch.
    pub image: Option<String>,
}

impl CategoryRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, share: f64, color: HexColor, loans: u32) -> Self {
        Self {
            name: name.into(),
            share,
            color,
            loans,
            image: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }
}

/// One row of the fixed table backing the aggregate slice.
///
/// Rows carry no color of their own; the tooltip renders them with a
/// fallback swatch when no image is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub name: String,
    pub share: f64,
    pub loans: u32,
    pub image: Option<String>,
}

impl SubCategory {
    #[must_use]
    pub fn new(name: impl Into<String>, share: f64, loans: u32) -> Self {
        Self {
            name: name.into(),
            share,
            loans,
            image: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }
}

/// Pass-through metadata attached to a projected slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceExtra {
    pub usd: f64,
    pub loans: u32,
    pub image: Option<String>,
}

/// The shape the rendering surface consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: HexColor,
    pub extra: SliceExtra,
}

/// Monetary amount represented by `share` percent of `total_usd`.
#[must_use]
pub fn derived_usd(total_usd: f64, share: f64) -> f64 {
    total_usd * (share / 100.0)
}

/// Projects category records into render-facing slices, in input order.
#[must_use]
pub fn project_slices(records: &[CategoryRecord], total_usd: f64) -> Vec<PieSlice> {
    records
        .iter()
        .map(|record| PieSlice {
            name: record.name.clone(),
            value: record.share,
            color: record.color.clone(),
            extra: SliceExtra {
                usd: derived_usd(total_usd, record.share),
                loans: record.loans,
                image: record.image.clone(),
            },
        })
        .collect()
}
