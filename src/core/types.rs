use std::fmt;

use serde::{Deserialize, Serialize};

/// Pixel dimensions of the drawable area a chart is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Display color kept in CSS hex form (`#rrggbb`).
///
/// Colors never reach a raster pipeline in this crate; they flow unchanged
/// into the declarative configuration and into tooltip markup, so the CSS
/// string is the canonical representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    #[must_use]
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HexColor {
    fn from(css: &str) -> Self {
        Self(css.to_owned())
    }
}

impl From<String> for HexColor {
    fn from(css: String) -> Self {
        Self(css)
    }
}
