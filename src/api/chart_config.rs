use serde::{Deserialize, Serialize};

use crate::core::HexColor;
use crate::error::{ChartError, ChartResult};

/// Declarative description of one render pass.
///
/// Built fresh for every render and handed to the surface unchanged. The
/// type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    pub background: HexColor,
    pub palette: Vec<HexColor>,
    #[serde(default)]
    pub title: Option<TitleStyle>,
    #[serde(default)]
    pub tooltip: TooltipBehavior,
    #[serde(default)]
    pub series: PieSeriesStyle,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            background: HexColor::from("#221E37"),
            palette: default_palette(),
            title: None,
            tooltip: TooltipBehavior::default(),
            series: PieSeriesStyle::default(),
        }
    }
}

impl PieChartConfig {
    /// Sets the surface background color. The series border follows it so
    /// slice separators read as gaps.
    #[must_use]
    pub fn with_background(mut self, background: HexColor) -> Self {
        self.series.border_color = background.clone();
        self.background = background;
        self
    }

    /// Sets the slice color rotation used when records carry no color.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<HexColor>) -> Self {
        self.palette = palette;
        self
    }

    /// Sets a centered title block above the ring.
    #[must_use]
    pub fn with_title(mut self, title: TitleStyle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets inner and outer ring radii in pixels.
    #[must_use]
    pub fn with_radii(mut self, inner_radius_px: f64, outer_radius_px: f64) -> Self {
        self.series.inner_radius_px = inner_radius_px;
        self.series.outer_radius_px = outer_radius_px;
        self
    }

    /// Sets the fixed series width in pixels.
    #[must_use]
    pub fn with_series_width(mut self, series_width_px: f64) -> Self {
        self.series.series_width_px = series_width_px;
        self
    }

    /// Sets the tooltip offset from the pointer.
    #[must_use]
    pub fn with_tooltip_offset(mut self, dx_px: f64, dy_px: f64) -> Self {
        self.tooltip.offset_px = (dx_px, dy_px);
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_palette() -> Vec<HexColor> {
    ["#CB2B83", "#00B8D9", "#8E33FF", "#FF5630", "#FFAB00"]
        .into_iter()
        .map(HexColor::from)
        .collect()
}

/// Centered title block for hosts that render a heading above the ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleStyle {
    pub text: String,
    pub color: HexColor,
    pub font_size_px: f64,
    pub font_weight: u32,
}

impl TitleStyle {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: HexColor::from("#999999"),
            font_size_px: 14.0,
            font_weight: 400,
        }
    }
}

/// Hover tooltip behavior flags handed to the surface.
///
/// The card chrome itself lives in the markup (`TooltipStyle`); the surface
/// only needs to know where to place the node and that it carries no chrome
/// of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipBehavior {
    /// Keep the tooltip inside the surface bounds.
    pub confine: bool,
    /// Attach the tooltip node to the document body instead of the container.
    pub append_to_body: bool,
    /// Offset from the pointer, in pixels.
    pub offset_px: (f64, f64),
}

impl Default for TooltipBehavior {
    fn default() -> Self {
        Self {
            confine: true,
            append_to_body: true,
            offset_px: (12.0, 12.0),
        }
    }
}

/// Tooltip position for a pointer location, honoring the configured offset.
#[must_use]
pub fn tooltip_position(pointer: (f64, f64), behavior: TooltipBehavior) -> (f64, f64) {
    (
        pointer.0 + behavior.offset_px.0,
        pointer.1 + behavior.offset_px.1,
    )
}

/// Ring geometry, border, and label presentation for the pie series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSeriesStyle {
    pub inner_radius_px: f64,
    pub outer_radius_px: f64,
    pub series_width_px: f64,
    pub border_color: HexColor,
    pub border_width_px: f64,
    pub label: LabelStyle,
    pub label_line: LabelLineStyle,
}

impl Default for PieSeriesStyle {
    fn default() -> Self {
        Self {
            inner_radius_px: 100.0,
            outer_radius_px: 140.0,
            series_width_px: 514.0,
            border_color: HexColor::from("#221E37"),
            border_width_px: 1.0,
            label: LabelStyle::default(),
            label_line: LabelLineStyle::default(),
        }
    }
}

/// Edge-aligned two-line slice label: collection name over percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub min_margin_px: f64,
    pub edge_distance_px: f64,
    pub line_height_px: f64,
    /// Spacer row between the name and percent lines.
    pub gap_height_px: f64,
    pub name: RichTextStyle,
    pub percent: RichTextStyle,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            min_margin_px: 5.0,
            edge_distance_px: 10.0,
            line_height_px: 14.0,
            gap_height_px: 2.0,
            name: RichTextStyle {
                font_size_px: 14.0,
                font_family: "Public Sans".to_owned(),
                font_weight: 500,
                color: HexColor::from("#E6E0FF"),
                line_height_px: 12.0,
            },
            percent: RichTextStyle {
                font_size_px: 12.0,
                font_family: "Roboto Mono".to_owned(),
                font_weight: 700,
                color: HexColor::from("#BBBBBB"),
                line_height_px: 14.0,
            },
        }
    }
}

/// One rich-text segment of a slice label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextStyle {
    pub font_size_px: f64,
    pub font_family: String,
    pub font_weight: u32,
    pub color: HexColor,
    pub line_height_px: f64,
}

/// Connector line geometry between a slice and its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelLineStyle {
    pub length_px: f64,
    pub length2_px: f64,
    pub max_surface_angle_deg: f64,
}

impl Default for LabelLineStyle {
    fn default() -> Self {
        Self {
            length_px: 18.0,
            length2_px: 8.0,
            max_surface_angle_deg: 80.0,
        }
    }
}
