//! Connector-line anchoring for edge-aligned slice labels.
//!
//! The chart width is always an explicit parameter so the anchor decision
//! stays a pure function of its inputs rather than reading a live surface
//! handle.

/// Bounding box of one rendered slice label, in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelRect {
    pub x: f64,
    pub width: f64,
}

impl LabelRect {
    #[must_use]
    pub fn new(x: f64, width: f64) -> Self {
        Self { x, width }
    }
}

/// Which edge of the label the connector line terminates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    Left,
    Right,
}

/// Labels strictly left of the horizontal midpoint anchor on their left
/// edge; everything else, including a label sitting exactly at the midpoint,
/// anchors right.
#[must_use]
pub fn resolve_label_side(rect: LabelRect, chart_width: f64) -> LabelSide {
    if rect.x < chart_width / 2.0 {
        LabelSide::Left
    } else {
        LabelSide::Right
    }
}

/// Horizontal coordinate the connector terminal snaps to for `side`.
#[must_use]
pub fn connector_anchor_x(rect: LabelRect, side: LabelSide) -> f64 {
    match side {
        LabelSide::Left => rect.x,
        LabelSide::Right => rect.x + rect.width,
    }
}

/// Layout inputs the engine hands back for one label during a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLayoutParams {
    pub label_rect: LabelRect,
    /// Connector polyline: surface exit, elbow, label-side terminal.
    pub label_line_points: [[f64; 2]; 3],
}

/// Override returned to the engine for one label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLayout {
    pub label_line_points: [[f64; 2]; 3],
}

/// Re-anchors the connector terminal to the label edge facing the chart.
///
/// Only the terminal point's x coordinate changes; the exit and elbow points
/// stay where the engine placed them.
#[must_use]
pub fn apply_edge_anchor(params: &LabelLayoutParams, chart_width: f64) -> LabelLayout {
    let side = resolve_label_side(params.label_rect, chart_width);
    let mut points = params.label_line_points;
    points[2][0] = connector_anchor_x(params.label_rect, side);
    LabelLayout {
        label_line_points: points,
    }
}
