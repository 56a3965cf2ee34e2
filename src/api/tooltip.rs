//! Tooltip markup assembly.
//!
//! The surface inserts the returned fragment verbatim. Interpolated fields
//! are not escaped: names and image URLs come from the product's fixed
//! tables, not from untrusted input.

use crate::core::{HexColor, OTHER_LABEL, SliceExtra, SubCategory, derived_usd};

use super::text_format::{format_usd, loan_count_label, rounded_percent};

/// Visual constants of the tooltip card and its rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipStyle {
    pub card_background: HexColor,
    pub text_color: HexColor,
    pub font_family: String,
    /// Swatch color for aggregate breakdown rows, which carry no color of
    /// their own.
    pub fallback_swatch: HexColor,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            card_background: HexColor::from("#302B4D"),
            text_color: HexColor::from("#FFFFFF"),
            font_family: "Public Sans".to_owned(),
            fallback_swatch: HexColor::from("#00B8D9"),
        }
    }
}

/// Everything known about the hovered slice when the tooltip fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipContext<'a> {
    pub name: &'a str,
    /// The hovered slice's share, in percent, before rounding.
    pub share: f64,
    pub color: &'a HexColor,
    pub extra: Option<&'a SliceExtra>,
}

/// Builds the markup fragment for the hovered slice.
///
/// A slice named [`OTHER_LABEL`] renders one row per entry of
/// `other_breakdown`, each computing its own amount from its own share,
/// regardless of the aggregate's own share value. Every other slice renders
/// a single-row card; missing metadata falls back to a zero amount, zero
/// loans, and a color swatch.
#[must_use]
pub fn render_tooltip(
    ctx: TooltipContext<'_>,
    style: &TooltipStyle,
    other_breakdown: &[SubCategory],
    total_usd: f64,
) -> String {
    if ctx.name == OTHER_LABEL {
        let rows: String = other_breakdown
            .iter()
            .map(|sub| {
                let text = format!(
                    "{} {} {}% ({})",
                    sub.name,
                    format_usd(derived_usd(total_usd, sub.share)),
                    sub.share,
                    loan_count_label(sub.loans)
                );
                row(
                    style,
                    &avatar(sub.image.as_deref(), &style.fallback_swatch),
                    &text,
                )
            })
            .collect();
        return card(style, &rows);
    }

    let fallback = SliceExtra {
        usd: 0.0,
        loans: 0,
        image: None,
    };
    let extra = ctx.extra.unwrap_or(&fallback);
    let text = format!(
        "{} {} {}% ({})",
        ctx.name,
        format_usd(extra.usd),
        rounded_percent(ctx.share),
        loan_count_label(extra.loans)
    );
    let single = row(style, &avatar(extra.image.as_deref(), ctx.color), &text);
    card(style, &single)
}

fn card(style: &TooltipStyle, rows: &str) -> String {
    format!(
        "<div style=\"display:flex;flex-direction:column;justify-content:center;\
         align-items:flex-start;padding:24px;gap:16px;position:relative;width:fit-content;\
         background:{bg};box-shadow:0px 0px 2px rgba(0,0,0,0.24),\
         0px 12px 24px -4px rgba(0,0,0,0.24);border-radius:16px;\">{rows}</div>",
        bg = style.card_background,
    )
}

fn row(style: &TooltipStyle, avatar: &str, text: &str) -> String {
    format!(
        "<div style=\"display:flex;flex-direction:row;align-items:center;padding:0;\
         gap:15px;width:100%;height:44px;\">{avatar}\
         <div style=\"font-family:'{font}';font-weight:500;font-size:13px;\
         line-height:22px;color:{color};\">{text}</div></div>",
        font = style.font_family,
        color = style.text_color,
    )
}

fn avatar(image: Option<&str>, swatch: &HexColor) -> String {
    match image {
        Some(url) if !url.is_empty() => format!(
            "<img src=\"{url}\" style=\"width:32px;height:32px;\
             border-radius:1000px;object-fit:cover;\" />"
        ),
        _ => format!(
            "<div style=\"width:32px;height:32px;border-radius:1000px;\
             background:{swatch};\"></div>"
        ),
    }
}
