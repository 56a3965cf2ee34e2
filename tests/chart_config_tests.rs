use pie_rs::ChartError;
use pie_rs::api::{PieChartConfig, TitleStyle, tooltip_position};
use pie_rs::core::HexColor;

#[test]
fn default_config_matches_the_shipped_presentation() {
    let config = PieChartConfig::default();

    assert_eq!(config.background.as_str(), "#221E37");
    assert_eq!(config.palette.len(), 5);
    assert_eq!(config.palette[0].as_str(), "#CB2B83");
    assert!(config.title.is_none());

    assert!(config.tooltip.confine);
    assert!(config.tooltip.append_to_body);
    assert_eq!(config.tooltip.offset_px, (12.0, 12.0));

    assert_eq!(config.series.inner_radius_px, 100.0);
    assert_eq!(config.series.outer_radius_px, 140.0);
    assert_eq!(config.series.series_width_px, 514.0);
    assert_eq!(config.series.border_color, config.background);
    assert_eq!(config.series.border_width_px, 1.0);

    assert_eq!(config.series.label.min_margin_px, 5.0);
    assert_eq!(config.series.label.edge_distance_px, 10.0);
    assert_eq!(config.series.label.name.font_family, "Public Sans");
    assert_eq!(config.series.label.percent.font_family, "Roboto Mono");

    assert_eq!(config.series.label_line.length_px, 18.0);
    assert_eq!(config.series.label_line.length2_px, 8.0);
    assert_eq!(config.series.label_line.max_surface_angle_deg, 80.0);
}

#[test]
fn builders_override_individual_knobs() {
    let config = PieChartConfig::default()
        .with_radii(20.0, 60.0)
        .with_series_width(400.0)
        .with_tooltip_offset(4.0, 6.0)
        .with_title(TitleStyle::new("Reading hours"));

    assert_eq!(config.series.inner_radius_px, 20.0);
    assert_eq!(config.series.outer_radius_px, 60.0);
    assert_eq!(config.series.series_width_px, 400.0);
    assert_eq!(config.tooltip.offset_px, (4.0, 6.0));
    assert_eq!(config.title.expect("title set").text, "Reading hours");
}

#[test]
fn background_builder_keeps_the_slice_border_in_sync() {
    let config = PieChartConfig::default().with_background(HexColor::from("#101010"));

    assert_eq!(config.background.as_str(), "#101010");
    assert_eq!(config.series.border_color.as_str(), "#101010");
}

#[test]
fn config_round_trips_through_json() {
    let config = PieChartConfig::default().with_title(TitleStyle::new("Collateral"));

    let json = config.to_json_pretty().expect("serialize config");
    let back = PieChartConfig::from_json_str(&json).expect("parse config");

    assert_eq!(back, config);
}

#[test]
fn malformed_json_is_rejected_as_invalid_data() {
    let result = PieChartConfig::from_json_str("{not json");

    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn tooltip_position_applies_the_configured_offset() {
    let config = PieChartConfig::default();

    assert_eq!(tooltip_position((100.0, 200.0), config.tooltip), (112.0, 212.0));
}
