//! Prints the default configuration JSON and every category's tooltip
//! markup, mounted on a `NullSurface`. Handy for eyeballing template
//! changes without a browser host.

use pie_rs::api::{PieChartConfig, ResizeEventHub};
use pie_rs::core::Viewport;
use pie_rs::presets::{COLLATERAL_TOTAL_USD, collateral_categories, collateral_other_breakdown};
use pie_rs::render::NullSurface;
use pie_rs::{ChartResult, PieChartView};

fn main() -> ChartResult<()> {
    let _ = pie_rs::telemetry::init_default_tracing();

    let config = PieChartConfig::default();
    println!("{}", config.to_json_pretty()?);

    let categories = collateral_categories();
    let names: Vec<String> = categories.iter().map(|c| c.name.clone()).collect();

    let mut view = PieChartView::new(
        config,
        categories,
        collateral_other_breakdown(),
        COLLATERAL_TOTAL_USD,
    );
    let mut events = ResizeEventHub::new();
    view.activate(Some(NullSurface::new(Viewport::new(514, 388))), &mut events)?;

    for name in &names {
        if let Some(markup) = view.tooltip_markup(name) {
            println!("--- {name}");
            println!("{markup}");
        }
    }

    view.deactivate(&mut events);
    Ok(())
}
