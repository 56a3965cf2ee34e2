mod chart_config;
mod resize;
mod text_format;
mod tooltip;

pub use chart_config::{
    LabelLineStyle, LabelStyle, PieChartConfig, PieSeriesStyle, RichTextStyle, TitleStyle,
    TooltipBehavior, tooltip_position,
};
pub use resize::{ResizeEventHub, ResizeEvents, SubscriptionId};
pub use text_format::{format_usd, loan_count_label, rounded_percent};
pub use tooltip::{TooltipContext, TooltipStyle, render_tooltip};

use tracing::debug;

use crate::core::{
    CategoryRecord, LabelLayout, LabelLayoutParams, PieSlice, SliceExtra, SubCategory,
    apply_edge_anchor, derived_usd, project_slices,
};
use crate::error::{ChartError, ChartResult};
use crate::render::PieSurface;

/// One mounted chart: the surface and its resize subscription, owned for
/// exactly the span between a successful activation and deactivation.
#[derive(Debug)]
struct Mounted<S> {
    surface: S,
    resize: SubscriptionId,
}

/// Lifecycle manager for one breakdown chart instance.
///
/// Control flow: `activate` → (resize events → `handle_resize`) →
/// `deactivate`. The view never draws; it projects the category table,
/// applies the declarative configuration exactly once per activation, and
/// guarantees ordered teardown.
#[derive(Debug)]
pub struct PieChartView<S: PieSurface> {
    config: PieChartConfig,
    tooltip_style: TooltipStyle,
    categories: Vec<CategoryRecord>,
    other_breakdown: Vec<SubCategory>,
    total_usd: f64,
    mounted: Option<Mounted<S>>,
}

impl<S: PieSurface> PieChartView<S> {
    #[must_use]
    pub fn new(
        config: PieChartConfig,
        categories: Vec<CategoryRecord>,
        other_breakdown: Vec<SubCategory>,
        total_usd: f64,
    ) -> Self {
        Self {
            config,
            tooltip_style: TooltipStyle::default(),
            categories,
            other_breakdown,
            total_usd,
            mounted: None,
        }
    }

    /// Overrides the tooltip card styling.
    #[must_use]
    pub fn with_tooltip_style(mut self, style: TooltipStyle) -> Self {
        self.tooltip_style = style;
        self
    }

    #[must_use]
    pub fn config(&self) -> &PieChartConfig {
        &self.config
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.mounted.is_some()
    }

    /// Projects the category table into the shape the surface consumes.
    #[must_use]
    pub fn slices(&self) -> Vec<PieSlice> {
        project_slices(&self.categories, self.total_usd)
    }

    /// Mounts the chart on `surface`.
    ///
    /// A `None` surface means the host had no container at activation time;
    /// the view skips setup silently and stays inactive. Configuration is
    /// applied exactly once, and the resize subscription is acquired only
    /// after the apply succeeded, so a resize event can never observe a
    /// surface without configuration.
    pub fn activate(
        &mut self,
        surface: Option<S>,
        events: &mut dyn ResizeEvents,
    ) -> ChartResult<()> {
        if self.mounted.is_some() {
            return Err(ChartError::Surface(
                "view is already active; deactivate before mounting a new surface".to_owned(),
            ));
        }
        let Some(mut surface) = surface else {
            debug!("activation skipped: no container surface");
            return Ok(());
        };

        let slices = project_slices(&self.categories, self.total_usd);
        surface.apply(&self.config, &slices)?;
        let resize = events.subscribe();
        self.mounted = Some(Mounted { surface, resize });
        Ok(())
    }

    /// Relays out the existing surface after a host resize. No-op while
    /// inactive; never re-creates or re-applies.
    pub fn handle_resize(&mut self) -> ChartResult<()> {
        if let Some(mounted) = &mut self.mounted {
            mounted.surface.relayout()?;
        }
        Ok(())
    }

    /// Unmounts: the subscription is handed back before the surface is
    /// released, so a late resize event can never reach a dead surface.
    /// Safe to call without a prior successful activation.
    pub fn deactivate(&mut self, events: &mut dyn ResizeEvents) {
        if let Some(mut mounted) = self.mounted.take() {
            events.unsubscribe(mounted.resize);
            mounted.surface.release();
        }
    }

    /// Connector override for one label, using the mounted surface's
    /// current width. `None` while inactive.
    #[must_use]
    pub fn label_layout(&self, params: &LabelLayoutParams) -> Option<LabelLayout> {
        let mounted = self.mounted.as_ref()?;
        Some(apply_edge_anchor(params, mounted.surface.width_px()))
    }

    /// Tooltip markup for the hovered category, or `None` for names outside
    /// the table.
    #[must_use]
    pub fn tooltip_markup(&self, hovered: &str) -> Option<String> {
        let record = self
            .categories
            .iter()
            .find(|record| record.name == hovered)?;
        let extra = SliceExtra {
            usd: derived_usd(self.total_usd, record.share),
            loans: record.loans,
            image: record.image.clone(),
        };
        let ctx = TooltipContext {
            name: &record.name,
            share: record.share,
            color: &record.color,
            extra: Some(&extra),
        };
        Some(render_tooltip(
            ctx,
            &self.tooltip_style,
            &self.other_breakdown,
            self.total_usd,
        ))
    }
}
