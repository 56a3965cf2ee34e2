use std::cell::RefCell;
use std::rc::Rc;

use pie_rs::api::{PieChartConfig, ResizeEventHub, ResizeEvents, SubscriptionId};
use pie_rs::core::{LabelLayoutParams, LabelRect, PieSlice, Viewport};
use pie_rs::presets::{COLLATERAL_TOTAL_USD, collateral_categories, collateral_other_breakdown};
use pie_rs::render::{NullSurface, PieSurface, SurfaceOp};
use pie_rs::{ChartError, ChartResult, PieChartView};

fn preset_view() -> PieChartView<NullSurface> {
    PieChartView::new(
        PieChartConfig::default(),
        collateral_categories(),
        collateral_other_breakdown(),
        COLLATERAL_TOTAL_USD,
    )
}

#[test]
fn activation_applies_config_exactly_once() {
    let mut view = preset_view();
    let mut hub = ResizeEventHub::new();
    let surface = NullSurface::new(Viewport::new(514, 388));
    let log = surface.log();

    view.activate(Some(surface), &mut hub).expect("activate");

    assert!(view.is_active());
    assert_eq!(*log.borrow(), vec![SurfaceOp::Apply]);
    assert_eq!(hub.active_count(), 1);
}

#[test]
fn activation_without_container_is_silently_skipped() {
    let mut view = preset_view();
    let mut hub = ResizeEventHub::new();

    view.activate(None, &mut hub).expect("skipped activation");

    assert!(!view.is_active());
    assert_eq!(hub.active_count(), 0);
}

#[test]
fn resize_relayouts_the_existing_surface_without_reapplying() {
    let mut view = preset_view();
    let mut hub = ResizeEventHub::new();
    let surface = NullSurface::new(Viewport::new(514, 388));
    let log = surface.log();

    view.activate(Some(surface), &mut hub).expect("activate");
    view.handle_resize().expect("first resize");
    view.handle_resize().expect("second resize");

    assert_eq!(
        *log.borrow(),
        vec![SurfaceOp::Apply, SurfaceOp::Relayout, SurfaceOp::Relayout]
    );
}

#[test]
fn resize_while_inactive_is_a_no_op() {
    let mut view = preset_view();

    view.handle_resize().expect("resize without surface");
}

#[test]
fn deactivation_releases_surface_and_subscription() {
    let mut view = preset_view();
    let mut hub = ResizeEventHub::new();
    let surface = NullSurface::new(Viewport::new(514, 388));
    let log = surface.log();

    view.activate(Some(surface), &mut hub).expect("activate");
    view.deactivate(&mut hub);

    assert!(!view.is_active());
    assert_eq!(hub.active_count(), 0);
    assert_eq!(*log.borrow(), vec![SurfaceOp::Apply, SurfaceOp::Release]);
}

#[test]
fn deactivation_without_prior_activation_is_safe() {
    let mut view = preset_view();
    let mut hub = ResizeEventHub::new();

    view.deactivate(&mut hub);
    view.deactivate(&mut hub);

    assert!(!view.is_active());
    assert_eq!(hub.active_count(), 0);
}

#[test]
fn deactivation_after_skipped_activation_leaves_no_listener() {
    let mut view = preset_view();
    let mut hub = ResizeEventHub::new();

    view.activate(None, &mut hub).expect("skipped activation");
    view.deactivate(&mut hub);

    assert_eq!(hub.active_count(), 0);
}

#[test]
fn failed_apply_leaves_view_inactive_with_no_subscription() {
    let mut view = preset_view();
    let mut hub = ResizeEventHub::new();

    let result = view.activate(Some(NullSurface::new(Viewport::new(0, 388))), &mut hub);

    assert!(matches!(result, Err(ChartError::InvalidViewport { .. })));
    assert!(!view.is_active());
    assert_eq!(hub.active_count(), 0);
}

#[test]
fn second_activation_while_active_is_rejected() {
    let mut view = preset_view();
    let mut hub = ResizeEventHub::new();
    let surface = NullSurface::new(Viewport::new(514, 388));
    let log = surface.log();

    view.activate(Some(surface), &mut hub).expect("activate");
    let result = view.activate(Some(NullSurface::new(Viewport::new(514, 388))), &mut hub);

    assert!(matches!(result, Err(ChartError::Surface(_))));
    assert!(view.is_active());
    assert_eq!(hub.active_count(), 1);
    assert_eq!(*log.borrow(), vec![SurfaceOp::Apply]);
}

/// Surface and event-source doubles sharing one call log, so the relative
/// order of backend and subscription calls is observable.
struct OrderedEvents {
    log: Rc<RefCell<Vec<&'static str>>>,
    next_id: u64,
}

impl ResizeEvents for OrderedEvents {
    fn subscribe(&mut self) -> SubscriptionId {
        self.log.borrow_mut().push("subscribe");
        self.next_id += 1;
        SubscriptionId::new(self.next_id)
    }

    fn unsubscribe(&mut self, _id: SubscriptionId) {
        self.log.borrow_mut().push("unsubscribe");
    }
}

struct OrderedSurface {
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl PieSurface for OrderedSurface {
    fn apply(&mut self, _config: &PieChartConfig, _slices: &[PieSlice]) -> ChartResult<()> {
        self.log.borrow_mut().push("apply");
        Ok(())
    }

    fn relayout(&mut self) -> ChartResult<()> {
        self.log.borrow_mut().push("relayout");
        Ok(())
    }

    fn width_px(&self) -> f64 {
        514.0
    }

    fn release(&mut self) {
        self.log.borrow_mut().push("release");
    }
}

#[test]
fn apply_precedes_subscribe_and_unsubscribe_precedes_release() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut events = OrderedEvents {
        log: Rc::clone(&log),
        next_id: 0,
    };
    let surface = OrderedSurface {
        log: Rc::clone(&log),
    };
    let mut view: PieChartView<OrderedSurface> = PieChartView::new(
        PieChartConfig::default(),
        collateral_categories(),
        collateral_other_breakdown(),
        COLLATERAL_TOTAL_USD,
    );

    view.activate(Some(surface), &mut events).expect("activate");
    view.handle_resize().expect("resize");
    view.deactivate(&mut events);

    assert_eq!(
        *log.borrow(),
        vec!["apply", "subscribe", "relayout", "unsubscribe", "release"]
    );
}

#[test]
fn label_layout_uses_the_mounted_surface_width() {
    let mut view = preset_view();
    let mut hub = ResizeEventHub::new();
    let params = LabelLayoutParams {
        label_rect: LabelRect::new(400.0, 44.0),
        label_line_points: [[0.0, 0.0], [10.0, 10.0], [20.0, 20.0]],
    };

    assert!(view.label_layout(&params).is_none());

    view.activate(Some(NullSurface::new(Viewport::new(514, 388))), &mut hub)
        .expect("activate");

    let layout = view.label_layout(&params).expect("active layout");
    assert_eq!(layout.label_line_points[2], [444.0, 20.0]);

    let left = LabelLayoutParams {
        label_rect: LabelRect::new(100.0, 44.0),
        label_line_points: [[0.0, 0.0], [10.0, 10.0], [20.0, 20.0]],
    };
    let layout = view.label_layout(&left).expect("active layout");
    assert_eq!(layout.label_line_points[2], [100.0, 20.0]);
}

#[test]
fn hovering_a_preset_category_yields_the_expected_tooltip() {
    let view = preset_view();

    let markup = view.tooltip_markup("Cryptopunks").expect("known category");
    assert!(markup.contains("Cryptopunks $76,472 36% (12 loans)"));

    let markup = view.tooltip_markup("Other").expect("aggregate category");
    assert!(markup.contains("Milady"));
    assert!(markup.contains("World of Women"));
    assert!(markup.contains("CyberBrokers"));

    assert!(view.tooltip_markup("Unknown").is_none());
}

#[test]
fn view_slices_match_the_preset_table() {
    let view = preset_view();

    let slices = view.slices();

    assert_eq!(slices.len(), 5);
    assert_eq!(slices[0].name, "Cryptopunks");
    assert_eq!(slices[4].name, "Other");
    assert_eq!(slices[4].extra.loans, 3);
}
