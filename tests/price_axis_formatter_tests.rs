use candleview::core::{BoundedSurface, Candle, PriceScale, TimeScale, Viewport};
use candleview::engine::{ScalePair, build_scales, plan_ticks};
use candleview::{ChartEngine, EngineConfig};

fn surface() -> BoundedSurface {
    BoundedSurface::from_viewport(Viewport::new(635, 410)).expect("surface")
}

fn candle(time: f64, low: f64, high: f64) -> Candle {
    Candle::new(time, low, high, low, high, 1.0).expect("valid candle")
}

fn scales_for_domain(price_min: f64, price_max: f64) -> ScalePair {
    ScalePair {
        time: TimeScale::from_visible(&[], 15.0).expect("time scale"),
        price: PriceScale::new(price_min, price_max, 400.0).expect("price scale"),
    }
}

#[test]
fn price_ticks_land_on_nice_round_steps() {
    // Range 15 over 400 px with an 80 px tick budget targets 5 ticks; the
    // nice step closest to 3 is 2.
    let visible = vec![candle(0.0, 95.0, 110.0)];
    let scales = build_scales(&visible, 15.0, surface(), 0.0).expect("scales");
    let plan = plan_ticks(&scales, &EngineConfig::new(Viewport::new(635, 410))).expect("ticks");

    let values: Vec<f64> = plan.price.iter().map(|t| t.value).collect();
    assert_eq!(
        values,
        vec![96.0, 98.0, 100.0, 102.0, 104.0, 106.0, 108.0, 110.0]
    );
    assert_eq!(plan.price[0].label, "96");
}

#[test]
fn price_tick_positions_decrease_as_values_increase() {
    let scales = scales_for_domain(50.0, 150.0);
    let plan = plan_ticks(&scales, &EngineConfig::new(Viewport::new(635, 410))).expect("ticks");

    for pair in plan.price.windows(2) {
        assert!(pair[1].value > pair[0].value);
        assert!(pair[1].position_px < pair[0].position_px);
    }
    for tick in &plan.price {
        assert!(tick.position_px >= 0.0);
        assert!(tick.position_px <= 400.0);
    }
}

#[test]
fn fractional_steps_get_matching_label_precision() {
    let scales = scales_for_domain(0.0, 1.0);
    let plan = plan_ticks(&scales, &EngineConfig::new(Viewport::new(635, 410))).expect("ticks");

    // Step 0.2 labels with one decimal place.
    assert_eq!(plan.price[0].label, "0.0");
    assert_eq!(plan.price[1].label, "0.2");
}

#[test]
fn flat_market_still_plans_the_minimum_tick_count() {
    let config = EngineConfig::new(Viewport::new(635, 410));
    let mut engine = ChartEngine::new(config).expect("engine init");
    let flat: Vec<Candle> = (0..100)
        .map(|i| {
            Candle::new(
                1_700_000_000.0 + i as f64 * 60.0,
                50.0,
                50.0,
                50.0,
                50.0,
                1.0,
            )
            .expect("valid candle")
        })
        .collect();
    engine.set_candles(flat);

    let frame = engine.frame().expect("frame");
    assert_eq!(frame.scales.price.domain(), (49.5, 50.5));
    assert!(frame.ticks.price.len() >= engine.config().min_price_tick_count);
}

#[test]
fn starved_pixel_budget_falls_back_to_even_subdivision() {
    // One tick per 400 px leaves a 3-tick target over a range whose nice
    // step (5) only has two multiples inside the domain, so the planner
    // subdivides evenly instead.
    let config = EngineConfig::new(Viewport::new(635, 410)).with_price_tick_tuning(400.0, 3);
    let scales = scales_for_domain(2.6, 13.4);
    let plan = plan_ticks(&scales, &config).expect("ticks");

    assert_eq!(plan.price.len(), 3);
    assert!((plan.price[0].value - 2.6).abs() <= 1e-9);
    assert!((plan.price[1].value - 8.0).abs() <= 1e-9);
    assert!((plan.price[2].value - 13.4).abs() <= 1e-9);
}

#[test]
fn empty_slice_still_plans_price_ticks() {
    let scales = build_scales(&[], 15.0, surface(), 0.0).expect("scales");
    let plan = plan_ticks(&scales, &EngineConfig::new(Viewport::new(635, 410))).expect("ticks");

    assert!(plan.price.len() >= 3);
    assert!(plan.time.is_empty());
}
