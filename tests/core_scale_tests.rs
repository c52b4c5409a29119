use approx::assert_relative_eq;

use candleview::core::{Candle, LinearScale, PriceScale, TimeScale};

fn candle_at(time: f64, low: f64, high: f64) -> Candle {
    Candle::new(time, low, high, low, high, 1.0).expect("valid candle")
}

#[test]
fn linear_scale_maps_and_inverts() {
    let scale = LinearScale::new((0.0, 100.0), (0.0, 600.0)).expect("scale");

    assert_eq!(scale.map(0.0).expect("map"), 0.0);
    assert_eq!(scale.map(50.0).expect("map"), 300.0);
    assert_eq!(scale.map(100.0).expect("map"), 600.0);
    assert_relative_eq!(scale.invert(450.0).expect("invert"), 75.0, max_relative = 1e-12);
}

#[test]
fn linear_scale_extrapolates_outside_the_domain() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0)).expect("scale");
    assert_eq!(scale.map(-5.0).expect("map"), -50.0);
    assert_eq!(scale.map(15.0).expect("map"), 150.0);
}

#[test]
fn linear_scale_rejects_degenerate_domain() {
    assert!(LinearScale::new((5.0, 5.0), (0.0, 100.0)).is_err());
    assert!(LinearScale::new((f64::NAN, 5.0), (0.0, 100.0)).is_err());
}

#[test]
fn time_scale_places_candles_at_spacing_multiples() {
    let visible: Vec<Candle> = (0..5)
        .map(|i| candle_at(1_700_000_000.0 + i as f64 * 60.0, 99.0, 101.0))
        .collect();
    let scale = TimeScale::from_visible(&visible, 15.0).expect("scale");

    for (i, candle) in visible.iter().enumerate() {
        let px = scale.time_to_pixel(candle.time).expect("px");
        assert_relative_eq!(px, i as f64 * 15.0, max_relative = 1e-12);
    }
}

#[test]
fn time_scale_round_trips_through_pixels() {
    let visible: Vec<Candle> = (0..10)
        .map(|i| candle_at(1_700_000_000.0 + i as f64 * 300.0, 99.0, 101.0))
        .collect();
    let scale = TimeScale::from_visible(&visible, 12.0).expect("scale");

    let px = scale.time_to_pixel(1_700_000_750.0).expect("px");
    let time = scale.pixel_to_time(px).expect("time");
    assert_relative_eq!(time, 1_700_000_750.0, max_relative = 1e-12);
}

#[test]
fn time_scale_handles_irregular_gaps_linearly() {
    // A weekend gap: the scale interpolates by time, not by index.
    let visible = vec![
        candle_at(0.0, 99.0, 101.0),
        candle_at(60.0, 99.0, 101.0),
        candle_at(600.0, 99.0, 101.0),
    ];
    let scale = TimeScale::from_visible(&visible, 15.0).expect("scale");

    assert_eq!(scale.span_px(), 30.0);
    assert_relative_eq!(
        scale.time_to_pixel(60.0).expect("px"),
        3.0,
        max_relative = 1e-12
    );
    assert_eq!(scale.time_to_pixel(600.0).expect("px"), 30.0);
}

#[test]
fn price_scale_inverts_the_y_axis() {
    let visible = vec![candle_at(0.0, 10.0, 30.0)];
    let scale = PriceScale::from_visible(&visible, 400.0).expect("scale");

    assert_eq!(scale.price_to_pixel(30.0).expect("px"), 0.0);
    assert_eq!(scale.price_to_pixel(10.0).expect("px"), 400.0);
    assert_eq!(scale.price_to_pixel(20.0).expect("px"), 200.0);
}

#[test]
fn price_scale_round_trips_through_pixels() {
    let scale = PriceScale::new(100.0, 250.0, 512.0).expect("scale");
    let px = scale.price_to_pixel(187.5).expect("px");
    assert_relative_eq!(
        scale.pixel_to_price(px).expect("price"),
        187.5,
        max_relative = 1e-12
    );
}

#[test]
fn flat_envelope_expands_to_the_minimum_span() {
    let visible = vec![candle_at(0.0, 50.0, 50.0), candle_at(60.0, 50.0, 50.0)];
    let scale = PriceScale::from_visible(&visible, 400.0).expect("scale");

    assert_eq!(scale.domain(), (49.5, 50.5));
    assert_eq!(scale.price_to_pixel(50.0).expect("px"), 200.0);
}
