use candleview::core::Viewport;
use candleview::{ChartError, EngineConfig};

#[test]
fn config_round_trips_through_json() {
    let config = EngineConfig::new(Viewport::new(800, 600))
        .with_candle_metrics(8.0, 4.0)
        .with_zoom_intensity(0.25)
        .with_view_limits(5.0, 4.0)
        .with_paddings(6.0, 12.0)
        .with_price_tick_tuning(64.0, 4)
        .with_time_tick_min_spacing_px(48.0);

    let json = config.to_json_pretty().expect("serialize");
    let restored = EngineConfig::from_json_str(&json).expect("deserialize");
    assert_eq!(restored, config);
}

#[test]
fn config_fills_missing_json_fields_with_defaults() {
    let restored =
        EngineConfig::from_json_str(r#"{"viewport":{"width":800,"height":600}}"#).expect("parse");

    assert_eq!(restored.viewport, Viewport::new(800, 600));
    assert_eq!(restored.candle_width_px, 10.0);
    assert_eq!(restored.candle_gap_px, 5.0);
    assert_eq!(restored.candle_unit_width_px(), 15.0);
    assert_eq!(restored.zoom_intensity, 0.1);
    assert_eq!(restored.min_candles_in_view, 10.0);
    assert_eq!(restored.max_view_factor, 3.0);
    assert_eq!(restored.min_price_tick_count, 3);
}

#[test]
fn config_rejects_malformed_json() {
    let err = EngineConfig::from_json_str("{not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn validate_rejects_out_of_range_tunables() {
    let viewport = Viewport::new(800, 600);

    let err = EngineConfig::new(viewport)
        .with_candle_metrics(0.0, 5.0)
        .validate()
        .expect_err("zero candle width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = EngineConfig::new(viewport)
        .with_candle_metrics(10.0, -1.0)
        .validate()
        .expect_err("negative gap must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = EngineConfig::new(viewport)
        .with_view_limits(0.5, 3.0)
        .validate()
        .expect_err("sub-candle minimum must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = EngineConfig::new(viewport)
        .with_view_limits(10.0, 0.5)
        .validate()
        .expect_err("shrinking view factor must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = EngineConfig::new(viewport)
        .with_paddings(-1.0, 0.0)
        .validate()
        .expect_err("negative padding must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = EngineConfig::new(viewport)
        .with_price_tick_tuning(80.0, 0)
        .validate()
        .expect_err("zero tick count must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = EngineConfig::new(viewport)
        .with_time_tick_min_spacing_px(f64::NAN)
        .validate()
        .expect_err("nan tick spacing must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn validate_rejects_degenerate_viewports() {
    let err = EngineConfig::new(Viewport::new(0, 600))
        .validate()
        .expect_err("zero width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));

    let err = EngineConfig::new(Viewport::new(800, 0))
        .validate()
        .expect_err("zero height must fail");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn valid_config_passes_validation_unchanged() {
    let config = EngineConfig::new(Viewport::new(800, 600));
    let validated = config.validate().expect("valid config");
    assert_eq!(validated, config);
}
