use tracing::{debug, trace};

use crate::core::{
    BoundedSurface, Candle, CandleGeometry, CandleSeries, Viewport, project_candles,
};
use crate::engine::input::{normalize_drag, normalize_wheel};
use crate::engine::{
    EngineConfig, ResolvedViewport, ScalePair, TickPlan, Transition, ViewportBounds, ViewportState,
    build_scales, plan_ticks, resolve_viewport,
};
use crate::error::ChartResult;

/// Everything a renderer needs for one frame, resolved in a single pass.
///
/// The visible slice borrows from the engine's series, so a frame is consumed
/// before the next mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewFrame<'a> {
    pub visible: &'a [Candle],
    pub resolved: ResolvedViewport,
    pub scales: ScalePair,
    pub ticks: TickPlan,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the candle series and the viewport state, applies
/// interaction input to them, and resolves frames on demand. It draws
/// nothing; hosts feed [`ViewFrame`] and [`CandleGeometry`] to their own
/// renderer.
pub struct ChartEngine {
    config: EngineConfig,
    surface: BoundedSurface,
    series: CandleSeries,
    state: ViewportState,
}

impl ChartEngine {
    pub fn new(config: EngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let surface = BoundedSurface::from_viewport(config.viewport)?;
        let series = CandleSeries::new();
        let mut engine = Self {
            config,
            surface,
            series,
            state: ViewportState {
                candles_in_view: 0.0,
                end_index: 0.0,
            },
        };
        engine.state = ViewportState::initial(&engine.bounds());
        Ok(engine)
    }

    fn bounds(&self) -> ViewportBounds {
        ViewportBounds {
            series_len: self.series.len() as f64,
            bounded_width: self.surface.width,
            default_candles_in_view: self
                .surface
                .default_candle_count(self.config.candle_unit_width_px()),
            min_candles_in_view: self.config.min_candles_in_view,
            max_view_factor: self.config.max_view_factor,
        }
    }

    /// Replaces the series and snaps the view to the latest data.
    ///
    /// Input is canonicalized by [`CandleSeries::from_candles`]; dirty candles
    /// never reach the resolver.
    pub fn set_candles(&mut self, candles: Vec<Candle>) {
        self.series = CandleSeries::from_candles(candles);
        self.state = ViewportState::initial(&self.bounds());
        debug!(candle_count = self.series.len(), "loaded candle series");
    }

    /// Adopts new surface dimensions.
    ///
    /// A width change alters the default window, so the view snaps back to
    /// the latest data; height-only changes keep the current window.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        let surface = BoundedSurface::from_viewport(viewport)?;
        let width_changed = surface.width != self.surface.width;
        self.config.viewport = viewport;
        self.surface = surface;
        if width_changed {
            self.state = ViewportState::initial(&self.bounds());
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            width_changed,
            "resized chart surface"
        );
        Ok(())
    }

    /// Applies a wheel gesture. Returns the zoom factor that was applied, or
    /// `None` when the delta was a no-op.
    pub fn wheel(&mut self, delta_y: f64) -> ChartResult<Option<f64>> {
        let Some(factor) = normalize_wheel(delta_y, self.config.zoom_intensity)? else {
            return Ok(None);
        };
        self.state = self.state.apply(Transition::Zoom { factor }, &self.bounds());
        trace!(
            factor,
            candles_in_view = self.state.candles_in_view,
            "applied wheel zoom"
        );
        Ok(Some(factor))
    }

    /// Applies a horizontal drag gesture. Returns the pixel delta that was
    /// applied, or `None` when the delta was a no-op.
    pub fn drag(&mut self, delta_x: f64) -> ChartResult<Option<f64>> {
        let Some(delta_px) = normalize_drag(delta_x)? else {
            return Ok(None);
        };
        self.state = self
            .state
            .apply(Transition::Pan { delta_px }, &self.bounds());
        trace!(
            delta_px,
            end_index = self.state.end_index,
            "applied drag pan"
        );
        Ok(Some(delta_px))
    }

    /// Snaps the view back to the default window over the latest data.
    pub fn reset_view(&mut self) {
        self.state = self.state.apply(Transition::Reset, &self.bounds());
    }

    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn series(&self) -> &CandleSeries {
        &self.series
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Resolves the current state into a complete render frame.
    pub fn frame(&self) -> ChartResult<ViewFrame<'_>> {
        let resolved = resolve_viewport(
            self.state,
            self.series.len(),
            self.surface.width,
            self.config.horizontal_padding_px,
        );
        let visible = self.series.window(resolved.start_index, resolved.end_index);

        // An empty resolution carries no spacing; scales still need a
        // positive one for their degenerate fallbacks.
        let spacing_px = if resolved.spacing_px > 0.0 {
            resolved.spacing_px
        } else {
            self.config.candle_unit_width_px()
        };
        let scales = build_scales(
            visible,
            spacing_px,
            self.surface,
            self.config.vertical_padding_px,
        )?;
        let ticks = plan_ticks(&scales, &self.config)?;

        Ok(ViewFrame {
            visible,
            resolved,
            scales,
            ticks,
        })
    }

    /// Projects a frame's visible candles into pixel geometry.
    pub fn project_frame(&self, frame: &ViewFrame<'_>) -> ChartResult<Vec<CandleGeometry>> {
        project_candles(
            frame.visible,
            frame.scales.time,
            frame.scales.price,
            self.config.candle_width_px,
        )
    }
}
