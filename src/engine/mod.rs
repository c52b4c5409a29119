pub mod chart_engine;
pub mod config;
pub mod input;
pub mod resolver;
pub mod scale_builder;
pub mod tick_planner;
pub mod viewport_state;

pub use chart_engine::{ChartEngine, ViewFrame};
pub use config::EngineConfig;
pub use resolver::{ResolvedViewport, resolve_viewport};
pub use scale_builder::{ScalePair, build_scales};
pub use tick_planner::{Tick, TickPlan, plan_ticks};
pub use viewport_state::{Transition, ViewportBounds, ViewportState};
