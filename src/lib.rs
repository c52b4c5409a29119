//! candleview: viewport and scale resolution engine for candlestick charts.
//!
//! The crate renders nothing. It converts interaction input (wheel, drag),
//! a candle series, and surface dimensions into the visible data slice,
//! calibrated axis scales, and tick plans an external renderer consumes.

pub mod core;
pub mod engine;
pub mod error;
pub mod telemetry;

pub use engine::{ChartEngine, EngineConfig, ViewFrame};
pub use error::{ChartError, ChartResult};
