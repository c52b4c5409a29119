pub mod candlestick;
pub mod price_scale;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod time_scale;
pub mod types;

pub use candlestick::{Candle, CandleGeometry, project_candles};
pub use price_scale::PriceScale;
pub use scale::LinearScale;
pub use series::CandleSeries;
pub use time_scale::TimeScale;
pub use types::{BoundedSurface, Viewport};
