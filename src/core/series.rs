use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Candle;

/// Ordered, de-duplicated candle storage.
///
/// A series is immutable for the lifetime of a load; replacing the data means
/// building a new series. Construction canonicalizes dirty input instead of
/// erroring: invalid candles are dropped, out-of-order candles are sorted,
/// and duplicate timestamps resolve last-write-wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series from raw candles, canonicalizing as needed.
    #[must_use]
    pub fn from_candles(candles: Vec<Candle>) -> Self {
        Self {
            candles: canonicalize_candles(candles),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// Returns the candles in `[start, end)`, clamping both bounds to the
    /// series length.
    #[must_use]
    pub fn window(&self, start: usize, end: usize) -> &[Candle] {
        let end = end.min(self.candles.len());
        let start = start.min(end);
        &self.candles[start..end]
    }

    #[must_use]
    pub fn first_time(&self) -> Option<f64> {
        self.candles.first().map(|candle| candle.time)
    }

    #[must_use]
    pub fn last_time(&self) -> Option<f64> {
        self.candles.last().map(|candle| candle.time)
    }
}

fn canonicalize_candles(mut candles: Vec<Candle>) -> Vec<Candle> {
    let original_len = candles.len();
    candles.retain(is_valid_candle);
    candles.sort_by(|a, b| a.time.total_cmp(&b.time));

    let mut deduped: Vec<Candle> = Vec::with_capacity(candles.len());
    let mut duplicate_count = 0_usize;
    for candle in candles {
        if let Some(last) = deduped.last_mut() {
            if candle.time.total_cmp(&last.time) == Ordering::Equal {
                *last = candle;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(candle);
    }

    let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
    if filtered_count > 0 || duplicate_count > 0 {
        warn!(
            filtered_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized candles on series load"
        );
    }
    deduped
}

fn is_valid_candle(candle: &Candle) -> bool {
    candle.time.is_finite()
        && candle.open.is_finite()
        && candle.high.is_finite()
        && candle.low.is_finite()
        && candle.close.is_finite()
        && candle.volume.is_finite()
        && candle.low <= candle.high
        && candle.open >= candle.low
        && candle.open <= candle.high
        && candle.close >= candle.low
        && candle.close <= candle.high
        && candle.volume >= 0.0
}
