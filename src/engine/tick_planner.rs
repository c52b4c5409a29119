use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::unix_seconds_to_datetime;
use crate::engine::{EngineConfig, ScalePair};
use crate::error::ChartResult;

/// Interval ladder for time-axis ticks, in seconds: minute, five minutes,
/// quarter hour, half hour, hour, four hours, day.
const TIME_INTERVAL_LADDER: [f64; 7] = [
    60.0, 300.0, 900.0, 1_800.0, 3_600.0, 14_400.0, 86_400.0,
];

const SECONDS_PER_DAY: f64 = 86_400.0;

/// One axis label with its pixel position and the raw value it labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub position_px: f64,
    pub value: f64,
    pub label: String,
}

/// Tick sets for both axes of one resolved frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickPlan {
    pub time: Vec<Tick>,
    pub price: Vec<Tick>,
}

/// Plans axis ticks for the given calibrated scales.
///
/// Time ticks land on whole interval multiples in UTC, so zooming or panning
/// never produces labels like 09:07; the interval is the smallest ladder entry
/// that keeps ticks at least `time_tick_min_spacing_px` apart. Price ticks
/// land on multiples of a nice step sized from the pixel budget, with an even
/// subdivision fallback that guarantees the configured minimum count.
pub fn plan_ticks(scales: &ScalePair, config: &EngineConfig) -> ChartResult<TickPlan> {
    Ok(TickPlan {
        time: plan_time_ticks(scales, config.time_tick_min_spacing_px)?,
        price: plan_price_ticks(scales, config)?,
    })
}

fn plan_time_ticks(scales: &ScalePair, min_spacing_px: f64) -> ChartResult<Vec<Tick>> {
    let time = scales.time;
    if time.is_degenerate() {
        return Ok(Vec::new());
    }

    let (domain_start, domain_end) = time.domain();
    let seconds_per_px = (domain_end - domain_start) / time.span_px();
    let min_interval = seconds_per_px * min_spacing_px;
    let interval = select_time_interval(min_interval);

    let mut ticks = Vec::new();
    let mut multiple = (domain_start / interval).ceil();
    loop {
        let value = multiple * interval;
        if value > domain_end + interval * 1e-9 {
            break;
        }
        ticks.push(Tick {
            position_px: time.time_to_pixel(value)?,
            value,
            label: format_time_label(value, interval),
        });
        multiple += 1.0;
    }
    Ok(ticks)
}

fn select_time_interval(min_interval: f64) -> f64 {
    if !min_interval.is_finite() || min_interval <= 0.0 {
        return TIME_INTERVAL_LADDER[0];
    }
    for candidate in TIME_INTERVAL_LADDER {
        if candidate >= min_interval {
            return candidate;
        }
    }
    (min_interval / SECONDS_PER_DAY).ceil() * SECONDS_PER_DAY
}

fn format_time_label(value: f64, interval: f64) -> String {
    let Some(datetime) = unix_seconds_to_datetime(value) else {
        return format!("{value:.0}");
    };
    let pattern = if interval >= SECONDS_PER_DAY {
        "%Y-%m-%d"
    } else {
        "%H:%M"
    };
    datetime.format(pattern).to_string()
}

fn plan_price_ticks(scales: &ScalePair, config: &EngineConfig) -> ChartResult<Vec<Tick>> {
    let price = scales.price;
    let (domain_min, domain_max) = price.domain();
    let range = domain_max - domain_min;
    let height_px = price.height_px();

    let budget_count = (height_px / config.min_px_per_price_tick).floor();
    let target_count = budget_count.max(config.min_price_tick_count as f64);
    let step = nice_step(range / target_count);

    let mut values: Vec<f64> = Vec::new();
    let mut multiple = (domain_min / step).ceil();
    loop {
        let value = multiple * step;
        if value > domain_max + step * 1e-9 {
            break;
        }
        values.push(value);
        multiple += 1.0;
    }

    // Tiny domains can round away too many multiples; fall back to an even
    // subdivision so the axis never drops below the configured minimum.
    let step_hint = if values.len() < config.min_price_tick_count {
        values = even_subdivision((domain_min, domain_max), config.min_price_tick_count);
        range / (config.min_price_tick_count.max(2) - 1) as f64
    } else {
        step
    };

    let precision = precision_from_step(normalize_step_for_precision(step_hint));
    let mut ticks = Vec::with_capacity(values.len());
    for value in values {
        ticks.push(Tick {
            position_px: price.price_to_pixel(value)?,
            value,
            label: format!("{value:.precision$}"),
        });
    }
    Ok(ticks)
}

fn even_subdivision(range: (f64, f64), tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }
    if tick_count == 1 {
        return vec![range.0];
    }

    let span = range.1 - range.0;
    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| {
            let ratio = (index as f64) / denominator;
            range.0 + span * ratio
        })
        .collect()
}

fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }

    let magnitude = 10.0_f64.powf(raw_step.log10().floor());
    let candidates: SmallVec<[f64; 4]> = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|mantissa| mantissa * magnitude)
        .collect();
    candidates
        .into_iter()
        .min_by_key(|candidate| OrderedFloat((candidate - raw_step).abs()))
        .unwrap_or(raw_step)
}

fn normalize_step_for_precision(step_abs: f64) -> f64 {
    if !step_abs.is_finite() || step_abs <= 0.0 {
        return 0.01;
    }

    let magnitude = 10.0_f64.powf(step_abs.log10().floor());
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return step_abs;
    }

    let normalized = step_abs / magnitude;
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn precision_from_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 2;
    }
    let text = format!("{:.12}", step.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len().clamp(0, 12)
}
