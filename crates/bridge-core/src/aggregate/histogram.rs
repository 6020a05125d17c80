//! Bridge length histogram with a cumulative relative frequency curve.

use bridge_model::{DEFAULT_LENGTH_BIN_SIZE_M, Record};
use bridge_transform::normalization::format_numeric;
use bridge_transform::round_to;
use serde::Serialize;

use super::cumulative_percent;

/// Upper bound on the number of bins. Lengths past the last regular bin are
/// folded into it, and its end widens to the longest length.
pub const MAX_LENGTH_BINS: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthBin {
    pub start_m: f64,
    pub end_m: f64,
    /// `"{start}-{end}m"`.
    pub label: String,
    pub count: usize,
    /// Summed length of the bin in kilometres, to three decimals.
    pub length_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthHistogram {
    pub bin_width_m: f64,
    pub bins: Vec<LengthBin>,
    /// One entry per bin.
    pub cumulative_percent: Vec<f64>,
    /// Records counted, i.e. those with a finite length.
    pub total: usize,
}

impl LengthHistogram {
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }
}

/// Bins records by length.
///
/// Bin `i` covers `[i * width, (i + 1) * width)`; there are
/// `max(1, ceil(max_length / width))` bins, at most [`MAX_LENGTH_BINS`], and
/// indices are clamped into range, so the maximum length lands in the last
/// bin and negative lengths in the first. A non-positive or non-finite width
/// falls back to the default.
pub fn length_histogram(records: &[&Record], bin_width_m: f64) -> LengthHistogram {
    let width = if bin_width_m.is_finite() && bin_width_m > 0.0 {
        bin_width_m
    } else {
        DEFAULT_LENGTH_BIN_SIZE_M
    };
    let lengths: Vec<f64> = records
        .iter()
        .map(|record| record.bridge_length_m)
        .filter(|length| length.is_finite())
        .collect();
    if lengths.is_empty() {
        return LengthHistogram {
            bin_width_m: width,
            bins: Vec::new(),
            cumulative_percent: Vec::new(),
            total: 0,
        };
    }

    let max_length = lengths.iter().copied().fold(f64::MIN, f64::max);
    let wanted = (max_length / width).ceil().max(1.0);
    let capped = wanted > MAX_LENGTH_BINS as f64;
    let bin_count = if capped {
        MAX_LENGTH_BINS
    } else {
        wanted as usize
    };
    let mut counts = vec![0usize; bin_count];
    let mut metres = vec![0f64; bin_count];
    for length in &lengths {
        let index = (length / width).floor().clamp(0.0, (bin_count - 1) as f64) as usize;
        counts[index] += 1;
        metres[index] += length;
    }

    let bins = counts
        .iter()
        .zip(&metres)
        .enumerate()
        .map(|(index, (&count, &sum_m))| {
            let start_m = round_to(index as f64 * width, 6);
            let end_m = if capped && index == bin_count - 1 {
                max_length
            } else {
                round_to(start_m + width, 6)
            };
            LengthBin {
                start_m,
                end_m,
                label: format!("{}-{}m", format_numeric(start_m), format_numeric(end_m)),
                count,
                length_km: round_to(sum_m / 1000.0, 3),
            }
        })
        .collect();
    LengthHistogram {
        bin_width_m: width,
        bins,
        cumulative_percent: cumulative_percent(counts.iter().copied(), lengths.len()),
        total: lengths.len(),
    }
}

