//! Built-year buckets stacked by bridge type.

use std::collections::BTreeMap;

use bridge_model::{BridgeType, Record, YearGrouping};
use serde::Serialize;

use super::cumulative_percent;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearBucket {
    /// The year, or the first year of the decade.
    pub key: i32,
    /// `"1975年"` or `"1970年代"`.
    pub label: String,
    /// Every bridge type, zero-filled, in type order.
    pub counts: BTreeMap<BridgeType, usize>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearStack {
    pub grouping: YearGrouping,
    /// Ascending by key.
    pub buckets: Vec<YearBucket>,
    pub cumulative_percent: Vec<f64>,
    pub total: usize,
}

fn bucket_key(year: i32, grouping: YearGrouping) -> i32 {
    match grouping {
        YearGrouping::Year => year,
        YearGrouping::Decade => year.div_euclid(10) * 10,
    }
}

fn bucket_label(key: i32, grouping: YearGrouping) -> String {
    match grouping {
        YearGrouping::Year => format!("{key}年"),
        YearGrouping::Decade => format!("{key}年代"),
    }
}

/// Buckets records with a built year; records without one are left out.
pub fn year_stack(records: &[&Record], grouping: YearGrouping) -> YearStack {
    let mut buckets: BTreeMap<i32, BTreeMap<BridgeType, usize>> = BTreeMap::new();
    let mut total = 0;
    for record in records {
        let Some(year) = record.built_year else {
            continue;
        };
        let counts = buckets
            .entry(bucket_key(year, grouping))
            .or_insert_with(|| BridgeType::ALL.iter().map(|&ty| (ty, 0)).collect());
        *counts.entry(record.bridge_type).or_insert(0) += 1;
        total += 1;
    }

    let buckets: Vec<YearBucket> = buckets
        .into_iter()
        .map(|(key, counts)| YearBucket {
            key,
            label: bucket_label(key, grouping),
            total: counts.values().sum(),
            counts,
        })
        .collect();
    YearStack {
        grouping,
        cumulative_percent: cumulative_percent(buckets.iter().map(|bucket| bucket.total), total),
        buckets,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decade_keys_floor_toward_negative_infinity() {
        assert_eq!(bucket_key(1979, YearGrouping::Decade), 1970);
        assert_eq!(bucket_key(1980, YearGrouping::Decade), 1980);
        assert_eq!(bucket_key(-5, YearGrouping::Decade), -10);
        assert_eq!(bucket_key(1979, YearGrouping::Year), 1979);
    }

    #[test]
    fn labels_mark_grouping() {
        assert_eq!(bucket_label(1970, YearGrouping::Decade), "1970年代");
        assert_eq!(bucket_label(1975, YearGrouping::Year), "1975年");
    }
}
