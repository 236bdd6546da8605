use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Energy bin identifier. Wraps the raw floating point bin centre so bins
/// can key an ordered map; ordering uses [`f64::total_cmp`], which coincides
/// with the usual numeric order on the well-formed (NaN-free) data this tool
/// ingests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BinKey(f64);

impl BinKey {
    pub fn new(energy: f64) -> Self {
        Self(energy)
    }

    /// Raw energy value of the bin.
    pub fn energy(self) -> f64 {
        self.0
    }
}

impl Eq for BinKey {}

impl Ord for BinKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for BinKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BinKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One parsed input line: an energy bin and its event count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub energy: BinKey,
    pub counts: i64,
}

/// Accumulated histogram built from one or more input files.
///
/// Bins live in a `BTreeMap`, so accumulation keeps them deduplicated and
/// the ascending emit order falls out of iteration with no separate sort
/// step. Memory is bounded by the number of distinct bins, not by the total
/// line count of the inputs.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    bins: BTreeMap<BinKey, i64>,
}

impl Spectrum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record's counts to its bin, inserting the bin if unseen.
    pub fn add(&mut self, record: Record) {
        *self.bins.entry(record.energy).or_insert(0) += record.counts;
    }

    /// Number of distinct bins accumulated so far.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Bins in ascending energy order.
    pub fn rows(&self) -> impl Iterator<Item = (BinKey, i64)> + '_ {
        self.bins.iter().map(|(key, counts)| (*key, *counts))
    }

    /// Sums the counts of every bin whose energy lies inside the inclusive
    /// window `[lower, upper]`. An inverted window sums nothing.
    pub fn integrate(&self, lower: f64, upper: f64) -> i64 {
        if lower > upper {
            return 0;
        }
        self.bins
            .range(BinKey::new(lower)..=BinKey::new(upper))
            .map(|(_, counts)| counts)
            .sum()
    }
}
