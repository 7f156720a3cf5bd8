use num_traits::Zero;

use crate::{
    rank::{Rank, RankSet},
    report::{PercentileRecord, Report},
};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("dataset is empty, no percentiles can be computed")]
    EmptyDataset,
}

/// The values a report is computed from, kept sorted ascending. Never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    sorted: Vec<i64>,
}

impl Dataset {
    /// Takes ownership of `vals` for sorting.
    pub fn from_values(mut vals: Vec<i64>) -> Result<Self, StatsError> {
        if vals.len().is_zero() {
            return Err(StatsError::EmptyDataset);
        }
        vals.sort_unstable();
        Ok(Dataset { sorted: vals })
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Never true for a constructed `Dataset`.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn min(&self) -> i64 {
        self.sorted[0]
    }

    pub fn max(&self) -> i64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Index into the sorted values for `rank`: `floor(rank/100 * n)`,
    /// clamped to the last element. Integer arithmetic only, so that
    /// e.g. rank 29 of 100 values is index 29 and not 28.
    pub fn index_for(&self, rank: Rank) -> usize {
        let n = self.sorted.len() as u128;
        let index = u128::from(rank.get()) * n / 100;
        // index <= n, thus fits usize
        (index as usize).min(self.sorted.len() - 1)
    }

    /// "Lower" percentile: always one of the dataset's values, never
    /// interpolated between two of them.
    pub fn percentile(&self, rank: Rank) -> i64 {
        self.sorted[self.index_for(rank)]
    }

    pub fn report(&self, ranks: &RankSet) -> Report {
        let records = ranks
            .ranks()
            .into_iter()
            .map(|rank| PercentileRecord {
                rank,
                value: self.percentile(rank),
            })
            .collect();
        Report {
            records,
            num_values: self.len(),
            min: self.min(),
            max: self.max(),
        }
    }
}
