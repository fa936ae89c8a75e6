use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// A labelled data-space sample currently plotted on the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub label: String,
    pub point: Point,
}

impl Sample {
    #[must_use]
    pub fn new(label: impl Into<String>, point: Point) -> Self {
        Self {
            label: label.into(),
            point,
        }
    }
}

/// Borrowed view of one sample plus its position in iteration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRef<'a> {
    pub series_index: usize,
    pub series: &'a str,
    pub sample_index: usize,
    pub sample: &'a Sample,
}

/// Visible samples grouped by series.
///
/// Series keep their first-insertion order and samples keep the order they
/// were supplied in, so iteration is deterministic series-then-sample.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisibleSamples {
    series: IndexMap<String, Vec<Sample>>,
}

impl VisibleSamples {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_series(mut self, name: impl Into<String>, samples: Vec<Sample>) -> Self {
        self.set_series(name, samples);
        self
    }

    /// Replaces the samples of `name`; an existing series keeps its position.
    pub fn set_series(&mut self, name: impl Into<String>, samples: Vec<Sample>) {
        self.series.insert(name.into(), samples);
    }

    pub fn remove_series(&mut self, name: &str) -> Option<Vec<Sample>> {
        self.series.shift_remove(name)
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = SampleRef<'_>> {
        self.series
            .iter()
            .enumerate()
            .flat_map(|(series_index, (series, samples))| {
                samples
                    .iter()
                    .enumerate()
                    .map(move |(sample_index, sample)| SampleRef {
                        series_index,
                        series: series.as_str(),
                        sample_index,
                        sample,
                    })
            })
    }
}
