//! Data structures and methods for dealing with datasets.

use std::ops::{Index, IndexMut, RangeInclusive};

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::{config::WeightRange, error::Result};

/// A single sample mapping a scalar input to a scalar output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// The input data.
    pub input: f64,
    /// The output the network should produce.
    pub expected_output: f64,
    /// The output the network produced on its last forward pass.
    #[serde(default)]
    pub actual_output: f64,
}

impl Sample {
    /// Create a sample that has not been predicted yet.
    #[must_use]
    pub fn new(input: f64, expected_output: f64) -> Self {
        Self {
            input,
            expected_output,
            actual_output: 0.0,
        }
    }

    /// The difference between the predicted and the expected output.
    #[must_use]
    pub fn diff(&self) -> f64 {
        self.actual_output - self.expected_output
    }
}

impl From<(f64, f64)> for Sample {
    fn from((input, expected_output): (f64, f64)) -> Self {
        Self::new(input, expected_output)
    }
}

/// An ordered table of samples. Insertion order is kept, such that samples can be addressed by
/// position.
///
/// A table always holds its own copies of the samples. Constructing a table, adding to it or
/// cloning it never shares a sample with the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleTable {
    samples: Vec<Sample>,
}

impl SampleTable {
    /// Create a table of `size` zero-valued samples.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self {
            samples: vec![Sample::default(); size],
        }
    }

    /// Create a table holding a copy of each of the given samples, in order.
    #[must_use]
    pub fn from_samples(samples: &[Sample]) -> Self {
        Self {
            samples: samples.to_vec(),
        }
    }

    /// Create a table from `(input, expected_output)` pairs, in order.
    #[must_use]
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        pairs.iter().copied().collect()
    }

    /// Create a table of `count` samples of `target` whose inputs are drawn uniformly from
    /// `range`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRange`](crate::NetworkError::InvalidRange) if the range is empty or not
    /// finite.
    pub fn sample_function<R, F>(
        rng: &mut R,
        target: F,
        range: RangeInclusive<f64>,
        count: usize,
    ) -> Result<Self>
    where
        R: Rng,
        F: Fn(f64) -> f64,
    {
        let range = WeightRange::from(range);
        range.validate("input")?;
        let distribution = Uniform::new_inclusive(range.min, range.max);
        Ok((0..count)
            .map(|_| {
                let x = distribution.sample(rng);
                Sample::new(x, target(x))
            })
            .collect())
    }

    /// Create a table of `count` samples of `target` at evenly spaced inputs from `start` to `end`,
    /// both included.
    #[must_use]
    pub fn linspace<F>(target: F, start: f64, end: f64, count: usize) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let step = if count > 1 {
            (end - start) / (count - 1) as f64
        } else {
            0.0
        };
        (0..count)
            .map(|i| {
                let x = start + step * i as f64;
                Sample::new(x, target(x))
            })
            .collect()
    }

    /// Get the number of samples in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Append a copy of the sample. Returns whether the table changed, which is always the case.
    pub fn add(&mut self, sample: &Sample) -> bool {
        self.samples.push(*sample);
        true
    }

    /// Remove the first sample equal to the given one. Returns whether a sample was removed.
    pub fn remove_sample(&mut self, sample: &Sample) -> bool {
        match self.samples.iter().position(|s| s == sample) {
            Some(index) => {
                self.samples.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the sample at the given position. Returns whether a sample was removed.
    ///
    /// Only positions in `1..len` are accepted. The first sample can never be removed by
    /// position, use [`SampleTable::remove_sample`] for it.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.samples.len() {
            return false;
        }
        self.samples.remove(index);
        true
    }

    /// Get the sample at the given position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Get the sample at the given position for modification.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Sample> {
        self.samples.get_mut(index)
    }

    /// Iterate over the samples in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Iterate over the samples in order, allowing them to be modified in place.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Sample> {
        self.samples.iter_mut()
    }

    /// View the samples as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Reset the predicted output of every sample to zero.
    pub fn clear_predictions(&mut self) {
        self.samples.iter_mut().for_each(|s| s.actual_output = 0.0);
    }

    /// Half the sum of squared differences between expected and predicted outputs.
    #[must_use]
    pub fn half_squared_error(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| (s.expected_output - s.actual_output).powi(2))
            .sum::<f64>()
            / 2.0
    }
}

impl Index<usize> for SampleTable {
    type Output = Sample;

    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}

impl IndexMut<usize> for SampleTable {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.samples[index]
    }
}

impl From<&[Sample]> for SampleTable {
    fn from(samples: &[Sample]) -> Self {
        Self::from_samples(samples)
    }
}

impl From<Vec<Sample>> for SampleTable {
    fn from(samples: Vec<Sample>) -> Self {
        Self { samples }
    }
}

impl FromIterator<Sample> for SampleTable {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(f64, f64)> for SampleTable {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        iter.into_iter().map(Sample::from).collect()
    }
}

impl<'a> IntoIterator for &'a SampleTable {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a mut SampleTable {
    type Item = &'a mut Sample;
    type IntoIter = std::slice::IterMut<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter_mut()
    }
}
