use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A fixed-length embedding vector produced by an external model.
///
/// Immutable once constructed. Dimensionality is constant across a corpus
/// for a given deployment; mixing dimensionalities is an error surfaced by
/// [`Embedding::dot`] and [`Embedding::cosine_similarity`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    data: Vec<f32>,
}

impl Embedding {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Euclidean norm of the vector.
    #[inline]
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Dot product with another vector.
    ///
    /// Fails with [`Error::DimensionMismatch`] if the lengths disagree.
    #[inline]
    pub fn dot(&self, other: &Embedding) -> Result<f32> {
        if self.dim() != other.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                actual: other.dim(),
            });
        }

        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Compute cosine similarity with another vector.
    ///
    /// Returns `Ok(None)` when either vector has zero magnitude: the
    /// similarity is undefined there, and a zero vector is a valid (if
    /// meaningless) data state rather than an error. Returns
    /// [`Error::DimensionMismatch`] when the lengths disagree.
    pub fn cosine_similarity(&self, other: &Embedding) -> Result<Option<f32>> {
        let dot_product = self.dot(other)?;

        let norm_a = self.norm();
        let norm_b = other.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return Ok(None);
        }

        Ok(Some(dot_product / (norm_a * norm_b)))
    }
}

impl From<Vec<f32>> for Embedding {
    fn from(data: Vec<f32>) -> Self {
        Embedding::new(data)
    }
}
