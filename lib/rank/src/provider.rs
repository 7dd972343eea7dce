//! Seams for the external model providers
//!
//! Embedding generation and text generation are external collaborators with
//! their own latency, retry, and timeout concerns; the core only consumes
//! them through these traits. [`HashEmbedder`] is a deterministic in-process
//! implementation for tests and offline runs.

use crate::candidate::Candidate;
use crate::ranker::{Ranker, Ranking};
use librix_core::{Embedding, Result};

/// Produces a fixed-length embedding vector for a piece of text.
///
/// Implementations must produce a constant dimensionality per instance.
pub trait EmbeddingProvider {
    fn embed(&self, text: &str) -> Result<Embedding>;
}

/// Produces text from a fully constructed prompt.
///
/// The core only builds the prompt payload; managing the call (streaming,
/// timeouts, retries) belongs to the implementation.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Embed a free-text query and rank the candidate snapshot against it.
pub fn ground_query<'a, P>(
    provider: &P,
    ranker: &Ranker,
    candidates: &'a [Candidate],
    query: &str,
    k: usize,
) -> Result<Ranking<'a>>
where
    P: EmbeddingProvider + ?Sized,
{
    let query_embedding = provider.embed(query)?;
    Ok(ranker.rank(&query_embedding, candidates, k))
}

/// Deterministic hash-based embedder.
///
/// Hashes character trigrams and words into a fixed-size vector and
/// normalizes it. Not a semantic model, but stable across runs and good
/// enough to exercise the retrieval path without a model call.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    /// Create an embedder producing `dim`-length vectors.
    ///
    /// A dimensionality below 1 is meaningless; it is clamped to 1.
    #[inline]
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(1) }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }
}

impl EmbeddingProvider for HashEmbedder {
    fn embed(&self, text: &str) -> Result<Embedding> {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut vector = vec![0.0f32; self.dim];
        let normalized = text.to_lowercase();

        let padded = format!("  {normalized}  ");
        let chars: Vec<char> = padded.chars().collect();
        for trigram in chars.windows(3) {
            let mut hasher = DefaultHasher::new();
            trigram.hash(&mut hasher);
            let pos = (hasher.finish() as usize) % self.dim;
            vector[pos] += 1.0;
        }

        for word in normalized.split_whitespace() {
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            let pos = (hasher.finish() as usize) % self.dim;
            vector[pos] += 2.0; // Words contribute more than trigrams
        }

        let magnitude: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for v in &mut vector {
                *v /= magnitude;
            }
        }

        Ok(Embedding::new(vector))
    }
}
