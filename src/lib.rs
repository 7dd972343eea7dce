//! # librix
//!
//! The retrieval and contest-selection core of a book review platform.
//!
//! Everything around it - HTTP routing, persistence, the embedding and
//! generation model calls - is an external collaborator. What lives here
//! are the two pieces with actual algorithmic content:
//!
//! - **Similarity ranking**: cosine top-K over precomputed book embeddings,
//!   feeding a bounded context block into a generation prompt.
//! - **Weighted selection**: picking one contest winner with probability
//!   proportional to review count.
//!
//! Both are pure functions over borrowed in-memory snapshots; neither holds
//! state between calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use librix::prelude::*;
//! use serde_json::json;
//!
//! // Rank a catalog against a query embedding.
//! let catalog = vec![
//!     Candidate::new("978-0441172719", Embedding::new(vec![1.0, 0.0]))
//!         .with_payload(json!({"title": "Dune", "authors": ["Frank Herbert"]})),
//!     Candidate::new("978-0553283686", Embedding::new(vec![0.0, 1.0]))
//!         .with_payload(json!({"title": "Hyperion", "authors": ["Dan Simmons"]})),
//! ];
//! let query = Embedding::new(vec![0.9, 0.1]);
//! let ranking = Ranker::new().rank(&query, &catalog, 3);
//!
//! // Build the grounding context for the generation prompt.
//! let context = build_context(&ranking.results);
//! assert!(context.starts_with("Book 1 Title: Dune"));
//!
//! // Pick a contest winner weighted by review counts.
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! let entries = vec![WeightedEntry::new("alice", 3), WeightedEntry::new("bob", 1)];
//! let mut rng = StdRng::seed_from_u64(42);
//! let winner = select_winner(&entries, &mut rng).unwrap();
//! assert!(winner.is_some());
//! ```
//!
//! ## Crate Structure
//!
//! - [`librix-core`](https://docs.rs/librix-core) - Embedding vector and shared errors
//! - [`librix-rank`](https://docs.rs/librix-rank) - Similarity ranker, context builder, provider seams
//! - [`librix-contest`](https://docs.rs/librix-contest) - Weighted winner selection

// Re-export core types
pub use librix_core::{Embedding, Error, Result};

// Re-export ranking
pub use librix_rank::{
    build_context, context_titles, ground_query, render_prompt, render_summary_prompt, Candidate,
    EmbeddingProvider, HashEmbedder, RankWarning, RankedResult, Ranker, Ranking, TextGenerator,
};

// Re-export contest selection
pub use librix_contest::{select_winner, RandomSource, ScriptedDraws, WeightedEntry};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        build_context, context_titles, ground_query, render_prompt, render_summary_prompt,
        select_winner, Candidate, Embedding, EmbeddingProvider, Error, HashEmbedder, RandomSource,
        RankWarning, RankedResult, Ranker, Ranking, Result, ScriptedDraws, TextGenerator,
        WeightedEntry,
    };
}
