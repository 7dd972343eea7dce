//! # librix Rank
//!
//! Semantic retrieval over book embeddings: brute-force cosine top-K
//! ranking plus construction of the bounded context block that grounds a
//! downstream generation call.
//!
//! Ranking is a pure function over a borrowed candidate snapshot - no
//! index, no cache, no shared state - so concurrent requests need nothing
//! beyond their own snapshot.
//!
//! ## Example
//!
//! ```rust
//! use librix_rank::{Candidate, Ranker, build_context};
//! use librix_core::Embedding;
//! use serde_json::json;
//!
//! let candidates = vec![
//!     Candidate::new("978-0441172719", Embedding::new(vec![1.0, 0.0]))
//!         .with_payload(json!({"title": "Dune", "authors": ["Frank Herbert"]})),
//!     Candidate::new("978-0553283686", Embedding::new(vec![0.0, 1.0]))
//!         .with_payload(json!({"title": "Hyperion", "authors": ["Dan Simmons"]})),
//! ];
//!
//! let query = Embedding::new(vec![1.0, 0.2]);
//! let ranking = Ranker::new().rank(&query, &candidates, 2);
//! assert_eq!(ranking.results[0].candidate.title(), "Dune");
//!
//! let context = build_context(&ranking.results);
//! assert!(context.starts_with("Book 1 Title: Dune"));
//! ```

pub mod candidate;
pub mod context;
pub mod provider;
pub mod ranker;

pub use candidate::Candidate;
pub use context::{build_context, context_titles, render_prompt, render_summary_prompt};
pub use provider::{ground_query, EmbeddingProvider, HashEmbedder, TextGenerator};
pub use ranker::{RankWarning, RankedResult, Ranker, Ranking};
