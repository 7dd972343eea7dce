//! # librix Core
//!
//! Core library for the librix retrieval engine.
//!
//! This crate provides the fundamental pieces shared by the ranking and
//! contest-selection crates:
//!
//! - [`Embedding`] - Dense embedding vector with cosine similarity
//! - [`Error`] / [`Result`] - Shared error taxonomy
//!
//! ## Example
//!
//! ```rust
//! use librix_core::Embedding;
//!
//! let query = Embedding::new(vec![1.0, 0.0, 0.0]);
//! let book = Embedding::new(vec![0.8, 0.6, 0.0]);
//!
//! let score = query.cosine_similarity(&book).unwrap().unwrap();
//! assert!((score - 0.8).abs() < 1e-6);
//! ```

pub mod embedding;
pub mod error;

pub use embedding::Embedding;
pub use error::{Error, Result};
