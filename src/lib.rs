//! # jobmatch
//!
//! In-memory matching engine for a job-search product. It answers two
//! queries: "which job titles complete this typed prefix?" and "given a
//! candidate's skill profile, which jobs are the best matches, ranked?".
//!
//! The crate is the algorithmic core only. Transport, persistence, and
//! display-metadata resolution are the surrounding system's concern: it
//! feeds this crate a title catalog and already-weighted term vectors, and
//! receives computed results back.
//!
//! ## Core Types
//!
//! - [`MatchingEngine`]: the orchestration façade — suggest, rebuild,
//!   percent scoring, skill sets, and rank-many-jobs.
//! - [`PrefixIndex`]: case-insensitive prefix tree over job titles with
//!   bounded, deterministic completion queries.
//! - [`TermVector`]: sparse term → non-negative-weight vector for a
//!   candidate profile or a job description.
//! - [`RankingHeap`]: max-heap accumulator that drains scored candidates in
//!   descending-score order.
//! - [`ScoredCandidate`]: one ranked result with id, display placeholders,
//!   and a 0–100 score.
//!
//! ## Example Usage
//!
//! ```
//! use std::collections::HashMap;
//! use jobmatch::{EngineConfig, MatchingEngine, TermVector};
//!
//! let mut engine = MatchingEngine::new(EngineConfig::default());
//! engine.rebuild_titles(["Java Developer", "JavaScript Engineer"]);
//!
//! assert_eq!(engine.suggest("javas"), vec!["JavaScript Engineer"]);
//!
//! let cv = TermVector::from_terms(["java", "sql"]);
//! let jobs = HashMap::from([
//!     ("backend-1".to_string(), TermVector::from_terms(["java", "spring"])),
//!     ("data-7".to_string(), TermVector::from_terms(["python", "sql"])),
//! ]);
//!
//! let ranked = engine.rank_jobs(&cv, &jobs);
//! assert_eq!(ranked.len(), 2);
//! assert!(ranked[0].score >= ranked[1].score);
//! ```
//!
//! ## Concurrency
//!
//! Scoring and ranking are pure per call; suggestion queries take `&self`
//! and may run in parallel, while [`MatchingEngine::rebuild_titles`] takes
//! `&mut self` so the borrow checker keeps rebuilds exclusive. Shared
//! deployments wrap the engine in an `RwLock` or swap immutable snapshots.

pub mod config;
pub mod engine;
pub mod prefix;
pub mod ranking;
pub mod similarity;
pub mod types;

pub use crate::config::EngineConfig;
pub use crate::engine::MatchingEngine;
pub use crate::prefix::PrefixIndex;
pub use crate::ranking::{MaxHeap, RankingHeap};
pub use crate::similarity::{cosine, intersect_terms, missing_terms};
pub use crate::types::{ScoredCandidate, TermVector, VectorError};
