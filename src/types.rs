//! Core value types for the matching engine.
//!
//! This module defines the sparse term-weight vector consumed by the scoring
//! layer and the scored result type produced by ranking. Both are
//! serde-friendly so they can cross process boundaries or be embedded in
//! higher-level request/response types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while constructing a [`TermVector`] from weighted pairs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VectorError {
    #[error("negative weight {weight} for term {term:?}")]
    NegativeWeight { term: String, weight: f64 },

    #[error("non-finite weight for term {term:?}")]
    NonFiniteWeight { term: String },
}

/// Sparse mapping from case-normalized term to non-negative weight.
///
/// Represents either a candidate's skill profile or a job description.
/// A vector with zero entries is a valid "no signal" vector and scores 0.0
/// against anything. Vectors are immutable once constructed; the engine
/// never mutates vectors it receives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermVector {
    weights: HashMap<String, f64>,
}

impl TermVector {
    /// Empty "no signal" vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vector from already-weighted `(term, weight)` pairs.
    ///
    /// Terms are case-normalized; duplicate terms accumulate. Weights must
    /// be finite and non-negative.
    pub fn from_weights<I, S>(pairs: I) -> Result<Self, VectorError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut weights = HashMap::new();
        for (term, weight) in pairs {
            let term = term.as_ref().trim().to_lowercase();
            if !weight.is_finite() {
                return Err(VectorError::NonFiniteWeight { term });
            }
            if weight < 0.0 {
                return Err(VectorError::NegativeWeight { term, weight });
            }
            *weights.entry(term).or_insert(0.0) += weight;
        }
        Ok(Self { weights })
    }

    /// Build a raw term-frequency vector from a plain list of terms.
    ///
    /// Each term is lowercased and trimmed, and repeated occurrences sum.
    /// This is the simplified stand-in for a real TF-IDF vector builder,
    /// which lives outside this crate.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut weights = HashMap::new();
        for term in terms {
            *weights
                .entry(term.as_ref().trim().to_lowercase())
                .or_insert(0.0) += 1.0;
        }
        Self { weights }
    }

    /// Weight for `term`, if present.
    pub fn weight(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    /// Whether `term` carries any weight in this vector.
    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the vector has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over `(term, weight)` entries. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, &w)| (term.as_str(), w))
    }

    /// Iterate over the term keys. Order is unspecified.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }
}

/// One scored job in a ranking result.
///
/// `title` and `source` are display metadata; the engine core fills in
/// placeholders and leaves resolution against a real catalog to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Opaque job identifier.
    pub id: String,
    /// Display title for the job.
    pub title: String,
    /// Display label for where the job came from.
    pub source: String,
    /// Match score in the 0–100 range, higher is better.
    pub score: f64,
}

impl ScoredCandidate {
    /// Candidate with placeholder display metadata derived from the id.
    pub fn placeholder(id: &str, score: f64) -> Self {
        Self {
            id: id.to_string(),
            title: format!("Job {id}"),
            source: "Company".to_string(),
            score,
        }
    }
}
