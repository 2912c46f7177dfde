//! Sparse-vector similarity over term-weight vectors.
//!
//! Pure functions of their inputs; no state, no synchronization needed.

use crate::types::TermVector;
use std::collections::HashSet;

/// Cosine similarity between two sparse term-weight vectors, in [0.0, 1.0].
///
/// Defined as `dot(a, b) / (‖a‖ · ‖b‖)`. Returns 0.0 when either vector is
/// empty or has an exactly-zero Euclidean norm, so no division error ever
/// reaches the caller. The zero check is an exact sentinel, not a tolerance:
/// a vector with tiny nonzero weights is still scored normally.
pub fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let dot = dot_product(a, b);
    let norm_a = norm(a);
    let norm_b = norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Dot product over the intersection of term keys.
///
/// Iterates the smaller vector and probes the larger, so the intersection
/// step costs O(min(|a|, |b|)).
fn dot_product(a: &TermVector, b: &TermVector) -> f64 {
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    smaller
        .iter()
        .filter_map(|(term, weight)| larger.weight(term).map(|other| weight * other))
        .sum()
}

/// Euclidean norm.
fn norm(vec: &TermVector) -> f64 {
    vec.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
}

/// Terms present in both vectors — the matched skills.
pub fn intersect_terms(a: &TermVector, b: &TermVector) -> HashSet<String> {
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    smaller
        .terms()
        .filter(|term| larger.contains(term))
        .map(str::to_string)
        .collect()
}

/// Terms in `jd` absent from `cv` — the skills the candidate lacks.
///
/// Asymmetric: swapping the arguments changes the result.
pub fn missing_terms(cv: &TermVector, jd: &TermVector) -> HashSet<String> {
    jd.terms()
        .filter(|term| !cv.contains(term))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cv() -> TermVector {
        TermVector::from_weights([("java", 2.0), ("sql", 1.0)]).expect("valid weights")
    }

    fn jd() -> TermVector {
        TermVector::from_weights([("java", 1.0), ("python", 1.0)]).expect("valid weights")
    }

    #[test]
    fn cosine_matches_hand_computed_value() {
        // dot = 2.0, norms = √5 and √2 → 2 / (√5·√2) ≈ 0.6325
        let score = cosine(&cv(), &jd());
        assert!((score - 0.632_455_532).abs() < 1e-9, "score = {score}");
    }

    #[test]
    fn cosine_is_symmetric() {
        assert_eq!(cosine(&cv(), &jd()), cosine(&jd(), &cv()));
    }

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let vec = cv();
        assert!((cosine(&vec, &vec) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_vector_scores_zero() {
        let empty = TermVector::new();
        assert_eq!(cosine(&empty, &jd()), 0.0);
        assert_eq!(cosine(&cv(), &empty), 0.0);
        assert_eq!(cosine(&empty, &empty), 0.0);
    }

    #[test]
    fn zero_norm_vector_scores_zero() {
        let zero = TermVector::from_weights([("java", 0.0)]).expect("valid weights");
        assert_eq!(cosine(&zero, &jd()), 0.0);
    }

    #[test]
    fn tiny_nonzero_norm_is_scored_normally() {
        let tiny = TermVector::from_weights([("java", 1e-12)]).expect("valid weights");
        let other = TermVector::from_weights([("java", 1.0)]).expect("valid weights");
        assert!((cosine(&tiny, &other) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_vectors_score_zero() {
        let a = TermVector::from_terms(["rust"]);
        let b = TermVector::from_terms(["cobol"]);
        assert_eq!(cosine(&a, &b), 0.0);
    }

    #[test]
    fn intersect_reports_shared_terms() {
        let shared = intersect_terms(&cv(), &jd());
        assert_eq!(shared, HashSet::from(["java".to_string()]));
    }

    #[test]
    fn intersect_with_empty_is_empty() {
        assert!(intersect_terms(&cv(), &TermVector::new()).is_empty());
    }

    #[test]
    fn missing_reports_uncovered_jd_terms() {
        let missing = missing_terms(&cv(), &jd());
        assert_eq!(missing, HashSet::from(["python".to_string()]));
    }

    #[test]
    fn missing_is_asymmetric() {
        let missing = missing_terms(&jd(), &cv());
        assert_eq!(missing, HashSet::from(["sql".to_string()]));
    }

    #[test]
    fn missing_against_self_is_empty() {
        let vec = cv();
        assert!(missing_terms(&vec, &vec).is_empty());
    }
}
