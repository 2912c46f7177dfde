//! Matching engine orchestration.
//!
//! [`MatchingEngine`] is the only type the surrounding system talks to. It
//! composes the prefix index, the similarity functions, and the ranking heap
//! into the three product queries: suggest titles, score a candidate/job
//! pair, and rank many jobs against one candidate.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::prefix::PrefixIndex;
use crate::ranking::RankingHeap;
use crate::similarity::{cosine, intersect_terms, missing_terms};
use crate::types::{ScoredCandidate, TermVector};


/// In-memory job matching engine.
///
/// Everything is synchronous, in-memory computation with no I/O. The only
/// cross-call mutable state is the title index; [`rebuild_titles`] takes
/// `&mut self` so a rebuild can never race with in-flight suggestions —
/// concurrent deployments wrap the engine in an `RwLock` (or swap immutable
/// snapshots) at their own seam. Scoring and ranking are pure per call.
///
/// [`rebuild_titles`]: MatchingEngine::rebuild_titles
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: EngineConfig,
    titles: PrefixIndex,
}

impl MatchingEngine {
    /// Engine with an empty title index and explicit configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            titles: PrefixIndex::new(),
        }
    }

    /// Engine pre-populated from a title catalog.
    pub fn with_titles<I, S>(config: EngineConfig, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut engine = Self::new(config);
        engine.rebuild_titles(titles);
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Job title suggestions for a typed prefix, capped at the configured
    /// suggestion limit.
    ///
    /// A blank prefix yields no suggestions without touching the index.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        if prefix.trim().is_empty() {
            return Vec::new();
        }
        let hits = self.titles.suggest(prefix, self.config.suggest_limit);
        debug!(prefix, hits = hits.len(), "title suggestion");
        hits
    }

    /// Replace the title index contents from a full catalog snapshot.
    pub fn rebuild_titles<I, S>(&mut self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.titles.rebuild(titles);
        info!(titles = self.titles.len(), "rebuilt title index");
    }

    /// Number of distinct titles currently indexed.
    pub fn title_count(&self) -> usize {
        self.titles.len()
    }

    /// Candidate/job similarity as an integer percentage.
    ///
    /// Cosine similarity scaled to [0, 100], rounded half-up.
    pub fn score_percent(&self, cv: &TermVector, jd: &TermVector) -> u32 {
        (cosine(cv, jd) * 100.0).round() as u32
    }

    /// Terms present in both the candidate profile and the job description.
    pub fn matched_skills(&self, cv: &TermVector, jd: &TermVector) -> HashSet<String> {
        intersect_terms(cv, jd)
    }

    /// Job description terms the candidate profile lacks.
    pub fn missing_skills(&self, cv: &TermVector, jd: &TermVector) -> HashSet<String> {
        missing_terms(cv, jd)
    }

    /// Rank every job against the candidate vector, best match first.
    ///
    /// Each job is scored with cosine similarity scaled to 0–100 and pushed
    /// into a ranking heap constructed fresh for this call, so no state
    /// leaks between rankings. The full ranking is returned uncapped;
    /// callers truncate if they want a top-K slice. Display metadata on the
    /// returned candidates is a placeholder — resolving real titles and
    /// company labels against a catalog is the caller's concern.
    pub fn rank_jobs(
        &self,
        cv: &TermVector,
        job_vectors: &HashMap<String, TermVector>,
    ) -> Vec<ScoredCandidate> {
        let start = Instant::now();

        let mut ranking = RankingHeap::new();
        for (job_id, jd) in job_vectors {
            let score = cosine(cv, jd) * 100.0;
            ranking.push(ScoredCandidate::placeholder(job_id, score));
        }
        let ranked = ranking.drain_ranked();

        debug!(
            jobs = job_vectors.len(),
            latency_us = start.elapsed().as_micros() as u64,
            "ranked jobs for candidate"
        );
        ranked
    }
}
