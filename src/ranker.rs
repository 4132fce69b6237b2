//! Blends matcher scores with usage, location, extension, and depth signals
//! and produces the bounded, ordered result list.

use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::{MatchTuning, RankTuning};
use crate::matcher::{self, MatchTarget};
use crate::usage::UsageStore;
use crate::walker::Candidate;

/// A candidate with its score breakdown. Owned by the ranker during a single
/// search; scores are stripped before delivery.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub raw_score: i64,
    pub usage_bonus: i64,
    pub final_score: i64,
}

/// Scores every candidate against `query`, drops non-matches, sorts
/// descending by final score (stable, so ties keep discovery order), and
/// truncates to `max_results`.
pub fn rank(
    query: &str,
    candidates: Vec<Candidate>,
    roots: &[PathBuf],
    usage: &dyn UsageStore,
    code_extensions: &HashSet<String>,
    matching: &MatchTuning,
    ranking: &RankTuning,
    max_results: usize,
) -> Vec<Candidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_par_iter()
        .filter_map(|candidate| {
            let raw_score = score_candidate(query, &candidate, roots, matching)?;
            let usage_bonus = usage.get(&candidate.path) as i64 * ranking.usage_weight;
            let location = location_bonus(&candidate.path, roots, ranking);
            let extension = if code_extensions.contains(&candidate.extension) {
                ranking.extension_bonus
            } else {
                0
            };
            let depth_penalty = depth(&candidate.path) as i64 * ranking.depth_penalty;
            let final_score = raw_score + usage_bonus + location + extension - depth_penalty;
            Some(ScoredCandidate {
                candidate,
                raw_score,
                usage_bonus,
                final_score,
            })
        })
        .collect();

    scored.sort_by(|a, b| b.final_score.cmp(&a.final_score));
    scored.truncate(max_results);
    scored.into_iter().map(|s| s.candidate).collect()
}

/// Raw matcher score: the display name is tried first under the strict
/// acceptance ratio; if it does not match, the root-relative path is tried
/// under the lenient one.
fn score_candidate(
    query: &str,
    candidate: &Candidate,
    roots: &[PathBuf],
    matching: &MatchTuning,
) -> Option<i64> {
    if let Some(score) = matcher::score(query, &candidate.display_name, MatchTarget::Name, matching)
    {
        return Some(score);
    }
    let relative = roots
        .iter()
        .find_map(|root| candidate.path.strip_prefix(root).ok())
        .unwrap_or(&candidate.path);
    matcher::score(
        query,
        &relative.to_string_lossy(),
        MatchTarget::Path,
        matching,
    )
}

/// Items under the highest-priority root (the current working directory)
/// beat items under other configured roots, which beat everything else.
fn location_bonus(path: &Path, roots: &[PathBuf], ranking: &RankTuning) -> i64 {
    match roots.iter().position(|root| path.starts_with(root)) {
        Some(0) => ranking.cwd_bonus,
        Some(_) => ranking.preferred_root_bonus,
        None => 0,
    }
}

fn depth(path: &Path) -> usize {
    path.components().count()
}
