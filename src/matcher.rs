//! Pure query-to-text scoring.
//!
//! Scoring is deterministic and case-insensitive, with three tiers: an exact
//! match beats a prefix match, which beats any ordered-subsequence match.
//! Subsequence matches reward contiguous runs over scattered letters and are
//! only accepted when enough of the query was consumed.

use crate::config::MatchTuning;

/// Score for a case-insensitive exact match; wins over everything.
pub const EXACT_SCORE: i64 = 1_000_000;

/// Score when the text starts with the query.
pub const PREFIX_SCORE: i64 = 500_000;

/// What kind of text the query is being scored against. Paths carry more
/// irrelevant characters (directory segments), so their acceptance bar is
/// lower than for bare names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTarget {
    Name,
    Path,
}

/// Scores `query` against `text`. Returns `None` when the query does not
/// match at all, otherwise the raw match score before ranking bonuses.
pub fn score(query: &str, text: &str, target: MatchTarget, tuning: &MatchTuning) -> Option<i64> {
    if query.is_empty() {
        return None;
    }

    let query = query.to_lowercase();
    let text = text.to_lowercase();

    if text == query {
        return Some(EXACT_SCORE);
    }
    if text.starts_with(&query) {
        return Some(PREFIX_SCORE);
    }

    let query_chars: Vec<char> = query.chars().collect();
    let text_chars: Vec<char> = text.chars().collect();

    let (consumed, mut score) = subsequence_score(&query_chars, &text_chars, tuning);

    let accept_ratio = match target {
        MatchTarget::Name => tuning.name_accept_ratio,
        MatchTarget::Path => tuning.path_accept_ratio,
    };
    if (consumed as f64) < accept_ratio * query_chars.len() as f64 {
        return None;
    }

    score += token_bonus(&query, &text, tuning);
    Some(score)
}

/// Greedy left-to-right subsequence walk. Consumes query characters in order
/// wherever they occur in the text, awarding a baseline per consumed
/// character plus a run bonus that grows with every extension of an unbroken
/// streak, so one run of N is worth more than two runs of N/2. Returns how
/// many query characters were consumed and the accumulated score.
fn subsequence_score(query: &[char], text: &[char], tuning: &MatchTuning) -> (usize, i64) {
    let mut consumed = 0usize;
    let mut score = 0i64;
    let mut run = 0i64;
    let mut qi = 0usize;

    for &tc in text {
        if qi < query.len() && tc == query[qi] {
            qi += 1;
            consumed += 1;
            run += 1;
            score += tuning.char_base;
            if run >= 2 {
                score += tuning.run_bonus * (run - 1);
            }
        } else {
            run = 0;
        }
    }

    (consumed, score)
}

/// Boundary-aligned matches read as more intentional: a query equal to a
/// delimited token of the text, or a prefix of one, earns a fixed bonus.
fn token_bonus(query: &str, text: &str, tuning: &MatchTuning) -> i64 {
    let mut prefix_of_token = false;
    for token in text.split(|c: char| !c.is_alphanumeric()) {
        if token.is_empty() {
            continue;
        }
        if token == query {
            return tuning.token_equal_bonus;
        }
        if token.starts_with(query) {
            prefix_of_token = true;
        }
    }
    if prefix_of_token {
        tuning.token_prefix_bonus
    } else {
        0
    }
}
