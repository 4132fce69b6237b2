use quickfind::config::{MatchTuning, RankTuning};
use quickfind::ranker::rank;
use quickfind::usage::{MemoryUsageStore, NoUsage};
use quickfind::walker::{collect_candidates, WalkOptions};
use quickfind::{Candidate, CandidateKind, QuickfindConfig};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn candidate(path: &str) -> Candidate {
    let path = PathBuf::from(path);
    Candidate {
        display_name: path.file_name().unwrap().to_string_lossy().to_string(),
        extension: path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default(),
        kind: CandidateKind::File,
        path,
    }
}

fn code_extensions() -> HashSet<String> {
    QuickfindConfig::default().code_extension_set()
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"x").unwrap();
}

#[test]
fn higher_usage_count_ranks_first_among_equals() {
    let usage = MemoryUsageStore::new();
    usage.set("/b/report.txt", 5);

    let candidates = vec![candidate("/a/report.txt"), candidate("/b/report.txt")];
    let results = rank(
        "report",
        candidates,
        &[],
        &usage,
        &code_extensions(),
        &MatchTuning::default(),
        &RankTuning::default(),
        10,
    );

    assert_eq!(results[0].path, PathBuf::from("/b/report.txt"));
    assert_eq!(results[1].path, PathBuf::from("/a/report.txt"));
}

#[test]
fn output_is_bounded_by_max_results() {
    let candidates: Vec<Candidate> = (0..50)
        .map(|i| candidate(&format!("/x/report_{i:02}.txt")))
        .collect();
    let results = rank(
        "report",
        candidates,
        &[],
        &NoUsage,
        &code_extensions(),
        &MatchTuning::default(),
        &RankTuning::default(),
        10,
    );
    assert_eq!(results.len(), 10);
}

#[test]
fn code_extensions_outrank_binary_neighbours() {
    let candidates = vec![candidate("/x/app.bin"), candidate("/x/app.ts")];
    let results = rank(
        "app",
        candidates,
        &[],
        &NoUsage,
        &code_extensions(),
        &MatchTuning::default(),
        &RankTuning::default(),
        10,
    );
    assert_eq!(results[0].path, PathBuf::from("/x/app.ts"));
}

#[test]
fn shallower_candidate_wins_the_tie() {
    let candidates = vec![
        candidate("/x/deep/nested/app.ts"),
        candidate("/x/app.ts"),
    ];
    let results = rank(
        "app",
        candidates,
        &[],
        &NoUsage,
        &code_extensions(),
        &MatchTuning::default(),
        &RankTuning::default(),
        10,
    );
    assert_eq!(results[0].path, PathBuf::from("/x/app.ts"));
}

#[test]
fn ties_keep_discovery_order() {
    let candidates = vec![candidate("/x/app.ts"), candidate("/y/app.ts")];
    let results = rank(
        "app",
        candidates,
        &[],
        &NoUsage,
        &code_extensions(),
        &MatchTuning::default(),
        &RankTuning::default(),
        10,
    );
    assert_eq!(results[0].path, PathBuf::from("/x/app.ts"));
    assert_eq!(results[1].path, PathBuf::from("/y/app.ts"));
}

#[test]
fn current_working_root_beats_other_roots() {
    let roots = vec![PathBuf::from("/cwd"), PathBuf::from("/home")];
    let candidates = vec![candidate("/home/app.ts"), candidate("/cwd/app.ts")];
    let results = rank(
        "app",
        candidates,
        &roots,
        &NoUsage,
        &code_extensions(),
        &MatchTuning::default(),
        &RankTuning::default(),
        10,
    );
    assert_eq!(results[0].path, PathBuf::from("/cwd/app.ts"));
}

#[test]
fn non_matching_candidates_are_dropped() {
    let candidates = vec![candidate("/x/zzz.bin"), candidate("/x/app.ts")];
    let results = rank(
        "app",
        candidates,
        &[],
        &NoUsage,
        &code_extensions(),
        &MatchTuning::default(),
        &RankTuning::default(),
        10,
    );
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, PathBuf::from("/x/app.ts"));
}

// The walkthrough scenario: a project root with an ignored .git subtree, a
// code file, and a home root with a visible dotfile.
#[test]
fn launcher_scenario_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().canonicalize().unwrap();
    let proj = base.join("proj");
    let home = base.join("home");
    touch(&proj.join(".git/hooks/x.sh"));
    touch(&proj.join("src/app.ts"));
    touch(&home.join(".bashrc"));

    let roots = vec![proj.clone(), home.clone()];
    let opts = WalkOptions {
        ignore_dirs: QuickfindConfig::default().ignore_set(),
        depth_budget: 6,
        max_examined: 10_000,
        home_dir: Some(home.clone()),
        bundles_as_apps: false,
    };

    let candidates = collect_candidates(&roots, &opts, &|| false);
    assert!(
        !candidates
            .iter()
            .any(|c| c.path.components().any(|p| p.as_os_str() == ".git")),
        ".git subtree was touched"
    );

    let results = rank(
        "app",
        candidates.clone(),
        &roots,
        &NoUsage,
        &code_extensions(),
        &MatchTuning::default(),
        &RankTuning::default(),
        10,
    );
    assert_eq!(results[0].path, proj.join("src/app.ts"));

    let results = rank(
        "bashrc",
        candidates,
        &roots,
        &NoUsage,
        &code_extensions(),
        &MatchTuning::default(),
        &RankTuning::default(),
        10,
    );
    assert_eq!(results[0].path, home.join(".bashrc"));
    assert_eq!(results.len(), 1);
}
