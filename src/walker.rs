//! Candidate enumeration over prioritized root directories.
//!
//! The walk applies the launcher's visibility rules: a fixed ignore set of
//! directory names prunes whole subtrees, hidden entries are skipped except
//! for dotfiles sitting directly in the user's home root, descent stops past
//! a per-root depth budget, and application bundles are yielded as single
//! candidates instead of being descended into. Traversal is bounded by an
//! examination cap and checks a cooperative cancellation callback at
//! checkpoints.

use log::debug;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How often (in examined entries) the cancellation callback is consulted.
const CANCEL_CHECK_INTERVAL: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    File,
    Directory,
    Application,
}

/// A single item produced by the walk. Ephemeral: candidates live only for
/// the duration of one search invocation and are never cached across calls.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    pub display_name: String,
    pub kind: CandidateKind,
    pub extension: String,
}

impl Candidate {
    fn from_entry(path: &Path, kind: CandidateKind) -> Option<Self> {
        let file_name = path.file_name()?.to_string_lossy().to_string();
        let display_name = match kind {
            // Launchers show "Safari", not "Safari.app".
            CandidateKind::Application => file_name
                .strip_suffix(".app")
                .unwrap_or(&file_name)
                .to_string(),
            _ => file_name,
        };
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Some(Self {
            path: path.to_path_buf(),
            display_name,
            kind,
            extension,
        })
    }
}

#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Directory names whose subtrees are pruned entirely.
    pub ignore_dirs: HashSet<String>,
    /// Extra path segments allowed below each root.
    pub depth_budget: usize,
    /// Total entries the walk may examine across all roots.
    pub max_examined: usize,
    /// Home root whose direct dotfile children stay visible.
    pub home_dir: Option<PathBuf>,
    /// Application-search variant: yield `.app` bundles as candidates.
    pub bundles_as_apps: bool,
}

/// Walks `roots` in priority order and collects candidates until the roots
/// are exhausted, the examination cap is reached, or `should_stop` reports
/// that the search was superseded. Per-entry enumeration failures are
/// skipped; one unreadable node never aborts the traversal.
pub fn collect_candidates(
    roots: &[PathBuf],
    opts: &WalkOptions,
    should_stop: &dyn Fn() -> bool,
) -> Vec<Candidate> {
    let mut out = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut examined = 0usize;

    for root in roots {
        if !root.is_dir() {
            debug!("skipping missing root {}", root.display());
            continue;
        }
        let is_home = opts.home_dir.as_deref() == Some(root.as_path());
        let mut it = WalkDir::new(root)
            .max_depth(opts.depth_budget)
            .follow_links(false)
            .into_iter();

        loop {
            if examined >= opts.max_examined {
                return out;
            }
            if examined % CANCEL_CHECK_INTERVAL == 0 && should_stop() {
                debug!("traversal cancelled after {examined} entries");
                return out;
            }

            let entry = match it.next() {
                None => break,
                Some(Err(e)) => {
                    debug!("skipping unreadable entry: {e}");
                    continue;
                }
                Some(Ok(entry)) => entry,
            };
            if entry.depth() == 0 {
                // The root itself is not a candidate.
                continue;
            }
            examined += 1;

            let name = entry.file_name().to_string_lossy().to_string();
            let is_dir = entry.file_type().is_dir();

            if is_dir && opts.ignore_dirs.contains(&name) {
                it.skip_current_dir();
                continue;
            }

            if name.starts_with('.') {
                // Dotfiles directly under the home root stay visible (shell
                // rc files and friends); everything else hidden is pruned.
                let visible_dotfile = is_home && entry.depth() == 1 && !is_dir;
                if !visible_dotfile {
                    if is_dir {
                        it.skip_current_dir();
                    }
                    continue;
                }
            }

            if is_dir && name.ends_with(".app") {
                it.skip_current_dir();
                if opts.bundles_as_apps {
                    if let Some(candidate) =
                        Candidate::from_entry(entry.path(), CandidateKind::Application)
                    {
                        if seen.insert(candidate.path.clone()) {
                            out.push(candidate);
                        }
                    }
                }
                continue;
            }

            let kind = if is_dir {
                CandidateKind::Directory
            } else {
                CandidateKind::File
            };
            if let Some(candidate) = Candidate::from_entry(entry.path(), kind) {
                // Roots may overlap (cwd is usually under home); keep the
                // first, highest-priority sighting.
                if seen.insert(candidate.path.clone()) {
                    out.push(candidate);
                }
            }
        }
    }

    out
}
