//! Search dispatch and cooperative, generation-based cancellation.
//!
//! Every `search` call bumps a process-wide generation counter and enqueues a
//! job tagged with the new generation onto a single long-lived worker thread.
//! When a pipeline finishes, its generation is compared to the counter under
//! the lock: only the still-current search delivers its results; superseded
//! ones are dropped silently. Supersession is routine, not an error.

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::debug;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::config::QuickfindConfig;
use crate::ranker;
use crate::usage::UsageStore;
use crate::walker::{self, Candidate, WalkOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Files,
    Applications,
}

type Completion = Box<dyn FnOnce(Vec<Candidate>) + Send>;

struct SearchRequest {
    generation: u64,
    query: String,
    kind: SearchKind,
    issued_at: Instant,
    completion: Completion,
}

pub struct SearchCoordinator {
    generation: Arc<Mutex<u64>>,
    jobs: Option<Sender<SearchRequest>>,
    worker: Option<JoinHandle<()>>,
}

impl SearchCoordinator {
    pub fn new(config: QuickfindConfig, usage: Arc<dyn UsageStore>) -> Self {
        let generation = Arc::new(Mutex::new(0u64));
        let (jobs, queue) = unbounded();

        let worker_generation = Arc::clone(&generation);
        let worker = thread::Builder::new()
            .name("quickfind-search".to_string())
            .spawn(move || worker_loop(queue, worker_generation, config, usage))
            .expect("failed to spawn search worker");

        Self {
            generation,
            jobs: Some(jobs),
            worker: Some(worker),
        }
    }

    /// Issues a search. Never blocks: the pipeline runs on the worker thread
    /// and `completion` fires there, only if this search is still the most
    /// recent one when the pipeline finishes. A superseded search produces no
    /// invocation at all. Empty or whitespace-only queries complete
    /// immediately with an empty result list (still superseding any
    /// in-flight search, so clearing the input cancels it).
    pub fn search(
        &self,
        query: &str,
        kind: SearchKind,
        completion: impl FnOnce(Vec<Candidate>) + Send + 'static,
    ) {
        let generation = {
            let mut current = self.generation.lock();
            *current += 1;
            *current
        };

        let query = query.trim();
        if query.is_empty() {
            completion(Vec::new());
            return;
        }

        let request = SearchRequest {
            generation,
            query: query.to_string(),
            kind,
            issued_at: Instant::now(),
            completion: Box::new(completion),
        };
        if let Some(jobs) = &self.jobs {
            // Send can only fail after Drop closed the channel.
            let _ = jobs.send(request);
        }
    }

    /// Current generation; a pipeline holding an older stamp is superseded.
    fn current_generation(generation: &Mutex<u64>) -> u64 {
        *generation.lock()
    }
}

impl Drop for SearchCoordinator {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop.
        self.jobs.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn worker_loop(
    queue: Receiver<SearchRequest>,
    generation: Arc<Mutex<u64>>,
    config: QuickfindConfig,
    usage: Arc<dyn UsageStore>,
) {
    let ignore_dirs = config.ignore_set();
    let code_extensions = config.code_extension_set();
    let home_dir = dirs::home_dir();

    for request in queue.iter() {
        // Jobs already superseded while queued are skipped outright.
        if SearchCoordinator::current_generation(&generation) != request.generation {
            debug!(
                "skipping queued search '{}' (generation {})",
                request.query, request.generation
            );
            continue;
        }

        let (roots, max_results, bundles_as_apps) = match request.kind {
            SearchKind::Files => (config.effective_roots(), config.max_file_results, false),
            SearchKind::Applications => (
                config.application_dirs.clone(),
                config.max_app_results,
                true,
            ),
        };
        let opts = WalkOptions {
            ignore_dirs: ignore_dirs.clone(),
            depth_budget: config.depth_budget,
            max_examined: max_results * config.overscan_factor,
            home_dir: home_dir.clone(),
            bundles_as_apps,
        };

        let stale = {
            let generation = Arc::clone(&generation);
            let issued = request.generation;
            move || SearchCoordinator::current_generation(&generation) != issued
        };

        let candidates = walker::collect_candidates(&roots, &opts, &stale);
        let results = ranker::rank(
            &request.query,
            candidates,
            &roots,
            usage.as_ref(),
            &code_extensions,
            &config.matching,
            &config.ranking,
            max_results,
        );

        let still_current =
            SearchCoordinator::current_generation(&generation) == request.generation;
        if still_current {
            debug!(
                "search '{}' delivered {} results in {:?}",
                request.query,
                results.len(),
                request.issued_at.elapsed()
            );
            (request.completion)(results);
        } else {
            debug!(
                "dropping superseded results for '{}' (generation {})",
                request.query, request.generation
            );
        }
    }
}
