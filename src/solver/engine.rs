//! Main tile solver interface

use super::config::SolveConfig;
use super::expand::{WildcardExpansion, expand_wildcards};
use super::filter::{MatchFilter, SolutionSet};
use super::partition::{WorkPartitioner, WorkUnit};
use super::permutation::Visitor;
use crate::core::{Dictionary, ResolvedTiles, TileSequence};
use crate::output::Console;
use crate::progress::{ProgressCounter, ProgressTracker, permutation_goal};
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Error type for a solve that did not run to completion
#[derive(Debug)]
pub enum SolveError {
    /// The worker pool could not be created
    ThreadPool(rayon::ThreadPoolBuildError),
    /// The progress timer thread could not be spawned
    Progress(std::io::Error),
    /// The run was cancelled after `processed` permutations
    Interrupted { processed: u64 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreadPool(e) => write!(f, "Failed to start worker pool: {e}"),
            Self::Progress(e) => write!(f, "Failed to start progress display: {e}"),
            Self::Interrupted { processed } => {
                write!(f, "Interrupted after {processed} permutations")
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ThreadPool(e) => Some(e),
            Self::Progress(e) => Some(e),
            Self::Interrupted { .. } => None,
        }
    }
}

/// Shared flag that abandons a running solve between candidates
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Result of a completed solve
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Accepted words, sorted
    pub solutions: Vec<String>,
    /// Permutations evaluated
    pub processed: u64,
    /// Precomputed permutation total, `None` if it overflowed
    pub goal: Option<u64>,
    /// Racks produced by blank expansion
    pub resolved_sequences: u64,
    /// Work units executed across all resolved racks
    pub work_units: u64,
    pub elapsed: Duration,
}

/// Per-task view of the shared run state
///
/// Copied into every work unit; all fields are shared references.
#[derive(Clone, Copy)]
struct Worker<'s> {
    filter: &'s MatchFilter<'s>,
    counter: &'s ProgressCounter,
    console: &'s Console,
    cancel: &'s CancelToken,
}

impl Visitor for Worker<'_> {
    fn visit(&mut self, candidate: &[u8]) {
        if let Some(word) = self.filter.accept(candidate) {
            self.console.solution(word);
        }
        self.counter.increment();
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Marker for a run abandoned by cancellation
#[derive(Debug)]
struct Cancelled;

fn run_unit<V: Visitor>(
    mut visitor: V,
    unit: &WorkUnit,
    rack: &ResolvedTiles,
    scratch: &mut Vec<u8>,
) -> Result<(), Cancelled> {
    if unit.for_each_ordering(rack.as_bytes(), scratch, &mut visitor).is_break() {
        return Err(Cancelled);
    }
    Ok(())
}

/// Tile solver
///
/// Owns the configuration of a run and borrows the dictionary, so independent
/// solvers can run side by side without sharing any state.
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    config: SolveConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver over `dictionary`
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, config: SolveConfig) -> Self {
        Self { dictionary, config }
    }

    /// Find every dictionary word that can be spelled from `rack`
    ///
    /// Accepted words are echoed to `console` as they are found, in no
    /// particular order; the report lists them sorted. The set of words does not
    /// depend on the mode, thread count or split threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The worker pool or the progress thread cannot be started
    /// - `cancel` fires before the search completes
    ///
    /// # Examples
    /// ```
    /// use tile_solver::core::{Dictionary, TileSequence};
    /// use tile_solver::output::Console;
    /// use tile_solver::solver::{CancelToken, SolveConfig, Solver};
    ///
    /// let dictionary = Dictionary::from_words(["CAT", "ACT", "AT"]);
    /// let config = SolveConfig::new().with_min_characters(3);
    /// let solver = Solver::new(&dictionary, config);
    ///
    /// let rack = TileSequence::parse("TAC", '*').unwrap();
    /// let report = solver.solve(&rack, &Console::silent(), &CancelToken::new()).unwrap();
    /// assert_eq!(report.solutions, vec!["ACT", "CAT"]);
    /// ```
    pub fn solve(
        &self,
        rack: &TileSequence,
        console: &Console,
        cancel: &CancelToken,
    ) -> Result<SolveReport, SolveError> {
        let started = Instant::now();
        let expansion = expand_wildcards(rack);
        let goal = permutation_goal(rack.len(), expansion.len());

        let pool = if self.config.parallel {
            Some(self.build_pool()?)
        } else {
            None
        };
        let workers = pool.as_ref().map_or(0, rayon::ThreadPool::current_num_threads);

        let solutions = SolutionSet::new();
        let filter = MatchFilter::new(
            self.dictionary,
            &self.config.pattern,
            self.config.min_characters,
            &solutions,
        );
        let counter = Arc::new(ProgressCounter::new(workers));
        let tracker = ProgressTracker::start(
            Arc::clone(&counter),
            goal,
            console.clone(),
            self.config.progress,
        )
        .map_err(SolveError::Progress)?;

        let worker = Worker {
            filter: &filter,
            counter: &counter,
            console,
            cancel,
        };

        let (outcome, work_units) = if let Some(pool) = &pool {
            let units = WorkPartitioner::new(self.config.split_threshold).partition(rack.len());
            log::debug!(
                "{} racks x {} units on {workers} workers (split threshold {})",
                expansion.len(),
                units.len(),
                self.config.split_threshold
            );
            let outcome = pool.install(|| run_parallel(&expansion, &units, worker));
            (outcome, expansion.len().saturating_mul(units.len() as u64))
        } else {
            log::debug!("{} racks on the calling thread", expansion.len());
            (run_sequential(&expansion, worker), expansion.len())
        };

        let processed = settle(outcome, tracker)?;
        Ok(SolveReport {
            solutions: solutions.into_sorted(),
            processed,
            goal,
            resolved_sequences: expansion.len(),
            work_units,
            elapsed: started.elapsed(),
        })
    }

    fn build_pool(&self) -> Result<rayon::ThreadPool, SolveError> {
        let mut builder =
            rayon::ThreadPoolBuilder::new().thread_name(|index| format!("solver-{index}"));
        if let Some(threads) = self.config.threads {
            builder = builder.num_threads(threads.get());
        }
        builder.build().map_err(SolveError::ThreadPool)
    }
}

/// Drain every (rack, unit) pair on the current pool
fn run_parallel<V>(
    expansion: &WildcardExpansion,
    units: &[WorkUnit],
    visitor: V,
) -> Result<(), Cancelled>
where
    V: Visitor + Copy + Sync,
{
    (0..expansion.len()).into_par_iter().try_for_each(|index| {
        let Some(rack) = expansion.get(index) else {
            return Ok(());
        };
        units.par_iter().try_for_each_init(Vec::new, |scratch, unit| {
            run_unit(visitor, unit, &rack, scratch)
        })
    })
}

/// Walk each rack as a single unsplit unit on the calling thread
fn run_sequential<V>(expansion: &WildcardExpansion, visitor: V) -> Result<(), Cancelled>
where
    V: Visitor + Copy,
{
    let mut scratch = Vec::new();
    for rack in expansion.racks() {
        run_unit(visitor, &WorkUnit::whole(rack.len()), &rack, &mut scratch)?;
    }
    Ok(())
}

/// Stop the tracker and turn the run outcome into the processed count
///
/// Only a run that was actually cut short is interrupted; a cancel that arrives
/// after the last candidate leaves a complete result.
fn settle(outcome: Result<(), Cancelled>, tracker: ProgressTracker) -> Result<u64, SolveError> {
    let processed = tracker.finish();
    match outcome {
        Ok(()) => Ok(processed),
        Err(Cancelled) => Err(SolveError::Interrupted { processed }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressConfig;
    use crate::solver::filter::MatchPattern;
    use std::collections::BTreeSet;
    use std::sync::atomic::AtomicU64;

    fn solve_with(dictionary: &Dictionary, input: &str, config: SolveConfig) -> SolveReport {
        let rack = TileSequence::parse(input, '*').unwrap();
        Solver::new(dictionary, config)
            .solve(&rack, &Console::silent(), &CancelToken::new())
            .unwrap()
    }

    fn both_modes(dictionary: &Dictionary, input: &str, config: &SolveConfig) -> SolveReport {
        let parallel = solve_with(dictionary, input, config.clone().with_parallel(true));
        let sequential = solve_with(dictionary, input, config.clone().with_parallel(false));

        assert_eq!(parallel.solutions, sequential.solutions);
        assert_eq!(parallel.processed, sequential.processed);
        assert_eq!(parallel.goal, sequential.goal);
        sequential
    }

    #[test]
    fn cat_finds_every_anagram_once() {
        let dictionary = Dictionary::from_words(["CAT", "ACT", "AT", "TA"]);
        let config = SolveConfig::new().with_min_characters(2);

        let report = both_modes(&dictionary, "CAT", &config);

        // TA is a permutation of the {A, T} subsequence, so it is found too
        assert_eq!(report.solutions, vec!["ACT", "AT", "CAT", "TA"]);
        assert_eq!(report.processed, 15);
        assert_eq!(report.goal, Some(15));
    }

    #[test]
    fn wildcard_expands_to_every_letter() {
        let dictionary = Dictionary::from_words(["CAT", "CUT"]);
        let config = SolveConfig::new().with_min_characters(3);

        let report = both_modes(&dictionary, "C*T", &config);

        assert_eq!(report.solutions, vec!["CAT", "CUT"]);
        assert_eq!(report.resolved_sequences, 26);
        assert_eq!(report.processed, 26 * 15);
        assert_eq!(report.goal, Some(390));
    }

    #[test]
    fn pattern_restricts_length() {
        let dictionary = Dictionary::from_words(["LISTEN", "SILENT", "LINTS"]);
        let config = SolveConfig::new()
            .with_min_characters(1)
            .with_pattern("[A-Z]{6}")
            .unwrap();

        let report = both_modes(&dictionary, "LISTEN", &config);

        assert_eq!(report.solutions, vec!["LISTEN", "SILENT"]);
        assert_eq!(report.processed, 1956);
    }

    #[test]
    fn min_characters_excludes_short_words() {
        let dictionary = Dictionary::from_words(["LISTEN", "SILENT", "LINTS"]);
        let config = SolveConfig::new().with_min_characters(5);

        let report = both_modes(&dictionary, "LISTEN", &config);
        assert_eq!(report.solutions, vec!["LINTS", "LISTEN", "SILENT"]);

        let report = both_modes(&dictionary, "LISTEN", &config.with_min_characters(6));
        assert_eq!(report.solutions, vec!["LISTEN", "SILENT"]);
    }

    #[test]
    fn repeated_letters_report_word_once() {
        let dictionary = Dictionary::from_words(["TOOT", "OTTO", "TO", "OO"]);
        let config = SolveConfig::new().with_min_characters(2);

        let report = both_modes(&dictionary, "TOOT", &config);
        assert_eq!(report.solutions, vec!["OO", "OTTO", "TO", "TOOT"]);
    }

    #[test]
    fn split_threshold_does_not_change_results() {
        let dictionary = Dictionary::from_words([
            "STARE", "TEARS", "RATES", "ASTER", "TARES", "EAST", "SEAT", "RATE", "TEA", "ART",
        ]);
        let reference = solve_with(
            &dictionary,
            "STARE",
            SolveConfig::new().with_min_characters(3).with_parallel(false),
        );

        for threshold in 0..=5 {
            let config = SolveConfig::new()
                .with_min_characters(3)
                .with_split_threshold(threshold)
                .with_threads(3)
                .unwrap();
            let report = solve_with(&dictionary, "STARE", config);

            assert_eq!(report.solutions, reference.solutions, "threshold {threshold}");
            assert_eq!(report.processed, reference.processed, "threshold {threshold}");
        }
    }

    #[test]
    fn processed_matches_goal_with_blanks() {
        let dictionary = Dictionary::from_words(["QUA", "AQUA"]);
        let config = SolveConfig::new()
            .with_min_characters(3)
            .with_split_threshold(1);

        let report = both_modes(&dictionary, "*QA*", &config);

        assert_eq!(report.goal, Some(676 * 64));
        assert_eq!(Some(report.processed), report.goal);
        assert_eq!(report.solutions, vec!["AQUA", "QUA"]);
    }

    #[test]
    fn no_matches_is_not_an_error() {
        let dictionary = Dictionary::from_words(["ZEBRA"]);
        let report = both_modes(&dictionary, "CAT", &SolveConfig::new().with_min_characters(1));
        assert!(report.solutions.is_empty());
        assert_eq!(report.processed, 15);
    }

    #[test]
    fn cancelled_run_is_interrupted() {
        let dictionary = Dictionary::from_words(["LISTEN"]);
        let rack = TileSequence::parse("LISTEN", '*').unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();

        for parallel in [true, false] {
            let solver = Solver::new(&dictionary, SolveConfig::new().with_parallel(parallel));
            let result = solver.solve(&rack, &Console::silent(), &cancel);
            assert!(matches!(
                result,
                Err(SolveError::Interrupted { processed: 0 })
            ));
        }
    }

    #[test]
    fn concurrent_solvers_do_not_interfere() {
        let dictionary = Dictionary::from_words(["CAT", "ACT", "DOG", "GOD"]);
        let config = SolveConfig::new().with_min_characters(3);

        let (cats, dogs) = rayon::join(
            || solve_with(&dictionary, "CAT", config.clone()),
            || solve_with(&dictionary, "DOG", config.clone()),
        );

        assert_eq!(cats.solutions, vec!["ACT", "CAT"]);
        assert_eq!(dogs.solutions, vec!["DOG", "GOD"]);
    }

    #[test]
    fn work_unit_counts() {
        let dictionary = Dictionary::from_words(["CAT"]);
        let sequential = solve_with(&dictionary, "C*T", SolveConfig::new().with_parallel(false));
        assert_eq!(sequential.work_units, 26);

        // Three tiles fan out into three leading-tile and three deletion units
        let parallel = solve_with(&dictionary, "C*T", SolveConfig::new());
        assert_eq!(parallel.work_units, 26 * 6);

        let split = solve_with(&dictionary, "C*T", SolveConfig::new().with_split_threshold(1));
        assert!(split.work_units > 26 * 6);
        assert_eq!(split.processed, parallel.processed);
    }

    #[test]
    fn scrabble_rack_runs_on_several_units() {
        let dictionary = Dictionary::from_words(["ABCDEFG"]);
        let config = SolveConfig::new().with_threads(4).unwrap();
        let report = solve_with(&dictionary, "ABCDEFG", config);

        assert_eq!(report.work_units, 14);
        assert_eq!(report.processed, 13_699);
        assert_eq!(report.solutions, vec!["ABCDEFG"]);
    }

    /// Worker that cancels the run once `limit` candidates have been visited
    #[derive(Clone, Copy)]
    struct CancelAfter<'s> {
        worker: Worker<'s>,
        visited: &'s AtomicU64,
        limit: u64,
    }

    impl Visitor for CancelAfter<'_> {
        fn visit(&mut self, candidate: &[u8]) {
            self.worker.visit(candidate);
            if self.visited.fetch_add(1, Ordering::Relaxed) + 1 >= self.limit {
                self.worker.cancel.cancel();
            }
        }

        fn is_cancelled(&self) -> bool {
            self.worker.is_cancelled()
        }
    }

    struct CancelledRun {
        outcome: Result<u64, SolveError>,
        visited: u64,
        counted: u64,
        goal: u64,
    }

    fn run_with_cancel_after(input: &str, parallel: bool, limit: u64) -> CancelledRun {
        let dictionary = Dictionary::from_words([input]);
        let pattern = MatchPattern::default();
        let solutions = SolutionSet::new();
        let filter = MatchFilter::new(&dictionary, &pattern, 1, &solutions);
        let rack = TileSequence::parse(input, '*').unwrap();
        let expansion = expand_wildcards(&rack);
        let goal = permutation_goal(rack.len(), expansion.len()).unwrap();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap();
        let counter = Arc::new(ProgressCounter::new(if parallel { 4 } else { 0 }));
        let console = Console::silent();
        let cancel = CancelToken::new();
        let visited = AtomicU64::new(0);
        let tracker = ProgressTracker::start(
            Arc::clone(&counter),
            Some(goal),
            console.clone(),
            ProgressConfig::default(),
        )
        .unwrap();

        let visitor = CancelAfter {
            worker: Worker {
                filter: &filter,
                counter: &counter,
                console: &console,
                cancel: &cancel,
            },
            visited: &visited,
            limit,
        };
        let outcome = if parallel {
            let units = WorkPartitioner::default().partition(rack.len());
            pool.install(|| run_parallel(&expansion, &units, visitor))
        } else {
            run_sequential(&expansion, visitor)
        };

        CancelledRun {
            outcome: settle(outcome, tracker),
            visited: visited.load(Ordering::Relaxed),
            counted: counter.current_count(),
            goal,
        }
    }

    #[test]
    fn cancel_mid_run_keeps_count_exact() {
        for parallel in [false, true] {
            let run = run_with_cancel_after("ABCDEFGHIJ", parallel, 1_000);

            let Err(SolveError::Interrupted { processed }) = run.outcome else {
                panic!("run was not interrupted (parallel = {parallel})");
            };
            assert!(processed >= 1_000, "parallel = {parallel}");
            assert!(processed < run.goal, "parallel = {parallel}");
            assert_eq!(processed, run.visited, "parallel = {parallel}");
            // Nothing ran after the tracker was stopped
            assert_eq!(processed, run.counted, "parallel = {parallel}");
        }
    }

    #[test]
    fn cancel_after_last_candidate_keeps_result() {
        let goal = permutation_goal(4, 1).unwrap();
        let run = run_with_cancel_after("ABCD", false, goal);

        assert_eq!(run.visited, goal);
        assert!(matches!(run.outcome, Ok(processed) if processed == goal));
    }

    #[test]
    fn cancel_from_another_thread() {
        let dictionary = Dictionary::from_words(["ABCDEFGHIJK"]);
        let rack = TileSequence::parse("ABCDEFGHIJK", '*').unwrap();
        let cancel = CancelToken::new();
        let solver = Solver::new(&dictionary, SolveConfig::new().with_threads(2).unwrap());

        let trigger = cancel.clone();
        let canceller = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            trigger.cancel();
        });
        let result = solver.solve(&rack, &Console::silent(), &cancel);
        canceller.join().unwrap();

        let goal = permutation_goal(11, 1).unwrap();
        assert!(matches!(
            result,
            Err(SolveError::Interrupted { processed }) if processed < goal
        ));
    }

    #[test]
    fn results_sorted_and_unique() {
        let words = ["NEST", "NETS", "SENT", "TENS", "TEN", "NET", "SET"];
        let dictionary = Dictionary::from_words(words);
        let report = both_modes(&dictionary, "NEST", &SolveConfig::new().with_min_characters(3));

        let unique: BTreeSet<_> = report.solutions.iter().cloned().collect();
        assert_eq!(unique.len(), report.solutions.len());
        assert_eq!(report.solutions, unique.into_iter().collect::<Vec<_>>());
        assert_eq!(report.solutions.len(), words.len());
    }
}
