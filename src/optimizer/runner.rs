use super::anneal::{AnnealSchedule, Annealer, RunResult};
use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::decipher::apply_key;
use crate::error::{CfResult, CipherForgeError};
use crate::key::Key;
use crate::scorer::Scorer;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;
use typed_builder::TypedBuilder;

#[derive(Debug, Clone, TypedBuilder)]
pub struct SearchOptions {
    #[builder(default = 100)]
    pub num_runs: usize,
    #[builder(default)]
    pub schedule: AnnealSchedule,
    #[builder(default)]
    pub num_threads: Option<usize>,
    #[builder(default)]
    pub max_time: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&Config> for SearchOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            num_runs: cfg.search.num_runs,
            schedule: AnnealSchedule::from(&cfg.search),
            num_threads: cfg.search.threads,
            max_time: cfg.search.time_limit_secs.map(Duration::from_secs),
        }
    }
}

/// Best of several restarts from one seed key.
#[derive(Debug, Clone)]
pub struct MultiRunResult {
    pub plaintext: String,
    pub key: Key,
    pub score: f64,
    pub runs_completed: usize,
}

/// Restarts the annealer `num_runs` times from the same key and keeps the
/// highest-scoring run. Runs are independent and execute on rayon.
pub struct MultiRunController {
    scorer: Arc<Scorer>,
    alphabet: Arc<Alphabet>,
    options: SearchOptions,
}

impl MultiRunController {
    pub fn new(scorer: Arc<Scorer>, alphabet: Arc<Alphabet>, options: SearchOptions) -> Self {
        Self {
            scorer,
            alphabet,
            options,
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Absolute cutoff for runs started from now on, from `max_time`.
    pub fn deadline(&self) -> Option<Instant> {
        self.options.max_time.map(|limit| Instant::now() + limit)
    }

    /// Run `i` draws from its own stream seeded `seed + i`; without a seed every
    /// run is seeded from entropy. The time limit starts counting here.
    pub fn run(
        &self,
        ciphertext: &str,
        initial_key: Key,
        seed: Option<u64>,
    ) -> CfResult<MultiRunResult> {
        self.run_until(ciphertext, initial_key, seed, self.deadline())
    }

    /// Like [`run`](Self::run), but runs not yet started at `deadline` are
    /// skipped. Callers sharing one budget across several searches pass the
    /// same deadline to each.
    pub fn run_until(
        &self,
        ciphertext: &str,
        initial_key: Key,
        seed: Option<u64>,
        deadline: Option<Instant>,
    ) -> CfResult<MultiRunResult> {
        let results = match self.options.num_threads {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| CipherForgeError::Config(format!("Thread pool: {}", e)))?;
                pool.install(|| self.run_all(ciphertext, initial_key, seed, deadline))
            }
            None => self.run_all(ciphertext, initial_key, seed, deadline),
        };

        // Earliest run wins ties, whatever order the workers finished in.
        let mut best: Option<RunResult> = None;
        let mut runs_completed = 0;
        for r in results.into_iter().flatten() {
            runs_completed += 1;
            if best.as_ref().map_or(true, |b| r.score > b.score) {
                best = Some(r);
            }
        }

        let (key, score) = match best {
            Some(r) => (r.key, r.score),
            None => {
                let text = apply_key(ciphertext, &initial_key, &self.alphabet);
                (initial_key, self.scorer.combined_score(&text))
            }
        };

        Ok(MultiRunResult {
            plaintext: apply_key(ciphertext, &key, &self.alphabet),
            key,
            score,
            runs_completed,
        })
    }

    fn run_all(
        &self,
        ciphertext: &str,
        initial_key: Key,
        seed: Option<u64>,
        deadline: Option<Instant>,
    ) -> Vec<Option<RunResult>> {
        let schedule = self.options.schedule;

        (0..self.options.num_runs)
            .into_par_iter()
            .map(|i| {
                if deadline.is_some_and(|d| Instant::now() >= d) {
                    return None;
                }

                let rng = match seed {
                    Some(s) => fastrand::Rng::with_seed(s.wrapping_add(i as u64)),
                    None => fastrand::Rng::new(),
                };

                let result = Annealer::new(
                    &self.scorer,
                    &self.alphabet,
                    ciphertext,
                    initial_key,
                    schedule,
                    rng,
                )
                .run();

                debug!(
                    "Run {:3} | score {:.3} | {} iterations, {} accepted",
                    i, result.score, result.iterations, result.accepted
                );
                Some(result)
            })
            .collect()
    }
}
