use super::initialization::single_glyph_tokens;
use super::mutation;
use crate::alphabet::Alphabet;
use crate::config::SearchParams;
use crate::decipher::apply_key_into;
use crate::key::{Glyph, Key};
use crate::scorer::Scorer;
use fastrand::Rng;
use serde::{Deserialize, Serialize};

/// Letters whose glyphs are frozen when they stand alone in the ciphertext.
pub const LOCKABLE_LETTERS: [char; 2] = ['a', 'i'];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnealSchedule {
    pub max_iterations: usize,
    pub initial_temperature: f64,
    pub cooling_rate: f64,
}

impl Default for AnnealSchedule {
    fn default() -> Self {
        Self {
            max_iterations: 14_000,
            initial_temperature: 1.0,
            cooling_rate: 0.99,
        }
    }
}

impl From<&SearchParams> for AnnealSchedule {
    fn from(p: &SearchParams) -> Self {
        Self {
            max_iterations: p.max_iterations,
            initial_temperature: p.initial_temperature,
            cooling_rate: p.cooling_rate,
        }
    }
}

/// Outcome of one annealing trajectory.
#[derive(Debug, Clone, Copy)]
pub struct RunResult {
    pub key: Key,
    pub score: f64,
    pub iterations: usize,
    pub accepted: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub accepted: bool,
    pub improved: bool,
}

/// Glyphs deciphering to 'a' or 'i' that also occur as one-character tokens.
pub fn locked_glyphs(ciphertext: &str, key: &Key, alphabet: &Alphabet) -> Vec<Glyph> {
    let isolated = single_glyph_tokens(ciphertext, alphabet);
    LOCKABLE_LETTERS
        .iter()
        .filter_map(|&letter| key.glyph_for(letter))
        .filter(|g| isolated.iter().any(|(iso, _)| iso == g))
        .collect()
}

/// One simulated-annealing trajectory over substitution keys.
///
/// A neighbour replaces the current key when it scores strictly higher, or
/// with probability equal to the current temperature. The temperature is a
/// raw acceptance probability, not a Metropolis term.
pub struct Annealer<'a> {
    scorer: &'a Scorer,
    alphabet: &'a Alphabet,
    ciphertext: &'a str,
    schedule: AnnealSchedule,

    pub current_key: Key,
    pub current_score: f64,
    pub best_key: Key,
    pub best_score: f64,
    pub temperature: f64,
    pub iteration: usize,
    pub accepted: usize,

    locked: Vec<Glyph>,
    candidates: Vec<Glyph>,
    rng: Rng,
    buffer: String,
}

impl<'a> Annealer<'a> {
    pub fn new(
        scorer: &'a Scorer,
        alphabet: &'a Alphabet,
        ciphertext: &'a str,
        initial_key: Key,
        schedule: AnnealSchedule,
        rng: Rng,
    ) -> Self {
        let locked = locked_glyphs(ciphertext, &initial_key, alphabet);
        let candidates = mutation::swap_candidates(&initial_key, &locked);

        let mut buffer = String::with_capacity(ciphertext.len());
        apply_key_into(ciphertext, &initial_key, alphabet, &mut buffer);
        // The starting point is judged without the acceptance bonus.
        let score = scorer.combined_score(&buffer);

        Self {
            scorer,
            alphabet,
            ciphertext,
            schedule,
            current_key: initial_key,
            current_score: score,
            best_key: initial_key,
            best_score: score,
            temperature: schedule.initial_temperature,
            iteration: 0,
            accepted: 0,
            locked,
            candidates,
            rng,
            buffer,
        }
    }

    pub fn locked(&self) -> &[Glyph] {
        &self.locked
    }

    /// Performs one transition. `None` once the iteration budget is spent or
    /// fewer than two glyphs are free to swap.
    pub fn step(&mut self) -> Option<StepOutcome> {
        if self.iteration >= self.schedule.max_iterations {
            return None;
        }
        let neighbor = mutation::neighbor(&mut self.rng, &self.current_key, &self.candidates)?;
        self.iteration += 1;

        apply_key_into(self.ciphertext, &neighbor, self.alphabet, &mut self.buffer);
        let neighbor_score = self.scorer.acceptance_score(&self.buffer);

        let accepted = neighbor_score > self.current_score || self.rng.f64() < self.temperature;
        if accepted {
            self.current_key = neighbor;
            self.current_score = neighbor_score;
            self.accepted += 1;
        }

        let improved = self.current_score > self.best_score;
        if improved {
            self.best_key = self.current_key;
            self.best_score = self.current_score;
        }

        self.temperature *= self.schedule.cooling_rate;

        Some(StepOutcome { accepted, improved })
    }

    pub fn run(mut self) -> RunResult {
        while self.step().is_some() {}
        RunResult {
            key: self.best_key,
            score: self.best_score,
            iterations: self.iteration,
            accepted: self.accepted,
        }
    }
}
