//! Weighted random choice among eligible candidates, with per-candidate
//! anti-repetition windows over a shared, bounded history.
//!
//! The selector only reads state. Running the chosen candidate's effect is
//! up to the caller.

use std::collections::VecDeque;

use log::debug;

use crate::rng::RandomSource;

/// Something the selector can pick, judged against a state snapshot `S`.
pub trait Candidate<S: ?Sized> {
    /// Unique key, recorded in the history when chosen.
    fn name(&self) -> &str;

    fn is_eligible(&self, state: &S) -> bool;

    /// Base weight plus any state-dependent modifier. Zero or less drops the
    /// candidate from the draw.
    fn weight(&self, state: &S) -> i64;

    /// How many of the most recent picks this candidate must not appear in.
    fn repeat_block(&self) -> usize {
        0
    }
}

#[derive(Debug, Clone)]
pub struct WeightedSelector {
    history: VecDeque<String>,
    history_cap: usize,
}

impl WeightedSelector {
    pub fn new(history_cap: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(history_cap),
            history_cap,
        }
    }

    /// Past picks, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// True if `name` is among the last `window` picks.
    pub fn is_blocked(&self, name: &str, window: usize) -> bool {
        self.history.iter().rev().take(window).any(|h| h == name)
    }

    /// Candidates that survive eligibility, repeat-blocking and the weight
    /// cut, paired with their weights, in declared order.
    pub fn weigh<'a, S, C>(&self, candidates: &'a [C], state: &S) -> Vec<(&'a C, i64)>
    where
        S: ?Sized,
        C: Candidate<S>,
    {
        candidates
            .iter()
            .filter(|c| c.is_eligible(state))
            .filter(|c| !self.is_blocked(c.name(), c.repeat_block()))
            .map(|c| (c, c.weight(state)))
            .filter(|(_, w)| *w > 0)
            .collect()
    }

    /// Picks one candidate proportionally to weight and records it.
    ///
    /// Returns `None` when nothing is eligible; no draw is consumed then.
    pub fn pick<'a, S, C>(
        &mut self,
        candidates: &'a [C],
        state: &S,
        rng: &mut dyn RandomSource,
    ) -> Option<&'a C>
    where
        S: ?Sized,
        C: Candidate<S>,
    {
        let pool = self.weigh(candidates, state);
        if pool.is_empty() {
            debug!("selector: no eligible candidates");
            return None;
        }

        let total: i64 = pool.iter().map(|(_, w)| w).sum();
        let draw = rng.float_range(0.0, total as f64);

        let mut cumulative = 0i64;
        let mut chosen = None;
        for (candidate, weight) in &pool {
            cumulative += weight;
            if draw <= cumulative as f64 {
                chosen = Some(*candidate);
                break;
            }
        }
        let chosen = chosen.or_else(|| pool.last().map(|(c, _)| *c))?;

        debug!(
            "selector: drew {:.3} of {} across {} candidates -> {}",
            draw,
            total,
            pool.len(),
            chosen.name()
        );
        self.record(chosen.name());
        Some(chosen)
    }

    pub fn record(&mut self, name: &str) {
        self.history.push_back(name.to_string());
        while self.history.len() > self.history_cap {
            self.history.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}
