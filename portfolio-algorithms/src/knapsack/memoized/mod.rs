//! Top-down dynamic programming.
//!
//! Same recurrence as the brute-force search, but each
//! `(item count, remaining hours)` state is solved once and cached. The cache
//! lives only for one call. At most `(n + 1) * (C + 1)` states exist, giving
//! O(n * C) time and space.
//!
//! The recursion is two frames deep per project, so instances above
//! `MEMOIZED_MAX_ITEMS` projects are rejected instead of overflowing the stack.

use crate::{fixed_hasher, HashMap};
use anyhow::{anyhow, Result};
use log::{debug, trace};
use portfolio_challenges::knapsack::{Challenge, Project, Solution};

/// Deepest recursion the solver will attempt, in projects.
pub const MEMOIZED_MAX_ITEMS: usize = 1_000;

/// Refuse instances whose state space could exceed this many entries.
pub const MAX_STATES: u64 = 1 << 24;

pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let n = challenge.projects.len();
    if n > MEMOIZED_MAX_ITEMS {
        return Err(anyhow!(
            "{} projects exceeds recursion limit ({})",
            n,
            MEMOIZED_MAX_ITEMS
        ));
    }
    let reachable = (challenge.capacity as u64).min(challenge.total_hours());
    let states = (n as u64 + 1) * (reachable + 1);
    if states > MAX_STATES {
        return Err(anyhow!(
            "{} x {} states exceeds limit ({})",
            n + 1,
            reachable + 1,
            MAX_STATES
        ));
    }

    let mut memo = Memo::new(&challenge.projects);
    let total_value = memo.best(n, challenge.capacity);
    let items = memo.reconstruct(challenge.capacity);
    debug!(
        "memoized solved {} states ({} cache hits), value {}",
        memo.cache.len(),
        memo.hits,
        total_value
    );
    Ok(Solution { items, total_value })
}

struct Memo<'a> {
    projects: &'a [Project],
    cache: HashMap<(usize, u32), u64>,
    hits: u64,
}

impl<'a> Memo<'a> {
    fn new(projects: &'a [Project]) -> Self {
        Self {
            projects,
            cache: HashMap::with_hasher(fixed_hasher()),
            hits: 0,
        }
    }

    /// Best value among the first `i` projects within `remaining` hours.
    fn best(&mut self, i: usize, remaining: u32) -> u64 {
        if i == 0 {
            return 0;
        }
        if let Some(&value) = self.cache.get(&(i, remaining)) {
            self.hits += 1;
            return value;
        }

        let without = self.best(i - 1, remaining);
        let value = match self.include_value(i, remaining) {
            Some(with) => with.max(without),
            None => without,
        };
        trace!("state ({}, {}) = {}", i, remaining, value);
        self.cache.insert((i, remaining), value);
        value
    }

    /// Value of taking project `i - 1`, or `None` if it does not fit.
    fn include_value(&mut self, i: usize, remaining: u32) -> Option<u64> {
        let project = &self.projects[i - 1];
        if project.hours > remaining {
            return None;
        }
        let value = project.value as u64;
        let hours = project.hours;
        Some(self.best(i - 1, remaining - hours) + value)
    }

    /// Replays the recurrence from the root, taking a project only when that
    /// is strictly better than leaving it out.
    fn reconstruct(&mut self, capacity: u32) -> Vec<usize> {
        let mut items = Vec::new();
        let mut remaining = capacity;
        for i in (1..=self.projects.len()).rev() {
            let without = self.best(i - 1, remaining);
            if let Some(with) = self.include_value(i, remaining) {
                if with > without {
                    items.push(i - 1);
                    remaining -= self.projects[i - 1].hours;
                }
            }
        }
        items.reverse();
        items
    }
}
