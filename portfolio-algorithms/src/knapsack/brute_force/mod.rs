//! Exhaustive include/exclude search over every subset. O(2^n) time and
//! O(n) stack. Used as the reference optimum for the other solvers.

use anyhow::Result;
use log::debug;
use portfolio_challenges::knapsack::{Challenge, Project, Solution};

/// Above this many projects the harness does not run the exhaustive search.
pub const BRUTE_FORCE_MAX_ITEMS: usize = 20;

pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let mut calls = 0u64;
    let (total_value, items) = search(
        &challenge.projects,
        challenge.projects.len(),
        challenge.capacity,
        &mut calls,
    );
    debug!(
        "brute force explored {} nodes for {} projects, value {}",
        calls,
        challenge.projects.len(),
        total_value
    );
    Ok(Solution { items, total_value })
}

/// Best selection among the first `i` projects within `remaining` hours.
/// Ties go to leaving project `i - 1` out.
fn search(
    projects: &[Project],
    i: usize,
    remaining: u32,
    calls: &mut u64,
) -> (u64, Vec<usize>) {
    *calls += 1;
    if i == 0 {
        return (0, Vec::new());
    }
    let project = &projects[i - 1];

    let without = search(projects, i - 1, remaining, calls);
    if project.hours > remaining {
        return without;
    }

    let (sub_value, mut sub_items) = search(projects, i - 1, remaining - project.hours, calls);
    let with_value = sub_value + project.value as u64;
    if with_value > without.0 {
        sub_items.push(i - 1);
        (with_value, sub_items)
    } else {
        without
    }
}
