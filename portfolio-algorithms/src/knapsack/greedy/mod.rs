//! Value-per-hour heuristic.
//!
//! Projects are ranked by value/hours and taken in that order whenever they
//! still fit. One pass, no backtracking, so it is not optimal in general:
//! with capacity 50 and projects (60, 10), (100, 20), (120, 30) it takes the
//! first two for 160 while the best selection is worth 220.

use anyhow::Result;
use log::debug;
use portfolio_challenges::knapsack::{Challenge, Solution};

pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let projects = &challenge.projects;

    // Sort items by value-to-hours ratio in descending order. `sort_by` is
    // stable, so equal ratios keep their input order.
    let mut sorted_items: Vec<usize> = (0..projects.len()).collect();
    sorted_items.sort_by(|&a, &b| projects[b].cmp_ratio(&projects[a]));

    let mut remaining = challenge.capacity;
    let mut items = Vec::new();
    for &item in &sorted_items {
        let hours = projects[item].hours;
        if hours <= remaining {
            remaining -= hours;
            items.push(item);
        }
    }

    let solution = Solution::from_items(challenge, items);
    debug!(
        "greedy selected {} of {} projects, value {}",
        solution.items.len(),
        projects.len(),
        solution.total_value
    );
    Ok(solution)
}
