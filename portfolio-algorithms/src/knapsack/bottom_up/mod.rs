//! Bottom-up dynamic programming over an explicit table.
//!
//! `table[[i, c]]` is the best value using the first `i` projects within `c`
//! hours:
//!
//! ```text
//! table[[0, c]] = 0
//! table[[i, c]] = table[[i - 1, c]]                                   if h_i > c
//!               = max(table[[i - 1, c]], table[[i - 1, c - h_i]] + v_i) otherwise
//! ```
//!
//! Columns stop at the total hours of all projects: every column past that
//! holds the same values, so a huge capacity does not grow the table.
//!
//! Filling and reconstruction are separate so each can be checked on its own.
//! Keeping only one row would need O(C) space, but the selection could then
//! no longer be recovered.

use anyhow::{anyhow, Result};
use log::debug;
use ndarray::Array2;
use portfolio_challenges::knapsack::{Challenge, Project, Solution};

/// Refuse to allocate tables larger than this many cells.
pub const MAX_TABLE_CELLS: usize = 1 << 28;

pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let table = fill_table(&challenge.projects, challenge.capacity)?;
    let items = reconstruct(&table, &challenge.projects);
    let (n, c) = table.dim();
    let total_value = table[[n - 1, c - 1]];
    debug!(
        "bottom up filled a {}x{} table, value {}",
        n, c, total_value
    );
    Ok(Solution { items, total_value })
}

/// Builds the `(n + 1) x (min(capacity, total hours) + 1)` table.
pub fn fill_table(projects: &[Project], capacity: u32) -> Result<Array2<u64>> {
    let total_hours: u64 = projects.iter().map(|p| p.hours as u64).sum();
    let rows = projects.len() + 1;
    let cols = (capacity as u64).min(total_hours) as usize + 1;
    match rows.checked_mul(cols) {
        Some(cells) if cells <= MAX_TABLE_CELLS => {}
        _ => {
            return Err(anyhow!(
                "Table of {} x {} cells exceeds limit ({})",
                rows,
                cols,
                MAX_TABLE_CELLS
            ))
        }
    }

    let mut table = Array2::<u64>::zeros((rows, cols));
    for i in 1..rows {
        let hours = projects[i - 1].hours as usize;
        let value = projects[i - 1].value as u64;
        for c in 0..cols {
            let mut best = table[[i - 1, c]];
            if hours <= c {
                let candidate = table[[i - 1, c - hours]] + value;
                if candidate > best {
                    best = candidate;
                }
            }
            table[[i, c]] = best;
        }
    }
    Ok(table)
}

/// Walks back from the bottom-right cell. Project `i - 1` was taken exactly
/// when row `i` differs from row `i - 1` at the current capacity.
pub fn reconstruct(table: &Array2<u64>, projects: &[Project]) -> Vec<usize> {
    let (rows, cols) = table.dim();
    let mut items = Vec::new();
    let mut c = cols - 1;
    for i in (1..rows).rev() {
        if table[[i, c]] != table[[i - 1, c]] {
            items.push(i - 1);
            c -= projects[i - 1].hours as usize;
        }
    }
    items.reverse();
    items
}
