use anyhow::Result;
use portfolio_challenges::knapsack::{Challenge, Solution};

pub mod bottom_up;
pub mod brute_force;
pub mod greedy;
pub mod memoized;

pub type SolveFn = fn(&Challenge) -> Result<Solution>;

/// Every solver, cheapest first. The harness runs them in this order.
pub const ALGORITHMS: [(&str, SolveFn); 4] = [
    ("greedy", greedy::solve_challenge),
    ("brute_force", brute_force::solve_challenge),
    ("memoized", memoized::solve_challenge),
    ("bottom_up", bottom_up::solve_challenge),
];
