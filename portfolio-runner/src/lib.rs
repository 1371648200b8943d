use log::{debug, warn};
use portfolio_algorithms::knapsack::{
    brute_force::BRUTE_FORCE_MAX_ITEMS, memoized::MEMOIZED_MAX_ITEMS, ALGORITHMS,
};
use portfolio_challenges::knapsack::{Challenge, Scenario};
use serde::Serialize;
use std::fmt::Write;

/// What a run is checked against. `None` fields are not checked directly:
/// without a known optimum the exact solvers must agree with each other, and
/// greedy must not beat them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expectation {
    pub optimum: Option<u64>,
    pub greedy_reaches_optimum: Option<bool>,
}

impl From<&Scenario> for Expectation {
    fn from(scenario: &Scenario) -> Self {
        Self {
            optimum: Some(scenario.expected_value),
            greedy_reaches_optimum: Some(scenario.greedy_reaches_optimum),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmResult {
    pub algorithm: &'static str,
    pub total_value: u64,
    pub total_hours: u64,
    pub items: Vec<usize>,
    pub projects: Vec<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct Report {
    pub name: String,
    pub capacity: u32,
    pub num_projects: usize,
    pub expected_value: Option<u64>,
    pub results: Vec<AlgorithmResult>,
    pub skipped: Vec<&'static str>,
    pub failures: Vec<String>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn result(&self, algorithm: &str) -> Option<&AlgorithmResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }
}

pub fn run_scenario(scenario: &Scenario) -> Report {
    run_challenge(scenario.name, &scenario.challenge, scenario.into())
}

/// Runs every solver on `challenge`, validates each solution and compares the
/// values against `expectation`. Problems are collected in `Report::failures`.
pub fn run_challenge(name: &str, challenge: &Challenge, expectation: Expectation) -> Report {
    let mut report = Report {
        name: name.to_string(),
        capacity: challenge.capacity,
        num_projects: challenge.num_projects(),
        expected_value: expectation.optimum,
        results: Vec::new(),
        skipped: Vec::new(),
        failures: Vec::new(),
    };

    for &(algorithm, solve_challenge) in ALGORITHMS.iter() {
        if item_limit(algorithm).is_some_and(|limit| challenge.num_projects() > limit) {
            debug!(
                "{}: skipping {} for {} projects",
                name,
                algorithm,
                challenge.num_projects()
            );
            report.skipped.push(algorithm);
            continue;
        }
        let solution = match solve_challenge(challenge) {
            Ok(s) => s,
            Err(e) => {
                report.failures.push(format!("{} failed: {}", algorithm, e));
                continue;
            }
        };
        if let Err(e) = challenge.evaluate_total_value(&solution) {
            report
                .failures
                .push(format!("{} returned an invalid solution: {}", algorithm, e));
            continue;
        }
        report.results.push(AlgorithmResult {
            algorithm,
            total_value: solution.total_value,
            total_hours: solution.total_hours(challenge),
            projects: solution
                .project_names(challenge)
                .into_iter()
                .map(String::from)
                .collect(),
            items: solution.items,
        });
    }

    check_values(&mut report, expectation);
    for failure in &report.failures {
        warn!("{}: {}", name, failure);
    }
    report
}

/// Most projects a solver is run on. Brute force is exponential and the
/// memoized recursion is bounded by the stack.
fn item_limit(algorithm: &str) -> Option<usize> {
    match algorithm {
        "brute_force" => Some(BRUTE_FORCE_MAX_ITEMS),
        "memoized" => Some(MEMOIZED_MAX_ITEMS),
        _ => None,
    }
}

fn check_values(report: &mut Report, expectation: Expectation) {
    let mut failures = Vec::new();
    let exact: Vec<&AlgorithmResult> = report
        .results
        .iter()
        .filter(|r| r.algorithm != "greedy")
        .collect();

    let optimum = match expectation.optimum {
        Some(optimum) => {
            for r in &exact {
                if r.total_value != optimum {
                    failures.push(format!(
                        "{} found value {}, expected {}",
                        r.algorithm, r.total_value, optimum
                    ));
                }
            }
            Some(optimum)
        }
        None => {
            let first = exact.first().map(|r| r.total_value);
            for r in &exact {
                if Some(r.total_value) != first {
                    failures.push(format!(
                        "{} found value {}, but {} found {}",
                        r.algorithm, r.total_value, exact[0].algorithm, exact[0].total_value
                    ));
                }
            }
            first
        }
    };

    if let (Some(greedy), Some(optimum)) = (report.result("greedy"), optimum) {
        match expectation.greedy_reaches_optimum {
            Some(true) if greedy.total_value != optimum => failures.push(format!(
                "greedy found value {}, expected it to reach {}",
                greedy.total_value, optimum
            )),
            Some(false) if greedy.total_value >= optimum => failures.push(format!(
                "greedy found value {}, expected it to fall short of {}",
                greedy.total_value, optimum
            )),
            _ if greedy.total_value > optimum => failures.push(format!(
                "greedy found value {}, above the optimum {}",
                greedy.total_value, optimum
            )),
            _ => {}
        }
    }
    report.failures.extend(failures);
}

pub fn format_report(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "===== {} =====", report.name);
    match report.expected_value {
        Some(expected) => {
            let _ = writeln!(
                out,
                "Capacity={}, Projects={}, Expected optimum={}",
                report.capacity, report.num_projects, expected
            );
        }
        None => {
            let _ = writeln!(
                out,
                "Capacity={}, Projects={}",
                report.capacity, report.num_projects
            );
        }
    }
    for r in &report.results {
        let _ = writeln!(
            out,
            "{:<12} value={}, hours={}, projects={:?}",
            r.algorithm, r.total_value, r.total_hours, r.projects
        );
    }
    for algorithm in &report.skipped {
        let _ = writeln!(out, "{:<12} skipped", algorithm);
    }
    if report.passed() {
        let _ = writeln!(out, "OK");
    } else {
        for failure in &report.failures {
            let _ = writeln!(out, "FAILED: {}", failure);
        }
    }
    out
}

/// Expands a numeric seed into the 32-byte seed instance generation expects.
pub fn seed_from_u64(seed: u64) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for chunk in bytes.chunks_mut(8) {
        chunk.copy_from_slice(&seed.to_le_bytes());
    }
    bytes
}
