use super::Challenge;
use anyhow::{anyhow, Result};

/// A fixed demonstration instance together with its known optimum.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub challenge: Challenge,
    pub expected_value: u64,
    /// Whether the ratio heuristic is expected to reach `expected_value`.
    /// `false` means it must fall short.
    pub greedy_reaches_optimum: bool,
}

impl Scenario {
    fn new(
        name: &'static str,
        triples: &[(&str, i64, i64)],
        capacity: i64,
        expected_value: u64,
        greedy_reaches_optimum: bool,
    ) -> Result<Self> {
        Ok(Scenario {
            name,
            challenge: Challenge::from_triples(triples, capacity)?,
            expected_value,
            greedy_reaches_optimum,
        })
    }
}

pub const SCENARIO_NAMES: [&str; 5] = [
    "class-example",
    "greedy-failure",
    "empty-list",
    "insufficient-capacity",
    "extra-case",
];

pub fn builtin_scenarios() -> Result<Vec<Scenario>> {
    Ok(vec![
        // A+B+C
        Scenario::new(
            SCENARIO_NAMES[0],
            &[("A", 12, 4), ("B", 10, 3), ("C", 7, 2), ("D", 4, 3)],
            10,
            29,
            true,
        )?,
        // ratios 6, 5, 4: greedy takes X1+X2 (160), optimum is X2+X3
        Scenario::new(
            SCENARIO_NAMES[1],
            &[("X1", 60, 10), ("X2", 100, 20), ("X3", 120, 30)],
            50,
            220,
            false,
        )?,
        Scenario::new(SCENARIO_NAMES[2], &[], 10, 0, true)?,
        Scenario::new(
            SCENARIO_NAMES[3],
            &[("P1", 5, 4), ("P2", 6, 5)],
            3,
            0,
            true,
        )?,
        // P2+P3
        Scenario::new(
            SCENARIO_NAMES[4],
            &[("P1", 6, 4), ("P2", 5, 3), ("P3", 4, 2)],
            5,
            9,
            true,
        )?,
    ])
}

pub fn find_scenario(name: &str) -> Result<Scenario> {
    builtin_scenarios()?
        .into_iter()
        .find(|s| s.name == name)
        .ok_or_else(|| {
            anyhow!(
                "Unknown scenario '{}'. Expected one of: {}",
                name,
                SCENARIO_NAMES.join(", ")
            )
        })
}
