mod scenarios;
pub use scenarios::*;

use anyhow::{anyhow, Result};
use log::debug;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::HashSet, fmt, str::FromStr};

/// Raised when a project or capacity cannot be represented in a valid instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    NegativeCapacity { capacity: i64 },
    NegativeValue { project: String, value: i64 },
    NegativeHours { project: String, hours: i64 },
    OutOfRange { field: &'static str, value: i64 },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NegativeCapacity { capacity } => {
                write!(f, "Capacity ({}) must be non-negative", capacity)
            }
            InvalidArgument::NegativeValue { project, value } => write!(
                f,
                "Project '{}' has a negative value ({})",
                project, value
            ),
            InvalidArgument::NegativeHours { project, hours } => write!(
                f,
                "Project '{}' requires a negative number of hours ({})",
                project, hours
            ),
            InvalidArgument::OutOfRange { field, value } => {
                write!(f, "{} ({}) does not fit in 32 bits", field, value)
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}

fn checked_u32(field: &'static str, value: i64) -> Result<u32, InvalidArgument> {
    u32::try_from(value).map_err(|_| InvalidArgument::OutOfRange { field, value })
}

/// A candidate project: its worth and the specialist-hours it consumes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Project {
    pub name: String,
    pub value: u32,
    pub hours: u32,
}

impl Project {
    pub fn new(name: impl Into<String>, value: i64, hours: i64) -> Result<Self> {
        let name = name.into();
        if value < 0 {
            return Err(InvalidArgument::NegativeValue {
                project: name,
                value,
            }
            .into());
        }
        if hours < 0 {
            return Err(InvalidArgument::NegativeHours {
                project: name,
                hours,
            }
            .into());
        }
        Ok(Project {
            value: checked_u32("value", value)?,
            hours: checked_u32("hours", hours)?,
            name,
        })
    }

    /// Compares value per hour exactly, without floating point. Zero-hour
    /// projects with a positive value rank above everything else; a project
    /// with neither value nor hours ranks as zero.
    pub fn cmp_ratio(&self, other: &Project) -> Ordering {
        let (n1, d1) = self.fraction();
        let (n2, d2) = other.fraction();
        (n1 * d2).cmp(&(n2 * d1))
    }

    fn fraction(&self) -> (u64, u64) {
        match (self.value, self.hours) {
            (0, 0) => (0, 1),
            (_, 0) => (1, 0),
            (value, hours) => (value as u64, hours as u64),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    /// Indices into `Challenge::projects`, in input order.
    pub items: Vec<usize>,
    pub total_value: u64,
}

impl Solution {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total_value: 0,
        }
    }

    /// Builds a solution from selected indices, normalising them to input order.
    pub fn from_items(challenge: &Challenge, mut items: Vec<usize>) -> Self {
        items.sort_unstable();
        let total_value = items
            .iter()
            .map(|&i| challenge.projects[i].value as u64)
            .sum();
        Self { items, total_value }
    }

    pub fn total_hours(&self, challenge: &Challenge) -> u64 {
        self.projects(challenge).map(|p| p.hours as u64).sum()
    }

    pub fn projects<'a>(&'a self, challenge: &'a Challenge) -> impl Iterator<Item = &'a Project> {
        self.items
            .iter()
            .filter_map(move |&i| challenge.projects.get(i))
    }

    pub fn project_names<'a>(&'a self, challenge: &'a Challenge) -> Vec<&'a str> {
        self.projects(challenge).map(|p| p.name.as_str()).collect()
    }
}

/// Parameters for generating a random instance, written as `key=value` pairs,
/// e.g. `n_items=12,budget=50`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub n_items: usize,
    /// Capacity as a percentage of the total hours of all projects.
    pub budget: u32,
    pub max_hours: u32,
    pub max_value: u32,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            n_items: 12,
            budget: 50,
            max_hours: 50,
            max_value: 100,
        }
    }
}

impl FromStr for Track {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut track = Track::default();
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| anyhow!("Expected key=value, got '{}'", pair))?;
            let value = value.trim();
            match key.trim() {
                "n_items" => track.n_items = value.parse()?,
                "budget" => track.budget = value.parse()?,
                "max_hours" => track.max_hours = value.parse()?,
                "max_value" => track.max_value = value.parse()?,
                other => return Err(anyhow!("Unknown track parameter '{}'", other)),
            }
        }
        Ok(track)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub projects: Vec<Project>,
    /// Maximum total specialist-hours of a selection.
    pub capacity: u32,
}

impl Challenge {
    pub fn new(projects: Vec<Project>, capacity: i64) -> Result<Self> {
        if capacity < 0 {
            return Err(InvalidArgument::NegativeCapacity { capacity }.into());
        }
        Ok(Challenge {
            projects,
            capacity: checked_u32("capacity", capacity)?,
        })
    }

    /// Convenience constructor from `(name, value, hours)` triples.
    pub fn from_triples(triples: &[(&str, i64, i64)], capacity: i64) -> Result<Self> {
        let projects = triples
            .iter()
            .map(|&(name, value, hours)| Project::new(name, value, hours))
            .collect::<Result<Vec<_>>>()?;
        Self::new(projects, capacity)
    }

    pub fn num_projects(&self) -> usize {
        self.projects.len()
    }

    pub fn total_hours(&self) -> u64 {
        self.projects.iter().map(|p| p.hours as u64).sum()
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        if track.max_hours == 0 || track.max_value == 0 {
            return Err(anyhow!(
                "Track max_hours ({}) and max_value ({}) must be positive",
                track.max_hours,
                track.max_value
            ));
        }
        let mut rng = SmallRng::from_seed(seed.clone());

        let projects: Vec<Project> = (0..track.n_items)
            .map(|i| {
                let hours = rng.gen_range(1..=track.max_hours);
                let value = rng.gen_range(1..=track.max_value);
                Project {
                    name: format!("P{}", i + 1),
                    value,
                    hours,
                }
            })
            .collect();

        let total_hours: u64 = projects.iter().map(|p| p.hours as u64).sum();
        let capacity = (track.budget as f64 / 100.0 * total_hours as f64) as u64;
        let capacity = u32::try_from(capacity).map_err(|_| InvalidArgument::OutOfRange {
            field: "capacity",
            value: capacity as i64,
        })?;
        debug!(
            "generated instance with {} projects, capacity {}",
            projects.len(),
            capacity
        );

        Ok(Challenge { projects, capacity })
    }

    /// Checks that a solution is feasible and that its reported value is the
    /// sum of its projects' values. Returns that value.
    pub fn evaluate_total_value(&self, solution: &Solution) -> Result<u64> {
        let selected_items: HashSet<usize> = solution.items.iter().cloned().collect();
        if selected_items.len() != solution.items.len() {
            return Err(anyhow!("Duplicate items selected."));
        }

        let total_hours = solution
            .items
            .iter()
            .map(|&item| {
                if item >= self.projects.len() {
                    return Err(anyhow!("Item ({}) is out of bounds", item));
                }
                Ok(self.projects[item].hours as u64)
            })
            .collect::<Result<Vec<_>, _>>()?
            .iter()
            .sum::<u64>();

        if total_hours > self.capacity as u64 {
            return Err(anyhow!(
                "Total hours ({}) exceeded capacity ({})",
                total_hours,
                self.capacity
            ));
        }

        let total_value = solution
            .items
            .iter()
            .map(|&item| self.projects[item].value as u64)
            .sum::<u64>();
        if total_value != solution.total_value {
            return Err(anyhow!(
                "Reported total value ({}) does not match selected projects ({})",
                solution.total_value,
                total_value
            ));
        }
        Ok(total_value)
    }
}
