//! Per-destination and whole-plan results, and their wire rendering.

use std::fmt;

use gridroute_core::Position;
use gridroute_paths::{Route, SearchOutcome, Strategy};

/// One search from one store to the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreAttempt {
    /// Index of the store in the grid's store list.
    pub store_index: usize,
    pub store: Position,
    pub outcome: SearchOutcome,
}

/// Everything tried for one destination.
///
/// `attempts` are in store order; `best` indexes the cheapest successful
/// attempt, preferring the earlier store on equal cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DestinationPlan {
    pub destination: Position,
    pub attempts: Vec<StoreAttempt>,
    pub best: Option<usize>,
}

impl DestinationPlan {
    /// Collect `attempts` and pick the cheapest success.
    pub fn new(destination: Position, attempts: Vec<StoreAttempt>) -> Self {
        let mut best: Option<(usize, i64)> = None;
        for (i, a) in attempts.iter().enumerate() {
            let Some(cost) = a.outcome.cost() else {
                continue;
            };
            if best.is_none_or(|(_, c)| cost < c) {
                best = Some((i, cost));
            }
        }
        Self {
            destination,
            attempts,
            best: best.map(|(i, _)| i),
        }
    }

    pub fn is_success(&self) -> bool {
        self.best.is_some()
    }

    /// The winning attempt.
    pub fn best_attempt(&self) -> Option<&StoreAttempt> {
        self.best.and_then(|i| self.attempts.get(i))
    }

    /// The winning route.
    pub fn route(&self) -> Option<&Route> {
        self.best_attempt().and_then(|a| a.outcome.route())
    }

    pub fn cost(&self) -> Option<i64> {
        self.route().map(|r| r.cost)
    }

    /// Expansions summed over every store tried.
    pub fn total_expanded(&self) -> usize {
        self.attempts.iter().map(|a| a.outcome.expanded()).sum()
    }
}

/// Result line: the winning route with the aggregated expansion count, or
/// `FAIL;0;expanded`.
impl fmt::Display for DestinationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_expanded();
        match self.best_attempt() {
            Some(a) => f.write_str(&a.outcome.line_with_expanded(total)),
            None => write!(f, "FAIL;0;{total}"),
        }
    }
}

/// Plans for every destination, each computed independently.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryPlan {
    pub strategy: Strategy,
    pub destinations: Vec<DestinationPlan>,
}

impl DeliveryPlan {
    /// True when every destination was reached.
    pub fn is_success(&self) -> bool {
        self.destinations.iter().all(DestinationPlan::is_success)
    }

    /// Destinations no store could reach.
    pub fn unreachable(&self) -> impl Iterator<Item = Position> + '_ {
        self.destinations
            .iter()
            .filter(|d| !d.is_success())
            .map(|d| d.destination)
    }

    /// Sum of the winning route costs. `None` if some destination was not
    /// reached or the sum overflows.
    pub fn total_cost(&self) -> Option<i64> {
        self.destinations
            .iter()
            .try_fold(0i64, |acc, d| acc.checked_add(d.cost()?))
    }

    pub fn total_expanded(&self) -> usize {
        self.destinations
            .iter()
            .map(DestinationPlan::total_expanded)
            .sum()
    }
}

/// `SUCCESS` or `FAIL`, then one result line per destination.
impl fmt::Display for DeliveryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_success() { "SUCCESS" } else { "FAIL" })?;
        for d in &self.destinations {
            write!(f, "\n{d}")?;
        }
        Ok(())
    }
}
