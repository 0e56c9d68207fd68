use gridroute_core::{GridModel, Position};
use gridroute_paths::{SearchConfig, SearchStrategy, Strategy};

use crate::error::PlanError;
use crate::report::{DeliveryPlan, DestinationPlan, StoreAttempt};

/// Multi-source planner: routes each destination from the cheapest store.
///
/// The grid is borrowed read-only; every destination and every store is
/// searched independently, so no state carries over between searches.
#[derive(Debug, Clone)]
pub struct Planner<'g> {
    grid: &'g GridModel,
    strategy: Strategy,
    config: SearchConfig,
}

impl<'g> Planner<'g> {
    pub fn new(grid: &'g GridModel, strategy: Strategy) -> Self {
        Self {
            grid,
            strategy,
            config: SearchConfig::default(),
        }
    }

    /// Planner for a strategy token such as `"ASTAR2"`.
    pub fn from_token(grid: &'g GridModel, token: &str) -> Result<Self, PlanError> {
        Ok(Self::new(grid, token.parse()?))
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn grid(&self) -> &'g GridModel {
        self.grid
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Route `goal` from every store and keep the cheapest.
    pub fn plan_destination(&self, goal: Position) -> Result<DestinationPlan, PlanError> {
        let searcher = self.strategy.searcher(&self.config);
        self.plan_with(searcher.as_ref(), 0..self.grid.stores().len(), goal)
    }

    /// Route `goal` from the store at `store_index` only.
    pub fn plan_destination_from(
        &self,
        store_index: usize,
        goal: Position,
    ) -> Result<DestinationPlan, PlanError> {
        self.check_store(store_index)?;
        let searcher = self.strategy.searcher(&self.config);
        self.plan_with(searcher.as_ref(), store_index..store_index + 1, goal)
    }

    /// [`plan_destination`](Self::plan_destination) with the goal given as
    /// `"r,c"`.
    pub fn plan_goal_str(&self, goal: &str) -> Result<DestinationPlan, PlanError> {
        let goal = goal.parse().map_err(|_| PlanError::InvalidPosition {
            input: goal.to_string(),
        })?;
        self.plan_destination(goal)
    }

    /// Plan every destination of the grid.
    pub fn plan_all(&self) -> Result<DeliveryPlan, PlanError> {
        self.plan_every(0..self.grid.stores().len())
    }

    /// Plan every destination from the store at `store_index` only.
    pub fn plan_all_from(&self, store_index: usize) -> Result<DeliveryPlan, PlanError> {
        self.check_store(store_index)?;
        self.plan_every(store_index..store_index + 1)
    }

    fn check_store(&self, index: usize) -> Result<(), PlanError> {
        let count = self.grid.stores().len();
        if index >= count {
            return Err(PlanError::InvalidStore { index, count });
        }
        Ok(())
    }

    fn plan_every(
        &self,
        stores: impl Iterator<Item = usize> + Clone,
    ) -> Result<DeliveryPlan, PlanError> {
        let searcher = self.strategy.searcher(&self.config);
        let destinations = self
            .grid
            .destinations()
            .iter()
            .map(|&goal| self.plan_with(searcher.as_ref(), stores.clone(), goal))
            .collect::<Result<Vec<_>, _>>()?;

        let plan = DeliveryPlan {
            strategy: self.strategy,
            destinations,
        };
        log::info!(
            "{}: {} destinations, {} reached, {} expansions",
            self.strategy,
            plan.destinations.len(),
            plan.destinations.iter().filter(|d| d.is_success()).count(),
            plan.total_expanded()
        );
        Ok(plan)
    }

    fn plan_with(
        &self,
        searcher: &dyn SearchStrategy,
        stores: impl Iterator<Item = usize>,
        goal: Position,
    ) -> Result<DestinationPlan, PlanError> {
        let mut attempts = Vec::new();
        for store_index in stores {
            let store = self.grid.stores()[store_index];
            let outcome = searcher.search(self.grid, store, goal)?;
            log::debug!(
                "{} store {store_index} ({store}) -> {goal}: cost {:?}, {} expansions",
                searcher.name(),
                outcome.cost(),
                outcome.expanded()
            );
            attempts.push(StoreAttempt {
                store_index,
                store,
                outcome,
            });
        }

        let plan = DestinationPlan::new(goal, attempts);
        match plan.best_attempt() {
            Some(best) => log::debug!(
                "destination {goal}: store {} wins at cost {:?}",
                best.store_index,
                plan.cost()
            ),
            None => log::warn!(
                "destination {goal} unreachable from {} store(s) after {} expansions",
                plan.attempts.len(),
                plan.total_expanded()
            ),
        }
        Ok(plan)
    }
}
