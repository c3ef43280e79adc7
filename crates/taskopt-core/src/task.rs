//! Task type and the compatibility relation.

use serde::{Deserialize, Serialize};

use crate::{CoreError, Set};

/// A pending unit of work competing for resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task name.
    pub name: String,

    /// Resources the task holds while running.
    pub resources: Set<String>,

    /// Profit earned by running the task. Any finite value.
    pub profit: f64,
}

impl Task {
    /// Create a new Task, rejecting a non-finite profit.
    pub fn new<I, S>(name: impl Into<String>, resources: I, profit: f64) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let task = Self {
            name: name.into(),
            resources: resources.into_iter().map(Into::into).collect(),
            profit,
        };
        task.validate()?;
        Ok(task)
    }

    /// Check that the task can be used as a graph node.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.profit.is_finite() {
            return Err(CoreError::InvalidProfit {
                name: self.name.clone(),
                profit: self.profit,
            });
        }
        Ok(())
    }

    /// Two tasks are compatible when they need no resource in common.
    pub fn is_compatible(&self, other: &Task) -> bool {
        self.resources.is_disjoint(&other.resources)
    }
}
