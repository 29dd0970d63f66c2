//! Read models assembled across collections

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{BudgetSummary, STAGES};
use crate::schemas::{ServiceRecord, Stage, Vehicle};

/// A vehicle joined with its history and priced budget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    pub vehicle: Vehicle,
    pub history: Vec<ServiceRecord>,
    pub budget: Option<BudgetSummary>,
}

/// Dashboard counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopStats {
    pub total: usize,
    /// Every stage is present, zero included
    pub by_stage: BTreeMap<Stage, usize>,
    /// Diagnosis plus execution
    pub in_progress: usize,
    pub ready: usize,
    /// In diagnosis without an approved budget
    pub awaiting_approval: usize,
}

impl WorkshopStats {
    pub fn collect<'a>(vehicles: impl IntoIterator<Item = &'a Vehicle>) -> Self {
        let mut by_stage: BTreeMap<Stage, usize> = STAGES.iter().map(|s| (*s, 0)).collect();
        let mut total = 0;
        let mut awaiting_approval = 0;

        for vehicle in vehicles {
            total += 1;
            *by_stage.entry(vehicle.stage).or_insert(0) += 1;
            if vehicle.stage == Stage::Diagnosis && !vehicle.has_approved_budget() {
                awaiting_approval += 1;
            }
        }

        let count = |stage: Stage| by_stage.get(&stage).copied().unwrap_or(0);
        WorkshopStats {
            total,
            in_progress: count(Stage::Diagnosis) + count(Stage::Execution),
            ready: count(Stage::Ready),
            awaiting_approval,
            by_stage,
        }
    }

    pub fn count(&self, stage: Stage) -> usize {
        self.by_stage.get(&stage).copied().unwrap_or(0)
    }
}
