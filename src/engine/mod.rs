//! Workshop engine
//!
//! `Workshop` owns one in-memory copy of every collection and writes each
//! collection back through the store after it changes. The in-memory copy
//! stays authoritative for the session when a write fails.

mod report;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{
    apply_stage_transition, compute_total, convert_total, parse_amount, validate_payment_draft,
    validate_payment_method, BudgetEditor, BudgetSummary,
};
use crate::errors::{Result, TallerError};
use crate::repository::{financial, HistoryRepository, PaymentMethodRepository, VehicleRepository};
use crate::schemas::{
    FinancialConfig, PaymentMethod, PaymentMethodDraft, PaymentMethodPatch, ServiceRecord,
    ServiceRecordDraft, ServiceRecordPatch, Settings, Stage, Vehicle, VehicleBudget, VehicleDraft,
    VehiclePatch,
};
use crate::store::Store;

pub use report::{VehicleDetails, WorkshopStats};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub struct Workshop<S: Store> {
    store: S,
    settings: Settings,
    vehicles: VehicleRepository,
    methods: PaymentMethodRepository,
    history: HistoryRepository,
    /// Loaded on first use
    financial: Option<FinancialConfig>,
}

impl<S: Store> Workshop<S> {
    /// Load every collection from `store`. The financial config is read lazily.
    pub fn open(store: S, settings: Settings) -> Self {
        let vehicles = VehicleRepository::load(&store);
        let methods = PaymentMethodRepository::load(&store);
        let history = HistoryRepository::load(&store);
        tracing::debug!(
            vehicles = vehicles.all().len(),
            methods = methods.all().len(),
            "workshop opened"
        );
        Workshop {
            store,
            settings,
            vehicles,
            methods,
            history,
            financial: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ----- vehicles -----

    /// Register a vehicle at intake. It always starts in reception with no budget.
    ///
    /// # Errors
    /// * `MissingFields` - plate, model or client is blank
    pub fn register_vehicle(&mut self, draft: VehicleDraft) -> Result<Vehicle> {
        draft.validate()?;
        let vehicle = Vehicle::from_draft(new_id(), draft);
        self.warn_duplicate_plate(&vehicle);

        self.vehicles.insert(vehicle.clone());
        self.vehicles.persist(&mut self.store);
        tracing::debug!(id = %vehicle.id, plate = %vehicle.plate, "vehicle registered");
        Ok(vehicle)
    }

    fn warn_duplicate_plate(&self, vehicle: &Vehicle) {
        if let Some(other) = self
            .vehicles
            .active_with_plate(&vehicle.plate, Some(&vehicle.id))
            .next()
        {
            tracing::warn!(
                plate = %vehicle.plate,
                other = %other.id,
                "plate already belongs to a vehicle in the workshop"
            );
        }
    }

    pub fn vehicle(&self, id: &str) -> Result<&Vehicle> {
        self.vehicles.get(id)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        self.vehicles.all()
    }

    pub fn vehicles_in(&self, stage: Stage) -> Vec<&Vehicle> {
        self.vehicles.in_stage(stage).collect()
    }

    /// Merge `patch` over the vehicle and re-validate the result
    pub fn update_vehicle(&mut self, id: &str, patch: &VehiclePatch) -> Result<Vehicle> {
        let updated = patch.apply(self.vehicles.get(id)?)?;
        if patch.plate.is_some() {
            self.warn_duplicate_plate(&updated);
        }

        self.vehicles.replace(updated.clone())?;
        self.vehicles.persist(&mut self.store);
        tracing::debug!(id, "vehicle updated");
        Ok(updated)
    }

    /// Remove a vehicle. Its service history is left in place.
    pub fn remove_vehicle(&mut self, id: &str) -> Result<Vehicle> {
        let removed = self
            .vehicles
            .remove(id)
            .ok_or_else(|| TallerError::NotFound(format!("vehicle {}", id)))?;
        self.vehicles.persist(&mut self.store);
        tracing::debug!(id, "vehicle removed");
        Ok(removed)
    }

    /// Move a vehicle to `target` and persist.
    ///
    /// # Errors
    /// * `NotFound` - unknown vehicle
    /// * `BudgetNotApproved` - diagnosis to execution without an approved budget
    pub fn move_stage(&mut self, id: &str, target: Stage) -> Result<Vehicle> {
        let current = self.vehicles.get(id)?;
        let from = current.stage;
        let moved = apply_stage_transition(current, target)?;

        self.vehicles.replace(moved.clone())?;
        self.vehicles.persist(&mut self.store);
        tracing::debug!(id, %from, to = %target, "stage changed");
        Ok(moved)
    }

    // ----- budgets -----

    /// Working copy of the vehicle's budget, empty when it has none
    pub fn budget_editor(&self, vehicle_id: &str) -> Result<BudgetEditor> {
        let vehicle = self.vehicles.get(vehicle_id)?;
        Ok(BudgetEditor::open(vehicle.budget.as_ref()))
    }

    /// Snapshot `editor` and attach it to the vehicle.
    ///
    /// # Errors
    /// * `NotFound` - unknown vehicle
    /// * `InvalidCost` - the total, or its VES figure at the current rate, is out of range
    pub fn save_budget(&mut self, vehicle_id: &str, editor: &BudgetEditor) -> Result<VehicleBudget> {
        self.vehicles.get(vehicle_id)?;
        let budget = editor.save()?;
        let rate = self.config().exchange_rate;
        if convert_total(budget.total, rate).is_err() {
            return Err(TallerError::InvalidCost(format!(
                "total {} is out of range at {} Bs/USD",
                budget.total, rate
            )));
        }
        let vehicle = self.vehicles.get(vehicle_id)?.clone().with_budget(Some(budget.clone()));

        self.vehicles.replace(vehicle)?;
        self.vehicles.persist(&mut self.store);
        tracing::debug!(
            vehicle_id,
            items = budget.items.len(),
            total = %budget.total,
            approved = budget.is_approved,
            "budget saved"
        );
        Ok(budget)
    }

    /// The vehicle's budget priced at the current rate
    pub fn budget_summary(&mut self, vehicle_id: &str) -> Result<Option<BudgetSummary>> {
        let config = self.config().clone();
        let vehicle = self.vehicles.get(vehicle_id)?;
        vehicle
            .budget
            .as_ref()
            .map(|budget| BudgetSummary::of(budget, &config))
            .transpose()
    }

    // ----- financial config -----

    /// Current config, seeded from settings the first time an empty store is read
    pub fn config(&mut self) -> &FinancialConfig {
        let store = &mut self.store;
        let seed_rate = self.settings.default_exchange_rate;
        self.financial
            .get_or_insert_with(|| financial::load_or_seed(store, seed_rate, Utc::now()))
    }

    pub fn update_rate(&mut self, rate: Decimal) -> Result<FinancialConfig> {
        self.update_rate_at(rate, Utc::now())
    }

    /// Replace the rate and its timestamp together.
    ///
    /// # Errors
    /// * `InvalidRate` - rate is zero or negative, or would put a saved
    ///   budget's VES total out of range; the stored rate is kept
    pub fn update_rate_at(&mut self, rate: Decimal, now: DateTime<Utc>) -> Result<FinancialConfig> {
        if rate <= Decimal::ZERO {
            return Err(TallerError::InvalidRate(rate.to_string()));
        }
        for budget in self.vehicles.all().iter().filter_map(|v| v.budget.as_ref()) {
            // Stored budgets whose own total overflows are reported on read
            if let Ok(total) = compute_total(&budget.items) {
                convert_total(total, rate)?;
            }
        }
        let previous = self.config().exchange_rate;
        let config = FinancialConfig::new(rate, now);

        financial::persist(&mut self.store, &config);
        self.financial = Some(config.clone());
        tracing::debug!(%previous, rate = %config.exchange_rate, "exchange rate updated");
        Ok(config)
    }

    /// Parse textual input (`36,5` or `36.5`) and update the rate
    pub fn update_rate_str(&mut self, input: &str) -> Result<FinancialConfig> {
        let rate = parse_amount(input).ok_or_else(|| TallerError::InvalidRate(input.trim().to_string()))?;
        self.update_rate(rate)
    }

    // ----- payment methods -----

    pub fn payment_methods(&self) -> &[PaymentMethod] {
        self.methods.all()
    }

    /// Validate and store a new, active method.
    ///
    /// # Errors
    /// * `MissingFields` - fields required by the method type are blank
    pub fn add_payment_method(&mut self, draft: PaymentMethodDraft) -> Result<PaymentMethod> {
        validate_payment_draft(&draft)?;
        let method = draft.into_method(new_id());

        self.methods.insert(method.clone());
        self.methods.persist(&mut self.store);
        tracing::debug!(id = %method.id, kind = %method.method_type, "payment method added");
        Ok(method)
    }

    /// Merge `patch`, re-validate against the resulting type, then store
    pub fn update_payment_method(&mut self, id: &str, patch: &PaymentMethodPatch) -> Result<PaymentMethod> {
        let updated = patch.apply(self.methods.get(id)?);
        validate_payment_method(&updated)?;

        self.methods.replace(updated.clone())?;
        self.methods.persist(&mut self.store);
        tracing::debug!(id, "payment method updated");
        Ok(updated)
    }

    /// Flip `isActive`
    pub fn toggle_payment_method(&mut self, id: &str) -> Result<PaymentMethod> {
        let mut method = self.methods.get(id)?.clone();
        method.is_active = !method.is_active;

        self.methods.replace(method.clone())?;
        self.methods.persist(&mut self.store);
        tracing::debug!(id, active = method.is_active, "payment method toggled");
        Ok(method)
    }

    pub fn remove_payment_method(&mut self, id: &str) -> Result<PaymentMethod> {
        let removed = self
            .methods
            .remove(id)
            .ok_or_else(|| TallerError::NotFound(format!("payment method {}", id)))?;
        self.methods.persist(&mut self.store);
        tracing::debug!(id, "payment method removed");
        Ok(removed)
    }

    // ----- service history -----

    /// Newest first; empty for unknown vehicles
    pub fn service_history(&self, vehicle_id: &str) -> &[ServiceRecord] {
        self.history.list(vehicle_id)
    }

    /// # Errors
    /// * `NotFound` - unknown vehicle
    /// * `MissingFields` - blank service type
    pub fn add_service_record(&mut self, vehicle_id: &str, draft: ServiceRecordDraft) -> Result<ServiceRecord> {
        self.vehicles.get(vehicle_id)?;
        draft.validate()?;
        let record = draft.into_record(new_id());

        self.history.add(vehicle_id, record.clone());
        self.history.persist(&mut self.store);
        tracing::debug!(vehicle_id, id = %record.id, "service record added");
        Ok(record)
    }

    pub fn update_service_record(
        &mut self,
        vehicle_id: &str,
        record_id: &str,
        patch: &ServiceRecordPatch,
    ) -> Result<ServiceRecord> {
        let updated = self.history.update(vehicle_id, record_id, patch)?;
        self.history.persist(&mut self.store);
        tracing::debug!(vehicle_id, record_id, "service record updated");
        Ok(updated)
    }

    /// Returns whether a record was removed
    pub fn remove_service_record(&mut self, vehicle_id: &str, record_id: &str) -> bool {
        let removed = self.history.remove(vehicle_id, record_id);
        if removed {
            self.history.persist(&mut self.store);
            tracing::debug!(vehicle_id, record_id, "service record removed");
        }
        removed
    }

    // ----- queries -----

    /// Vehicle, history and priced budget in one read
    pub fn vehicle_details(&mut self, id: &str) -> Result<VehicleDetails> {
        let budget = self.budget_summary(id)?;
        let vehicle = self.vehicles.get(id)?.clone();
        Ok(VehicleDetails {
            history: self.history.list(id).to_vec(),
            vehicle,
            budget,
        })
    }

    pub fn stats(&self) -> WorkshopStats {
        WorkshopStats::collect(self.vehicles.all())
    }
}
