//! Vehicle schema - The unit of work moving through the workshop

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldError, Result, TallerError};

use super::budget::VehicleBudget;

/// Workshop pipeline position of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Vehicle checked in, not yet inspected
    Reception,
    /// Inspection and budget preparation
    Diagnosis,
    /// Repair work under way
    Execution,
    /// Quality control
    Quality,
    /// Ready for pickup
    Ready,
}

impl Stage {
    /// Display label shown on the workshop board
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Reception => "Recepción",
            Stage::Diagnosis => "Diagnóstico",
            Stage::Execution => "Ejecución",
            Stage::Quality => "C. Calidad",
            Stage::Ready => "Egreso",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Reception => write!(f, "reception"),
            Stage::Diagnosis => write!(f, "diagnosis"),
            Stage::Execution => write!(f, "execution"),
            Stage::Quality => write!(f, "quality"),
            Stage::Ready => write!(f, "ready"),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reception" => Ok(Stage::Reception),
            "diagnosis" => Ok(Stage::Diagnosis),
            "execution" => Ok(Stage::Execution),
            "quality" => Ok(Stage::Quality),
            "ready" => Ok(Stage::Ready),
            _ => Err(format!("Unknown stage: {}", s)),
        }
    }
}

/// Intake priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// A vehicle in the workshop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Opaque unique identifier
    pub id: String,

    /// License plate
    pub plate: String,

    /// Make and model
    pub model: String,

    /// Client name
    pub client: String,

    /// Current pipeline stage
    pub stage: Stage,

    /// Day the vehicle entered the workshop
    pub entry_date: NaiveDate,

    pub priority: Priority,

    /// Quoted price in USD, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    /// Attached repair budget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<VehicleBudget>,
}

impl Vehicle {
    /// Build a vehicle in reception from an intake draft
    pub fn from_draft(id: String, draft: VehicleDraft) -> Self {
        Vehicle {
            id,
            plate: draft.plate.trim().to_string(),
            model: draft.model.trim().to_string(),
            client: draft.client.trim().to_string(),
            stage: Stage::Reception,
            entry_date: draft.entry_date,
            priority: draft.priority,
            price: draft.price,
            budget: None,
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new Vehicle in the given stage
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    /// Return a new Vehicle with the given budget attached
    pub fn with_budget(mut self, budget: Option<VehicleBudget>) -> Self {
        self.budget = budget;
        self
    }

    /// Whether the attached budget exists and is approved
    pub fn has_approved_budget(&self) -> bool {
        self.budget.as_ref().is_some_and(|b| b.is_approved)
    }
}

/// Intake draft: a vehicle without id or stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDraft {
    pub plate: String,
    pub model: String,
    pub client: String,
    pub entry_date: NaiveDate,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl VehicleDraft {
    /// Check required fields, reporting every blank one
    pub fn validate(&self) -> Result<()> {
        let errors = required_vehicle_fields(&self.plate, &self.model, &self.client);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(TallerError::MissingFields(errors))
        }
    }
}

fn required_vehicle_fields(plate: &str, model: &str, client: &str) -> Vec<FieldError> {
    [("plate", plate), ("model", model), ("client", client)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| FieldError::required(field))
        .collect()
}

/// Partial edit of a vehicle's descriptive fields.
///
/// Stage and budget are not patchable; they change only through
/// `move_stage` and `save_budget`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePatch {
    pub plate: Option<String>,
    pub model: Option<String>,
    pub client: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub price: Option<Decimal>,

    /// Drop the quoted price; takes precedence over `price`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub clear_price: bool,
}

impl VehiclePatch {
    pub fn is_empty(&self) -> bool {
        *self == VehiclePatch::default()
    }

    /// Merge this patch over `vehicle`, re-validating the result
    pub fn apply(&self, vehicle: &Vehicle) -> Result<Vehicle> {
        let mut next = vehicle.clone();
        if let Some(plate) = &self.plate {
            next.plate = plate.trim().to_string();
        }
        if let Some(model) = &self.model {
            next.model = model.trim().to_string();
        }
        if let Some(client) = &self.client {
            next.client = client.trim().to_string();
        }
        if let Some(entry_date) = self.entry_date {
            next.entry_date = entry_date;
        }
        if let Some(priority) = self.priority {
            next.priority = priority;
        }
        if self.clear_price {
            next.price = None;
        } else if let Some(price) = self.price {
            next.price = Some(price);
        }

        let errors = required_vehicle_fields(&next.plate, &next.model, &next.client);
        if !errors.is_empty() {
            return Err(TallerError::MissingFields(errors));
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> VehicleDraft {
        VehicleDraft {
            plate: " AB123CD ".to_string(),
            model: "Toyota Corolla".to_string(),
            client: "María Pérez".to_string(),
            entry_date: NaiveDate::from_ymd_opt(2024, 8, 10).unwrap(),
            priority: Priority::High,
            price: None,
        }
    }

    #[test]
    fn test_stage_serialization() {
        assert_eq!(serde_json::to_string(&Stage::Reception).unwrap(), "\"reception\"");
        assert_eq!(serde_json::to_string(&Stage::Diagnosis).unwrap(), "\"diagnosis\"");
        assert_eq!(serde_json::to_string(&Stage::Execution).unwrap(), "\"execution\"");
        assert_eq!(serde_json::to_string(&Stage::Quality).unwrap(), "\"quality\"");
        assert_eq!(serde_json::to_string(&Stage::Ready).unwrap(), "\"ready\"");
    }

    #[test]
    fn test_stage_from_str() {
        assert_eq!("diagnosis".parse::<Stage>().unwrap(), Stage::Diagnosis);
        assert_eq!(" READY ".parse::<Stage>().unwrap(), Stage::Ready);
        assert!("done".parse::<Stage>().is_err());
    }

    #[test]
    fn test_stage_display_matches_wire_name() {
        for stage in [Stage::Reception, Stage::Diagnosis, Stage::Execution, Stage::Quality, Stage::Ready] {
            let wire = serde_json::to_string(&stage).unwrap();
            assert_eq!(wire, format!("\"{}\"", stage));
        }
    }

    #[test]
    fn test_from_draft_forces_reception() {
        let vehicle = Vehicle::from_draft("v1".to_string(), draft());
        assert_eq!(vehicle.stage, Stage::Reception);
        assert_eq!(vehicle.plate, "AB123CD");
        assert!(vehicle.budget.is_none());
    }

    #[test]
    fn test_vehicle_json_uses_camel_case() {
        let vehicle = Vehicle::from_draft("v1".to_string(), draft());
        let json = serde_json::to_string(&vehicle).unwrap();
        assert!(json.contains("\"entryDate\":\"2024-08-10\""));
        assert!(!json.contains("\"budget\""));
        assert!(!json.contains("\"price\""));
    }

    #[test]
    fn test_vehicle_reads_original_format() {
        let json = r#"{
            "id": "abc",
            "plate": "XYZ987",
            "model": "Ford Ka",
            "client": "Luis",
            "stage": "diagnosis",
            "entryDate": "2024-01-20",
            "priority": "low",
            "price": 0,
            "budget": {
                "items": [{"id": "i1", "description": "Frenos", "category": "parts", "cost": 100.5}],
                "total": 100.5,
                "isApproved": true,
                "createdAt": "2024-01-21T10:00:00Z"
            }
        }"#;
        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.stage, Stage::Diagnosis);
        assert_eq!(vehicle.priority, Priority::Low);
        assert!(vehicle.has_approved_budget());
        assert_eq!(vehicle.budget.unwrap().items[0].cost, Decimal::new(1005, 1));
    }

    #[test]
    fn test_draft_validation_reports_every_blank_field() {
        let mut d = draft();
        d.plate = "  ".to_string();
        d.client = String::new();
        let err = d.validate().unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["plate", "client"]);
    }

    #[test]
    fn test_patch_merges_only_set_fields() {
        let vehicle = Vehicle::from_draft("v1".to_string(), draft()).with_stage(Stage::Quality);
        let patch = VehiclePatch {
            client: Some("Ana".to_string()),
            price: Some(Decimal::new(25000, 2)),
            ..Default::default()
        };

        let next = patch.apply(&vehicle).unwrap();
        assert_eq!(next.client, "Ana");
        assert_eq!(next.price, Some(Decimal::new(25000, 2)));
        assert_eq!(next.plate, vehicle.plate);
        assert_eq!(next.stage, Stage::Quality);
        assert_eq!(vehicle.client, "María Pérez");
    }

    #[test]
    fn test_patch_rejects_blanking_required_field() {
        let vehicle = Vehicle::from_draft("v1".to_string(), draft());
        let patch = VehiclePatch {
            model: Some("   ".to_string()),
            ..Default::default()
        };
        let err = patch.apply(&vehicle).unwrap_err();
        assert_eq!(err.code(), "MISSING_FIELDS");
    }

    #[test]
    fn test_empty_patch() {
        assert!(VehiclePatch::default().is_empty());
        let patch = VehiclePatch {
            priority: Some(Priority::Low),
            ..Default::default()
        };
        assert!(!patch.is_empty());

        let clear = VehiclePatch {
            clear_price: true,
            ..Default::default()
        };
        assert!(!clear.is_empty());
    }

    #[test]
    fn test_patch_clears_price() {
        let mut with_price = draft();
        with_price.price = Some(Decimal::new(1200, 0));
        let vehicle = Vehicle::from_draft("v1".to_string(), with_price);

        let patch = VehiclePatch {
            clear_price: true,
            price: Some(Decimal::new(5, 0)),
            ..Default::default()
        };
        let next = patch.apply(&vehicle).unwrap();
        assert_eq!(next.price, None);
        assert_eq!(next.model, vehicle.model);

        let parsed: VehiclePatch = serde_json::from_str(r#"{"clearPrice": true}"#).unwrap();
        assert_eq!(parsed, VehiclePatch { clear_price: true, ..Default::default() });
    }
}
