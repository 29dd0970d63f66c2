//! Budget ledger
//!
//! `BudgetEditor` is the working copy of a vehicle's budget. Totals are never
//! cached: every read sums the current items.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::{Result, TallerError};
use crate::schemas::{BudgetCategory, BudgetItem, VehicleBudget};

/// Parse a user-typed amount, accepting `,` or `.` as decimal separator.
///
/// Returns None for anything that is not a plain finite number.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    Decimal::from_str(&normalized).ok()
}

/// Parse a budget cost: a non-negative amount
pub fn parse_cost(input: &str) -> Result<Decimal> {
    match parse_amount(input) {
        Some(cost) if cost >= Decimal::ZERO => Ok(cost),
        _ => Err(TallerError::InvalidCost(input.to_string())),
    }
}

/// Sum of item costs.
///
/// # Errors
/// * `InvalidCost` - the sum does not fit in a `Decimal`
pub fn compute_total(items: &[BudgetItem]) -> Result<Decimal> {
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        total.checked_add(item.cost).ok_or_else(total_out_of_range)
    })
}

fn total_out_of_range() -> TallerError {
    TallerError::InvalidCost("budget total is out of range".to_string())
}

/// Editable budget for one vehicle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BudgetEditor {
    items: Vec<BudgetItem>,
    is_approved: bool,
    /// Creation time of the budget being edited; None for a new budget
    created_at: Option<DateTime<Utc>>,
}

impl BudgetEditor {
    /// Start an empty, unapproved budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a saved budget for editing, or an empty one
    pub fn open(budget: Option<&VehicleBudget>) -> Self {
        match budget {
            Some(budget) => BudgetEditor {
                items: budget.items.clone(),
                is_approved: budget.is_approved,
                created_at: Some(budget.created_at),
            },
            None => Self::new(),
        }
    }

    pub fn items(&self) -> &[BudgetItem] {
        &self.items
    }

    pub fn is_approved(&self) -> bool {
        self.is_approved
    }

    pub fn is_new(&self) -> bool {
        self.created_at.is_none()
    }

    /// Current USD total, recomputed from the items
    pub fn total(&self) -> Result<Decimal> {
        compute_total(&self.items)
    }

    /// Append a line item.
    ///
    /// # Errors
    /// * `EmptyDescription` - description is blank after trimming
    /// * `InvalidCost` - cost is not a non-negative number, or would push
    ///   the total out of range
    pub fn add_item(
        &mut self,
        description: &str,
        cost: &str,
        category: BudgetCategory,
    ) -> Result<BudgetItem> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TallerError::EmptyDescription);
        }
        let cost = parse_cost(cost)?;
        self.total()?.checked_add(cost).ok_or_else(total_out_of_range)?;

        let item = BudgetItem {
            id: Uuid::new_v4().to_string(),
            description: description.to_string(),
            category,
            cost,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove an item by id; returns whether anything was removed
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        self.items.len() != before
    }

    /// Set the approval flag. Item edits never touch it.
    pub fn set_approved(&mut self, approved: bool) {
        self.is_approved = approved;
    }

    /// Snapshot the editor as of now
    pub fn save(&self) -> Result<VehicleBudget> {
        self.save_at(Utc::now())
    }

    /// Snapshot the editor; `now` becomes `createdAt` only for a new budget
    pub fn save_at(&self, now: DateTime<Utc>) -> Result<VehicleBudget> {
        Ok(VehicleBudget {
            items: self.items.clone(),
            total: self.total()?,
            is_approved: self.is_approved,
            created_at: self.created_at.unwrap_or(now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_amount_separators() {
        assert_eq!(parse_amount("10.5"), Some(Decimal::new(105, 1)));
        assert_eq!(parse_amount("10,5"), Some(Decimal::new(105, 1)));
        assert_eq!(parse_amount(" 7 "), Some(Decimal::new(7, 0)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("1.2.3"), None);
    }

    #[test]
    fn test_parse_cost_rejects_negative() {
        assert!(parse_cost("0").is_ok());
        assert!(matches!(parse_cost("-1"), Err(TallerError::InvalidCost(_))));
        assert!(matches!(parse_cost("NaN"), Err(TallerError::InvalidCost(_))));
    }

    #[test]
    fn test_add_item_and_total() {
        let mut editor = BudgetEditor::new();
        editor.add_item("Pastillas", "100", BudgetCategory::Parts).unwrap();
        editor.add_item("Mano de obra", "50", BudgetCategory::Labor).unwrap();

        assert_eq!(editor.items().len(), 2);
        assert_eq!(editor.total().unwrap(), Decimal::new(150, 0));
    }

    #[test]
    fn test_add_item_rejects_blank_description() {
        let mut editor = BudgetEditor::new();
        let err = editor.add_item("", "10", BudgetCategory::Parts).unwrap_err();
        assert!(matches!(err, TallerError::EmptyDescription));
        assert!(editor.items().is_empty());

        let err = editor.add_item("   ", "10", BudgetCategory::Parts).unwrap_err();
        assert!(matches!(err, TallerError::EmptyDescription));
        assert!(editor.items().is_empty());
    }

    #[test]
    fn test_add_item_rejects_bad_cost() {
        let mut editor = BudgetEditor::new();
        let err = editor.add_item("Filtro", "diez", BudgetCategory::Parts).unwrap_err();
        assert!(matches!(err, TallerError::InvalidCost(_)));
        assert!(editor.items().is_empty());
    }

    #[test]
    fn test_add_item_trims_description() {
        let mut editor = BudgetEditor::new();
        let item = editor.add_item("  Filtro  ", "12,5", BudgetCategory::Parts).unwrap();
        assert_eq!(item.description, "Filtro");
        assert_eq!(item.cost, Decimal::new(125, 1));
    }

    #[test]
    fn test_add_item_rejects_total_overflow() {
        let mut editor = BudgetEditor::new();
        editor
            .add_item("Motor completo", "79228162514264337593543950335", BudgetCategory::Parts)
            .unwrap();

        let err = editor.add_item("Tornillo", "1", BudgetCategory::Parts).unwrap_err();
        assert!(matches!(err, TallerError::InvalidCost(_)));
        assert_eq!(editor.items().len(), 1);
        assert_eq!(editor.total().unwrap(), Decimal::MAX);
    }

    #[test]
    fn test_total_of_stored_overflowing_items_is_an_error() {
        let item = |id: &str| BudgetItem {
            id: id.to_string(),
            description: "Motor".to_string(),
            category: BudgetCategory::Parts,
            cost: Decimal::MAX,
        };
        let stored = VehicleBudget {
            items: vec![item("a"), item("b")],
            total: Decimal::MAX,
            is_approved: false,
            created_at: Utc::now(),
        };

        let editor = BudgetEditor::open(Some(&stored));
        assert!(matches!(editor.total(), Err(TallerError::InvalidCost(_))));
        assert!(editor.save().is_err());
    }

    #[test]
    fn test_remove_item() {
        let mut editor = BudgetEditor::new();
        let item = editor.add_item("Filtro", "10", BudgetCategory::Parts).unwrap();
        editor.add_item("Aceite", "30", BudgetCategory::Parts).unwrap();

        assert!(editor.remove_item(&item.id));
        assert_eq!(editor.total().unwrap(), Decimal::new(30, 0));
        assert!(!editor.remove_item("missing"));
        assert_eq!(editor.items().len(), 1);
    }

    #[test]
    fn test_approval_survives_item_edits() {
        let mut editor = BudgetEditor::new();
        editor.add_item("Filtro", "10", BudgetCategory::Parts).unwrap();
        editor.set_approved(true);
        editor.add_item("Aceite", "30", BudgetCategory::Parts).unwrap();
        assert!(editor.is_approved());
    }

    #[test]
    fn test_save_snapshots_total() {
        let mut editor = BudgetEditor::new();
        editor.add_item("Filtro", "10", BudgetCategory::Parts).unwrap();
        editor.add_item("Aceite", "30.25", BudgetCategory::Parts).unwrap();
        let budget = editor.save().unwrap();
        assert_eq!(budget.total, compute_total(&budget.items).unwrap());
        assert_eq!(budget.total, Decimal::new(4025, 2));
    }

    #[test]
    fn test_save_preserves_created_at() {
        let created = Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap();

        let first = BudgetEditor::new().save_at(created).unwrap();
        assert_eq!(first.created_at, created);

        let mut editor = BudgetEditor::open(Some(&first));
        assert!(!editor.is_new());
        editor.add_item("Filtro", "10", BudgetCategory::Parts).unwrap();
        let second = editor.save_at(later).unwrap();
        assert_eq!(second.created_at, created);
    }

    #[test]
    fn test_open_none_is_new() {
        let editor = BudgetEditor::open(None);
        assert!(editor.is_new());
        assert!(!editor.is_approved());
        assert_eq!(editor.total().unwrap(), Decimal::ZERO);
    }
}
