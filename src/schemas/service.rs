//! Service record schema - Completed maintenance entries per vehicle

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldError, Result, TallerError};

/// A completed maintenance entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,
    pub date: NaiveDate,
    pub service_type: String,
    pub description: String,
    /// Odometer reading in km
    pub mileage: u64,

    /// Free-text list of parts used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<String>,

    /// Link to photos or other evidence
    #[serde(
        rename = "photosUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub evidence_url: Option<String>,
}

/// Input for a new service record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecordDraft {
    pub date: NaiveDate,
    pub service_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mileage: u64,
    pub parts: Option<String>,
    #[serde(rename = "photosUrl")]
    pub evidence_url: Option<String>,
}

impl ServiceRecordDraft {
    pub fn validate(&self) -> Result<()> {
        if self.service_type.trim().is_empty() {
            return Err(TallerError::MissingFields(vec![FieldError::required(
                "serviceType",
            )]));
        }
        Ok(())
    }

    pub fn into_record(self, id: String) -> ServiceRecord {
        ServiceRecord {
            id,
            date: self.date,
            service_type: self.service_type.trim().to_string(),
            description: self.description.trim().to_string(),
            mileage: self.mileage,
            parts: non_blank(self.parts),
            evidence_url: non_blank(self.evidence_url),
        }
    }
}

/// Partial edit of a service record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecordPatch {
    pub date: Option<NaiveDate>,
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub mileage: Option<u64>,
    pub parts: Option<String>,
    #[serde(rename = "photosUrl")]
    pub evidence_url: Option<String>,
}

impl ServiceRecordPatch {
    /// Merge this patch over `record`; the id never changes
    pub fn apply(&self, record: &ServiceRecord) -> Result<ServiceRecord> {
        let mut next = record.clone();
        if let Some(date) = self.date {
            next.date = date;
        }
        if let Some(service_type) = &self.service_type {
            next.service_type = service_type.trim().to_string();
        }
        if let Some(description) = &self.description {
            next.description = description.trim().to_string();
        }
        if let Some(mileage) = self.mileage {
            next.mileage = mileage;
        }
        if let Some(parts) = &self.parts {
            next.parts = non_blank(Some(parts.clone()));
        }
        if let Some(url) = &self.evidence_url {
            next.evidence_url = non_blank(Some(url.clone()));
        }

        if next.service_type.is_empty() {
            return Err(TallerError::MissingFields(vec![FieldError::required(
                "serviceType",
            )]));
        }
        Ok(next)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
