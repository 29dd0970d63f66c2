//! Payment method validation
//!
//! Required fields depend on the method type:
//!
//! | type           | required                              |
//! |----------------|---------------------------------------|
//! | transfer       | bankName, accountNumber, accountName  |
//! | mobile_payment | bankName, accountNumber, accountName  |
//! | zelle          | email, accountName                    |
//! | binance        | email                                 |
//! | cash           | none                                  |

use crate::errors::{FieldError, Result, TallerError};
use crate::schemas::{PaymentMethod, PaymentMethodDraft, PaymentMethodType};

/// Field names required for a payment method type
pub fn required_fields(method_type: PaymentMethodType) -> &'static [&'static str] {
    match method_type {
        PaymentMethodType::Transfer | PaymentMethodType::MobilePayment => {
            &["bankName", "accountNumber", "accountName"]
        }
        PaymentMethodType::Zelle => &["email", "accountName"],
        PaymentMethodType::Binance => &["email"],
        PaymentMethodType::Cash => &[],
    }
}

/// The field values a validator looks at
struct PaymentFields<'a> {
    method_type: PaymentMethodType,
    bank_name: Option<&'a str>,
    account_name: Option<&'a str>,
    account_number: Option<&'a str>,
    email: Option<&'a str>,
}

impl<'a> PaymentFields<'a> {
    fn get(&self, field: &str) -> Option<&'a str> {
        match field {
            "bankName" => self.bank_name,
            "accountName" => self.account_name,
            "accountNumber" => self.account_number,
            "email" => self.email,
            _ => None,
        }
    }

    fn validate(&self) -> Result<()> {
        let errors: Vec<FieldError> = required_fields(self.method_type)
            .iter()
            .filter(|field| self.get(field).map_or(true, |v| v.trim().is_empty()))
            .map(|field| FieldError::required(*field))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(TallerError::MissingFields(errors))
        }
    }
}

/// Validate a new payment method, reporting every missing field
pub fn validate_payment_draft(draft: &PaymentMethodDraft) -> Result<()> {
    PaymentFields {
        method_type: draft.method_type,
        bank_name: draft.bank_name.as_deref(),
        account_name: draft.account_name.as_deref(),
        account_number: draft.account_number.as_deref(),
        email: draft.email.as_deref(),
    }
    .validate()
}

/// Validate a stored (or merged) payment method
pub fn validate_payment_method(method: &PaymentMethod) -> Result<()> {
    PaymentFields {
        method_type: method.method_type,
        bank_name: method.bank_name.as_deref(),
        account_name: method.account_name.as_deref(),
        account_number: method.account_number.as_deref(),
        email: method.email.as_deref(),
    }
    .validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(result: Result<()>) -> Vec<&'static str> {
        match result {
            Ok(()) => vec![],
            Err(err) => err.field_errors().iter().map(|e| e.field).collect(),
        }
    }

    #[test]
    fn test_transfer_requires_bank_fields() {
        let draft = PaymentMethodDraft::new(PaymentMethodType::Transfer);
        assert_eq!(
            missing(validate_payment_draft(&draft)),
            vec!["bankName", "accountNumber", "accountName"]
        );
    }

    #[test]
    fn test_mobile_payment_complete() {
        let draft = PaymentMethodDraft {
            bank_name: Some("Banesco".to_string()),
            account_number: Some("0414-1234567".to_string()),
            account_name: Some("Taller C.A.".to_string()),
            ..PaymentMethodDraft::new(PaymentMethodType::MobilePayment)
        };
        assert!(validate_payment_draft(&draft).is_ok());
    }

    #[test]
    fn test_zelle_requires_email_and_holder() {
        let draft = PaymentMethodDraft {
            email: Some("pagos@taller.com".to_string()),
            account_name: Some("   ".to_string()),
            ..PaymentMethodDraft::new(PaymentMethodType::Zelle)
        };
        assert_eq!(missing(validate_payment_draft(&draft)), vec!["accountName"]);
    }

    #[test]
    fn test_binance_requires_only_email() {
        let draft = PaymentMethodDraft::new(PaymentMethodType::Binance);
        assert_eq!(missing(validate_payment_draft(&draft)), vec!["email"]);
    }

    #[test]
    fn test_cash_requires_nothing() {
        let draft = PaymentMethodDraft::new(PaymentMethodType::Cash);
        assert!(validate_payment_draft(&draft).is_ok());
        assert!(required_fields(PaymentMethodType::Cash).is_empty());
    }

    #[test]
    fn test_validate_stored_method_after_type_change() {
        let method = PaymentMethodDraft::new(PaymentMethodType::Cash).into_method("m1".to_string());
        assert!(validate_payment_method(&method).is_ok());

        let mut changed = method.clone();
        changed.method_type = PaymentMethodType::Binance;
        assert_eq!(missing(validate_payment_method(&changed)), vec!["email"]);
    }
}
