//! Payment method schema - Billing configuration shown to clients

use serde::{Deserialize, Serialize};

/// Kind of payment channel; decides which fields are required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    /// Bank transfer
    #[default]
    Transfer,
    /// Mobile payment (phone number in `account_number`)
    MobilePayment,
    Zelle,
    Cash,
    Binance,
}

impl std::fmt::Display for PaymentMethodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethodType::Transfer => write!(f, "transfer"),
            PaymentMethodType::MobilePayment => write!(f, "mobile_payment"),
            PaymentMethodType::Zelle => write!(f, "zelle"),
            PaymentMethodType::Cash => write!(f, "cash"),
            PaymentMethodType::Binance => write!(f, "binance"),
        }
    }
}

impl std::str::FromStr for PaymentMethodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transfer" => Ok(PaymentMethodType::Transfer),
            "mobile_payment" => Ok(PaymentMethodType::MobilePayment),
            "zelle" => Ok(PaymentMethodType::Zelle),
            "cash" => Ok(PaymentMethodType::Cash),
            "binance" => Ok(PaymentMethodType::Binance),
            _ => Err(format!("Unknown payment method type: {}", s)),
        }
    }
}

/// Currency a payment method settles in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[default]
    #[serde(rename = "VES")]
    Ves,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Usd => write!(f, "USD"),
            Currency::Ves => write!(f, "VES"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "VES" => Ok(Currency::Ves),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

/// A stored payment method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,

    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,

    /// Account holder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,

    /// Account number, or phone number for mobile payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub currency: Currency,

    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Input for a new payment method, not yet validated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodDraft {
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    pub bank_name: Option<String>,
    pub account_name: Option<String>,
    pub account_number: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub currency: Currency,
    pub notes: Option<String>,
}

impl PaymentMethodDraft {
    pub fn new(method_type: PaymentMethodType) -> Self {
        PaymentMethodDraft {
            method_type,
            ..Default::default()
        }
    }

    /// Materialize an active method; callers validate first
    pub fn into_method(self, id: String) -> PaymentMethod {
        PaymentMethod {
            id,
            method_type: self.method_type,
            bank_name: clean(self.bank_name),
            account_name: clean(self.account_name),
            account_number: clean(self.account_number),
            email: clean(self.email),
            currency: self.currency,
            is_active: true,
            notes: clean(self.notes),
        }
    }
}

/// Partial edit of a payment method
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodPatch {
    #[serde(rename = "type")]
    pub method_type: Option<PaymentMethodType>,
    pub bank_name: Option<String>,
    pub account_name: Option<String>,
    pub account_number: Option<String>,
    pub email: Option<String>,
    pub currency: Option<Currency>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}

impl PaymentMethodPatch {
    /// Merge this patch over `method`. A blank string clears the field.
    pub fn apply(&self, method: &PaymentMethod) -> PaymentMethod {
        let mut next = method.clone();
        if let Some(method_type) = self.method_type {
            next.method_type = method_type;
        }
        merge_text(&mut next.bank_name, &self.bank_name);
        merge_text(&mut next.account_name, &self.account_name);
        merge_text(&mut next.account_number, &self.account_number);
        merge_text(&mut next.email, &self.email);
        merge_text(&mut next.notes, &self.notes);
        if let Some(currency) = self.currency {
            next.currency = currency;
        }
        if let Some(is_active) = self.is_active {
            next.is_active = is_active;
        }
        next
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn merge_text(target: &mut Option<String>, patch: &Option<String>) {
    if let Some(value) = patch {
        *target = clean(Some(value.clone()));
    }
}
