use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Card,
    Cash,
    Transfer,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Card => "CARD",
            PaymentType::Cash => "CASH",
            PaymentType::Transfer => "TRANSFER",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CARD" => Ok(PaymentType::Card),
            "CASH" => Ok(PaymentType::Cash),
            "TRANSFER" => Ok(PaymentType::Transfer),
            other => Err(format!("unknown payment type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Canceled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(TransactionStatus::Pending),
            "COMPLETED" => Ok(TransactionStatus::Completed),
            "CANCELED" => Ok(TransactionStatus::Canceled),
            other => Err(format!("unknown transaction status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, IntoParams)]
pub struct FindAllTransactions {
    #[serde(default)]
    pub seller_id: Option<i64>,

    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

impl Default for FindAllTransactions {
    fn default() -> Self {
        Self {
            seller_id: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateTransactionRequest {
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub seller_id: i64,

    #[schema(value_type = String, example = "150.00")]
    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,

    pub payment_type: PaymentType,
}

/// At least 0.01 and no more than two fractional digits.
fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount < Decimal::new(1, 2) {
        let mut err = ValidationError::new("range");
        err.message = Some("must be at least 0.01".into());
        return Err(err);
    }

    if amount.normalize().scale() > 2 {
        let mut err = ValidationError::new("scale");
        err.message = Some("must have at most 2 decimal places".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(amount: Decimal) -> CreateTransactionRequest {
        CreateTransactionRequest {
            seller_id: 1,
            amount,
            payment_type: PaymentType::Card,
        }
    }

    #[test]
    fn amount_bounds() {
        assert!(request(dec!(0.01)).validate().is_ok());
        assert!(request(dec!(150.50)).validate().is_ok());
        assert!(request(dec!(10.000)).validate().is_ok());
        assert!(request(dec!(0)).validate().is_err());
        assert!(request(dec!(-5)).validate().is_err());
        assert!(request(dec!(1.005)).validate().is_err());
    }

    #[test]
    fn enums_use_uppercase_wire_names() {
        assert_eq!(serde_json::to_string(&PaymentType::Transfer).unwrap(), "\"TRANSFER\"");
        assert_eq!(
            serde_json::from_str::<TransactionStatus>("\"CANCELED\"").unwrap(),
            TransactionStatus::Canceled
        );
        assert_eq!("CASH".parse::<PaymentType>().unwrap(), PaymentType::Cash);
        assert!("cash".parse::<PaymentType>().is_err());
    }
}
