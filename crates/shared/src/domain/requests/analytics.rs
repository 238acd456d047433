use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

/// Granularity of an analytics window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum PeriodType {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl PeriodType {
    pub const ALL: [PeriodType; 5] = [
        PeriodType::Day,
        PeriodType::Week,
        PeriodType::Month,
        PeriodType::Quarter,
        PeriodType::Year,
    ];

    /// Unit name understood by Postgres `date_trunc`.
    pub fn truncation_unit(&self) -> &'static str {
        match self {
            PeriodType::Day => "day",
            PeriodType::Week => "week",
            PeriodType::Month => "month",
            PeriodType::Quarter => "quarter",
            PeriodType::Year => "year",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Day => "DAY",
            PeriodType::Week => "WEEK",
            PeriodType::Month => "MONTH",
            PeriodType::Quarter => "QUARTER",
            PeriodType::Year => "YEAR",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, IntoParams)]
pub struct TopSellerQuery {
    #[param(value_type = String, example = "MONTH")]
    pub period_type: PeriodType,
    #[param(value_type = String, format = Date, example = "2024-01-10")]
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize, Serialize, IntoParams)]
pub struct SellersBelowQuery {
    #[param(value_type = String, format = DateTime, example = "2024-01-01T00:00:00")]
    pub from: NaiveDateTime,
    #[param(value_type = String, format = DateTime, example = "2024-02-01T00:00:00")]
    pub to: NaiveDateTime,
    #[param(value_type = String, example = "200.00")]
    pub max_total: Decimal,
}

#[derive(Debug, Clone, Deserialize, Serialize, IntoParams)]
pub struct BestPeriodQuery {
    #[param(value_type = String, example = "MONTH")]
    pub period_type: PeriodType,
}
