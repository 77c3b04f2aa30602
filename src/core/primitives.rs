use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Category label for a daily sample, e.g. `2024-03-05`.
#[must_use]
pub fn date_category(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
