//! Numeric coercion helpers shared by the encoding strategies.

use polars::prelude::{Column, NamedFrom, PolarsError, Series};
use survey_model::SurveyError;

pub fn frame_error(err: PolarsError) -> SurveyError {
    SurveyError::frame(err.to_string())
}

/// Null and NaN weights both count as 0, the way the source data treats
/// missing numerics.
pub fn weight_or_zero(weight: Option<f64>) -> f64 {
    match weight {
        Some(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

/// Build the narrowest signed integer column that holds `values`; a
/// column with any fractional or non-finite value stays f64.
pub fn downcast_numeric_column(name: &str, values: &[f64]) -> Column {
    let whole = values
        .iter()
        .all(|value| value.is_finite() && value.fract() == 0.0);
    if !whole {
        return Series::new(name.into(), values.to_vec()).into();
    }
    let ints: Vec<i64> = values.iter().map(|value| *value as i64).collect();
    let min = ints.iter().copied().min().unwrap_or(0);
    let max = ints.iter().copied().max().unwrap_or(0);
    if min >= i64::from(i8::MIN) && max <= i64::from(i8::MAX) {
        let narrowed: Vec<i8> = ints.iter().map(|value| *value as i8).collect();
        Series::new(name.into(), narrowed).into()
    } else if min >= i64::from(i16::MIN) && max <= i64::from(i16::MAX) {
        let narrowed: Vec<i16> = ints.iter().map(|value| *value as i16).collect();
        Series::new(name.into(), narrowed).into()
    } else if min >= i64::from(i32::MIN) && max <= i64::from(i32::MAX) {
        let narrowed: Vec<i32> = ints.iter().map(|value| *value as i32).collect();
        Series::new(name.into(), narrowed).into()
    } else {
        Series::new(name.into(), ints).into()
    }
}

/// Parse every value as an integer, tolerating surrounding whitespace.
/// Returns `None` unless every single value parses; a column converts
/// whole or not at all.
pub fn parse_all_i64(values: &[String]) -> Option<Vec<i64>> {
    values
        .iter()
        .map(|value| value.trim().parse::<i64>().ok())
        .collect()
}
