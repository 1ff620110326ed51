use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, de};
use utoipa::IntoParams;

use crate::{dto::properties::FilterOptions, services::listing_query::DEFAULT_LIMIT};

const MAX_LIMIT: i64 = 100;

/// HTML search forms submit every field, so blank values mean "not set".
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

/// Like [`empty_as_none`], but `NaN` and infinities are rejected rather than
/// reaching the price scaling or the rating bind.
fn finite_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match empty_as_none::<D, f64>(deserializer)? {
        Some(value) if !value.is_finite() => Err(de::Error::custom(format!(
            "expected a finite number, got {value}"
        ))),
        other => Ok(other),
    }
}

fn normalize_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PropertyListQuery {
    /// Case-insensitive substring of the city.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub owner_id: Option<i32>,
    /// Dollars; exclusive lower bound.
    #[serde(default, deserialize_with = "finite_or_none")]
    pub minimum_price_per_night: Option<f64>,
    /// Dollars; exclusive upper bound.
    #[serde(default, deserialize_with = "finite_or_none")]
    pub maximum_price_per_night: Option<f64>,
    #[serde(default, deserialize_with = "finite_or_none")]
    pub minimum_rating: Option<f64>,
    /// Default 10, at most 100.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
}

impl PropertyListQuery {
    pub fn into_parts(self) -> (FilterOptions, i64) {
        let limit = normalize_limit(self.limit);
        let options = FilterOptions {
            city: self.city,
            owner_id: self.owner_id,
            minimum_price_per_night: self.minimum_price_per_night,
            maximum_price_per_night: self.maximum_price_per_night,
            minimum_rating: self.minimum_rating,
        };
        (options, limit)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    /// Default 10, at most 100.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
}

impl LimitQuery {
    pub fn limit(&self) -> i64 {
        normalize_limit(self.limit)
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::Uri};

    fn parse(uri: &str) -> Result<PropertyListQuery, String> {
        let uri: Uri = uri.parse().unwrap();
        Query::<PropertyListQuery>::try_from_uri(&uri)
            .map(|Query(q)| q)
            .map_err(|e| e.body_text())
    }

    #[test]
    fn blank_form_fields_are_absent() {
        let query = parse(
            "/api/properties?city=&owner_id=&minimum_price_per_night=&maximum_price_per_night=&minimum_rating=",
        )
        .unwrap();
        let (options, limit) = query.into_parts();
        assert_eq!(options, FilterOptions::default());
        assert_eq!(limit, DEFAULT_LIMIT);
    }

    #[test]
    fn populated_fields_are_parsed() {
        let (options, limit) = parse(
            "/api/properties?city=Vancouver&minimum_price_per_night=50&maximum_price_per_night=120.5&minimum_rating=4&limit=3",
        )
        .unwrap()
        .into_parts();
        assert_eq!(options.city.as_deref(), Some("Vancouver"));
        assert_eq!(options.owner_id, None);
        assert_eq!(options.minimum_price_per_night, Some(50.0));
        assert_eq!(options.maximum_price_per_night, Some(120.5));
        assert_eq!(options.minimum_rating, Some(4.0));
        assert_eq!(limit, 3);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        assert!(parse("/api/properties?minimum_price_per_night=cheap").is_err());
        assert!(parse("/api/properties?owner_id=seven").is_err());
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert!(parse("/api/properties?minimum_price_per_night=NaN").is_err());
        assert!(parse("/api/properties?maximum_price_per_night=inf").is_err());
        assert!(parse("/api/properties?maximum_price_per_night=-infinity").is_err());
        assert!(parse("/api/properties?minimum_rating=NaN").is_err());
    }

    #[test]
    fn zero_price_is_kept() {
        let (options, _) = parse("/api/properties?minimum_price_per_night=0")
            .unwrap()
            .into_parts();
        assert_eq!(options.minimum_price_per_night, Some(0.0));
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(LimitQuery { limit: Some(0) }.limit(), 1);
        assert_eq!(LimitQuery { limit: Some(500) }.limit(), MAX_LIMIT);
        assert_eq!(LimitQuery::default().limit(), DEFAULT_LIMIT);
    }
}
