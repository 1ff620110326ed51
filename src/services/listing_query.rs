//! Statement builder for the property listing.
//!
//! Predicates are collected as fragment/parameter pairs and rendered once, so
//! `WHERE` is emitted exactly when at least one pre-aggregation filter is set
//! and placeholders are numbered in the order filters were accepted.

use sqlx::{Postgres, postgres::PgArguments, query::QueryAs};

use crate::dto::properties::FilterOptions;

pub const DEFAULT_LIMIT: i64 = 10;

const SELECT: &str = "SELECT properties.*, AVG(property_reviews.rating)::float8 AS average_rating
FROM properties
LEFT JOIN property_reviews ON properties.id = property_reviews.property_id";

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i32),
    BigInt(i64),
    Float(f64),
}

impl SqlParam {
    pub fn bind<'q, O>(
        self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            SqlParam::Text(v) => query.bind(v),
            SqlParam::Int(v) => query.bind(v),
            SqlParam::BigInt(v) => query.bind(v),
            SqlParam::Float(v) => query.bind(v),
        }
    }
}

/// Rendered SQL plus its parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyListing {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

#[derive(Default)]
struct Params(Vec<SqlParam>);

impl Params {
    /// Appends a value and returns its placeholder.
    fn push(&mut self, value: SqlParam) -> String {
        self.0.push(value);
        format!("${}", self.0.len())
    }
}

/// Converts a major-unit price into integer minor units.
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

impl PropertyListing {
    pub fn build(options: &FilterOptions, limit: i64) -> Self {
        let mut params = Params::default();
        let mut predicates: Vec<String> = Vec::new();

        if let Some(city) = options.city.as_deref().filter(|c| !c.is_empty()) {
            let p = params.push(SqlParam::Text(format!("%{city}%")));
            predicates.push(format!("properties.city ILIKE {p}"));
        }

        if let Some(owner_id) = options.owner_id {
            let p = params.push(SqlParam::Int(owner_id));
            predicates.push(format!("properties.owner_id = {p}"));
        }

        if let Some(min) = options.minimum_price_per_night {
            let p = params.push(SqlParam::BigInt(to_minor_units(min)));
            predicates.push(format!("properties.cost_per_night > {p}"));
        }

        if let Some(max) = options.maximum_price_per_night {
            let p = params.push(SqlParam::BigInt(to_minor_units(max)));
            predicates.push(format!("properties.cost_per_night < {p}"));
        }

        let mut sql = String::from(SELECT);
        if !predicates.is_empty() {
            sql.push_str("\nWHERE ");
            sql.push_str(&predicates.join("\nAND "));
        }

        sql.push_str("\nGROUP BY properties.id");

        if let Some(rating) = options.minimum_rating {
            let p = params.push(SqlParam::Float(rating));
            sql.push_str("\nHAVING AVG(property_reviews.rating)::float8 >= ");
            sql.push_str(&p);
        }

        let p = params.push(SqlParam::BigInt(limit));
        sql.push_str("\nORDER BY properties.cost_per_night\nLIMIT ");
        sql.push_str(&p);

        Self {
            sql,
            params: params.0,
        }
    }
}
