use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::PropertyWithRating;

/// Input for a new listing. Every column is bound by field name.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: i32,
    pub parking_spaces: i32,
    /// Minor currency units, stored as given.
    pub cost_per_night: i32,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub street: String,
    pub country: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub owner_id: i32,
}

/// Optional listing filters. Each populated field adds one predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    /// Major currency units; compared against `cost_per_night` after scaling by 100.
    pub minimum_price_per_night: Option<f64>,
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct PropertyList {
    #[schema(value_type = Vec<PropertyWithRating>)]
    pub items: Vec<PropertyWithRating>,
}
