use sqlx::PgExecutor;

use crate::{
    dto::properties::{FilterOptions, NewProperty},
    error::AppResult,
    models::{Property, PropertyWithRating},
    services::listing_query::PropertyListing,
};

/// Properties matching `options`, cheapest first, at most `limit` rows.
pub async fn get_all_properties<'e, E>(
    executor: E,
    options: &FilterOptions,
    limit: i64,
) -> AppResult<Vec<PropertyWithRating>>
where
    E: PgExecutor<'e>,
{
    let PropertyListing { sql, params } = PropertyListing::build(options, limit);
    tracing::debug!(sql = %sql, params = ?params, "property listing query");

    let mut query = sqlx::query_as::<_, PropertyWithRating>(&sql);
    for param in params {
        query = param.bind(query);
    }

    let rows = query.fetch_all(executor).await?;
    Ok(rows)
}

pub async fn add_property<'e, E>(executor: E, payload: NewProperty) -> AppResult<Property>
where
    E: PgExecutor<'e>,
{
    let property = sqlx::query_as::<_, Property>(
        r#"
        INSERT INTO properties (owner_id, title, description,
            thumbnail_photo_url, cover_photo_url, cost_per_night,
            street, city, province, post_code, country,
            parking_spaces, number_of_bathrooms, number_of_bedrooms)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING *
        "#,
    )
    .bind(payload.owner_id)
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.thumbnail_photo_url)
    .bind(payload.cover_photo_url)
    .bind(payload.cost_per_night)
    .bind(payload.street)
    .bind(payload.city)
    .bind(payload.province)
    .bind(payload.post_code)
    .bind(payload.country)
    .bind(payload.parking_spaces)
    .bind(payload.number_of_bathrooms)
    .bind(payload.number_of_bedrooms)
    .fetch_one(executor)
    .await?;

    tracing::info!(property_id = property.id, owner_id = property.owner_id, "property created");
    Ok(property)
}
