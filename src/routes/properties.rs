use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    db::DbPool,
    dto::properties::{NewProperty, PropertyList},
    error::AppResult,
    models::Property,
    response::{ApiResponse, Meta},
    routes::params::PropertyListQuery,
    services::property_service,
};

pub fn router() -> Router<DbPool> {
    Router::new().route("/", get(list_properties).post(create_property))
}

#[utoipa::path(
    get,
    path = "/api/properties",
    params(PropertyListQuery),
    responses(
        (status = 200, description = "Properties matching the filters, cheapest first", body = ApiResponse<PropertyList>),
        (status = 400, description = "Malformed filter value"),
    ),
    tag = "Properties"
)]
pub async fn list_properties(
    State(pool): State<DbPool>,
    Query(query): Query<PropertyListQuery>,
) -> AppResult<Json<ApiResponse<PropertyList>>> {
    let (options, limit) = query.into_parts();
    let items = property_service::get_all_properties(&pool, &options, limit).await?;
    let meta = Meta::new(limit, items.len());
    Ok(Json(ApiResponse::success(
        "Properties",
        PropertyList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    post,
    path = "/api/properties",
    request_body = NewProperty,
    responses(
        (status = 201, description = "Create property", body = ApiResponse<Property>)
    ),
    tag = "Properties"
)]
pub async fn create_property(
    State(pool): State<DbPool>,
    Json(payload): Json<NewProperty>,
) -> AppResult<(StatusCode, Json<ApiResponse<Property>>)> {
    let property = property_service::add_property(&pool, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Property created",
            property,
            Some(Meta::empty()),
        )),
    ))
}
