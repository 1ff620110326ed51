use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    db::DbPool,
    dto::{reservations::ReservationList, users::NewUser},
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
    routes::params::{EmailQuery, LimitQuery},
    services::{reservation_service, user_service},
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(find_user_by_email).post(create_user))
        .route("/{id}", get(get_user))
        .route("/{id}/reservations", get(list_reservations))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = NewUser,
    responses(
        (status = 201, description = "Create user", body = ApiResponse<User>),
        (status = 409, description = "Email already registered"),
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(pool): State<DbPool>,
    Json(payload): Json<NewUser>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let user = user_service::add_user(&pool, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("User created", user, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(EmailQuery),
    responses(
        (status = 200, description = "User with this email", body = ApiResponse<User>),
        (status = 404, description = "No user with this email"),
    ),
    tag = "Users"
)]
pub async fn find_user_by_email(
    State(pool): State<DbPool>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = user_service::get_user_by_email(&pool, &query.email)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("User", user, None)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Get user", body = ApiResponse<User>),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn get_user(
    Path(id): Path<i32>,
    State(pool): State<DbPool>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = user_service::get_user_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("User", user, None)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/reservations",
    params(
        ("id" = i32, Path, description = "Guest user ID"),
        LimitQuery,
    ),
    responses(
        (status = 200, description = "Completed reservations, oldest first", body = ApiResponse<ReservationList>)
    ),
    tag = "Users"
)]
pub async fn list_reservations(
    Path(id): Path<i32>,
    State(pool): State<DbPool>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<ApiResponse<ReservationList>>> {
    let limit = query.limit();
    let items = reservation_service::get_reservations_for_guest(&pool, id, limit).await?;
    let meta = Meta::new(limit, items.len());
    Ok(Json(ApiResponse::success(
        "Reservations",
        ReservationList { items },
        Some(meta),
    )))
}
