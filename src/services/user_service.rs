use sqlx::PgExecutor;

use crate::{dto::users::NewUser, error::AppResult, models::User};

/// Exact-match lookup; matching follows the column collation.
pub async fn get_user_by_email<'e, E>(executor: E, email: &str) -> AppResult<Option<User>>
where
    E: PgExecutor<'e>,
{
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(executor)
        .await?;
    Ok(user)
}

pub async fn get_user_by_id<'e, E>(executor: E, id: i32) -> AppResult<Option<User>>
where
    E: PgExecutor<'e>,
{
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(user)
}

/// Inserts a user and returns the stored row, generated id included.
///
/// A duplicate email surfaces as the database's unique violation.
pub async fn add_user<'e, E>(executor: E, payload: NewUser) -> AppResult<User>
where
    E: PgExecutor<'e>,
{
    let NewUser {
        name,
        email,
        password,
    } = payload;
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(name)
    .bind(email)
    .bind(password)
    .fetch_one(executor)
    .await?;

    tracing::info!(user_id = user.id, "user created");
    Ok(user)
}
